//! Bookings Page
//!
//! Placeholder until a bookings endpoint exists.

use leptos::*;
use surya::view::BOOKINGS_PLACEHOLDER;

use crate::components::Layout;

#[component]
pub fn Bookings() -> impl IntoView {
    view! {
        <Layout title="Bookings" subtitle="View and manage bookings">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-bold mb-4">"Upcoming Bookings"</h2>
                <div class="text-center py-12 text-gray-500">{BOOKINGS_PLACEHOLDER}</div>
            </div>
        </Layout>
    }
}

//! App Root Component
//!
//! Main application component with routing and the shared API client.

use leptos::*;
use leptos_router::*;

use crate::api::provide_api_client;
use crate::components::Layout;
use crate::pages::{BranchDetail, Branches, Bookings, Dashboard, Payments, Settings};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // One client for the whole session, shared through context
    provide_api_client();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Dashboard />
                <Route path="/branches" view=Branches />
                <Route path="/branches/:id" view=BranchDetail />
                <Route path="/bookings" view=Bookings />
                <Route path="/payments" view=Payments />
                <Route path="/settings" view=Settings />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Layout title="Page Not Found">
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center">
                <div class="text-6xl mb-4">"🔍"</div>
                <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
                <A
                    href="/"
                    class="px-6 py-3 bg-primary text-white rounded-lg font-medium hover:bg-blue-600 transition"
                >
                    "Go to Dashboard"
                </A>
            </div>
        </Layout>
    }
}

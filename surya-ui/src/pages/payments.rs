//! Payments Page
//!
//! Available payment banks.

use leptos::*;
use surya::view::{ListView, EMPTY_BANKS};
use surya::Items;

use crate::api::use_api;
use crate::components::{BankCard, ErrorPanel, Layout, Loading};
use crate::state::use_fetch;

/// Payment banks page
#[component]
pub fn Payments() -> impl IntoView {
    let api = use_api();
    let banks = use_fetch("banks", move || {
        let api = api.clone();
        async move { api.list_banks().await.map(Items::into_inner) }
    });
    let state = banks.state;

    view! {
        <Layout title="Payments" subtitle="Manage payment methods and transactions">
            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-bold mb-4">"Available Payment Banks"</h2>
                {move || state.with(|s| match ListView::of(s) {
                    ListView::Loading => view! { <Loading /> }.into_view(),
                    ListView::Failed(message) => view! { <ErrorPanel message=message /> }.into_view(),
                    ListView::Empty => view! {
                        <p class="text-center py-8 text-gray-500">{EMPTY_BANKS}</p>
                    }.into_view(),
                    ListView::Ready(items) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {items.iter().cloned().map(|bank| view! { <BankCard bank=bank /> }).collect_view()}
                        </div>
                    }.into_view(),
                })}
            </div>
        </Layout>
    }
}

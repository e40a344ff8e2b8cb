//! Branches Page
//!
//! All painting branches as cards.

use leptos::*;
use surya::view::{counted, ListView, EMPTY_BRANCHES, EMPTY_BRANCHES_HINT};
use surya::Items;

use crate::api::use_api;
use crate::components::{BranchCard, ErrorPanel, Layout, Loading};
use crate::state::use_fetch;

/// Branches list page
#[component]
pub fn Branches() -> impl IntoView {
    let api = use_api();
    let branches = use_fetch("branches", move || {
        let api = api.clone();
        async move { api.list_branches().await.map(Items::into_inner) }
    });
    let state = branches.state;

    view! {
        <Layout title="Branches" subtitle="Manage all painting branches">
            <div class="mb-6 flex justify-between items-center">
                <h2 class="text-xl font-bold">
                    {move || state.with(|s| counted("All Branches", s.data.len()))}
                </h2>
                // Creation is not wired upstream
                <button
                    title="Not yet available"
                    class="bg-primary text-white px-4 py-2 rounded-lg hover:bg-blue-600 transition"
                >
                    "+ Add Branch"
                </button>
            </div>

            {move || state.with(|s| match ListView::of(s) {
                ListView::Loading => view! { <Loading message="Loading branches..." /> }.into_view(),
                ListView::Failed(message) => view! { <ErrorPanel message=message /> }.into_view(),
                ListView::Empty => view! {
                    <div class="text-center py-12 text-gray-500">
                        <p class="text-lg">{EMPTY_BRANCHES}</p>
                        <p class="text-sm">{EMPTY_BRANCHES_HINT}</p>
                    </div>
                }.into_view(),
                ListView::Ready(items) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {items.iter().cloned().map(|branch| view! { <BranchCard branch=branch /> }).collect_view()}
                    </div>
                }.into_view(),
            })}
        </Layout>
    }
}

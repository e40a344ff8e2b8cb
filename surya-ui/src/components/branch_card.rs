//! Branch Card Component
//!
//! Summary card on the branches list; clicking it opens the detail page.

use leptos::*;
use leptos_router::*;
use surya::view::{format_date, or_fallback, present, CITY_NOT_SET};
use surya::{AppRoute, Branch};

/// Branch summary card
#[component]
pub fn BranchCard(branch: Branch) -> impl IntoView {
    let navigate = use_navigate();
    let detail_path = AppRoute::BranchDetail(branch.id.clone()).path();
    let open_detail = move |_| navigate(&detail_path, Default::default());

    let city = or_fallback(branch.city.as_deref(), CITY_NOT_SET).to_string();
    let created = format_date(branch.created_at.as_deref());
    let fields = [
        ("Address", present(branch.address.as_deref()), ""),
        ("Phone", present(branch.phone.as_deref()), "font-mono"),
        ("Email", present(branch.email.as_deref()), "break-all"),
    ]
    .into_iter()
    .filter_map(|(label, value, extra)| value.map(|v| (label, v.to_string(), extra)))
    .map(|(label, value, extra)| {
        view! {
            <div class="text-sm">
                <p class="text-gray-500 text-xs uppercase tracking-wide">{label}</p>
                <p class=format!("text-gray-900 font-medium {}", extra)>{value}</p>
            </div>
        }
    })
    .collect_view();

    view! {
        <div
            on:click=open_detail
            class="bg-white rounded-lg shadow-md hover:shadow-lg transition cursor-pointer p-6 border border-gray-200 hover:border-primary"
        >
            <div class="mb-4">
                <h3 class="text-lg font-bold text-gray-900">{branch.display_name()}</h3>
                <p class="text-sm text-gray-500 font-mono">"ID: "{branch.id.to_string()}</p>
            </div>

            <div class="mb-4">
                <span class="inline-block px-3 py-1 bg-blue-100 text-blue-800 text-xs font-semibold rounded-full">
                    "📍 "{city}
                </span>
            </div>

            <div class="space-y-3 mb-4">{fields}</div>

            <div class="mt-4 pt-4 border-t border-gray-200 flex justify-between">
                <span class="text-xs text-gray-500">"Created "{created}</span>
                <InertActions />
            </div>
        </div>
    }
}

/// Edit / Delete placeholders
///
/// No handler is wired upstream; clicks are swallowed so they do not open
/// the detail page.
#[component]
fn InertActions() -> impl IntoView {
    let swallow = |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="flex gap-2">
            <button
                on:click=swallow
                title="Not yet available"
                class="text-primary hover:text-blue-700 text-sm font-semibold transition"
            >
                "Edit"
            </button>
            <button
                on:click=swallow
                title="Not yet available"
                class="text-red-600 hover:text-red-800 text-sm font-semibold transition"
            >
                "Delete"
            </button>
        </div>
    }
}

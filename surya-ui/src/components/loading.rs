//! Loading Component

use leptos::*;

/// Centered loading message
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 py-12 text-gray-500">
            <div class="loading-spinner w-6 h-6" />
            <span>{message}</span>
        </div>
    }
}

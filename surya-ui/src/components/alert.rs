//! Error Panel
//!
//! Inline warning shown in place of a page's data when a fetch fails.

use leptos::*;

/// Inline warning panel
#[component]
pub fn ErrorPanel(
    #[prop(into)]
    message: String,
    /// Optional action rendered below the panel (e.g. back navigation)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div>
            <div class="bg-red-50 border border-red-200 rounded-lg p-4 text-red-700 mb-6" role="alert">
                "⚠️ "{message}
            </div>
            {children.map(|children| children())}
        </div>
    }
}

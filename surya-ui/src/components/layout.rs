//! Layout Shell
//!
//! Sidebar, page header and content frame shared by every page.

use leptos::*;

use super::Sidebar;

/// Page frame with navigation and a titled header
#[component]
pub fn Layout(
    /// Page title, may change once data arrives
    #[prop(into)]
    title: MaybeSignal<String>,
    #[prop(optional, into)]
    subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex h-screen">
            <Sidebar />
            <div class="flex-1 ml-64 overflow-auto bg-gray-50">
                <Header title=title subtitle=subtitle />
                <main class="p-6">{children()}</main>
            </div>
        </div>
    }
}

/// Page header
#[component]
pub fn Header(
    #[prop(into)]
    title: MaybeSignal<String>,
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow-sm p-6 border-b border-gray-200">
            <h1 class="text-3xl font-bold text-gray-900">{move || title.get()}</h1>
            {subtitle.map(|s| view! { <p class="text-gray-600 mt-1">{s}</p> })}
        </div>
    }
}

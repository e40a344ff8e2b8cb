//! Sidebar Navigation
//!
//! Fixed left navigation with brand, menu and version footer.

use leptos::*;
use leptos_router::*;
use surya::{NavItem, NAV_ITEMS};

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="w-64 bg-white shadow-lg h-screen fixed left-0 top-0 overflow-y-auto">
            <div class="p-6 border-b border-gray-200">
                <h1 class="text-2xl font-bold text-primary">"🎨 Surya"</h1>
                <p class="text-sm text-gray-600">"Painting Management"</p>
            </div>

            <nav class="p-4">
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! { <SidebarLink item=*item pathname=pathname /> })
                    .collect_view()}
            </nav>

            <div class="p-4 mt-8 border-t border-gray-200">
                <p class="text-xs text-gray-500">{format!("v{}", surya::settings::UI_VERSION)}</p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(item: NavItem, pathname: Memo<String>) -> impl IntoView {
    let class = move || {
        let base = "block px-4 py-3 rounded-lg mb-2 transition";
        if pathname.with(|p| item.is_active(p)) {
            format!("{} bg-primary text-white font-semibold", base)
        } else {
            format!("{} text-gray-700 hover:bg-gray-100", base)
        }
    };

    view! {
        <a href=item.href class=class>
            {format!("{} {}", item.icon, item.label)}
        </a>
    }
}

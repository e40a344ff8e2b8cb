//! Statistics card component.

use leptos::*;

/// Count with a label, as on the dashboard
#[component]
pub fn StatCard(
    #[prop(into)]
    value: String,
    #[prop(into)]
    label: String,
    #[prop(default = "text-blue-600")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class=format!("text-3xl font-bold {}", accent)>{value}</div>
            <div class="text-sm text-gray-600 mt-1">{label}</div>
        </div>
    }
}

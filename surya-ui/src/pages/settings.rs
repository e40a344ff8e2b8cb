//! Settings Page
//!
//! Application information and the active API configuration. Read-only.

use leptos::*;
use surya::settings::{connection_info, general_info, InfoRow, ENDPOINTS, STATUS_LINES};

use crate::api::use_api;
use crate::components::Layout;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let connection = connection_info(use_api().config());

    view! {
        <Layout title="Settings" subtitle="Application settings and configuration">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <SettingsCard title="General">
                    <InfoRows rows=general_info() />
                </SettingsCard>

                <SettingsCard title="API Endpoints">
                    <div class="space-y-2 text-xs font-mono text-gray-700">
                        {ENDPOINTS.iter().map(|e| view! { <p>{*e}</p> }).collect_view()}
                    </div>
                </SettingsCard>

                <SettingsCard title="Status">
                    <div class="space-y-3">
                        {STATUS_LINES.iter().map(|line| view! {
                            <p class="text-sm">
                                <span class="text-green-600">"✓"</span>" "{*line}
                            </p>
                        }).collect_view()}
                    </div>
                </SettingsCard>

                <SettingsCard title="Connection">
                    <InfoRows rows=connection />
                </SettingsCard>
            </div>
        </Layout>
    }
}

#[component]
fn SettingsCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h3 class="font-bold text-lg mb-4">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
fn InfoRows(rows: Vec<InfoRow>) -> impl IntoView {
    view! {
        <div class="space-y-3 text-sm text-gray-700">
            {rows.into_iter().map(|row| view! {
                <p>{row.label}": "<span class="break-all">{row.value}</span></p>
            }).collect_view()}
        </div>
    }
}

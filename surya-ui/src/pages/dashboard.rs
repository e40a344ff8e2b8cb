//! Dashboard Page
//!
//! API health, aggregate counts, and the branch and bank overviews.

use leptos::*;
use surya::view::{format_date, or_fallback, EMPTY_BANKS, EMPTY_BRANCHES, NOT_AVAILABLE};
use surya::{Bank, Branch, DashboardSnapshot, FetchPhase};

use crate::api::use_api;
use crate::components::{BankCard, ErrorPanel, Layout, Loading, StatCard};
use crate::state::use_fetch;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_api();

    let health = {
        let api = api.clone();
        use_fetch("health", move || {
            let api = api.clone();
            async move { api.health().await.map(Some) }
        })
    };

    // Branches and banks are requested together; either failing fails the page
    let snapshot = use_fetch("dashboard", move || {
        let api = api.clone();
        async move { api.dashboard_snapshot().await }
    });

    let refresh = move |_| {
        health.refresh.call(());
        snapshot.refresh.call(());
    };

    let state = snapshot.state;

    view! {
        <Layout title="Dashboard" subtitle="Surya Painting at a glance">
            <div class="space-y-8">
                <section class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold mb-2">"API Health"</h2>
                    {move || health.state.with(|s| match (s.phase(), &s.data) {
                        (FetchPhase::Loading, _) => view! {
                            <p class="text-gray-500">"Checking..."</p>
                        }.into_view(),
                        (FetchPhase::Success, Some(status)) => view! {
                            <p class="text-green-600">{format!("✅ Status: {}", status.status)}</p>
                        }.into_view(),
                        _ => view! {
                            <p class="text-red-600">"❌ API unreachable"</p>
                        }.into_view(),
                    })}
                </section>

                {move || state.with(|s| match s.phase() {
                    FetchPhase::Loading | FetchPhase::Idle => view! { <Loading /> }.into_view(),
                    FetchPhase::Failure => view! {
                        <ErrorPanel message=s.error().unwrap_or_default().to_string() />
                    }.into_view(),
                    FetchPhase::Success => view! { <Overview snapshot=s.data.clone() /> }.into_view(),
                })}

                <button
                    on:click=refresh
                    class="px-5 py-2 bg-primary text-white rounded-lg hover:bg-blue-600 transition"
                >
                    "🔄 Refresh"
                </button>
            </div>
        </Layout>
    }
}

#[component]
fn Overview(snapshot: DashboardSnapshot) -> impl IntoView {
    let stats = snapshot.stats();

    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard value=stats.branches.to_string() label="Branches" />
                <StatCard
                    value=stats.bookings.to_string()
                    label=if stats.bookings.is_available() { "Bookings" } else { "Bookings (not yet available)" }
                    accent="text-green-600"
                />
                <StatCard value=stats.banks.to_string() label="Payment Banks" accent="text-purple-600" />
            </div>

            <section class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">{format!("📍 Branches ({})", stats.branches)}</h2>
                <BranchTable branches=snapshot.branches />
            </section>

            <section class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">{format!("🏦 Payment Banks ({})", stats.banks)}</h2>
                <BankGrid banks=snapshot.banks />
            </section>
        </div>
    }
}

#[component]
fn BranchTable(branches: Vec<Branch>) -> impl IntoView {
    if branches.is_empty() {
        return view! { <p class="text-gray-500">{EMPTY_BRANCHES}</p> }.into_view();
    }

    view! {
        <table class="w-full border-collapse">
            <thead>
                <tr class="bg-gray-100 text-left">
                    <th class="border border-gray-200 p-3">"Name"</th>
                    <th class="border border-gray-200 p-3">"Code"</th>
                    <th class="border border-gray-200 p-3">"Created"</th>
                </tr>
            </thead>
            <tbody>
                {branches.into_iter().map(|branch| view! {
                    <tr>
                        <td class="border border-gray-200 p-3">{branch.display_name()}</td>
                        <td class="border border-gray-200 p-3 font-mono">
                            {or_fallback(branch.code.as_deref(), NOT_AVAILABLE).to_string()}
                        </td>
                        <td class="border border-gray-200 p-3">{format_date(branch.created_at.as_deref())}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

#[component]
fn BankGrid(banks: Vec<Bank>) -> impl IntoView {
    if banks.is_empty() {
        return view! { <p class="text-gray-500">{EMPTY_BANKS}</p> }.into_view();
    }

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {banks.into_iter().map(|bank| view! { <BankCard bank=bank /> }).collect_view()}
        </div>
    }
    .into_view()
}

//! Branch Detail Page
//!
//! A single branch with contact cards and a copyable share link.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;
use surya::view::{or_fallback, DetailView, NOT_AVAILABLE, NOT_PROVIDED};
use surya::{
    copy_share_link, share_link, AppRoute, Branch, BranchId, Clipboard, CopyFeedback,
    COPY_FEEDBACK,
};
use wasm_bindgen::{JsCast, JsValue};

use crate::api::use_api;
use crate::components::{ErrorPanel, Layout, Loading};
use crate::state::use_keyed_fetch;

/// Branch detail page component
#[component]
pub fn BranchDetail() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();

    // Nothing is fetched until the route parameter resolves
    let branch_id = move || {
        params
            .with(|p| p.get("id").cloned())
            .filter(|id| !id.trim().is_empty())
            .map(BranchId::new)
    };

    let branch = use_keyed_fetch("branch", branch_id, move |id: BranchId| {
        let api = api.clone();
        async move { api.get_branch(&id).await.map(Some) }
    });
    let state = branch.state;

    let title = Signal::derive(move || {
        if branch_id().is_none() {
            return "Loading...".to_string();
        }
        state.with(|s| match DetailView::of(s, "Branch") {
            DetailView::Ready(b) => b.display_name(),
            _ => "Branch Details".to_string(),
        })
    });

    view! {
        <Layout title=title subtitle="Branch Details">
            {move || state.with(|s| match DetailView::of(s, "Branch") {
                DetailView::Loading => view! {
                    <Loading message="Loading branch details..." />
                }.into_view(),
                DetailView::Unavailable(message) => view! {
                    <ErrorPanel message=message>
                        <BackToBranches />
                    </ErrorPanel>
                }.into_view(),
                DetailView::Ready(b) => view! { <BranchDetails branch=b.clone() /> }.into_view(),
            })}
        </Layout>
    }
}

/// "← Back to Branches" action
#[component]
fn BackToBranches() -> impl IntoView {
    let navigate = use_navigate();
    let back = move |_| navigate(&AppRoute::Branches.path(), Default::default());

    view! {
        <button
            on:click=back
            class="mt-4 px-4 py-2 bg-primary text-white rounded-lg hover:bg-blue-600"
        >
            "← Back to Branches"
        </button>
    }
}

#[component]
fn BranchDetails(branch: Branch) -> impl IntoView {
    let field = |value: &Option<String>| or_fallback(value.as_deref(), NOT_PROVIDED).to_string();

    view! {
        <div class="mb-4">
            <BackToBranches />
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <div class="space-y-4">
                <InfoCard icon="📍" title="Address" value=field(&branch.address) />
                <InfoCard icon="📞" title="Contact" value=field(&branch.phone) extra="font-mono" />
                <InfoCard icon="✉️" title="Email" value=field(&branch.email) extra="break-all" />
                <InfoCard icon="🕒" title="Hours" value=field(&branch.hours) extra="whitespace-pre-line" />
            </div>

            <div class="space-y-4">
                <ShareCard id=branch.id.clone() />

                <div class="bg-white rounded-lg shadow p-6">
                    <h3 class="text-lg font-semibold mb-4">"Branch Information"</h3>
                    <div class="space-y-3 text-sm">
                        <div>
                            <span class="text-gray-600">"City:"</span>
                            <p class="font-semibold">{field(&branch.city)}</p>
                        </div>
                        <div>
                            <span class="text-gray-600">"Code:"</span>
                            <p class="font-mono font-semibold">
                                {or_fallback(branch.code.as_deref(), NOT_AVAILABLE).to_string()}
                            </p>
                        </div>
                        <div>
                            <span class="text-gray-600">"Status:"</span>
                            <p class="inline-block mt-1 px-3 py-1 bg-green-100 text-green-800 rounded-full text-xs font-semibold">
                                "Active"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn InfoCard(
    icon: &'static str,
    title: &'static str,
    #[prop(into)]
    value: String,
    #[prop(default = "")]
    extra: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex items-center gap-3 mb-3">
                <span class="text-2xl">{icon}</span>
                <h3 class="text-lg font-semibold">{title}</h3>
            </div>
            <p class=format!("text-gray-700 {}", extra)>{value}</p>
        </div>
    }
}

/// Share link with a copy button and a 2 s confirmation
#[component]
fn ShareCard(id: BranchId) -> impl IntoView {
    let origin = window().location().origin().unwrap_or_default();
    let link = share_link(&origin, &id);
    let (feedback, set_feedback) = create_signal(CopyFeedback::default());

    let copy = move |_| {
        let mut next = feedback.get_untracked();
        match copy_share_link(&BrowserClipboard, &mut next, &origin, &id) {
            Ok(generation) => {
                set_feedback.set(next);
                // The page may be gone by the time this fires
                Timeout::new(COPY_FEEDBACK.as_millis() as u32, move || {
                    set_feedback.try_update(|f| f.expire(generation));
                })
                .forget();
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to copy share link: {}", e).into());
            }
        }
    };

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h3 class="text-lg font-semibold mb-4">"Share Branch"</h3>
            <div class="space-y-3">
                <input
                    type="text"
                    readonly=true
                    prop:value=link
                    class="w-full px-3 py-2 border border-gray-300 rounded-lg bg-gray-50 text-sm text-gray-600 font-mono"
                />
                <button
                    on:click=copy
                    class=move || {
                        let base = "w-full py-2 rounded-lg font-semibold transition text-white";
                        if feedback.get().copied() {
                            format!("{} bg-green-500", base)
                        } else {
                            format!("{} bg-primary hover:bg-blue-600", base)
                        }
                    }
                >
                    {move || feedback.get().label()}
                </button>
            </div>
        </div>
    }
}

/// `navigator.clipboard.writeText`, resolved asynchronously
struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) -> Result<(), String> {
        let navigator = window().navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|e| format!("{:?}", e))?;
        if clipboard.is_undefined() {
            return Err("Clipboard API unavailable".to_string());
        }

        let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|e| format!("{:?}", e))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| "clipboard.writeText is not a function".to_string())?;
        let promise = write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| format!("{:?}", e))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;

        spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                web_sys::console::error_1(&format!("Clipboard write rejected: {:?}", e).into());
            }
        });
        Ok(())
    }
}

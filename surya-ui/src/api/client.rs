//! HTTP API Client
//!
//! `gloo-net` transport for the Surya REST API and the single client
//! instance every page borrows from context.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use surya::{ApiClient, ApiConfig, ClientError, ClientResult, RawResponse, Transport};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "surya_api_url";

/// The client type shared by all pages
pub type SuryaClient = ApiClient<GlooTransport>;

/// Get the API base URL from local storage, the build environment, or the default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    let url = stored
        .or_else(|| option_env!("SURYA_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    surya::config::normalize_base_url(&url)
}

/// Client configuration resolved at startup
pub fn api_config() -> ApiConfig {
    let mut config = ApiConfig::new(get_api_base());
    config.apply_overrides(None, option_env!("SURYA_API_TIMEOUT_SECS"));
    config
}

/// Browser transport: `fetch` raced against the configured timeout
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str, timeout: Duration) -> ClientResult<RawResponse> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| ClientError::Network(format!("{:?}", e)))?;
        let signal = controller.signal();

        let request = Request::get(url)
            .header("Accept", "application/json")
            .abort_signal(Some(&signal))
            .send();
        let deadline = TimeoutFuture::new(timeout.as_millis().min(u32::MAX as u128) as u32);
        futures_util::pin_mut!(request, deadline);

        match select(request, deadline).await {
            Either::Left((result, _)) => {
                let response = result.map_err(|e| ClientError::Network(e.to_string()))?;
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .map_err(|e| ClientError::Network(e.to_string()))?;
                Ok(RawResponse::new(status, body))
            }
            Either::Right(_) => {
                controller.abort();
                Err(ClientError::Timeout(timeout))
            }
        }
    }
}

#[derive(Clone)]
struct ApiContext(Rc<SuryaClient>);

/// Build the client once and provide it to the component tree
pub fn provide_api_client() {
    let config = api_config();
    web_sys::console::log_1(
        &format!("Surya API: {} (timeout {}s)", config.base_url, config.timeout_secs).into(),
    );
    provide_context(ApiContext(Rc::new(ApiClient::new(GlooTransport, config))));
}

/// The shared client
pub fn use_api() -> Rc<SuryaClient> {
    use_context::<ApiContext>()
        .expect("ApiContext not found")
        .0
}

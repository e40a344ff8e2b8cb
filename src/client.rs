//! HTTP API Client
//!
//! One configured accessor for the Surya REST API, built once at startup and
//! shared by every page.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::envelope::{normalize_entity, normalize_items, parse_body, Items};
use crate::error::{ClientError, ClientResult};
use crate::models::{Bank, Branch, BranchId, DashboardSnapshot, HealthStatus};
use crate::transport::Transport;

/// API endpoint paths
pub mod paths {
    use crate::models::BranchId;

    pub const HEALTH: &str = "/health";
    pub const BRANCHES: &str = "/api/branches";
    pub const BOOKINGS: &str = "/api/bookings";
    pub const BANKS: &str = "/api/payments/banks";

    pub fn branch(id: &BranchId) -> String {
        format!("{}/{}", BRANCHES, id)
    }
}

/// Typed client for the Surya API
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over a transport
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue a GET and return the parsed JSON body of a 2xx response
    pub async fn get(&self, path: &str) -> ClientResult<Value> {
        let url = self.config.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .transport
            .get(&url, self.config.timeout())
            .await
            .inspect_err(|e| tracing::warn!(%url, error = %e, "request failed"))?;

        if !response.ok() {
            tracing::warn!(%url, status = response.status, "non-success status");
            return Err(ClientError::status(response.status, &response.body));
        }

        parse_body(&response.body)
    }

    async fn get_items<I: DeserializeOwned>(&self, path: &str) -> ClientResult<Items<I>> {
        let items = normalize_items(self.get(path).await?)?;
        tracing::debug!(path, count = items.len(), "collection loaded");
        Ok(items)
    }

    /// Check API health
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let body = self.get(paths::HEALTH).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetch all branches
    pub async fn list_branches(&self) -> ClientResult<Items<Branch>> {
        self.get_items(paths::BRANCHES).await
    }

    /// Fetch a single branch by id
    pub async fn get_branch(&self, id: &BranchId) -> ClientResult<Branch> {
        let body = self.get(&paths::branch(id)).await.map_err(|e| {
            if e.is_not_found() {
                ClientError::NotFound {
                    resource: "Branch".to_string(),
                }
            } else {
                e
            }
        })?;
        normalize_entity(body, "Branch")
    }

    /// Fetch payment banks
    pub async fn list_banks(&self) -> ClientResult<Items<Bank>> {
        self.get_items(paths::BANKS).await
    }

    /// Fetch branches and banks concurrently
    ///
    /// Both requests must succeed; the first failure is returned.
    pub async fn dashboard_snapshot(&self) -> ClientResult<DashboardSnapshot> {
        let (branches, banks) = futures_util::join!(self.list_branches(), self.list_banks());

        Ok(DashboardSnapshot {
            branches: branches?.into_inner(),
            banks: banks?.into_inner(),
        })
    }
}

#[cfg(feature = "native")]
impl ApiClient<crate::transport::ReqwestTransport> {
    /// Client over the native `reqwest` transport
    pub fn native(config: ApiConfig) -> Self {
        Self::new(crate::transport::ReqwestTransport::new(), config)
    }

    /// Client configured from the default config file locations and
    /// `SURYA_API_URL` / `SURYA_API_TIMEOUT_SECS`
    pub fn from_default_config() -> Self {
        Self::native(crate::config::Config::load_default().api)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Availability;
    use crate::transport::RawResponse;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Canned responses keyed by URL path
    #[derive(Default)]
    pub(crate) struct MockTransport {
        routes: HashMap<String, ClientResult<RawResponse>>,
        pub(crate) requested: RefCell<Vec<String>>,
    }

    impl MockTransport {
        pub(crate) fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
            self.routes
                .insert(path.to_string(), Ok(RawResponse::new(status, body)));
            self
        }

        pub(crate) fn fail(mut self, path: &str, error: ClientError) -> Self {
            self.routes.insert(path.to_string(), Err(error));
            self
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn get(&self, url: &str, _timeout: Duration) -> ClientResult<RawResponse> {
            let path = url.trim_start_matches(BASE);
            self.requested.borrow_mut().push(path.to_string());
            self.routes
                .get(path)
                .cloned()
                .unwrap_or_else(|| Ok(RawResponse::new(404, "")))
        }
    }

    const BASE: &str = "http://api.test";

    pub(crate) fn client(transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(transport, ApiConfig::new(BASE))
    }

    #[tokio::test]
    async fn test_list_branches_any_wrapper() {
        for body in [
            r#"{"data":[{"id":1,"name":"Downtown"}]}"#,
            r#"{"branches":[{"id":1,"name":"Downtown"}]}"#,
            r#"{"data":{"data":[{"id":1,"name":"Downtown"}]}}"#,
        ] {
            let api = client(MockTransport::default().respond(paths::BRANCHES, 200, body));
            let branches = api.list_branches().await.unwrap();
            assert_eq!(branches.items[0].display_name(), "Downtown");
        }
    }

    #[tokio::test]
    async fn test_server_error_message() {
        let api = client(MockTransport::default().respond(paths::BANKS, 500, ""));
        let err = api.list_banks().await.unwrap_err();
        assert_eq!(err.display_message(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_get_branch() {
        let api = client(MockTransport::default().respond(
            "/api/branches/42",
            200,
            r#"{"data":{"id":"42","name":"Downtown"}}"#,
        ));
        let branch = api.get_branch(&BranchId::new("42")).await.unwrap();
        assert_eq!(branch.name.as_deref(), Some("Downtown"));
    }

    #[tokio::test]
    async fn test_get_branch_404_is_not_found() {
        let api = client(MockTransport::default());
        let err = api.get_branch(&BranchId::new("404")).await.unwrap_err();
        assert_eq!(err, ClientError::NotFound { resource: "Branch".into() });
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_issues_both_requests() {
        let api = client(
            MockTransport::default()
                .respond(paths::BRANCHES, 200, r#"{"branches":[{"id":1},{"id":2},{"id":3}]}"#)
                .respond(paths::BANKS, 200, r#"{"banks":[{"code":"BCA","name":"BCA"}]}"#),
        );

        let snapshot = api.dashboard_snapshot().await.unwrap();
        let stats = snapshot.stats();
        assert_eq!(stats.branches, 3);
        assert_eq!(stats.banks, 1);
        assert_eq!(stats.bookings, Availability::NotYetAvailable);

        let requested = api.transport.requested.borrow();
        assert!(requested.contains(&paths::BRANCHES.to_string()));
        assert!(requested.contains(&paths::BANKS.to_string()));
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_fails_if_either_fails() {
        let api = client(
            MockTransport::default()
                .respond(paths::BRANCHES, 200, r#"{"branches":[]}"#)
                .fail(paths::BANKS, ClientError::Network("connection refused".into())),
        );

        let err = api.dashboard_snapshot().await.unwrap_err();
        assert_eq!(err.display_message(), "Network Error: connection refused");
    }

    #[tokio::test]
    async fn test_health() {
        let api = client(MockTransport::default().respond(paths::HEALTH, 200, r#"{"status":"ok"}"#));
        assert_eq!(api.health().await.unwrap().status, "ok");
    }
}

//! HTTP Transport
//!
//! The seam between [`ApiClient`](crate::client::ApiClient) and whatever
//! actually performs requests: `reqwest` natively, `gloo-net` in the browser.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::ClientResult;

/// A response as seen by the client, before any status or body handling
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs GET requests against absolute URLs
///
/// Implementations map connection failures to `ClientError::Network` and
/// expired deadlines to `ClientError::Timeout`; any HTTP status is returned
/// as a [`RawResponse`].
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str, timeout: Duration) -> ClientResult<RawResponse>;
}

#[cfg(feature = "native")]
pub use self::native::ReqwestTransport;

#[cfg(feature = "native")]
mod native {
    use super::*;
    use crate::error::ClientError;
    use reqwest::Client;

    /// Native transport backed by a pooled `reqwest::Client`
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_client(client: Client) -> Self {
            Self { client }
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn get(&self, url: &str, timeout: Duration) -> ClientResult<RawResponse> {
            let response = self
                .client
                .get(url)
                .header("Accept", "application/json")
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| classify(e, timeout))?;

            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| classify(e, timeout))?;

            Ok(RawResponse { status, body })
        }
    }

    fn classify(e: reqwest::Error, timeout: Duration) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(timeout)
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_ok_range() {
        assert!(RawResponse::new(200, "").ok());
        assert!(RawResponse::new(204, "").ok());
        assert!(!RawResponse::new(304, "").ok());
        assert!(!RawResponse::new(404, "").ok());
    }
}

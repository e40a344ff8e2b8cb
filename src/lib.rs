//! # Surya
//!
//! Typed client core for the Surya Painting dashboard: branches, payment
//! banks, bookings and settings, served by a remote REST API and rendered by
//! the `surya-ui` WASM frontend.
//!
//! ## Modules
//!
//! - [`client`]: the API client, built once and shared by every page
//! - [`envelope`]: normalisation of inconsistent response wrappers
//! - [`fetch`]: per-page request state and view-lifetime cancellation
//! - [`models`]: branches, banks and dashboard stats
//! - [`share`]: branch share links and copy feedback
//! - [`routes`]: client routes and the sidebar menu
//! - [`view`]: what each page renders for a given state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use surya::{ApiClient, RequestState};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // ~/.config/surya/config.toml or ./config.toml, then SURYA_API_URL
//!     let client = ApiClient::from_default_config();
//!
//!     let mut branches = RequestState::<Vec<surya::Branch>>::loading();
//!     branches.settle(client.list_branches().await.map(|items| items.into_inner()));
//!
//!     match branches.error() {
//!         Some(message) => eprintln!("⚠️ {}", message),
//!         None => println!("{} branches", branches.data.len()),
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod models;
pub mod routes;
pub mod settings;
pub mod share;
pub mod transport;
pub mod view;

pub use client::ApiClient;
pub use config::{ApiConfig, Config, ConfigError};
pub use envelope::{normalize_entity, normalize_items, Items};
pub use error::{ClientError, ClientResult};
pub use fetch::{FetchPhase, RequestState, Ticket, ViewLifetime};
pub use models::{
    Availability, Bank, Branch, BranchId, DashboardSnapshot, DashboardStats, HealthStatus,
};
pub use routes::{AppRoute, NavItem, NAV_ITEMS};
pub use share::{copy_share_link, share_link, Clipboard, CopyFeedback, COPY_FEEDBACK};
pub use transport::{RawResponse, Transport};

#[cfg(feature = "native")]
pub use transport::ReqwestTransport;

//! API Access
//!
//! Browser transport for the `surya` client and the shared client context.

pub mod client;

pub use client::{provide_api_client, use_api, SuryaClient};

//! State Management
//!
//! Page-local request state bound to Leptos signals.

pub mod fetch;

pub use fetch::{use_fetch, use_keyed_fetch, Fetch};

//! Surya Dashboard
//!
//! Administrative dashboard for Surya Painting built with Leptos (WASM).
//!
//! # Pages
//!
//! - Dashboard with API health and branch / bank counts
//! - Branches list and branch detail with share links
//! - Payment banks
//! - Bookings placeholder and static settings
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Surya REST API through the `surya` client
//! core, using a `gloo-net` transport.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

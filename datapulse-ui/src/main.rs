//! Datapulse Console
//!
//! Seller analytics console built with Leptos (WASM).
//!
//! # Sections
//!
//! - Overview and Finance (P&L, unit economics)
//! - Operations (inventory, returns, sales monitoring)
//! - Marketing (ads)
//! - Data health and account connections
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page composition, routing and data states come from the
//! `datapulse-console` crate; this crate only renders them. No data is
//! fetched yet: every page renders placeholders behind a data-state gate.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

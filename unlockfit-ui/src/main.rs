//! Unlock.fit Weight Tracker
//!
//! Browser frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Entry form with a draft that survives reloads
//! - Entries table and weight-over-time chart
//! - Dashboard with category counts and per-category details
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no server: entries live in the browser's local storage,
//! read and written through the `unlockfit` entry repository.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

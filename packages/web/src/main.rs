//! Scopesearch - Dioxus Web Frontend
//!
//! Client-side web UI for the scoped search backend. The user enters a
//! query, optionally scopes it to one or more domains, and the backend's
//! `/search` endpoint returns ranked results to render.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod search;
mod types;

fn main() {
    // Initialize logging (routes `tracing` output to the browser console)
    dioxus::logger::initialize_default();

    dioxus::launch(app::App);
}

//! HTTP client for the search backend

mod client;

pub use client::{init_search_endpoint, ClientError, SearchClient};

//! Search page component

use dioxus::prelude::*;

use crate::api::SearchClient;
use crate::components::{DomainFields, LoadingDots, ResultCard};
use crate::search::{build_request, DispatchSeq};
use crate::types::{SearchRequest, SearchResult};

/// Search page - query input, domain scope fields, and results
#[component]
pub fn Search() -> Element {
    let mut query = use_signal(String::new);
    let domains = use_signal(Vec::<String>::new);
    let results = use_signal(Vec::<SearchResult>::new);
    let is_searching = use_signal(|| false);
    let error = use_signal(|| None::<String>);
    let seq = use_signal(DispatchSeq::default);

    // Check for query param on load
    use_effect(move || {
        if let Some(window) = web_sys::window() {
            if let Ok(search) = window.location().search() {
                if let Some(q) = search.strip_prefix("?q=") {
                    let decoded = urlencoding::decode(q).unwrap_or_default().to_string();
                    if !decoded.is_empty() {
                        query.set(decoded.clone());
                        // peek: re-running this effect on domain edits would re-search
                        let scoped = domains.peek().clone();
                        dispatch_search(decoded, scoped, seq, results, is_searching, error);
                    }
                }
            }
        }
    });

    let handle_search = move |_| {
        if is_searching() {
            return;
        }
        dispatch_search(query(), domains(), seq, results, is_searching, error);
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-4xl mx-auto px-4 py-8",
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "Search"
                    }
                    p {
                        class: "text-gray-600",
                        "Search the index, optionally scoped to specific domains"
                    }
                }
            }

            // Search Form
            div {
                class: "max-w-4xl mx-auto px-4 py-6 space-y-3",
                form {
                    class: "flex gap-3",
                    onsubmit: handle_search,
                    input {
                        id: "search-query",
                        r#type: "text",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                        placeholder: "Search...",
                        class: "flex-1 px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    }
                    button {
                        r#type: "submit",
                        class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium disabled:opacity-50",
                        disabled: is_searching(),
                        if is_searching() { "Searching..." } else { "Search" }
                    }
                }

                DomainFields { domains }
            }

            // Results
            main {
                class: "max-w-4xl mx-auto px-4 py-6",

                if let Some(err) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-6",
                        "{err}"
                    }
                }

                if is_searching() {
                    div {
                        class: "text-center py-12",
                        LoadingDots {}
                        p { class: "mt-4 text-gray-500", "Searching..." }
                    }
                } else if !results().is_empty() {
                    div {
                        class: "space-y-4",
                        p {
                            class: "text-sm text-gray-500 mb-4",
                            "Found {results().len()} result"
                            if results().len() != 1 { "s" }
                        }
                        for result in results() {
                            ResultCard { result: result.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// Take a dispatch ticket and fire one search.
fn dispatch_search(
    query: String,
    domains: Vec<String>,
    mut seq: Signal<DispatchSeq>,
    results: Signal<Vec<SearchResult>>,
    mut is_searching: Signal<bool>,
    error: Signal<Option<String>>,
) {
    let request = build_request(&query, domains);
    let ticket = seq.write().next();
    is_searching.set(true);

    spawn(async move {
        do_search(request, ticket, seq, results, is_searching, error).await;
    });
}

async fn do_search(
    request: SearchRequest,
    ticket: u64,
    seq: Signal<DispatchSeq>,
    mut results: Signal<Vec<SearchResult>>,
    mut is_searching: Signal<bool>,
    mut error: Signal<Option<String>>,
) {
    let outcome = SearchClient::default().search(&request).await;

    // A newer dispatch owns the page now; this response is stale.
    if !seq.read().is_current(ticket) {
        tracing::debug!(ticket, "dropping stale search response");
        return;
    }

    match outcome {
        Ok(r) => {
            tracing::info!(count = r.len(), "search completed");
            results.set(r);
            error.set(None);
        }
        Err(e) => {
            tracing::warn!(error = %e, "search failed");
            error.set(Some(e.to_string()));
        }
    }

    is_searching.set(false);
}

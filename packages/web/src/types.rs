//! Wire types for the `/search` endpoint
//!
//! These mirror the JSON contract of the backend search API.

use serde::{Deserialize, Serialize};

/// Placeholder rendered when a result carries no title.
pub const NO_TITLE: &str = "无标题";

/// Placeholder rendered when a result carries no description.
pub const NO_DESCRIPTION: &str = "无描述";

/// Request body for `POST /search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub domains: Vec<String>,
}

/// One search hit as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
}

impl SearchResult {
    /// Title text for rendering, with the fixed fallback for absent titles.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => NO_TITLE,
        }
    }

    /// Description text for rendering, with the fixed fallback.
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = SearchRequest {
            query: "hello world".to_string(),
            domains: vec!["example.com".to_string(), "test.org".to_string()],
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "query": "hello world",
                "domains": ["example.com", "test.org"],
            })
        );
    }

    #[test]
    fn test_request_body_allows_empty_inputs() {
        let request = SearchRequest {
            query: String::new(),
            domains: Vec::new(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "", "domains": [] }));
    }

    #[test]
    fn test_result_decodes_with_missing_fields() {
        let results: Vec<SearchResult> = serde_json::from_str(
            r#"[{"title":"A","url":"http://a"},{"url":"http://b"}]"#,
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].display_title(), "A");
        assert_eq!(results[1].display_title(), NO_TITLE);
        assert_eq!(results[1].display_description(), NO_DESCRIPTION);
        assert_eq!(results[1].url, "http://b");
    }

    #[test]
    fn test_empty_strings_fall_back_to_placeholders() {
        let result = SearchResult {
            title: Some(String::new()),
            description: Some(String::new()),
            url: "http://a".to_string(),
        };

        assert_eq!(result.display_title(), NO_TITLE);
        assert_eq!(result.display_description(), NO_DESCRIPTION);
    }
}

//! Input collection and dispatch sequencing for the search page

use crate::types::SearchRequest;

/// Collect domain values in document order: trim each, drop blanks.
pub fn collect_domains<I, S>(inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .filter_map(|value| {
            let trimmed = value.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

/// Build the request body from the raw query and domain inputs.
///
/// An empty query is valid and forwarded as-is; only blank domain
/// entries are filtered out.
pub fn build_request<I, S>(query: &str, domains: I) -> SearchRequest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SearchRequest {
        query: query.trim().to_string(),
        domains: collect_domains(domains),
    }
}

/// Monotonic counter that arbitrates racing searches.
///
/// Each dispatch takes a ticket; a resolved request applies its outcome
/// only while its ticket is still the latest one issued. A search fired
/// while an older one is in flight therefore wins regardless of which
/// response arrives first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSeq(u64);

impl DispatchSeq {
    /// Issue the next ticket, making all earlier tickets stale
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `ticket` is still the latest dispatch
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_domains_trims_and_drops_blanks() {
        let collected = collect_domains(["", "  ", "example.com", " test.org "]);
        assert_eq!(collected, vec!["example.com", "test.org"]);
    }

    #[test]
    fn test_collect_domains_preserves_order_and_duplicates() {
        let collected = collect_domains(["b.com", "a.com", "b.com"]);
        assert_eq!(collected, vec!["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_build_request_trims_query() {
        let request = build_request("  hello world  ", ["example.com"]);
        assert_eq!(request.query, "hello world");
        assert_eq!(request.domains, vec!["example.com"]);
    }

    #[test]
    fn test_build_request_permits_empty_query_and_domains() {
        let request = build_request("   ", Vec::<String>::new());
        assert_eq!(request.query, "");
        assert!(request.domains.is_empty());
    }

    #[test]
    fn test_later_dispatch_invalidates_earlier_ticket() {
        let mut seq = DispatchSeq::default();
        let first = seq.next();
        let second = seq.next();

        // First response arrives late: dropped. Second applies.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_single_dispatch_stays_current() {
        let mut seq = DispatchSeq::default();
        let ticket = seq.next();
        assert!(seq.is_current(ticket));
    }
}

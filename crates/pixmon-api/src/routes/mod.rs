//! Route modules for the API server
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API and HTMX list endpoints
//! - page.rs: Full page rendering
//!
//! List endpoints share one query-param vocabulary: `q` (search), `status`,
//! `type`, `date` (all/today/week/month), `sort` (amount/timestamp/name),
//! `dir` (asc/desc), `limit`, `offset`. Every parameter is optional and
//! falls back to a match-all default.

pub mod dashboard;
pub mod dynamic_pix;
pub mod pix_keys;
pub mod reports;
pub mod static_pix;
pub mod status;
pub mod transactions;

use pixmon_config::DateRange;
use pixmon_core::{CategoryFilter, Predicates, Sort};
use std::collections::HashMap;

/// Build the immutable predicate set for a request
pub(crate) fn predicates_from_params(
    params: &HashMap<String, String>,
    default_range: DateRange,
) -> Predicates {
    Predicates {
        search: params.get("q").cloned().unwrap_or_default(),
        status: params
            .get("status")
            .map(|s| CategoryFilter::parse(s))
            .unwrap_or_default(),
        kind: params
            .get("type")
            .map(|s| CategoryFilter::parse(s))
            .unwrap_or_default(),
        date_range: params
            .get("date")
            .and_then(|s| s.parse().ok())
            .unwrap_or(default_range),
    }
}

/// Parse the requested sort, if any
pub(crate) fn sort_from_params(params: &HashMap<String, String>) -> Option<Sort> {
    let field = params.get("sort")?.parse().ok()?;
    let direction = params
        .get("dir")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    Some(Sort::new(field, direction))
}

/// Parse limit/offset with a page-size default
pub(crate) fn paging_from_params(
    params: &HashMap<String, String>,
    default_limit: usize,
) -> (usize, usize) {
    let limit = params
        .get("limit")
        .and_then(|s| s.parse().ok())
        .filter(|&l| l > 0)
        .unwrap_or(default_limit);
    let offset = params.get("offset").and_then(|s| s.parse().ok()).unwrap_or(0);
    (limit, offset)
}

/// Filter state serialized back into pagination links
pub(crate) fn filter_query_string(params: &HashMap<String, String>) -> String {
    let mut parts = Vec::new();
    for key in ["q", "status", "type", "date", "sort", "dir"] {
        if let Some(value) = params.get(key) {
            if !value.is_empty() {
                parts.push(format!("{}={}", key, urlencoding::encode(value)));
            }
        }
    }
    parts.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmon_core::{SortDirection, SortField};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_predicates_default_to_match_all() {
        let predicates = predicates_from_params(&HashMap::new(), DateRange::All);
        assert!(predicates.search.is_empty());
        assert_eq!(predicates.status, CategoryFilter::All);
        assert_eq!(predicates.kind, CategoryFilter::All);
        assert_eq!(predicates.date_range, DateRange::All);
    }

    #[test]
    fn test_predicates_parse_all_params() {
        let predicates = predicates_from_params(
            &params(&[("q", "maria"), ("status", "completed"), ("type", "static"), ("date", "week")]),
            DateRange::All,
        );
        assert_eq!(predicates.search, "maria");
        assert_eq!(predicates.status, CategoryFilter::parse("completed"));
        assert_eq!(predicates.kind, CategoryFilter::parse("static"));
        assert_eq!(predicates.date_range, DateRange::Week);
    }

    #[test]
    fn test_invalid_date_param_falls_back_to_default() {
        let predicates =
            predicates_from_params(&params(&[("date", "fortnight")]), DateRange::Month);
        assert_eq!(predicates.date_range, DateRange::Month);
    }

    #[test]
    fn test_sort_requires_field() {
        assert!(sort_from_params(&HashMap::new()).is_none());
        let sort = sort_from_params(&params(&[("sort", "amount")])).unwrap();
        assert_eq!(sort.field, SortField::Amount);
        assert_eq!(sort.direction, SortDirection::Desc);
        let sort = sort_from_params(&params(&[("sort", "name"), ("dir", "asc")])).unwrap();
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_paging_defaults_and_guards() {
        assert_eq!(paging_from_params(&HashMap::new(), 25), (25, 0));
        assert_eq!(
            paging_from_params(&params(&[("limit", "0"), ("offset", "10")]), 25),
            (25, 10)
        );
        assert_eq!(
            paging_from_params(&params(&[("limit", "50"), ("offset", "abc")]), 25),
            (50, 0)
        );
    }

    #[test]
    fn test_filter_query_string_keeps_active_filters() {
        let qs = filter_query_string(&params(&[("q", "joão silva"), ("status", "completed"), ("limit", "50")]));
        assert!(qs.contains("q=jo%C3%A3o%20silva"));
        assert!(qs.contains("status=completed"));
        assert!(!qs.contains("limit"));
    }
}

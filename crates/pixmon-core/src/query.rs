//! List query engine
//!
//! One generalized filter-and-sort pass shared by every list page. Records
//! expose their searchable fields and category tokens through [`Queryable`];
//! predicates AND together; an optional sort orders the surviving subset.
//!
//! The engine is a total function over its inputs: a record missing a field
//! an active filter needs simply does not match, and a record missing a
//! requested sort key compares equal. It never fails and performs no I/O.
//! The evaluation instant is an explicit argument so relative date ranges
//! stay pure and testable.

use chrono::{DateTime, Utc};
use pixmon_config::DateRange;
use rust_decimal::Decimal;
use std::cmp::Ordering;

use crate::models::{ApiLog, DynamicCharge, PixKey, Report, StaticCharge, Transaction};

// ==================== Predicates ====================

/// Exact-match filter over a closed category field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Filter disabled
    All,
    /// Keep only records whose token equals the value
    Only(String),
}

impl CategoryFilter {
    /// Parse a query-param value; "all" and empty disable the filter
    pub fn parse(value: &str) -> Self {
        let token = value.trim().to_lowercase();
        if token.is_empty() || token == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token)
        }
    }

    /// A record with no token fails any active filter. Tokens are matched
    /// whole, case-insensitively, so free-text categories like bank names
    /// behave like the enum tokens.
    pub fn matches(&self, token: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => match token {
                Some(token) => token.to_lowercase() == *wanted,
                None => false,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CategoryFilter::Only(_))
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// Immutable predicate set applied to a list query
///
/// All active predicates must hold (logical AND). The defaults match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct Predicates {
    /// Case-insensitive substring over the record's searchable fields;
    /// empty matches all
    pub search: String,
    /// Exact match on the record's status token
    pub status: CategoryFilter,
    /// Exact match on the record's secondary category token
    pub kind: CategoryFilter,
    /// Inclusion test on the record's timestamp, relative to `now`
    pub date_range: DateRange,
}

impl Predicates {
    /// Build a search-only predicate set
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }
}

// ==================== Sort ====================

/// Sortable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Amount,
    Timestamp,
    Name,
}

impl std::str::FromStr for SortField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amount" => Ok(SortField::Amount),
            "timestamp" => Ok(SortField::Timestamp),
            "name" => Ok(SortField::Name),
            _ => Err(format!("Invalid sort field: {}", s)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Desc
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

/// Requested ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Comparison key a record yields for a sort field
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Amount(Decimal),
    Time(DateTime<Utc>),
    Text(String),
    /// Record has no value for the requested field; compares equal
    Missing,
}

impl SortKey {
    /// Numeric for amounts and timestamps, case-folded lexicographic for
    /// text. Mismatched or missing keys compare equal so the id tie-break
    /// decides.
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Amount(a), SortKey::Amount(b)) => a.cmp(b),
            (SortKey::Time(a), SortKey::Time(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

// ==================== Date ranges ====================

/// Inclusion test for relative date ranges
pub trait DateRangeExt {
    fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool;
}

impl DateRangeExt for DateRange {
    fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            DateRange::All => true,
            DateRange::Today => timestamp.date_naive() == now.date_naive(),
            DateRange::Week => timestamp >= now - chrono::Duration::days(7),
            DateRange::Month => timestamp >= now - chrono::Duration::days(30),
        }
    }
}

// ==================== Queryable Trait ====================

/// Trait for records the engine can filter and sort
pub trait Queryable {
    /// Unique id within the collection; the deterministic sort tie-break
    fn record_id(&self) -> &str;

    /// Case-insensitive substring test over the record's designated
    /// searchable fields; `needle` is already lowercased and non-empty
    fn matches_search(&self, needle: &str) -> bool;

    /// Status token for exact-match filtering
    fn status_token(&self) -> Option<&str> {
        None
    }

    /// Secondary category token for exact-match filtering
    fn kind_token(&self) -> Option<&str> {
        None
    }

    /// Timestamp tested against date-range predicates
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Comparison key for a sort field
    fn sort_key(&self, _field: SortField) -> SortKey {
        SortKey::Missing
    }
}

fn contains_fold(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ==================== Engine ====================

/// Apply all active predicates (logical AND) and the optional sort.
///
/// Output preserves input order when no sort is requested. Ties under a
/// sort fall back to id ascending in both directions.
pub fn filter_and_sort<R: Queryable + Clone>(
    records: &[R],
    predicates: &Predicates,
    sort: Option<&Sort>,
    now: DateTime<Utc>,
) -> Vec<R> {
    let needle = predicates.search.trim().to_lowercase();

    let mut selected: Vec<R> = records
        .iter()
        .filter(|record| {
            if !needle.is_empty() && !record.matches_search(&needle) {
                return false;
            }
            if !predicates.status.matches(record.status_token()) {
                return false;
            }
            if !predicates.kind.matches(record.kind_token()) {
                return false;
            }
            if predicates.date_range != DateRange::All {
                match record.timestamp() {
                    Some(ts) => {
                        if !predicates.date_range.contains(ts, now) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        })
        .cloned()
        .collect();

    if let Some(sort) = sort {
        selected.sort_by(|a, b| {
            let ordering = a.sort_key(sort.field).compare(&b.sort_key(sort.field));
            let ordering = match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.record_id().cmp(b.record_id()))
        });
    }

    selected
}

// ==================== Queryable Implementations ====================

impl Queryable for Transaction {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_fold(&self.description, needle)
            || contains_fold(&self.payer_name, needle)
            || contains_fold(&self.pix_key, needle)
            || self
                .end_to_end_id
                .as_deref()
                .map(|e2e| contains_fold(e2e, needle))
                .unwrap_or(false)
    }

    fn status_token(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_token(&self) -> Option<&str> {
        Some(self.charge_type.as_str())
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }

    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::Amount => SortKey::Amount(self.amount),
            SortField::Timestamp => SortKey::Time(self.timestamp),
            SortField::Name => SortKey::Text(self.payer_name.clone()),
        }
    }
}

impl Queryable for PixKey {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_fold(&self.key_value, needle)
            || contains_fold(&self.owner_name, needle)
            || contains_fold(&self.owner_document, needle)
    }

    fn status_token(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_token(&self) -> Option<&str> {
        Some(self.key_type.as_str())
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::Timestamp => SortKey::Time(self.created_at),
            SortField::Name => SortKey::Text(self.owner_name.clone()),
            SortField::Amount => SortKey::Missing,
        }
    }
}

impl Queryable for StaticCharge {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_fold(&self.description, needle) || contains_fold(&self.pix_key, needle)
    }

    fn status_token(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.paid_at)
    }

    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::Amount => SortKey::Amount(self.amount),
            SortField::Timestamp => SortKey::Time(self.paid_at),
            SortField::Name => SortKey::Text(self.emitter_name.clone()),
        }
    }
}

impl Queryable for DynamicCharge {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_fold(&self.description, needle)
            || contains_fold(&self.emitter_name, needle)
            || contains_fold(&self.pix_key, needle)
    }

    fn status_token(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::Amount => SortKey::Amount(self.amount),
            SortField::Timestamp => SortKey::Time(self.created_at),
            SortField::Name => SortKey::Text(self.emitter_name.clone()),
        }
    }
}

impl Queryable for ApiLog {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_fold(&self.message, needle)
            || contains_fold(&self.bank, needle)
            || contains_fold(&self.endpoint, needle)
    }

    // Log level fills the status slot, bank the type slot
    fn status_token(&self) -> Option<&str> {
        Some(self.level.as_str())
    }

    fn kind_token(&self) -> Option<&str> {
        Some(&self.bank)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }

    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::Timestamp => SortKey::Time(self.timestamp),
            SortField::Name => SortKey::Text(self.bank.clone()),
            SortField::Amount => SortKey::Missing,
        }
    }
}

impl Queryable for Report {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_fold(&self.title, needle)
            || self
                .description
                .as_deref()
                .map(|d| contains_fold(d, needle))
                .unwrap_or(false)
    }

    fn status_token(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_token(&self) -> Option<&str> {
        Some(self.report_type.as_str())
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::Timestamp => SortKey::Time(self.created_at),
            SortField::Name => SortKey::Text(self.title.clone()),
            SortField::Amount => SortKey::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChargeType, Transaction, TransactionStatus};
    use chrono::{Duration, TimeZone};

    fn tx(id: &str, status: TransactionStatus, amount: &str, hours_ago: i64) -> Transaction {
        let now = Utc.with_ymd_and_hms(2026, 7, 21, 12, 0, 0).unwrap();
        Transaction {
            id: id.to_string(),
            tx_id: format!("pix_{}", id),
            end_to_end_id: Some(format!("E1234{}", id)),
            description: format!("Pagamento {}", id),
            amount: amount.parse().unwrap(),
            status,
            charge_type: ChargeType::Static,
            pix_key: "empresa@pix.com".to_string(),
            payer_name: format!("Pagador {}", id),
            payer_document: "123.456.789-00".to_string(),
            payer_bank: "Banco do Brasil".to_string(),
            timestamp: now - Duration::hours(hours_ago),
            failure_reason: None,
        }
    }

    fn eval_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 21, 12, 0, 0).unwrap()
    }

    fn ids(records: &[Transaction]) -> Vec<&str> {
        records.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_default_predicates_return_input_order() {
        let records = vec![
            tx("b", TransactionStatus::Completed, "10.00", 1),
            tx("a", TransactionStatus::Pending, "20.00", 2),
            tx("c", TransactionStatus::Failed, "30.00", 3),
        ];
        let out = filter_and_sort(&records, &Predicates::default(), None, eval_instant());
        assert_eq!(ids(&out), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let records: Vec<Transaction> = Vec::new();
        let predicates = Predicates {
            search: "qualquer coisa".to_string(),
            status: CategoryFilter::parse("failed"),
            kind: CategoryFilter::parse("dynamic"),
            date_range: DateRange::Today,
        };
        let sort = Sort::new(SortField::Amount, SortDirection::Desc);
        let out = filter_and_sort(&records, &predicates, Some(&sort), eval_instant());
        assert!(out.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut records = vec![
            tx("a", TransactionStatus::Completed, "10.00", 1),
            tx("b", TransactionStatus::Completed, "20.00", 1),
        ];
        records[0].description = "Cobrança PIX Dinâmica - Fatura #001".to_string();
        records[1].payer_name = "Maria Santos".to_string();

        let out = filter_and_sort(&records, &Predicates::search("fatura"), None, eval_instant());
        assert_eq!(ids(&out), vec!["a"]);

        let out = filter_and_sort(&records, &Predicates::search("MARIA"), None, eval_instant());
        assert_eq!(ids(&out), vec!["b"]);

        let out = filter_and_sort(&records, &Predicates::search("inexistente"), None, eval_instant());
        assert!(out.is_empty());
    }

    #[test]
    fn test_search_covers_end_to_end_id() {
        let mut records = vec![tx("a", TransactionStatus::Completed, "10.00", 1)];
        records[0].end_to_end_id = Some("E12345678202407211200000001".to_string());
        let out = filter_and_sort(
            &records,
            &Predicates::search("e123456782024"),
            None,
            eval_instant(),
        );
        assert_eq!(out.len(), 1);

        records[0].end_to_end_id = None;
        let out = filter_and_sort(
            &records,
            &Predicates::search("e123456782024"),
            None,
            eval_instant(),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_status_filter_exact_match() {
        let records = vec![
            tx("a", TransactionStatus::Pending, "10.00", 1),
            tx("b", TransactionStatus::Completed, "20.00", 1),
            tx("c", TransactionStatus::Completed, "30.00", 1),
        ];
        let predicates = Predicates {
            status: CategoryFilter::parse("completed"),
            ..Predicates::default()
        };
        let out = filter_and_sort(&records, &predicates, None, eval_instant());
        assert_eq!(ids(&out), vec!["b", "c"]);
        assert!(out.iter().all(|t| t.status == TransactionStatus::Completed));
    }

    #[test]
    fn test_and_composition_is_intersection() {
        let mut records = vec![
            tx("a", TransactionStatus::Completed, "10.00", 1),
            tx("b", TransactionStatus::Completed, "20.00", 1),
            tx("c", TransactionStatus::Pending, "30.00", 1),
        ];
        records[0].payer_name = "Maria Santos".to_string();
        records[2].payer_name = "Maria Oliveira".to_string();

        let search_only = Predicates::search("maria");
        let status_only = Predicates {
            status: CategoryFilter::parse("completed"),
            ..Predicates::default()
        };
        let both = Predicates {
            search: "maria".to_string(),
            status: CategoryFilter::parse("completed"),
            ..Predicates::default()
        };

        let now = eval_instant();
        let by_search = filter_and_sort(&records, &search_only, None, now);
        let by_status = filter_and_sort(&records, &status_only, None, now);
        let by_both = filter_and_sort(&records, &both, None, now);

        let search_ids = ids(&by_search);
        let intersection: Vec<&str> = by_status
            .iter()
            .filter(|t| search_ids.contains(&t.id.as_str()))
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids(&by_both), intersection);
        assert_eq!(ids(&by_both), vec!["a"]);
    }

    #[test]
    fn test_amount_sort_directions_are_reverses() {
        let records = vec![
            tx("a", TransactionStatus::Completed, "100.00", 1),
            tx("b", TransactionStatus::Completed, "50.00", 1),
            tx("c", TransactionStatus::Completed, "200.00", 1),
        ];
        let asc = filter_and_sort(
            &records,
            &Predicates::default(),
            Some(&Sort::new(SortField::Amount, SortDirection::Asc)),
            eval_instant(),
        );
        let desc = filter_and_sort(
            &records,
            &Predicates::default(),
            Some(&Sort::new(SortField::Amount, SortDirection::Desc)),
            eval_instant(),
        );
        assert_eq!(ids(&asc), vec!["b", "a", "c"]);
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn test_paid_filter_with_amount_desc() {
        // settled-only view sorted by largest amount first
        let records = vec![
            tx("a", TransactionStatus::Pending, "100.00", 1),
            tx("b", TransactionStatus::Completed, "50.00", 1),
            tx("c", TransactionStatus::Completed, "200.00", 1),
        ];
        let predicates = Predicates {
            status: CategoryFilter::parse("completed"),
            ..Predicates::default()
        };
        let sort = Sort::new(SortField::Amount, SortDirection::Desc);
        let out = filter_and_sort(&records, &predicates, Some(&sort), eval_instant());
        let amounts: Vec<String> = out.iter().map(|t| t.amount.to_string()).collect();
        assert_eq!(amounts, vec!["200.00", "50.00"]);
    }

    #[test]
    fn test_today_excludes_record_from_yesterday() {
        // 25 hours old with "now" past midnight falls on the previous
        // calendar day
        let records = vec![
            tx("old", TransactionStatus::Completed, "10.00", 25),
            tx("fresh", TransactionStatus::Completed, "20.00", 2),
        ];
        let predicates = Predicates {
            date_range: DateRange::Today,
            ..Predicates::default()
        };
        let out = filter_and_sort(&records, &predicates, None, eval_instant());
        assert_eq!(ids(&out), vec!["fresh"]);
    }

    #[test]
    fn test_week_and_month_are_trailing_windows() {
        let records = vec![
            tx("h2", TransactionStatus::Completed, "10.00", 2),
            tx("d6", TransactionStatus::Completed, "10.00", 6 * 24),
            tx("d8", TransactionStatus::Completed, "10.00", 8 * 24),
            tx("d29", TransactionStatus::Completed, "10.00", 29 * 24),
            tx("d31", TransactionStatus::Completed, "10.00", 31 * 24),
        ];
        let week = Predicates {
            date_range: DateRange::Week,
            ..Predicates::default()
        };
        let month = Predicates {
            date_range: DateRange::Month,
            ..Predicates::default()
        };
        assert_eq!(
            ids(&filter_and_sort(&records, &week, None, eval_instant())),
            vec!["h2", "d6"]
        );
        assert_eq!(
            ids(&filter_and_sort(&records, &month, None, eval_instant())),
            vec!["h2", "d6", "d8", "d29"]
        );
    }

    #[test]
    fn test_name_sort_is_case_folded_with_id_tiebreak() {
        let mut records = vec![
            tx("b", TransactionStatus::Completed, "10.00", 1),
            tx("a", TransactionStatus::Completed, "10.00", 1),
            tx("c", TransactionStatus::Completed, "10.00", 1),
        ];
        records[0].payer_name = "ana".to_string();
        records[1].payer_name = "Ana".to_string();
        records[2].payer_name = "Bruno".to_string();

        let sort = Sort::new(SortField::Name, SortDirection::Asc);
        let out = filter_and_sort(&records, &Predicates::default(), Some(&sort), eval_instant());
        // "ana" == "Ana" after folding; id ascending breaks the tie
        assert_eq!(ids(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_sort_key_falls_back_to_id() {
        let now = eval_instant();
        let keys = vec![
            crate::models::PixKey {
                id: "key_b".to_string(),
                key_value: "empresa@pix.com".to_string(),
                key_type: crate::models::PixKeyType::Email,
                owner_name: "Empresa".to_string(),
                owner_document: "12.345.678/0001-00".to_string(),
                status: crate::models::PixKeyStatus::Active,
                created_at: now,
                updated_at: now,
            },
            crate::models::PixKey {
                id: "key_a".to_string(),
                key_value: "+5511999999999".to_string(),
                key_type: crate::models::PixKeyType::Phone,
                owner_name: "Secretaria".to_string(),
                owner_document: "98.765.432/0001-00".to_string(),
                status: crate::models::PixKeyStatus::Active,
                created_at: now,
                updated_at: now,
            },
        ];
        // PIX keys have no amount; sort must be a no-op beyond the id
        // tie-break and must not panic
        let sort = Sort::new(SortField::Amount, SortDirection::Desc);
        let out = filter_and_sort(&keys, &Predicates::default(), Some(&sort), now);
        let out_ids: Vec<&str> = out.iter().map(|k| k.id.as_str()).collect();
        assert_eq!(out_ids, vec!["key_a", "key_b"]);
    }

    #[test]
    fn test_kind_filter_on_charge_type() {
        let mut records = vec![
            tx("a", TransactionStatus::Completed, "10.00", 1),
            tx("b", TransactionStatus::Completed, "20.00", 1),
        ];
        records[1].charge_type = ChargeType::Dynamic;
        let predicates = Predicates {
            kind: CategoryFilter::parse("dynamic"),
            ..Predicates::default()
        };
        let out = filter_and_sort(&records, &predicates, None, eval_instant());
        assert_eq!(ids(&out), vec!["b"]);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(" All "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Completed"),
            CategoryFilter::Only("completed".to_string())
        );
        assert!(!CategoryFilter::parse("completed").matches(None));
        // Free-text categories match case-insensitively
        assert!(CategoryFilter::parse("Bradesco").matches(Some("Bradesco")));
        assert!(CategoryFilter::parse("bradesco").matches(Some("Bradesco")));
        assert!(!CategoryFilter::parse("bradesco").matches(Some("Itaú")));
    }
}

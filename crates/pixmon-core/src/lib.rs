//! Core snapshot processing and business logic
//!
//! The [`Monitor`] holds read-only snapshots of every collection and answers
//! list queries and statistics over them. Records are fetched through a
//! [`CollectionStore`], deserialized row by row, and replaced wholesale on
//! load/reload; nothing here mutates a record.

pub mod error;
pub mod models;
pub mod query;
pub mod stats;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::RwLock;

use pixmon_config::Config;
use pixmon_store::{Collection, StoreError};

pub use error::{CoreError, ErrorCode};
pub use models::{
    ApiLog, BankApi, BankStatus, ChargeType, DynamicCharge, DynamicChargeStatus, LogLevel, PixKey,
    PixKeyStatus, PixKeyType, Report, ReportStatus, ReportType, StaticCharge, StaticChargeStatus,
    Transaction, TransactionStatus, User, UserRole,
};
pub use query::{
    filter_and_sort, CategoryFilter, DateRangeExt, Predicates, Queryable, Sort, SortDirection,
    SortField, SortKey,
};
pub use stats::{
    bank_overview, dashboard_stats, dynamic_charge_stats, report_stats, static_charge_stats,
    transaction_stats, BankOverview, DashboardStats, DynamicChargeStats, ReportStats,
    StaticChargeStats, TransactionStats,
};

/// Store reference type
pub use pixmon_store::StoreRef;

/// Main monitor structure
pub struct Monitor {
    config: Config,
    store: StoreRef,
    data: RwLock<MonitorData>,
    last_loaded: RwLock<Option<DateTime<Utc>>>,
}

/// In-memory snapshot data
#[derive(Debug, Default)]
pub struct MonitorData {
    pub users: Vec<User>,
    pub pix_keys: Vec<PixKey>,
    pub transactions: Vec<Transaction>,
    pub static_charges: Vec<StaticCharge>,
    pub dynamic_charges: Vec<DynamicCharge>,
    pub bank_apis: Vec<BankApi>,
    pub api_logs: Vec<ApiLog>,
    pub reports: Vec<Report>,
}

impl Monitor {
    /// Create a new monitor with config and store
    pub fn new(config: Config, store: StoreRef) -> Self {
        Self {
            config,
            store,
            data: RwLock::new(MonitorData::default()),
            last_loaded: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load every collection from the store, replacing the snapshot
    pub async fn load(&mut self) -> Result<(), CoreError> {
        let users = self.fetch_collection::<User>(Collection::Users).await?;
        let pix_keys = self.fetch_collection::<PixKey>(Collection::PixKeys).await?;
        let transactions = self
            .fetch_collection::<Transaction>(Collection::Transactions)
            .await?;
        let static_charges = self
            .fetch_collection::<StaticCharge>(Collection::StaticCharges)
            .await?;
        let dynamic_charges = self
            .fetch_collection::<DynamicCharge>(Collection::DynamicCharges)
            .await?;
        let bank_apis = self.fetch_collection::<BankApi>(Collection::BankApis).await?;
        let api_logs = self.fetch_collection::<ApiLog>(Collection::ApiLogs).await?;
        let reports = self.fetch_collection::<Report>(Collection::Reports).await?;

        {
            let mut data = self.data.write().unwrap();
            *data = MonitorData {
                users,
                pix_keys,
                transactions,
                static_charges,
                dynamic_charges,
                bank_apis,
                api_logs,
                reports,
            };
        }
        *self.last_loaded.write().unwrap() = Some(Utc::now());

        let data = self.data.read().unwrap();
        log::info!(
            "Snapshot loaded: {} keys, {} transactions, {} static charges, {} dynamic charges, {} banks, {} logs, {} reports",
            data.pix_keys.len(),
            data.transactions.len(),
            data.static_charges.len(),
            data.dynamic_charges.len(),
            data.bank_apis.len(),
            data.api_logs.len(),
            data.reports.len()
        );

        Ok(())
    }

    /// Reload the snapshot from the store
    pub async fn reload(&mut self) -> Result<(), CoreError> {
        self.load().await
    }

    /// Instant of the last successful load
    pub fn last_loaded(&self) -> Option<DateTime<Utc>> {
        *self.last_loaded.read().unwrap()
    }

    /// Fetch one collection and deserialize its rows, skipping bad ones
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, CoreError> {
        let rows = match self.store.fetch(collection).await {
            Ok(rows) => rows,
            Err(StoreError::CollectionNotFound { .. }) => {
                log::warn!("Collection {} not found, loading as empty", collection);
                return Ok(Vec::new());
            }
            Err(e) => return Err(CoreError::StoreFailure(e)),
        };

        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;
        for row in rows {
            match serde_json::from_value::<T>(row) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    log::warn!("Skipping invalid row in {}: {}", collection, e);
                }
            }
        }
        if skipped > 0 {
            log::warn!("{}: skipped {} invalid rows", collection, skipped);
        }
        Ok(records)
    }

    // ==================== Accessors ====================

    pub fn all_users(&self) -> Vec<User> {
        self.data.read().unwrap().users.clone()
    }

    pub fn all_pix_keys(&self) -> Vec<PixKey> {
        self.data.read().unwrap().pix_keys.clone()
    }

    pub fn all_transactions(&self) -> Vec<Transaction> {
        self.data.read().unwrap().transactions.clone()
    }

    pub fn all_static_charges(&self) -> Vec<StaticCharge> {
        self.data.read().unwrap().static_charges.clone()
    }

    pub fn all_dynamic_charges(&self) -> Vec<DynamicCharge> {
        self.data.read().unwrap().dynamic_charges.clone()
    }

    pub fn all_bank_apis(&self) -> Vec<BankApi> {
        self.data.read().unwrap().bank_apis.clone()
    }

    pub fn all_api_logs(&self) -> Vec<ApiLog> {
        self.data.read().unwrap().api_logs.clone()
    }

    pub fn all_reports(&self) -> Vec<Report> {
        self.data.read().unwrap().reports.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.data.read().unwrap().transactions.len()
    }

    /// Get transaction by ID
    pub fn transaction(&self, id: &str) -> Option<Transaction> {
        let data = self.data.read().unwrap();
        data.transactions.iter().find(|t| t.id == id).cloned()
    }

    /// Get PIX key by ID
    pub fn pix_key(&self, id: &str) -> Option<PixKey> {
        let data = self.data.read().unwrap();
        data.pix_keys.iter().find(|k| k.id == id).cloned()
    }

    /// Get bank API by ID
    pub fn bank_api(&self, id: &str) -> Option<BankApi> {
        let data = self.data.read().unwrap();
        data.bank_apis.iter().find(|b| b.id == id).cloned()
    }

    /// Get dynamic charge by ID
    pub fn dynamic_charge(&self, id: &str) -> Option<DynamicCharge> {
        let data = self.data.read().unwrap();
        data.dynamic_charges.iter().find(|c| c.id == id).cloned()
    }

    /// Get report by ID
    pub fn report(&self, id: &str) -> Option<Report> {
        let data = self.data.read().unwrap();
        data.reports.iter().find(|r| r.id == id).cloned()
    }

    // ==================== List Queries ====================

    pub fn query_transactions(
        &self,
        predicates: &Predicates,
        sort: Option<&Sort>,
    ) -> Vec<Transaction> {
        let data = self.data.read().unwrap();
        filter_and_sort(&data.transactions, predicates, sort, Utc::now())
    }

    pub fn query_pix_keys(&self, predicates: &Predicates, sort: Option<&Sort>) -> Vec<PixKey> {
        let data = self.data.read().unwrap();
        filter_and_sort(&data.pix_keys, predicates, sort, Utc::now())
    }

    pub fn query_static_charges(
        &self,
        predicates: &Predicates,
        sort: Option<&Sort>,
    ) -> Vec<StaticCharge> {
        let data = self.data.read().unwrap();
        filter_and_sort(&data.static_charges, predicates, sort, Utc::now())
    }

    pub fn query_dynamic_charges(
        &self,
        predicates: &Predicates,
        sort: Option<&Sort>,
    ) -> Vec<DynamicCharge> {
        let data = self.data.read().unwrap();
        filter_and_sort(&data.dynamic_charges, predicates, sort, Utc::now())
    }

    pub fn query_logs(&self, predicates: &Predicates, sort: Option<&Sort>) -> Vec<ApiLog> {
        let data = self.data.read().unwrap();
        filter_and_sort(&data.api_logs, predicates, sort, Utc::now())
    }

    pub fn query_reports(&self, predicates: &Predicates, sort: Option<&Sort>) -> Vec<Report> {
        let data = self.data.read().unwrap();
        filter_and_sort(&data.reports, predicates, sort, Utc::now())
    }

    /// Search transactions by keyword only
    pub fn search_transactions(&self, query: &str) -> Vec<Transaction> {
        self.query_transactions(&Predicates::search(query), None)
    }

    /// Most recent transactions, newest first
    pub fn recent_transactions(&self, count: usize) -> Vec<Transaction> {
        let sort = Sort::new(SortField::Timestamp, SortDirection::Desc);
        let data = self.data.read().unwrap();
        let mut recent = filter_and_sort(&data.transactions, &Predicates::default(), Some(&sort), Utc::now());
        recent.truncate(count);
        recent
    }

    /// Logs emitted by one bank, newest first
    pub fn logs_by_bank(&self, bank: &str) -> Vec<ApiLog> {
        let predicates = Predicates {
            kind: CategoryFilter::parse(bank),
            ..Predicates::default()
        };
        let sort = Sort::new(SortField::Timestamp, SortDirection::Desc);
        self.query_logs(&predicates, Some(&sort))
    }

    // ==================== Statistics ====================

    pub fn transaction_stats(&self) -> TransactionStats {
        let data = self.data.read().unwrap();
        transaction_stats(&data.transactions)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let data = self.data.read().unwrap();
        dashboard_stats(&data.pix_keys, &data.transactions)
    }

    pub fn static_charge_stats(&self) -> StaticChargeStats {
        let data = self.data.read().unwrap();
        static_charge_stats(&data.static_charges)
    }

    pub fn dynamic_charge_stats(&self) -> DynamicChargeStats {
        let data = self.data.read().unwrap();
        dynamic_charge_stats(&data.dynamic_charges)
    }

    pub fn bank_overview(&self) -> BankOverview {
        let data = self.data.read().unwrap();
        bank_overview(&data.bank_apis, &data.api_logs)
    }

    pub fn report_stats(&self) -> ReportStats {
        let data = self.data.read().unwrap();
        report_stats(&data.reports)
    }

    /// Collection counts for the summary endpoint
    pub fn summary(&self) -> MonitorSummary {
        let data = self.data.read().unwrap();
        MonitorSummary {
            users: data.users.len(),
            pix_keys: data.pix_keys.len(),
            transactions: data.transactions.len(),
            static_charges: data.static_charges.len(),
            dynamic_charges: data.dynamic_charges.len(),
            bank_apis: data.bank_apis.len(),
            api_logs: data.api_logs.len(),
            reports: data.reports.len(),
            last_loaded: self.last_loaded(),
        }
    }
}

// ==================== Response Types ====================

/// Collection counts and load instant
#[derive(Debug, Clone, Serialize)]
pub struct MonitorSummary {
    pub users: usize,
    pub pix_keys: usize,
    pub transactions: usize,
    pub static_charges: usize,
    pub dynamic_charges: usize,
    pub bank_apis: usize,
    pub api_logs: usize,
    pub reports: usize,
    pub last_loaded: Option<DateTime<Utc>>,
}

/// Paginated list envelope for JSON API responses
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> ListResponse<T> {
    /// Build a page from a fully filtered list
    pub fn paginate(all: Vec<T>, limit: usize, offset: usize) -> Self {
        let limit = limit.max(1);
        let total_count = all.len();
        let items: Vec<T> = all.into_iter().skip(offset).take(limit).collect();
        Self {
            items,
            total_count,
            page: offset / limit + 1,
            page_size: limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmon_store::SampleStore;
    use std::sync::Arc;

    async fn loaded_monitor() -> Monitor {
        let mut monitor = Monitor::new(Config::default(), Arc::new(SampleStore));
        monitor.load().await.unwrap();
        monitor
    }

    #[tokio::test]
    async fn test_load_populates_every_collection() {
        let monitor = loaded_monitor().await;
        let summary = monitor.summary();
        assert!(summary.users > 0);
        assert!(summary.pix_keys > 0);
        assert!(summary.transactions > 0);
        assert!(summary.static_charges > 0);
        assert!(summary.dynamic_charges > 0);
        assert!(summary.bank_apis > 0);
        assert!(summary.api_logs > 0);
        assert!(summary.reports > 0);
        assert!(summary.last_loaded.is_some());
    }

    #[tokio::test]
    async fn test_transaction_lookup_by_id() {
        let monitor = loaded_monitor().await;
        let tx = monitor.transaction("txn_001").unwrap();
        assert_eq!(tx.payer_name, "João Silva");
        assert!(monitor.transaction("txn_999").is_none());
    }

    #[tokio::test]
    async fn test_query_transactions_by_status() {
        let monitor = loaded_monitor().await;
        let predicates = Predicates {
            status: CategoryFilter::parse("failed"),
            ..Predicates::default()
        };
        let failed = monitor.query_transactions(&predicates, None);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].failure_reason.as_deref(), Some("Saldo insuficiente"));
    }

    #[tokio::test]
    async fn test_search_matches_pix_key_field() {
        let monitor = loaded_monitor().await;
        let hits = monitor.search_transactions("empresa@pix.com");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|t| t.pix_key.contains("empresa@pix.com")));
    }

    #[tokio::test]
    async fn test_recent_transactions_newest_first() {
        let monitor = loaded_monitor().await;
        let recent = monitor.recent_transactions(3);
        assert_eq!(recent.len(), 3);
        assert!(recent.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_eq!(recent[0].id, "txn_001");
    }

    #[tokio::test]
    async fn test_logs_by_bank() {
        let monitor = loaded_monitor().await;
        let logs = monitor.logs_by_bank("Bradesco");
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|l| l.bank == "Bradesco"));
    }

    #[tokio::test]
    async fn test_dashboard_stats_match_sample_data() {
        let monitor = loaded_monitor().await;
        let stats = monitor.dashboard_stats();
        assert_eq!(stats.total_keys, 5);
        assert_eq!(stats.total_transactions, 7);
        assert_eq!(stats.completed_transactions, 5);
        assert_eq!(stats.pending_transactions, 1);
        // 500 + 1500 + 50 + 2500 + 750
        assert_eq!(stats.total_amount, "5300.00".parse().unwrap());
    }

    #[tokio::test]
    async fn test_bank_overview_from_sample_data() {
        let monitor = loaded_monitor().await;
        let overview = monitor.bank_overview();
        assert_eq!(overview.online, 4);
        assert_eq!(overview.offline, 1);
        assert_eq!(overview.error_logs, 2);
    }

    #[tokio::test]
    async fn test_reload_replaces_snapshot() {
        let mut monitor = Monitor::new(Config::default(), Arc::new(SampleStore));
        monitor.load().await.unwrap();
        let first = monitor.last_loaded().unwrap();
        monitor.reload().await.unwrap();
        assert!(monitor.last_loaded().unwrap() >= first);
        assert_eq!(monitor.transaction_count(), 7);
    }

    #[test]
    fn test_list_response_pagination() {
        let response = ListResponse::paginate((0..10).collect::<Vec<_>>(), 3, 6);
        assert_eq!(response.items, vec![6, 7, 8]);
        assert_eq!(response.total_count, 10);
        assert_eq!(response.page, 3);
        assert_eq!(response.page_size, 3);
    }
}

//! Generic collection data access for pixmon
//!
//! A store hands back arrays of flat JSON rows per named collection. It has
//! no filtering capability of its own; all selection happens downstream,
//! after the full collection is materialized in memory.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub mod error;
pub mod fixtures;

pub use error::StoreError;

/// Store reference type
pub type StoreRef = Arc<dyn CollectionStore>;

/// Named record collections served by a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    PixKeys,
    Transactions,
    StaticCharges,
    DynamicCharges,
    BankApis,
    ApiLogs,
    Reports,
}

impl Collection {
    /// All collections, in load order
    pub const ALL: [Collection; 8] = [
        Collection::Users,
        Collection::PixKeys,
        Collection::Transactions,
        Collection::StaticCharges,
        Collection::DynamicCharges,
        Collection::BankApis,
        Collection::ApiLogs,
        Collection::Reports,
    ];

    /// Collection name as used for snapshot file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::PixKeys => "pix_keys",
            Collection::Transactions => "transactions",
            Collection::StaticCharges => "static_charges",
            Collection::DynamicCharges => "dynamic_charges",
            Collection::BankApis => "bank_apis",
            Collection::ApiLogs => "api_logs",
            Collection::Reports => "reports",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Collection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "users" => Ok(Collection::Users),
            "pix_keys" => Ok(Collection::PixKeys),
            "transactions" => Ok(Collection::Transactions),
            "static_charges" => Ok(Collection::StaticCharges),
            "dynamic_charges" => Ok(Collection::DynamicCharges),
            "bank_apis" => Ok(Collection::BankApis),
            "api_logs" => Ok(Collection::ApiLogs),
            "reports" => Ok(Collection::Reports),
            _ => Err(format!("Unknown collection: {}", s)),
        }
    }
}

// ==================== Store Trait ====================

/// Trait for collection stores
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Fetch every row of a collection as flat JSON objects
    async fn fetch(&self, collection: Collection) -> Result<Vec<serde_json::Value>, StoreError>;
}

/// Store reading one JSON array file per collection from a data directory
pub struct JsonFileStore {
    base_dir: PathBuf,
    /// Serve built-in sample rows when a collection file is absent
    use_sample_data: bool,
}

impl JsonFileStore {
    pub fn new(base_dir: PathBuf, use_sample_data: bool) -> Self {
        Self { base_dir, use_sample_data }
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.base_dir.join(format!("{}.json", collection.as_str()))
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn fetch(&self, collection: Collection) -> Result<Vec<serde_json::Value>, StoreError> {
        let path = self.collection_path(collection);

        if !path.exists() {
            if self.use_sample_data {
                return Ok(fixtures::sample_rows(collection));
            }
            return Err(StoreError::CollectionNotFound {
                collection: collection.to_string(),
            });
        }

        let content = tokio::fs::read_to_string(&path).await?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| StoreError::InvalidFormat {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        match value {
            serde_json::Value::Array(rows) => Ok(rows),
            _ => Err(StoreError::InvalidFormat {
                collection: collection.to_string(),
                message: "expected a top-level JSON array".to_string(),
            }),
        }
    }
}

/// Store serving only the built-in sample dataset
#[derive(Debug, Default)]
pub struct SampleStore;

#[async_trait]
impl CollectionStore for SampleStore {
    async fn fetch(&self, collection: Collection) -> Result<Vec<serde_json::Value>, StoreError> {
        Ok(fixtures::sample_rows(collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_round_trip() {
        for collection in Collection::ALL {
            let parsed: Collection = collection.as_str().parse().unwrap();
            assert_eq!(parsed, collection);
        }
        assert!("proposals".parse::<Collection>().is_err());
    }

    #[tokio::test]
    async fn test_sample_store_serves_every_collection() {
        let store = SampleStore;
        for collection in Collection::ALL {
            let rows = store.fetch(collection).await.unwrap();
            assert!(!rows.is_empty(), "no sample rows for {}", collection);
            for row in &rows {
                assert!(row.is_object(), "sample row is not a flat object");
                assert!(row.get("id").is_some(), "sample row missing id");
            }
        }
    }

    #[tokio::test]
    async fn test_file_store_missing_collection() {
        let store = JsonFileStore::new(PathBuf::from("/nonexistent-pixmon-data"), false);
        let result = store.fetch(Collection::Transactions).await;
        assert!(matches!(result, Err(StoreError::CollectionNotFound { .. })));
    }

    #[tokio::test]
    async fn test_file_store_falls_back_to_samples() {
        let store = JsonFileStore::new(PathBuf::from("/nonexistent-pixmon-data"), true);
        let rows = store.fetch(Collection::BankApis).await.unwrap();
        assert_eq!(rows.len(), fixtures::sample_rows(Collection::BankApis).len());
    }
}

//! Configuration management for pixmon
//!
//! This module handles loading, validation, and management of
//! pixmon configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Basic authentication (optional)
    #[serde(default)]
    pub auth: Option<AuthConfig>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Basic authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

/// Data directory configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Path to the snapshot directory (one JSON file per collection)
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Serve built-in sample data when a collection file is absent
    #[serde(default = "default_true")]
    pub use_sample_data: bool,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

/// Feature toggles
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeaturesConfig {
    /// Expand transaction details inline on the transactions page
    #[serde(default = "default_true")]
    pub expand_detail: bool,
    /// Show the failure reason column for failed transactions
    #[serde(default = "default_true")]
    pub show_failure_reason: bool,
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaginationConfig {
    /// Records per page for lists
    #[serde(default = "default_records_per_page")]
    pub records_per_page: usize,
}

fn default_records_per_page() -> usize {
    25
}

/// List filter defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    /// Default date range applied to list pages
    #[serde(default)]
    pub default_date_range: DateRange,
}

/// Relative date range enumeration
///
/// Ranges are evaluated against the request instant: "today" means the same
/// calendar day, "week" the trailing 7x24h, "month" the trailing 30x24h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// No date filtering
    All,
    /// Same calendar day
    Today,
    /// Trailing seven days
    Week,
    /// Trailing thirty days
    Month,
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::All
    }
}

impl std::str::FromStr for DateRange {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DateRange::All),
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            _ => Err(format!("Invalid date range: {}", s)),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRange::All => write!(f, "all"),
            DateRange::Today => write!(f, "today"),
            DateRange::Week => write!(f, "week"),
            DateRange::Month => write!(f, "month"),
        }
    }
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Default currency
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Number of decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
    /// Decimal separator
    #[serde(default = "default_decimal_sep")]
    pub decimal_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            default_currency: "BRL".to_string(),
            decimal_places: 2,
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
        }
    }
}

fn default_currency() -> String {
    "BRL".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_thousands_sep() -> String {
    ".".to_string()
}

fn default_decimal_sep() -> String {
    ",".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Data directory settings
    #[serde(default)]
    pub data: DataConfig,
    /// Feature toggles
    #[serde(default)]
    pub features: FeaturesConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// List filter defaults
    #[serde(default)]
    pub filters: FilterConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::FileNotFound { path: path.to_string_lossy().to_string() })?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.pagination.records_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.records_per_page".to_string(),
                reason: "Records per page must be greater than 0".to_string(),
            });
        }

        if self.currency.decimal_places > 10 {
            return Err(ConfigError::InvalidValue {
                field: "currency.decimal_places".to_string(),
                reason: "Decimal places must be between 0 and 10".to_string(),
            });
        }

        Ok(())
    }

    /// Load from the file if present, otherwise fall back to the built-in
    /// default configuration
    pub fn load_or_default(path: PathBuf) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            let config: Config = serde_yaml::from_str(Self::generate_default())
                .map_err(|_| ConfigError::InvalidYaml)?;
            config.validate()?;
            Ok(config)
        }
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Get the path of a collection snapshot file
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.data.path.join(format!("{}.json", collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses() {
        let config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.currency.default_currency, "BRL");
        assert_eq!(config.pagination.records_per_page, 25);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.data.use_sample_data);
        assert_eq!(config.filters.default_date_range, DateRange::All);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config: Config = serde_yaml::from_str("{}").unwrap();
        config.pagination.records_per_page = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_date_range_from_str() {
        assert_eq!("all".parse::<DateRange>().unwrap(), DateRange::All);
        assert_eq!("today".parse::<DateRange>().unwrap(), DateRange::Today);
        assert_eq!("week".parse::<DateRange>().unwrap(), DateRange::Week);
        assert_eq!("Month".parse::<DateRange>().unwrap(), DateRange::Month);
        assert!("yesterday".parse::<DateRange>().is_err());
    }

    #[test]
    fn test_collection_path() {
        let config: Config = serde_yaml::from_str("data:\n  path: /var/pixmon\n").unwrap();
        assert_eq!(
            config.collection_path("transactions"),
            PathBuf::from("/var/pixmon/transactions.json")
        );
    }
}

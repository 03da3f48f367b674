//! Core data models for monitored PIX collections
//!
//! Every record is a read-only snapshot row. Category fields are closed
//! enums with lowercase wire tokens; amounts are exact decimals; timestamps
//! are UTC.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==================== Users ====================

/// User role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, including user management
    Admin,
    /// Can create and edit records
    Operator,
    /// Read-only access
    Viewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Operator => "operator",
            UserRole::Viewer => "viewer",
        }
    }

    /// Permission level; higher values grant more access
    pub fn level(&self) -> u8 {
        match self {
            UserRole::Viewer => 1,
            UserRole::Operator => 2,
            UserRole::Admin => 3,
        }
    }

    /// Check whether this role satisfies a required role
    pub fn has_permission(&self, required: UserRole) -> bool {
        self.level() >= required.level()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Actions available to this role
    pub fn available_actions(&self) -> Vec<&'static str> {
        let mut actions = vec!["view"];
        if self.has_permission(UserRole::Operator) {
            actions.push("create");
            actions.push("edit");
        }
        if self.is_admin() {
            actions.push("delete");
            actions.push("manage_users");
        }
        actions
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Viewer
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "operator" => Ok(UserRole::Operator),
            "viewer" => Ok(UserRole::Viewer),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// System user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Name to show in listings; falls back to the email
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

// ==================== PIX Keys ====================

/// PIX key type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyType {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Random,
}

impl PixKeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PixKeyType::Cpf => "cpf",
            PixKeyType::Cnpj => "cnpj",
            PixKeyType::Email => "email",
            PixKeyType::Phone => "phone",
            PixKeyType::Random => "random",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            PixKeyType::Cpf => "CPF",
            PixKeyType::Cnpj => "CNPJ",
            PixKeyType::Email => "Email",
            PixKeyType::Phone => "Telefone",
            PixKeyType::Random => "Aleatória",
        }
    }
}

impl std::str::FromStr for PixKeyType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpf" => Ok(PixKeyType::Cpf),
            "cnpj" => Ok(PixKeyType::Cnpj),
            "email" => Ok(PixKeyType::Email),
            "phone" => Ok(PixKeyType::Phone),
            "random" => Ok(PixKeyType::Random),
            _ => Err(format!("Invalid PIX key type: {}", s)),
        }
    }
}

impl std::fmt::Display for PixKeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// PIX key status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyStatus {
    Active,
    Inactive,
    Suspended,
}

impl PixKeyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PixKeyStatus::Active => "active",
            PixKeyStatus::Inactive => "inactive",
            PixKeyStatus::Suspended => "suspended",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            PixKeyStatus::Active => "Ativa",
            PixKeyStatus::Inactive => "Inativa",
            PixKeyStatus::Suspended => "Suspensa",
        }
    }
}

impl std::str::FromStr for PixKeyStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PixKeyStatus::Active),
            "inactive" => Ok(PixKeyStatus::Inactive),
            "suspended" => Ok(PixKeyStatus::Suspended),
            _ => Err(format!("Invalid PIX key status: {}", s)),
        }
    }
}

impl std::fmt::Display for PixKeyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registered PIX key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixKey {
    pub id: String,
    /// The key itself (document, email, phone, or random token)
    pub key_value: String,
    pub key_type: PixKeyType,
    pub owner_name: String,
    pub owner_document: String,
    pub status: PixKeyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==================== Transactions ====================

/// Transaction status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pendente",
            TransactionStatus::Completed => "Concluída",
            TransactionStatus::Failed => "Falhou",
            TransactionStatus::Cancelled => "Cancelada",
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TransactionStatus::Pending),
            "completed" => Ok(TransactionStatus::Completed),
            "failed" => Ok(TransactionStatus::Failed),
            "cancelled" => Ok(TransactionStatus::Cancelled),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Charge type: fixed payee key or one-time copy-paste code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeType {
    Static,
    Dynamic,
}

impl ChargeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeType::Static => "static",
            ChargeType::Dynamic => "dynamic",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            ChargeType::Static => "Chave PIX",
            ChargeType::Dynamic => "PIX Copia e Cola",
        }
    }
}

impl std::str::FromStr for ChargeType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(ChargeType::Static),
            "dynamic" => Ok(ChargeType::Dynamic),
            _ => Err(format!("Invalid charge type: {}", s)),
        }
    }
}

impl std::fmt::Display for ChargeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// PIX transaction snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Charge identifier at the originating bank
    pub tx_id: String,
    /// SPI end-to-end identifier; absent until settlement
    pub end_to_end_id: Option<String>,
    pub description: String,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub charge_type: ChargeType,
    pub pix_key: String,
    pub payer_name: String,
    pub payer_document: String,
    pub payer_bank: String,
    pub timestamp: DateTime<Utc>,
    /// Present only for failed transactions
    pub failure_reason: Option<String>,
}

impl Transaction {
    /// Whether the amount counted toward settled volume
    pub fn is_settled(&self) -> bool {
        self.status == TransactionStatus::Completed
    }

    /// One-line summary for logs and detail headers
    pub fn summary(&self) -> String {
        format!("{} - {}", self.timestamp.format("%Y-%m-%d %H:%M"), self.payer_name)
    }
}

// ==================== Static PIX Charges ====================

/// Outcome of a payment against a static key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticChargeStatus {
    Ok,
    Error,
}

impl StaticChargeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaticChargeStatus::Ok => "ok",
            StaticChargeStatus::Error => "error",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            StaticChargeStatus::Ok => "Efetuado",
            StaticChargeStatus::Error => "Falhou",
        }
    }
}

impl std::str::FromStr for StaticChargeStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(StaticChargeStatus::Ok),
            "error" => Ok(StaticChargeStatus::Error),
            _ => Err(format!("Invalid static charge status: {}", s)),
        }
    }
}

impl std::fmt::Display for StaticChargeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment received against a fixed (static) PIX key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticCharge {
    pub id: String,
    pub description: String,
    pub pix_key: String,
    pub status: StaticChargeStatus,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
    pub emitter_name: String,
    pub emitter_document: String,
    /// Number of individual payments aggregated into this record
    pub transaction_count: Option<u32>,
}

// ==================== Dynamic PIX Charges ====================

/// Lifecycle of a one-time charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicChargeStatus {
    Pending,
    Paid,
    Expired,
    Cancelled,
}

impl DynamicChargeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DynamicChargeStatus::Pending => "pending",
            DynamicChargeStatus::Paid => "paid",
            DynamicChargeStatus::Expired => "expired",
            DynamicChargeStatus::Cancelled => "cancelled",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            DynamicChargeStatus::Pending => "Pendente",
            DynamicChargeStatus::Paid => "Pago",
            DynamicChargeStatus::Expired => "Expirado",
            DynamicChargeStatus::Cancelled => "Cancelado",
        }
    }
}

impl std::str::FromStr for DynamicChargeStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(DynamicChargeStatus::Pending),
            "paid" => Ok(DynamicChargeStatus::Paid),
            "expired" => Ok(DynamicChargeStatus::Expired),
            "cancelled" => Ok(DynamicChargeStatus::Cancelled),
            _ => Err(format!("Invalid dynamic charge status: {}", s)),
        }
    }
}

impl std::fmt::Display for DynamicChargeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One-time payment request with an amount and an expiration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicCharge {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub pix_key: String,
    /// BR Code payload for copy-paste payment
    pub pix_code: String,
    pub status: DynamicChargeStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub emitter_name: String,
    pub emitter_document: String,
}

impl DynamicCharge {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Human-readable time to expiration: "2d 4h", "22h 15m", "45m"
    pub fn time_remaining(&self, now: DateTime<Utc>) -> String {
        let remaining = self.expires_at - now;
        if remaining <= chrono::Duration::zero() {
            return "Expirado".to_string();
        }

        let days = remaining.num_days();
        let hours = remaining.num_hours() % 24;
        let minutes = remaining.num_minutes() % 60;

        if days > 0 {
            format!("{}d {}h", days, hours)
        } else if hours > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        }
    }
}

// ==================== Bank APIs ====================

/// Bank API reachability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankStatus {
    Online,
    Offline,
}

impl BankStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BankStatus::Online => "online",
            BankStatus::Offline => "offline",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            BankStatus::Online => "Online",
            BankStatus::Offline => "Offline",
        }
    }
}

impl std::str::FromStr for BankStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(BankStatus::Online),
            "offline" => Ok(BankStatus::Offline),
            _ => Err(format!("Invalid bank status: {}", s)),
        }
    }
}

impl std::fmt::Display for BankStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Health snapshot of an upstream bank PIX API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankApi {
    pub id: String,
    pub name: String,
    pub status: BankStatus,
    pub last_check: DateTime<Utc>,
    /// Zero while offline
    pub response_time_ms: u32,
    pub uptime_percent: f64,
    pub total_requests: u64,
    pub success_rate: f64,
    pub error_rate: f64,
    pub endpoint: String,
    pub version: String,
    pub last_error: Option<String>,
}

// ==================== API Logs ====================

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request log entry from a bank API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub bank: String,
    pub level: LogLevel,
    pub message: String,
    pub endpoint: String,
    pub method: String,
    pub response_time_ms: u32,
    pub status_code: u16,
    pub request_id: String,
}

// ==================== Reports ====================

/// Report period type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Daily => "daily",
            ReportType::Weekly => "weekly",
            ReportType::Monthly => "monthly",
            ReportType::Custom => "custom",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Daily => "Diário",
            ReportType::Weekly => "Semanal",
            ReportType::Monthly => "Mensal",
            ReportType::Custom => "Personalizado",
        }
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(ReportType::Daily),
            "weekly" => Ok(ReportType::Weekly),
            "monthly" => Ok(ReportType::Monthly),
            "custom" => Ok(ReportType::Custom),
            _ => Err(format!("Invalid report type: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Report generation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Generating,
    Completed,
    Failed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Generating => "generating",
            ReportStatus::Completed => "completed",
            ReportStatus::Failed => "failed",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Generating => "Gerando",
            ReportStatus::Completed => "Concluído",
            ReportStatus::Failed => "Falhou",
        }
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generating" => Ok(ReportStatus::Generating),
            "completed" => Ok(ReportStatus::Completed),
            "failed" => Ok(ReportStatus::Failed),
            _ => Err(format!("Invalid report status: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generated report entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub report_type: ReportType,
    pub generated_by: String,
    pub file_url: Option<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Whether a download link can be offered
    pub fn is_downloadable(&self) -> bool {
        self.status == ReportStatus::Completed && self.file_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn charge_expiring_in(hours: i64) -> DynamicCharge {
        let now = Utc::now();
        DynamicCharge {
            id: "dyn_test".to_string(),
            description: "Cobrança de teste".to_string(),
            amount: "100.00".parse().unwrap(),
            pix_key: "empresa@pix.com".to_string(),
            pix_code: "00020126".to_string(),
            status: DynamicChargeStatus::Pending,
            created_at: now - Duration::days(1),
            expires_at: now + Duration::hours(hours),
            paid_at: None,
            emitter_name: "João Silva".to_string(),
            emitter_document: "123.456.789-00".to_string(),
        }
    }

    #[test]
    fn test_role_hierarchy() {
        assert!(UserRole::Admin.has_permission(UserRole::Viewer));
        assert!(UserRole::Admin.has_permission(UserRole::Admin));
        assert!(UserRole::Operator.has_permission(UserRole::Viewer));
        assert!(!UserRole::Operator.has_permission(UserRole::Admin));
        assert!(!UserRole::Viewer.has_permission(UserRole::Operator));
    }

    #[test]
    fn test_role_actions() {
        assert_eq!(UserRole::Viewer.available_actions(), vec!["view"]);
        assert_eq!(
            UserRole::Operator.available_actions(),
            vec!["view", "create", "edit"]
        );
        assert_eq!(
            UserRole::Admin.available_actions(),
            vec!["view", "create", "edit", "delete", "manage_users"]
        );
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let now = Utc::now();
        let mut user = User {
            id: "usr_test".to_string(),
            email: "tesouraria@pix.gov.br".to_string(),
            full_name: Some("Tesouraria".to_string()),
            role: UserRole::Operator,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(user.display_name(), "Tesouraria");
        user.full_name = None;
        assert_eq!(user.display_name(), "tesouraria@pix.gov.br");
    }

    #[test]
    fn test_status_enum_round_trips() {
        for token in ["pending", "completed", "failed", "cancelled"] {
            let status: TransactionStatus = token.parse().unwrap();
            assert_eq!(status.to_string(), token);
        }
        assert!("settled".parse::<TransactionStatus>().is_err());

        for token in ["cpf", "cnpj", "email", "phone", "random"] {
            let key_type: PixKeyType = token.parse().unwrap();
            assert_eq!(key_type.to_string(), token);
        }
    }

    #[test]
    fn test_charge_type_labels() {
        assert_eq!(ChargeType::Static.label(), "Chave PIX");
        assert_eq!(ChargeType::Dynamic.label(), "PIX Copia e Cola");
    }

    #[test]
    fn test_time_remaining_days() {
        let charge = charge_expiring_in(6 * 24 + 4);
        let rendered = charge.time_remaining(Utc::now());
        assert!(rendered.starts_with("6d"), "got {}", rendered);
    }

    #[test]
    fn test_time_remaining_hours() {
        let charge = charge_expiring_in(22);
        let rendered = charge.time_remaining(Utc::now());
        assert!(rendered.starts_with("21h") || rendered.starts_with("22h"), "got {}", rendered);
    }

    #[test]
    fn test_time_remaining_expired() {
        let now = Utc::now();
        let mut charge = charge_expiring_in(1);
        charge.expires_at = now - Duration::hours(3);
        assert_eq!(charge.time_remaining(now), "Expirado");
        assert!(charge.is_expired(now));
    }

    #[test]
    fn test_report_downloadable() {
        let now = Utc::now();
        let mut report = Report {
            id: "rep_test".to_string(),
            title: "Relatório Diário".to_string(),
            description: None,
            report_type: ReportType::Daily,
            generated_by: "usr_001".to_string(),
            file_url: Some("/reports/daily.pdf".to_string()),
            status: ReportStatus::Completed,
            created_at: now,
            updated_at: now,
        };
        assert!(report.is_downloadable());
        report.status = ReportStatus::Generating;
        assert!(!report.is_downloadable());
    }

    #[test]
    fn test_transaction_deserializes_from_row() {
        let row = serde_json::json!({
            "id": "txn_test",
            "tx_id": "static_pix_test",
            "end_to_end_id": null,
            "description": "Pagamento via Chave PIX",
            "amount": "150.75",
            "status": "failed",
            "charge_type": "static",
            "pix_key": "loja@pix.com",
            "payer_name": "Carlos Silva",
            "payer_document": "321.654.987-00",
            "payer_bank": "Caixa",
            "timestamp": "2026-07-21T12:00:00Z",
            "failure_reason": "Saldo insuficiente",
        });
        let tx: Transaction = serde_json::from_value(row).unwrap();
        assert_eq!(tx.status, TransactionStatus::Failed);
        assert_eq!(tx.amount, "150.75".parse().unwrap());
        assert_eq!(tx.failure_reason.as_deref(), Some("Saldo insuficiente"));
        assert!(!tx.is_settled());
    }
}

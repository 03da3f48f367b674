//! Statistics over loaded snapshots
//!
//! Pure counting and summing used by the stat cards at the top of each page.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    ApiLog, BankApi, BankStatus, ChargeType, DynamicCharge, DynamicChargeStatus, LogLevel, PixKey,
    Report, ReportStatus, StaticCharge, StaticChargeStatus, Transaction, TransactionStatus,
};

/// Transaction page stat cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub failed: usize,
    pub cancelled: usize,
    pub static_count: usize,
    pub dynamic_count: usize,
    /// Sum of completed amounts
    pub completed_volume: Decimal,
}

pub fn transaction_stats(transactions: &[Transaction]) -> TransactionStats {
    TransactionStats {
        total: transactions.len(),
        completed: count_status(transactions, TransactionStatus::Completed),
        pending: count_status(transactions, TransactionStatus::Pending),
        failed: count_status(transactions, TransactionStatus::Failed),
        cancelled: count_status(transactions, TransactionStatus::Cancelled),
        static_count: transactions
            .iter()
            .filter(|t| t.charge_type == ChargeType::Static)
            .count(),
        dynamic_count: transactions
            .iter()
            .filter(|t| t.charge_type == ChargeType::Dynamic)
            .count(),
        completed_volume: transactions
            .iter()
            .filter(|t| t.is_settled())
            .map(|t| t.amount)
            .sum(),
    }
}

fn count_status(transactions: &[Transaction], status: TransactionStatus) -> usize {
    transactions.iter().filter(|t| t.status == status).count()
}

/// Dashboard overview cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_keys: usize,
    pub total_transactions: usize,
    pub completed_transactions: usize,
    pub pending_transactions: usize,
    /// Sum of completed amounts
    pub total_amount: Decimal,
}

pub fn dashboard_stats(keys: &[PixKey], transactions: &[Transaction]) -> DashboardStats {
    DashboardStats {
        total_keys: keys.len(),
        total_transactions: transactions.len(),
        completed_transactions: count_status(transactions, TransactionStatus::Completed),
        pending_transactions: count_status(transactions, TransactionStatus::Pending),
        total_amount: transactions
            .iter()
            .filter(|t| t.is_settled())
            .map(|t| t.amount)
            .sum(),
    }
}

/// Static PIX page stat cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticChargeStats {
    pub total_ok: usize,
    pub total_error: usize,
    /// Sum over all records, including failed ones
    pub total_received: Decimal,
}

pub fn static_charge_stats(charges: &[StaticCharge]) -> StaticChargeStats {
    StaticChargeStats {
        total_ok: charges
            .iter()
            .filter(|c| c.status == StaticChargeStatus::Ok)
            .count(),
        total_error: charges
            .iter()
            .filter(|c| c.status == StaticChargeStatus::Error)
            .count(),
        total_received: charges.iter().map(|c| c.amount).sum(),
    }
}

/// Dynamic PIX page stat cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicChargeStats {
    pub total_pending: usize,
    pub total_paid: usize,
    pub total_expired: usize,
    /// Sum of paid amounts only
    pub total_received: Decimal,
}

pub fn dynamic_charge_stats(charges: &[DynamicCharge]) -> DynamicChargeStats {
    DynamicChargeStats {
        total_pending: charges
            .iter()
            .filter(|c| c.status == DynamicChargeStatus::Pending)
            .count(),
        total_paid: charges
            .iter()
            .filter(|c| c.status == DynamicChargeStatus::Paid)
            .count(),
        total_expired: charges
            .iter()
            .filter(|c| c.status == DynamicChargeStatus::Expired)
            .count(),
        total_received: charges
            .iter()
            .filter(|c| c.status == DynamicChargeStatus::Paid)
            .map(|c| c.amount)
            .sum(),
    }
}

/// Bank status page overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankOverview {
    pub online: usize,
    pub offline: usize,
    /// Mean response time over online banks; zero when none are online
    pub average_response_time_ms: u32,
    pub total_requests: u64,
    pub error_logs: usize,
}

pub fn bank_overview(banks: &[BankApi], logs: &[ApiLog]) -> BankOverview {
    let online: Vec<&BankApi> = banks
        .iter()
        .filter(|b| b.status == BankStatus::Online)
        .collect();
    let average = if online.is_empty() {
        0
    } else {
        let sum: u64 = online.iter().map(|b| u64::from(b.response_time_ms)).sum();
        (sum / online.len() as u64) as u32
    };

    BankOverview {
        online: online.len(),
        offline: banks.len() - online.len(),
        average_response_time_ms: average,
        total_requests: banks.iter().map(|b| b.total_requests).sum(),
        error_logs: logs.iter().filter(|l| l.level == LogLevel::Error).count(),
    }
}

/// Report page counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStats {
    pub total: usize,
    pub generating: usize,
    pub completed: usize,
    pub failed: usize,
}

pub fn report_stats(reports: &[Report]) -> ReportStats {
    ReportStats {
        total: reports.len(),
        generating: reports
            .iter()
            .filter(|r| r.status == ReportStatus::Generating)
            .count(),
        completed: reports
            .iter()
            .filter(|r| r.status == ReportStatus::Completed)
            .count(),
        failed: reports
            .iter()
            .filter(|r| r.status == ReportStatus::Failed)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tx(id: &str, status: TransactionStatus, charge_type: ChargeType, amount: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            tx_id: format!("pix_{}", id),
            end_to_end_id: None,
            description: "Pagamento".to_string(),
            amount: amount.parse().unwrap(),
            status,
            charge_type,
            pix_key: "empresa@pix.com".to_string(),
            payer_name: "João Silva".to_string(),
            payer_document: "123.456.789-00".to_string(),
            payer_bank: "Banco do Brasil".to_string(),
            timestamp: Utc::now(),
            failure_reason: None,
        }
    }

    #[test]
    fn test_transaction_stats_counts_and_volume() {
        let transactions = vec![
            tx("a", TransactionStatus::Completed, ChargeType::Static, "500.00"),
            tx("b", TransactionStatus::Completed, ChargeType::Dynamic, "1500.00"),
            tx("c", TransactionStatus::Pending, ChargeType::Dynamic, "800.00"),
            tx("d", TransactionStatus::Failed, ChargeType::Static, "150.00"),
        ];
        let stats = transaction_stats(&transactions);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.cancelled, 0);
        assert_eq!(stats.static_count, 2);
        assert_eq!(stats.dynamic_count, 2);
        // Pending and failed amounts stay out of the settled volume
        assert_eq!(stats.completed_volume, "2000.00".parse().unwrap());
    }

    #[test]
    fn test_stats_over_empty_snapshot() {
        let stats = transaction_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed_volume, Decimal::ZERO);

        let overview = bank_overview(&[], &[]);
        assert_eq!(overview.online, 0);
        assert_eq!(overview.average_response_time_ms, 0);
    }

    #[test]
    fn test_bank_overview_averages_online_only() {
        let now = Utc::now();
        let bank = |id: &str, status: BankStatus, rt: u32, requests: u64| BankApi {
            id: id.to_string(),
            name: id.to_string(),
            status,
            last_check: now,
            response_time_ms: rt,
            uptime_percent: 99.0,
            total_requests: requests,
            success_rate: 99.0,
            error_rate: 1.0,
            endpoint: "https://api.example.com/pix/v1".to_string(),
            version: "v1.0.0".to_string(),
            last_error: None,
        };
        let banks = vec![
            bank("bb", BankStatus::Online, 100, 1000),
            bank("itau", BankStatus::Online, 300, 2000),
            bank("bradesco", BankStatus::Offline, 0, 500),
        ];
        let overview = bank_overview(&banks, &[]);
        assert_eq!(overview.online, 2);
        assert_eq!(overview.offline, 1);
        // Offline zero response time does not drag the mean down
        assert_eq!(overview.average_response_time_ms, 200);
        assert_eq!(overview.total_requests, 3500);
    }
}

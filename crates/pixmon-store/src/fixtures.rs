//! Built-in sample dataset
//!
//! Serves as demo data when no snapshot directory is present, and as a
//! realistic fixture for tests. Timestamps are generated relative to the
//! current instant so the relative date filters have something to bite on.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::Collection;

fn minutes_ago(now: DateTime<Utc>, minutes: i64) -> String {
    (now - Duration::minutes(minutes)).to_rfc3339()
}

fn hours_ago(now: DateTime<Utc>, hours: i64) -> String {
    (now - Duration::hours(hours)).to_rfc3339()
}

fn days_ago(now: DateTime<Utc>, days: i64) -> String {
    (now - Duration::days(days)).to_rfc3339()
}

fn days_ahead(now: DateTime<Utc>, days: i64) -> String {
    (now + Duration::days(days)).to_rfc3339()
}

/// Sample rows for a collection
pub fn sample_rows(collection: Collection) -> Vec<Value> {
    let now = Utc::now();
    match collection {
        Collection::Users => users(now),
        Collection::PixKeys => pix_keys(now),
        Collection::Transactions => transactions(now),
        Collection::StaticCharges => static_charges(now),
        Collection::DynamicCharges => dynamic_charges(now),
        Collection::BankApis => bank_apis(now),
        Collection::ApiLogs => api_logs(now),
        Collection::Reports => reports(now),
    }
}

fn users(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "usr_001",
            "email": "prefeitura@pix.gov.br",
            "full_name": "Administrador Municipal",
            "role": "admin",
            "created_at": days_ago(now, 120),
            "updated_at": days_ago(now, 30),
        }),
        json!({
            "id": "usr_002",
            "email": "tesouraria@pix.gov.br",
            "full_name": "Tesouraria",
            "role": "operator",
            "created_at": days_ago(now, 90),
            "updated_at": days_ago(now, 7),
        }),
        json!({
            "id": "usr_003",
            "email": "auditoria@pix.gov.br",
            "full_name": null,
            "role": "viewer",
            "created_at": days_ago(now, 45),
            "updated_at": days_ago(now, 45),
        }),
    ]
}

fn pix_keys(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "key_001",
            "key_value": "empresa@pix.com",
            "key_type": "email",
            "owner_name": "Empresa Municipal de Serviços",
            "owner_document": "12.345.678/0001-00",
            "status": "active",
            "created_at": days_ago(now, 180),
            "updated_at": days_ago(now, 14),
        }),
        json!({
            "id": "key_002",
            "key_value": "+5511999999999",
            "key_type": "phone",
            "owner_name": "Secretaria de Finanças",
            "owner_document": "98.765.432/0001-00",
            "status": "active",
            "created_at": days_ago(now, 150),
            "updated_at": days_ago(now, 5),
        }),
        json!({
            "id": "key_003",
            "key_value": "12345678901",
            "key_type": "cpf",
            "owner_name": "Pedro Costa",
            "owner_document": "123.456.789-01",
            "status": "inactive",
            "created_at": days_ago(now, 400),
            "updated_at": days_ago(now, 60),
        }),
        json!({
            "id": "key_004",
            "key_value": "loja@pix.com",
            "key_type": "email",
            "owner_name": "Loja Municipal",
            "owner_document": "11.222.333/0001-44",
            "status": "suspended",
            "created_at": days_ago(now, 200),
            "updated_at": days_ago(now, 2),
        }),
        json!({
            "id": "key_005",
            "key_value": "8d2f7c1a-4b3e-4f6a-9c8d-2e1f0a9b8c7d",
            "key_type": "random",
            "owner_name": "Fundo Municipal de Cultura",
            "owner_document": "55.666.777/0001-88",
            "status": "active",
            "created_at": days_ago(now, 30),
            "updated_at": days_ago(now, 30),
        }),
    ]
}

fn transactions(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "txn_001",
            "tx_id": "static_pix_001",
            "end_to_end_id": "E12345678202407211200000001",
            "description": "Pagamento via Chave PIX - Consultoria",
            "amount": "500.00",
            "status": "completed",
            "charge_type": "static",
            "pix_key": "empresa@pix.com",
            "payer_name": "João Silva",
            "payer_document": "123.456.789-00",
            "payer_bank": "Banco do Brasil",
            "timestamp": minutes_ago(now, 2),
            "failure_reason": null,
        }),
        json!({
            "id": "txn_002",
            "tx_id": "dynamic_pix_002",
            "end_to_end_id": "E12345678202407211145000002",
            "description": "Cobrança PIX Dinâmica - Fatura #001",
            "amount": "1500.00",
            "status": "completed",
            "charge_type": "dynamic",
            "pix_key": "+5511999999999",
            "payer_name": "Maria Santos",
            "payer_document": "987.654.321-00",
            "payer_bank": "Itaú",
            "timestamp": minutes_ago(now, 15),
            "failure_reason": null,
        }),
        json!({
            "id": "txn_003",
            "tx_id": "static_pix_003",
            "end_to_end_id": "E12345678202407211130000003",
            "description": "Doação via Chave PIX - Projeto Social",
            "amount": "50.00",
            "status": "completed",
            "charge_type": "static",
            "pix_key": "12345678901",
            "payer_name": "Pedro Costa",
            "payer_document": "456.789.123-00",
            "payer_bank": "Santander",
            "timestamp": minutes_ago(now, 30),
            "failure_reason": null,
        }),
        json!({
            "id": "txn_004",
            "tx_id": "dynamic_pix_004",
            "end_to_end_id": null,
            "description": "Cobrança PIX Dinâmica - Serviços Design",
            "amount": "800.00",
            "status": "pending",
            "charge_type": "dynamic",
            "pix_key": "designer@pix.com",
            "payer_name": "Ana Oliveira",
            "payer_document": "789.123.456-00",
            "payer_bank": "Bradesco",
            "timestamp": minutes_ago(now, 45),
            "failure_reason": null,
        }),
        json!({
            "id": "txn_005",
            "tx_id": "static_pix_005",
            "end_to_end_id": null,
            "description": "Pagamento via Chave PIX - Produtos",
            "amount": "150.00",
            "status": "failed",
            "charge_type": "static",
            "pix_key": "loja@pix.com",
            "payer_name": "Carlos Silva",
            "payer_document": "321.654.987-00",
            "payer_bank": "Caixa",
            "timestamp": hours_ago(now, 1),
            "failure_reason": "Saldo insuficiente",
        }),
        json!({
            "id": "txn_006",
            "tx_id": "dynamic_pix_006",
            "end_to_end_id": "E12345678202407211000000006",
            "description": "Cobrança PIX Dinâmica - Consultoria Jurídica",
            "amount": "2500.00",
            "status": "completed",
            "charge_type": "dynamic",
            "pix_key": "advogado@pix.com",
            "payer_name": "Fernanda Lima",
            "payer_document": "654.321.987-00",
            "payer_bank": "Nubank",
            "timestamp": hours_ago(now, 2),
            "failure_reason": null,
        }),
        json!({
            "id": "txn_007",
            "tx_id": "static_pix_007",
            "end_to_end_id": "E12345678202407210900000007",
            "description": "Pagamento via Chave PIX - Freelance",
            "amount": "750.00",
            "status": "completed",
            "charge_type": "static",
            "pix_key": "freelancer@pix.com",
            "payer_name": "Roberto Santos",
            "payer_document": "147.258.369-00",
            "payer_bank": "Inter",
            "timestamp": hours_ago(now, 3),
            "failure_reason": null,
        }),
    ]
}

fn static_charges(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "stc_001",
            "description": "Pagamento de Serviços - Consultoria",
            "pix_key": "empresa@pix.com",
            "status": "ok",
            "amount": "6000.00",
            "paid_at": days_ago(now, 2),
            "emitter_name": "João Silva",
            "emitter_document": "123.456.789-00",
            "transaction_count": 12,
        }),
        json!({
            "id": "stc_002",
            "description": "Doações - Projeto Social",
            "pix_key": "+5511999999999",
            "status": "ok",
            "amount": "2250.00",
            "paid_at": days_ago(now, 5),
            "emitter_name": "Maria Santos",
            "emitter_document": "987.654.321-00",
            "transaction_count": null,
        }),
        json!({
            "id": "stc_003",
            "description": "Venda de Produtos - Loja Online",
            "pix_key": "12345678901",
            "status": "error",
            "amount": "1200.00",
            "paid_at": days_ago(now, 10),
            "emitter_name": "Pedro Costa",
            "emitter_document": "456.789.123-00",
            "transaction_count": null,
        }),
    ]
}

fn dynamic_charges(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "dyn_001",
            "description": "Cobrança - Consultoria Técnica",
            "amount": "1500.00",
            "pix_key": "empresa@pix.com",
            "pix_code": "00020126580014br.gov.bcb.pix0136empresa@pix.com520400005303986540515005802BR",
            "status": "pending",
            "created_at": days_ago(now, 1),
            "expires_at": days_ahead(now, 6),
            "paid_at": null,
            "emitter_name": "João Silva",
            "emitter_document": "123.456.789-00",
        }),
        json!({
            "id": "dyn_002",
            "description": "Fatura - Serviços de Design",
            "amount": "800.00",
            "pix_key": "+5511999999999",
            "pix_code": "00020126580014br.gov.bcb.pix01365511999999999520400005303986540480005802BR",
            "status": "paid",
            "created_at": days_ago(now, 3),
            "expires_at": days_ahead(now, 4),
            "paid_at": days_ago(now, 2),
            "emitter_name": "Maria Santos",
            "emitter_document": "987.654.321-00",
        }),
        json!({
            "id": "dyn_003",
            "description": "Cobrança - Desenvolvimento Web",
            "amount": "2500.00",
            "pix_key": "12345678901",
            "pix_code": "00020126580014br.gov.bcb.pix013612345678901520400005303986540525005802BR",
            "status": "expired",
            "created_at": days_ago(now, 10),
            "expires_at": days_ago(now, 3),
            "paid_at": null,
            "emitter_name": "Pedro Costa",
            "emitter_document": "456.789.123-00",
        }),
        json!({
            "id": "dyn_004",
            "description": "Pagamento - Consultoria Jurídica",
            "amount": "1200.00",
            "pix_key": "advogado@pix.com",
            "pix_code": "00020126580014br.gov.bcb.pix0136advogado@pix.com520400005303986540512005802BR",
            "status": "pending",
            "created_at": hours_ago(now, 2),
            "expires_at": (now + Duration::hours(22)).to_rfc3339(),
            "paid_at": null,
            "emitter_name": "Ana Oliveira",
            "emitter_document": "789.123.456-00",
        }),
    ]
}

fn bank_apis(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "bb",
            "name": "Banco do Brasil",
            "status": "online",
            "last_check": minutes_ago(now, 2),
            "response_time_ms": 145,
            "uptime_percent": 99.8,
            "total_requests": 15420,
            "success_rate": 99.2,
            "error_rate": 0.8,
            "endpoint": "https://api.bb.com.br/pix/v1",
            "version": "v2.1.0",
            "last_error": null,
        }),
        json!({
            "id": "bacen",
            "name": "Banco Central",
            "status": "online",
            "last_check": minutes_ago(now, 1),
            "response_time_ms": 89,
            "uptime_percent": 99.9,
            "total_requests": 28750,
            "success_rate": 99.7,
            "error_rate": 0.3,
            "endpoint": "https://api.bacen.gov.br/pix/v1",
            "version": "v3.0.1",
            "last_error": null,
        }),
        json!({
            "id": "bradesco",
            "name": "Bradesco",
            "status": "offline",
            "last_check": minutes_ago(now, 15),
            "response_time_ms": 0,
            "uptime_percent": 97.5,
            "total_requests": 8930,
            "success_rate": 96.8,
            "error_rate": 3.2,
            "endpoint": "https://api.bradesco.com.br/pix/v1",
            "version": "v1.8.2",
            "last_error": "Connection timeout after 30s",
        }),
        json!({
            "id": "santander",
            "name": "Santander",
            "status": "online",
            "last_check": minutes_ago(now, 5),
            "response_time_ms": 2340,
            "uptime_percent": 98.1,
            "total_requests": 12650,
            "success_rate": 97.9,
            "error_rate": 2.1,
            "endpoint": "https://api.santander.com.br/pix/v1",
            "version": "v2.0.3",
            "last_error": "High response time detected",
        }),
        json!({
            "id": "itau",
            "name": "Itaú",
            "status": "online",
            "last_check": minutes_ago(now, 3),
            "response_time_ms": 234,
            "uptime_percent": 99.4,
            "total_requests": 19870,
            "success_rate": 98.9,
            "error_rate": 1.1,
            "endpoint": "https://api.itau.com.br/pix/v1",
            "version": "v2.2.1",
            "last_error": null,
        }),
    ]
}

fn api_logs(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "log_001",
            "timestamp": minutes_ago(now, 2),
            "bank": "Banco do Brasil",
            "level": "info",
            "message": "PIX transaction processed successfully",
            "endpoint": "/pix/v1/transactions",
            "method": "POST",
            "response_time_ms": 145,
            "status_code": 200,
            "request_id": "req_bb_001",
        }),
        json!({
            "id": "log_002",
            "timestamp": minutes_ago(now, 5),
            "bank": "Santander",
            "level": "warn",
            "message": "High response time detected",
            "endpoint": "/pix/v1/transactions",
            "method": "POST",
            "response_time_ms": 2340,
            "status_code": 200,
            "request_id": "req_san_002",
        }),
        json!({
            "id": "log_003",
            "timestamp": minutes_ago(now, 8),
            "bank": "Bradesco",
            "level": "error",
            "message": "Connection timeout after 30s",
            "endpoint": "/pix/v1/transactions",
            "method": "POST",
            "response_time_ms": 30000,
            "status_code": 408,
            "request_id": "req_brad_003",
        }),
        json!({
            "id": "log_004",
            "timestamp": minutes_ago(now, 10),
            "bank": "Banco Central",
            "level": "info",
            "message": "Health check completed successfully",
            "endpoint": "/pix/v1/health",
            "method": "GET",
            "response_time_ms": 89,
            "status_code": 200,
            "request_id": "req_bc_004",
        }),
        json!({
            "id": "log_005",
            "timestamp": minutes_ago(now, 12),
            "bank": "Itaú",
            "level": "info",
            "message": "PIX key validation successful",
            "endpoint": "/pix/v1/keys/validate",
            "method": "POST",
            "response_time_ms": 234,
            "status_code": 200,
            "request_id": "req_itau_005",
        }),
        json!({
            "id": "log_006",
            "timestamp": minutes_ago(now, 15),
            "bank": "Bradesco",
            "level": "error",
            "message": "API rate limit exceeded",
            "endpoint": "/pix/v1/transactions",
            "method": "POST",
            "response_time_ms": 156,
            "status_code": 429,
            "request_id": "req_brad_006",
        }),
    ]
}

fn reports(now: DateTime<Utc>) -> Vec<Value> {
    vec![
        json!({
            "id": "rep_001",
            "title": "Relatório Diário de Transações",
            "description": "Movimentação PIX do dia anterior",
            "report_type": "daily",
            "generated_by": "usr_002",
            "file_url": "/reports/daily-latest.pdf",
            "status": "completed",
            "created_at": hours_ago(now, 6),
            "updated_at": hours_ago(now, 6),
        }),
        json!({
            "id": "rep_002",
            "title": "Consolidado Semanal",
            "description": "Resumo semanal por chave PIX",
            "report_type": "weekly",
            "generated_by": "usr_002",
            "file_url": null,
            "status": "generating",
            "created_at": minutes_ago(now, 20),
            "updated_at": minutes_ago(now, 20),
        }),
        json!({
            "id": "rep_003",
            "title": "Fechamento Mensal",
            "description": "Fechamento contábil do mês",
            "report_type": "monthly",
            "generated_by": "usr_001",
            "file_url": "/reports/monthly-2026-07.pdf",
            "status": "completed",
            "created_at": days_ago(now, 4),
            "updated_at": days_ago(now, 4),
        }),
        json!({
            "id": "rep_004",
            "title": "Auditoria de Chaves Suspensas",
            "description": null,
            "report_type": "custom",
            "generated_by": "usr_001",
            "file_url": null,
            "status": "failed",
            "created_at": days_ago(now, 9),
            "updated_at": days_ago(now, 9),
        }),
    ]
}

//! Status API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_banks: Bank API health list (JSON)
//! - api_logs: Filtered request logs (JSON)
//! - htmx_status_banks: Bank health cards (HTML fragment)
//! - htmx_status_logs: Log list (HTML fragment)
//! - htmx_status_bank_logs: Logs of one bank for the detail modal

use crate::routes::{paging_from_params, predicates_from_params, sort_from_params};
use crate::AppState;
use axum::extract::Query;
use pixmon_config::DateRange;
use pixmon_core::{BankStatus, ListResponse};
use pixmon_utils::{escape_html, format_number};
use std::collections::HashMap;

/// Get bank APIs (JSON API)
pub async fn api_banks(state: axum::extract::State<AppState>) -> String {
    let monitor = state.monitor.read().await;
    serde_json::to_string(&monitor.all_bank_apis()).unwrap_or_default()
}

/// Get request logs with filtering (JSON API)
pub async fn api_logs(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);
    let (limit, offset) = paging_from_params(&params, state.config.pagination.records_per_page);

    let all = monitor.query_logs(&predicates, sort.as_ref());
    let response = ListResponse::paginate(all, limit, offset);
    serde_json::to_string(&response).unwrap_or_default()
}

/// HTMX: Bank health cards
pub async fn htmx_status_banks(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let banks = monitor.all_bank_apis();
    let compact = params.get("compact").is_some();

    if banks.is_empty() {
        return "<p class='text-center text-gray-500 py-8'>Nenhum banco monitorado</p>".to_string();
    }

    if compact {
        // Dashboard variant: one line per bank
        let mut html = String::from("<div class='space-y-2'>");
        for bank in &banks {
            html.push_str(&format!(
                r#"<div class='flex items-center justify-between border-b last:border-0 pb-2'>
                    <span class='font-medium'>{}</span>
                    <span class='px-2 py-0.5 text-xs rounded border {}'>{}</span>
                </div>"#,
                escape_html(&bank.name),
                super::page::bank_status_badge_class(bank.status),
                bank.status.label(),
            ));
        }
        html.push_str("</div>");
        return html;
    }

    let mut html = String::from("<div class='grid lg:grid-cols-2 gap-6'>");
    for bank in &banks {
        let response_time = if bank.status == BankStatus::Online {
            format!("{} ms", bank.response_time_ms)
        } else {
            "—".to_string()
        };
        let error_note = bank
            .last_error
            .as_deref()
            .map(|error| {
                format!(
                    "<p class='text-xs text-red-600 mt-2'>{}</p>",
                    escape_html(error)
                )
            })
            .unwrap_or_default();

        html.push_str(&format!(
            r#"<div class='bg-white border rounded-lg p-6 hover:shadow-md transition-shadow'>
                <div class='flex items-start justify-between mb-4'>
                    <div>
                        <h3 class='font-semibold text-lg'>{name}</h3>
                        <p class='text-xs text-gray-400 font-mono'>{endpoint} · {version}</p>
                    </div>
                    <span class='px-2 py-1 text-xs rounded border {status_class}'>{status_label}</span>
                </div>
                <div class='grid grid-cols-2 md:grid-cols-4 gap-4 text-sm'>
                    <div><p class='text-gray-500'>Resposta</p><p class='font-semibold'>{response_time}</p></div>
                    <div><p class='text-gray-500'>Uptime</p><p class='font-semibold'>{uptime:.1}%</p></div>
                    <div><p class='text-gray-500'>Requisições</p><p class='font-semibold'>{requests}</p></div>
                    <div><p class='text-gray-500'>Sucesso</p><p class='font-semibold'>{success:.1}%</p></div>
                </div>
                {error_note}
                <button hx-get='/status/banks/{id}/logs' hx-target='#bank-logs-modal' hx-swap='innerHTML'
                    class='mt-4 px-3 py-1.5 text-sm border rounded-lg hover:bg-gray-50'>Ver logs</button>
            </div>"#,
            name = escape_html(&bank.name),
            endpoint = escape_html(&bank.endpoint),
            version = escape_html(&bank.version),
            status_class = super::page::bank_status_badge_class(bank.status),
            status_label = bank.status.label(),
            response_time = response_time,
            uptime = bank.uptime_percent,
            requests = format_number(bank.total_requests),
            success = bank.success_rate,
            error_note = error_note,
            id = bank.id,
        ));
    }
    html.push_str("</div>");
    html
}

/// HTMX: Log list with level/bank/search filters
pub async fn htmx_status_logs(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);

    let logs = monitor.query_logs(&predicates, sort.as_ref());

    if logs.is_empty() {
        return "<p class='text-center text-gray-500 py-8'>Nenhum log encontrado</p>".to_string();
    }

    let mut html = String::from("<div class='space-y-2'>");
    for log in &logs {
        html.push_str(&render_log_line(log));
    }
    html.push_str("</div>");
    html
}

/// HTMX: Logs of a single bank (detail modal body)
pub async fn htmx_status_bank_logs(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> String {
    let monitor = state.monitor.read().await;
    let bank = match monitor.bank_api(&path.0) {
        Some(bank) => bank,
        None => {
            return "<div class='text-center py-8 text-red-500'>Banco não encontrado</div>"
                .to_string()
        }
    };
    let logs = monitor.logs_by_bank(&bank.name);

    let mut html = format!(
        "<div class='bg-white border rounded-lg p-4 mt-4'><h4 class='font-semibold mb-3'>Logs - {}</h4>",
        escape_html(&bank.name)
    );
    if logs.is_empty() {
        html.push_str("<p class='text-gray-500'>Nenhum log registrado</p>");
    } else {
        html.push_str("<div class='space-y-2'>");
        for log in &logs {
            html.push_str(&render_log_line(log));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_log_line(log: &pixmon_core::ApiLog) -> String {
    format!(
        r#"<div class='flex items-center gap-3 border rounded-lg p-3 text-sm'>
            <span class='px-2 py-0.5 text-xs rounded border {level_class}'>{level}</span>
            <span class='text-gray-400 flex-shrink-0'>{timestamp}</span>
            <span class='font-medium flex-shrink-0'>{bank}</span>
            <span class='{message_class} truncate flex-1'>{message}</span>
            <span class='text-gray-400 font-mono text-xs flex-shrink-0'>{method} {endpoint} · {status_code} · {response_time}ms</span>
        </div>"#,
        level_class = super::page::log_level_badge_class(log.level),
        level = log.level.as_str().to_uppercase(),
        timestamp = log.timestamp.format("%d/%m/%Y %H:%M:%S"),
        bank = escape_html(&log.bank),
        message_class = super::page::log_message_class(log.level),
        message = escape_html(&log.message),
        method = escape_html(&log.method),
        endpoint = escape_html(&log.endpoint),
        status_code = log.status_code,
        response_time = log.response_time_ms,
    )
}

//! Dynamic PIX API endpoints - JSON API and HTMX partial responses

use crate::routes::{paging_from_params, predicates_from_params, sort_from_params};
use crate::AppState;
use axum::extract::Query;
use chrono::Utc;
use pixmon_config::DateRange;
use pixmon_core::{DynamicChargeStatus, ListResponse};
use pixmon_utils::{escape_html, format_brl};
use std::collections::HashMap;

/// Get dynamic PIX charges with filtering and pagination (JSON API)
pub async fn api_dynamic_pix(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);
    let (limit, offset) = paging_from_params(&params, state.config.pagination.records_per_page);

    let all = monitor.query_dynamic_charges(&predicates, sort.as_ref());
    let response = ListResponse::paginate(all, limit, offset);
    serde_json::to_string(&response).unwrap_or_default()
}

/// HTMX: Dynamic PIX charge cards - partial page update
pub async fn htmx_dynamic_pix_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);

    let charges = monitor.query_dynamic_charges(&predicates, sort.as_ref());
    let now = Utc::now();

    if charges.is_empty() {
        return "<p class='text-center text-gray-500 py-8'>Nenhuma cobrança encontrada</p>"
            .to_string();
    }

    let mut html = String::from("<div class='grid gap-4'>");
    for charge in &charges {
        let expiry = match charge.status {
            DynamicChargeStatus::Pending => format!(
                "<div><p class='font-medium'>Expira em:</p><p class='text-amber-600 font-medium'>{}</p></div>",
                charge.time_remaining(now)
            ),
            DynamicChargeStatus::Paid => charge
                .paid_at
                .map(|paid_at| {
                    format!(
                        "<div><p class='font-medium'>Pago em:</p><p>{}</p></div>",
                        paid_at.format("%d/%m/%Y")
                    )
                })
                .unwrap_or_default(),
            _ => String::new(),
        };

        html.push_str(&format!(
            r#"<div class='bg-white border rounded-lg p-6 hover:shadow-md transition-shadow'>
                <div class='flex items-center justify-between mb-3'>
                    <h3 class='font-semibold text-lg truncate'>{description}</h3>
                    <span class='px-2 py-1 text-xs rounded border {status_class}'>{status_label}</span>
                </div>
                <div class='grid grid-cols-1 md:grid-cols-5 gap-4 text-sm text-gray-500'>
                    <div><p class='font-medium'>Nome:</p><p class='truncate'>{emitter}</p></div>
                    <div><p class='font-medium'>Chave PIX:</p><p class='truncate'>{pix_key}</p></div>
                    <div><p class='font-medium'>Criada em:</p><p>{created_at}</p></div>
                    <div><p class='font-medium'>Valor:</p><p class='font-semibold text-lg text-green-600'>{amount}</p></div>
                    {expiry}
                </div>
                <div class='mt-3 pt-3 border-t'>
                    <p class='text-xs text-gray-400 font-mono truncate' title='PIX Copia e Cola'>{pix_code}</p>
                </div>
            </div>"#,
            description = escape_html(&charge.description),
            status_class = super::page::dynamic_status_badge_class(charge.status),
            status_label = charge.status.label(),
            emitter = escape_html(&charge.emitter_name),
            pix_key = escape_html(&charge.pix_key),
            created_at = charge.created_at.format("%d/%m/%Y"),
            amount = format_brl(charge.amount),
            expiry = expiry,
            pix_code = escape_html(&charge.pix_code),
        ));
    }
    html.push_str("</div>");
    html
}

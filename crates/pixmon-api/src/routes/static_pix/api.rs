//! Static PIX API endpoints - JSON API and HTMX partial responses

use crate::routes::{paging_from_params, predicates_from_params, sort_from_params};
use crate::AppState;
use axum::extract::Query;
use pixmon_config::DateRange;
use pixmon_core::ListResponse;
use pixmon_utils::{escape_html, format_brl};
use std::collections::HashMap;

/// Get static PIX payments with filtering and pagination (JSON API)
pub async fn api_static_pix(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);
    let (limit, offset) = paging_from_params(&params, state.config.pagination.records_per_page);

    let all = monitor.query_static_charges(&predicates, sort.as_ref());
    let response = ListResponse::paginate(all, limit, offset);
    serde_json::to_string(&response).unwrap_or_default()
}

/// HTMX: Static PIX payment cards - partial page update
pub async fn htmx_static_pix_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);

    let payments = monitor.query_static_charges(&predicates, sort.as_ref());

    if payments.is_empty() {
        return "<p class='text-center text-gray-500 py-8'>Nenhum pagamento encontrado</p>"
            .to_string();
    }

    let mut html = String::from("<div class='grid gap-4'>");
    for payment in &payments {
        let count_note = payment
            .transaction_count
            .map(|count| {
                format!(
                    "<div><p class='font-medium'>Pagamentos:</p><p>{}</p></div>",
                    count
                )
            })
            .unwrap_or_default();
        html.push_str(&format!(
            r#"<div class='bg-white border rounded-lg p-6 hover:shadow-md transition-shadow'>
                <div class='flex items-center justify-between mb-3'>
                    <h3 class='font-semibold text-lg truncate'>{description}</h3>
                    <span class='px-2 py-1 text-xs rounded border {status_class}'>{status_label}</span>
                </div>
                <div class='grid grid-cols-1 md:grid-cols-5 gap-4 text-sm text-gray-500'>
                    <div><p class='font-medium'>Nome:</p><p class='truncate'>{emitter}</p></div>
                    <div><p class='font-medium'>CPF:</p><p class='truncate'>{document}</p></div>
                    <div><p class='font-medium'>Chave PIX:</p><p class='truncate'>{pix_key}</p></div>
                    <div><p class='font-medium'>Pago em:</p><p>{paid_at}</p></div>
                    <div><p class='font-medium'>Valor:</p><p class='font-semibold text-lg text-green-600'>{amount}</p></div>
                    {count_note}
                </div>
            </div>"#,
            description = escape_html(&payment.description),
            status_class = super::page::charge_status_badge_class(payment.status),
            status_label = payment.status.label(),
            emitter = escape_html(&payment.emitter_name),
            document = escape_html(&payment.emitter_document),
            pix_key = escape_html(&payment.pix_key),
            paid_at = payment.paid_at.format("%d/%m/%Y"),
            amount = format_brl(payment.amount),
            count_note = count_note,
        ));
    }
    html.push_str("</div>");
    html
}

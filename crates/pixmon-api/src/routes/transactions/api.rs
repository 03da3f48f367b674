//! Transactions API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_transactions: Filtered transaction list (JSON)
//! - api_transaction_detail: Single transaction (JSON)
//! - htmx_transactions_list: Transaction table (HTML fragment)
//! - htmx_transaction_detail: Expanded detail row (HTML fragment)

use crate::routes::{filter_query_string, paging_from_params, predicates_from_params, sort_from_params};
use crate::{ApiError, AppState};
use axum::extract::Query;
use axum::Json;
use pixmon_core::{ListResponse, SortDirection, SortField, Transaction};
use pixmon_utils::{escape_html, format_brl};
use std::collections::HashMap;

/// Get transactions with filtering, sorting, and pagination (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, state.config.filters.default_date_range);
    let sort = sort_from_params(&params);
    let (limit, offset) = paging_from_params(&params, state.config.pagination.records_per_page);

    let all = monitor.query_transactions(&predicates, sort.as_ref());
    let response = ListResponse::paginate(all, limit, offset);
    serde_json::to_string(&response).unwrap_or_default()
}

/// Get single transaction detail (JSON API)
pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let monitor = state.monitor.read().await;
    monitor.transaction(&path.0).map(Json).ok_or_else(|| ApiError::NotFound {
        resource: format!("transação {}", path.0),
    })
}

/// HTMX: Transactions table - partial page update
///
/// Re-rendered on every filter or sort change; the filter bar posts its
/// current values and the column headers carry toggle links.
pub async fn htmx_transactions_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, state.config.filters.default_date_range);
    let sort = sort_from_params(&params);
    let (limit, offset) = paging_from_params(&params, state.config.pagination.records_per_page);

    let transactions = monitor.query_transactions(&predicates, sort.as_ref());
    let total_count = transactions.len();
    let page: Vec<_> = transactions.into_iter().skip(offset).take(limit).collect();

    if page.is_empty() {
        return r#"<div class='p-12 text-center'>
            <h3 class='text-lg font-semibold mb-2'>Nenhuma transação encontrada</h3>
            <p class='text-gray-500'>Tente ajustar os filtros ou aguarde novas transações</p>
        </div>"#
            .to_string();
    }

    let mut html = String::from(
        r#"<div class='overflow-x-auto'><table class='w-full'><thead class='border-b bg-gray-50'><tr>"#,
    );
    html.push_str(&sort_header("Data/Hora", SortField::Timestamp, &params));
    html.push_str("<th class='text-left p-4 font-medium'>Tipo</th>");
    html.push_str("<th class='text-left p-4 font-medium'>Descrição</th>");
    html.push_str(&sort_header("Pagador", SortField::Name, &params));
    html.push_str(&sort_header("Valor", SortField::Amount, &params));
    html.push_str("<th class='text-left p-4 font-medium'>Status</th>");
    html.push_str("</tr></thead><tbody>");

    for tx in &page {
        let failure_note = match (&tx.failure_reason, state.config.features.show_failure_reason) {
            (Some(reason), true) => format!(
                "<div class='text-xs text-red-600 mt-1'>{}</div>",
                escape_html(reason)
            ),
            _ => String::new(),
        };
        let detail_id = format!("tx-detail-{}", tx.id);
        let detail_attrs = if state.config.features.expand_detail {
            format!(
                "class='border-b hover:bg-gray-50 cursor-pointer' hx-get='/transactions/{}/detail' hx-target='#{}' hx-swap='innerHTML'",
                tx.id, detail_id
            )
        } else {
            "class='border-b hover:bg-gray-50'".to_string()
        };

        html.push_str(&format!(
            r#"<tr {detail_attrs}>
                <td class='p-4'><div class='text-sm'><div class='font-medium'>{date}</div><div class='text-gray-500'>{time}</div></div></td>
                <td class='p-4'><span class='px-2 py-1 text-xs rounded border {type_class}'>{type_label}</span></td>
                <td class='p-4'><div class='text-sm'><div class='font-medium truncate max-w-xs'>{description}</div><div class='text-gray-500 truncate'>{pix_key}</div></div></td>
                <td class='p-4'><div class='text-sm'><div class='font-medium'>{payer}</div><div class='text-gray-500'>{bank}</div></div></td>
                <td class='p-4'><span class='font-semibold'>{amount}</span></td>
                <td class='p-4'><span class='px-2 py-1 text-xs rounded border {status_class}'>{status_label}</span>{failure_note}</td>
            </tr>
            <tr><td colspan='6' id='{detail_id}'></td></tr>"#,
            detail_id = detail_id,
            date = tx.timestamp.format("%d/%m/%Y"),
            time = tx.timestamp.format("%H:%M:%S"),
            type_class = super::page::type_badge_class(tx.charge_type),
            type_label = tx.charge_type.label(),
            description = escape_html(&tx.description),
            pix_key = escape_html(&tx.pix_key),
            payer = escape_html(&tx.payer_name),
            bank = escape_html(&tx.payer_bank),
            amount = format_brl(tx.amount),
            status_class = super::page::status_badge_class(tx.status),
            status_label = tx.status.label(),
            failure_note = failure_note,
        ));
    }
    html.push_str("</tbody></table></div>");
    html.push_str(&pagination_footer(total_count, limit, offset, &params));
    html
}

/// HTMX: Transaction detail - expanded view below the row
pub async fn htmx_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> String {
    let monitor = state.monitor.read().await;
    match monitor.transaction(&path.0) {
        Some(tx) => super::page::render_transaction_detail(&tx),
        None => r#"<div class='text-center py-8 text-red-500'>Transação não encontrada</div>"#
            .to_string(),
    }
}

/// Sortable column header with a direction-toggling link
fn sort_header(label: &str, field: SortField, params: &HashMap<String, String>) -> String {
    let field_token = match field {
        SortField::Amount => "amount",
        SortField::Timestamp => "timestamp",
        SortField::Name => "name",
    };
    let current = sort_from_params(params);
    let (marker, next_dir) = match current {
        Some(sort) if sort.field == field => match sort.direction {
            SortDirection::Asc => (" ↑", "desc"),
            SortDirection::Desc => (" ↓", "asc"),
        },
        _ => ("", "desc"),
    };

    let mut kept: HashMap<String, String> = params.clone();
    kept.remove("sort");
    kept.remove("dir");
    kept.remove("offset");
    let mut query = filter_query_string(&kept);
    if !query.is_empty() {
        query.push('&');
    }

    format!(
        r#"<th class='text-left p-4 font-medium'><a class='hover:text-emerald-600' hx-get='/transactions/list?{}sort={}&dir={}' hx-target='#transactions-content' hx-swap='innerHTML' href='#'>{}{}</a></th>"#,
        query, field_token, next_dir, label, marker
    )
}

/// Count line plus previous/next controls that keep the filter state
fn pagination_footer(
    total_count: usize,
    limit: usize,
    offset: usize,
    params: &HashMap<String, String>,
) -> String {
    let current_page = offset / limit + 1;
    let total_pages = (total_count + limit - 1) / limit;
    let query = filter_query_string(params);
    let query_prefix = if query.is_empty() {
        String::new()
    } else {
        format!("{}&", query)
    };

    let prev_attr = if current_page <= 1 { "disabled" } else { "" };
    let next_attr = if current_page >= total_pages { "disabled" } else { "" };

    format!(
        r#"<div class='mt-4 px-4 flex items-center justify-between flex-wrap gap-4'>
            <span class='text-sm text-gray-500'>{} registros, página {} de {}</span>
            <div class='flex items-center gap-2'>
                <button {} hx-get='/transactions/list?{}limit={}&offset={}' hx-target='#transactions-content' class='px-3 py-1 border rounded hover:bg-gray-100 disabled:opacity-50'>Anterior</button>
                <button {} hx-get='/transactions/list?{}limit={}&offset={}' hx-target='#transactions-content' class='px-3 py-1 border rounded hover:bg-gray-100 disabled:opacity-50'>Próxima</button>
            </div>
        </div>"#,
        total_count,
        current_page,
        total_pages.max(1),
        prev_attr,
        query_prefix,
        limit,
        offset.saturating_sub(limit),
        next_attr,
        query_prefix,
        limit,
        offset + limit,
    )
}

//! PIX key API endpoints - JSON API and HTMX partial responses

use crate::routes::{paging_from_params, predicates_from_params, sort_from_params};
use crate::AppState;
use axum::extract::Query;
use pixmon_config::DateRange;
use pixmon_core::ListResponse;
use pixmon_utils::escape_html;
use std::collections::HashMap;

/// Get PIX keys with filtering and pagination (JSON API)
pub async fn api_pix_keys(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    // Key registration dates are not relative-filtered by default
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);
    let (limit, offset) = paging_from_params(&params, state.config.pagination.records_per_page);

    let all = monitor.query_pix_keys(&predicates, sort.as_ref());
    let response = ListResponse::paginate(all, limit, offset);
    serde_json::to_string(&response).unwrap_or_default()
}

/// HTMX: PIX key table - partial page update
pub async fn htmx_pix_keys_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);

    let keys = monitor.query_pix_keys(&predicates, sort.as_ref());

    if keys.is_empty() {
        let message = if predicates.search.is_empty() {
            "Nenhuma chave PIX cadastrada"
        } else {
            "Nenhuma chave encontrada"
        };
        return format!("<p class='text-center text-gray-500 py-8'>{}</p>", message);
    }

    let mut html = String::from(
        r#"<div class='overflow-x-auto'><table class='w-full'><thead><tr class='border-b'>
            <th class='text-left p-4 font-medium'>Chave</th>
            <th class='text-left p-4 font-medium'>Tipo</th>
            <th class='text-left p-4 font-medium'>Proprietário</th>
            <th class='text-left p-4 font-medium'>Documento</th>
            <th class='text-left p-4 font-medium'>Status</th>
            <th class='text-left p-4 font-medium'>Criada em</th>
        </tr></thead><tbody>"#,
    );

    for key in &keys {
        html.push_str(&format!(
            r#"<tr class='border-b hover:bg-gray-50'>
                <td class='p-4 font-mono text-sm'>{}</td>
                <td class='p-4'>{}</td>
                <td class='p-4'>{}</td>
                <td class='p-4 font-mono text-sm'>{}</td>
                <td class='p-4'><span class='px-2 py-1 text-xs rounded border {}'>{}</span></td>
                <td class='p-4 text-sm'>{}</td>
            </tr>"#,
            escape_html(&key.key_value),
            key.key_type.label(),
            escape_html(&key.owner_name),
            escape_html(&key.owner_document),
            super::page::key_status_badge_class(key.status),
            key.status.label(),
            key.created_at.format("%d/%m/%Y"),
        ));
    }
    html.push_str("</tbody></table></div>");
    html
}

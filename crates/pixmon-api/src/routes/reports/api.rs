//! Reports API endpoints - JSON API and HTMX partial responses

use crate::routes::{paging_from_params, predicates_from_params, sort_from_params};
use crate::AppState;
use axum::extract::Query;
use pixmon_config::DateRange;
use pixmon_core::ListResponse;
use pixmon_utils::escape_html;
use std::collections::HashMap;

/// Get reports with filtering and pagination (JSON API)
pub async fn api_reports(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);
    let (limit, offset) = paging_from_params(&params, state.config.pagination.records_per_page);

    let all = monitor.query_reports(&predicates, sort.as_ref());
    let response = ListResponse::paginate(all, limit, offset);
    serde_json::to_string(&response).unwrap_or_default()
}

/// HTMX: Report cards - partial page update
pub async fn htmx_reports_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let monitor = state.monitor.read().await;
    let predicates = predicates_from_params(&params, DateRange::All);
    let sort = sort_from_params(&params);

    let reports = monitor.query_reports(&predicates, sort.as_ref());

    if reports.is_empty() {
        return r#"<div class='bg-white border rounded-lg p-12 text-center'>
            <h3 class='text-lg font-medium mb-2'>Nenhum relatório encontrado</h3>
            <p class='text-gray-500'>Comece criando seu primeiro relatório</p>
        </div>"#
            .to_string();
    }

    let mut html = String::from("<div class='grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6'>");
    for report in &reports {
        let description = report
            .description
            .as_deref()
            .map(escape_html)
            .unwrap_or_default();
        let download = report
            .file_url
            .as_deref()
            .filter(|_| report.is_downloadable())
            .map(|url| {
                format!(
                    r#"<a href='{}' class='block w-full text-center px-4 py-2 border rounded-lg hover:bg-gray-50'>Download</a>"#,
                    escape_html(url)
                )
            })
            .unwrap_or_default();

        html.push_str(&format!(
            r#"<div class='bg-white border rounded-lg p-6'>
                <div class='flex items-start justify-between mb-4'>
                    <div>
                        <h3 class='font-semibold text-lg'>{title}</h3>
                        <p class='text-sm text-gray-500'>{description}</p>
                    </div>
                    <span class='px-2 py-1 text-xs rounded border {status_class}'>{status_label}</span>
                </div>
                <div class='space-y-2 text-sm mb-4'>
                    <div class='flex justify-between'><span class='text-gray-500'>Tipo:</span><span>{type_label}</span></div>
                    <div class='flex justify-between'><span class='text-gray-500'>Criado em:</span><span>{created_at}</span></div>
                </div>
                {download}
            </div>"#,
            title = escape_html(&report.title),
            description = description,
            status_class = super::page::report_status_badge_class(report.status),
            status_label = report.status.label(),
            type_label = report.report_type.label(),
            created_at = report.created_at.format("%d/%m/%Y %H:%M"),
            download = download,
        ));
    }
    html.push_str("</div>");
    html
}

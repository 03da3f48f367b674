//! Dashboard HTMX endpoints - stat cards and recent transactions

use crate::AppState;
use pixmon_utils::{escape_html, format_brl, format_number};

/// HTMX: Overview stat cards
pub async fn htmx_dashboard_stats(state: axum::extract::State<AppState>) -> String {
    let monitor = state.monitor.read().await;
    let stats = monitor.dashboard_stats();

    let cards = [
        ("Chaves PIX", format_number(stats.total_keys), "Total de chaves registradas"),
        ("Transações", format_number(stats.total_transactions), "Total de transações"),
        ("Concluídas", format_number(stats.completed_transactions), "Transações concluídas"),
        ("Pendentes", format_number(stats.pending_transactions), "Transações pendentes"),
    ];

    let mut html = String::from("<div class='grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6'>");
    for (title, value, description) in cards {
        html.push_str(&format!(
            r#"<div class='bg-white rounded-lg border p-6'>
                <p class='text-sm font-medium text-gray-500'>{}</p>
                <p class='text-2xl font-bold mt-2'>{}</p>
                <p class='text-xs text-gray-400 mt-1'>{}</p>
            </div>"#,
            title, value, description
        ));
    }
    html.push_str(&format!(
        r#"<div class='bg-white rounded-lg border p-6 md:col-span-2 lg:col-span-4'>
            <p class='text-sm font-medium text-gray-500'>Volume Concluído</p>
            <p class='text-2xl font-bold mt-2 text-green-600'>{}</p>
        </div></div>"#,
        format_brl(stats.total_amount)
    ));
    html
}

/// HTMX: Recent transactions card
pub async fn htmx_dashboard_recent(state: axum::extract::State<AppState>) -> String {
    let monitor = state.monitor.read().await;
    let recent = monitor.recent_transactions(5);

    if recent.is_empty() {
        return "<p class='text-center text-gray-500 py-8'>Nenhuma transação registrada</p>"
            .to_string();
    }

    let mut html = String::from("<div class='space-y-3'>");
    for tx in &recent {
        html.push_str(&format!(
            r#"<div class='flex items-center justify-between border-b last:border-0 pb-3'>
                <div class='min-w-0'>
                    <p class='font-medium truncate'>{}</p>
                    <p class='text-sm text-gray-500'>{} · {}</p>
                </div>
                <div class='text-right flex-shrink-0 ml-4'>
                    <p class='font-semibold'>{}</p>
                    <span class='px-2 py-0.5 text-xs rounded border {}'>{}</span>
                </div>
            </div>"#,
            escape_html(&tx.description),
            escape_html(&tx.payer_name),
            tx.timestamp.format("%d/%m/%Y %H:%M"),
            format_brl(tx.amount),
            crate::routes::transactions::page::status_badge_class(tx.status),
            tx.status.label(),
        ));
    }
    html.push_str("</div>");
    html
}

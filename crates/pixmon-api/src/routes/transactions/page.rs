//! Transactions page rendering - Full page endpoints
//!
//! Helper functions:
//! - render_transaction_detail: Expanded detail view
//! - status_badge_class / type_badge_class: Badge palettes

use crate::AppState;
use pixmon_core::{ChargeType, Transaction, TransactionStatus};
use pixmon_utils::{escape_html, format_brl};

/// Transactions page - stat cards, filter bar, and table container
pub async fn page_transactions(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let monitor = state.monitor.read().await;
    let stats = monitor.transaction_stats();
    let limit = state.config.pagination.records_per_page;

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <div class='flex items-center gap-2'>
                <h2 class='text-2xl font-bold tracking-tight'>Transações</h2>
                <span class='text-sm font-bold px-3 py-1 rounded-full bg-gray-900 text-white'>{total}</span>
            </div>
            <button hx-post='/api/reload' hx-swap='none' onclick='setTimeout(() => window.location.reload(), 300)'
                class='px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200'>Atualizar</button>
        </div>
        <div class='grid grid-cols-2 md:grid-cols-4 gap-3 mb-4'>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Concluídas</p><p class='text-2xl font-bold'>{completed}</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Pendentes</p><p class='text-2xl font-bold'>{pending}</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Erros</p><p class='text-2xl font-bold'>{failed}</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Volume Total</p><p class='text-2xl font-bold text-green-600'>{volume}</p></div>
        </div>
        <form hx-get='/transactions/list' hx-target='#transactions-content' hx-trigger='input delay:400ms from:input, change from:select'
            class='flex flex-col lg:flex-row gap-2 mb-4'>
            <input type='text' name='q' placeholder='Buscar por descrição, pagador, chave PIX ou ID...'
                class='px-4 py-2 border rounded-lg flex-1 max-w-md'>
            <select name='status' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                <option value='all'>Todos os status</option>
                <option value='completed'>Concluídas</option>
                <option value='pending'>Pendentes</option>
                <option value='failed'>Falharam</option>
                <option value='cancelled'>Canceladas</option>
            </select>
            <select name='type' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                <option value='all'>Todos os tipos</option>
                <option value='static'>Chave PIX</option>
                <option value='dynamic'>PIX Copia e Cola</option>
            </select>
            <select name='date' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                <option value='all'>Todas as datas</option>
                <option value='today'>Hoje</option>
                <option value='week'>Última semana</option>
                <option value='month'>Último mês</option>
            </select>
        </form>
        <div id='transactions-content' hx-get='/transactions/list?limit={limit}' hx-trigger='load' class='bg-white rounded-xl shadow-sm border'>
            <p class='text-gray-500 text-center py-8'>Carregando...</p>
        </div>"#,
        total = stats.total,
        completed = stats.completed,
        pending = stats.pending,
        failed = stats.failed,
        volume = format_brl(stats.completed_volume),
        limit = limit,
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Transações",
        "/transactions",
        &inner_content,
    ))
}

/// Badge palette per transaction status
pub fn status_badge_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "bg-green-100 text-green-800 border-green-200",
        TransactionStatus::Pending => "bg-amber-100 text-amber-800 border-amber-200",
        TransactionStatus::Failed => "bg-red-100 text-red-800 border-red-200",
        TransactionStatus::Cancelled => "bg-gray-100 text-gray-800 border-gray-200",
    }
}

/// Badge palette per charge type
pub fn type_badge_class(charge_type: ChargeType) -> &'static str {
    match charge_type {
        ChargeType::Static => "bg-blue-100 text-blue-800 border-blue-200",
        ChargeType::Dynamic => "bg-purple-100 text-purple-800 border-purple-200",
    }
}

/// Render the expanded transaction detail block
pub fn render_transaction_detail(tx: &Transaction) -> String {
    let end_to_end = tx
        .end_to_end_id
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "—".to_string());
    let failure = tx
        .failure_reason
        .as_deref()
        .map(|reason| {
            format!(
                "<div><p class='font-medium text-red-600'>Motivo da falha</p><p>{}</p></div>",
                escape_html(reason)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class='bg-gray-50 border rounded-lg p-4 m-2 grid grid-cols-2 md:grid-cols-4 gap-4 text-sm'>
            <div><p class='font-medium text-gray-500'>ID da transação</p><p class='font-mono'>{tx_id}</p></div>
            <div><p class='font-medium text-gray-500'>End-to-End ID</p><p class='font-mono'>{end_to_end}</p></div>
            <div><p class='font-medium text-gray-500'>Documento do pagador</p><p class='font-mono'>{document}</p></div>
            <div><p class='font-medium text-gray-500'>Valor</p><p class='font-semibold'>{amount}</p></div>
            {failure}
        </div>"#,
        tx_id = escape_html(&tx.tx_id),
        end_to_end = end_to_end,
        document = escape_html(&tx.payer_document),
        amount = format_brl(tx.amount),
        failure = failure,
    )
}

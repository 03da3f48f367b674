//! Status page rendering

use crate::AppState;
use pixmon_core::{BankStatus, LogLevel};
use pixmon_utils::escape_html;

/// Status page - bank health cards and the filtered log list
pub async fn page_status(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let monitor = state.monitor.read().await;
    let overview = monitor.bank_overview();

    // Bank filter options come from the monitored set itself
    let mut bank_options = String::new();
    for bank in monitor.all_bank_apis() {
        bank_options.push_str(&format!(
            "<option value='{name}'>{name}</option>",
            name = escape_html(&bank.name)
        ));
    }

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-6'>
            <div>
                <h2 class='text-3xl font-bold tracking-tight'>Status</h2>
                <p class='text-gray-500'>Disponibilidade das APIs bancárias</p>
            </div>
            <button hx-post='/api/reload' hx-swap='none' onclick='setTimeout(() => window.location.reload(), 300)'
                class='px-4 py-2 border rounded-lg hover:bg-gray-50'>Atualizar</button>
        </div>
        <div class='grid grid-cols-2 md:grid-cols-4 gap-3 mb-6'>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Online</p><p class='text-2xl font-bold text-green-600'>{online}</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Offline</p><p class='text-2xl font-bold text-red-600'>{offline}</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Resposta média</p><p class='text-2xl font-bold'>{avg} ms</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Logs de erro</p><p class='text-2xl font-bold'>{errors}</p></div>
        </div>
        <h3 class='text-2xl font-bold tracking-tight mb-4'>Sistemas</h3>
        <div id='status-banks' hx-get='/status/banks' hx-trigger='load' class='mb-2'>
            <p class='text-gray-500 text-center py-8'>Carregando...</p>
        </div>
        <div id='bank-logs-modal'></div>
        <div class='flex items-center justify-between mt-8 mb-4'>
            <h3 class='text-2xl font-bold tracking-tight'>Logs das APIs</h3>
            <form hx-get='/status/logs' hx-target='#status-logs' hx-trigger='input delay:400ms from:input, change from:select'
                class='flex gap-2'>
                <input type='text' name='q' placeholder='Buscar por mensagem, banco ou endpoint...' class='px-4 py-2 border rounded-lg w-96'>
                <select name='status' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                    <option value='all'>Todos os níveis</option>
                    <option value='info'>Info</option>
                    <option value='warn'>Warn</option>
                    <option value='error'>Error</option>
                </select>
                <select name='type' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                    <option value='all'>Todos os bancos</option>
                    {bank_options}
                </select>
            </form>
        </div>
        <div id='status-logs' hx-get='/status/logs' hx-trigger='load'>
            <p class='text-gray-500 text-center py-8'>Carregando...</p>
        </div>"#,
        online = overview.online,
        offline = overview.offline,
        avg = overview.average_response_time_ms,
        errors = overview.error_logs,
        bank_options = bank_options,
    );

    axum::response::Html(crate::page_response(&headers, "Status", "/status", &inner_content))
}

/// Badge palette per bank status
pub fn bank_status_badge_class(status: BankStatus) -> &'static str {
    match status {
        BankStatus::Online => "bg-green-100 text-green-800 border-green-200",
        BankStatus::Offline => "bg-red-100 text-red-800 border-red-200",
    }
}

/// Badge palette per log level
pub fn log_level_badge_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "bg-blue-100 text-blue-800 border-blue-200",
        LogLevel::Warn => "bg-amber-100 text-amber-800 border-amber-200",
        LogLevel::Error => "bg-red-100 text-red-800 border-red-200",
    }
}

/// Message text color per log level
pub fn log_message_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "text-blue-800",
        LogLevel::Warn => "text-amber-800",
        LogLevel::Error => "text-red-800",
    }
}

//! Dynamic PIX page rendering

use crate::AppState;
use pixmon_core::DynamicChargeStatus;
use pixmon_utils::format_brl;

/// Dynamic PIX page - stat cards, filters, and charge cards
pub async fn page_dynamic_pix(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let monitor = state.monitor.read().await;
    let stats = monitor.dynamic_charge_stats();

    let inner_content = format!(
        r#"<div class='mb-6'>
            <h2 class='text-3xl font-bold tracking-tight'>PIX Dinâmico</h2>
            <p class='text-gray-500'>Cobranças avulsas com expiração</p>
        </div>
        <div class='grid grid-cols-1 md:grid-cols-4 gap-6 mb-6'>
            <div class='bg-white p-6 rounded-lg border'><p class='text-2xl font-bold'>{pending}</p><p class='text-sm text-gray-500'>Pendentes</p></div>
            <div class='bg-white p-6 rounded-lg border'><p class='text-2xl font-bold'>{paid}</p><p class='text-sm text-gray-500'>Pagos</p></div>
            <div class='bg-white p-6 rounded-lg border'><p class='text-2xl font-bold'>{expired}</p><p class='text-sm text-gray-500'>Expirados</p></div>
            <div class='bg-white p-6 rounded-lg border'><p class='text-2xl font-bold text-green-600'>{received}</p><p class='text-sm text-gray-500'>Total Recebido</p></div>
        </div>
        <div class='flex items-center justify-between mb-4'>
            <h3 class='text-2xl font-bold tracking-tight'>Cobranças</h3>
            <form hx-get='/dynamic-pix/list' hx-target='#dynamic-pix-content' hx-trigger='input delay:400ms from:input, change from:select'
                class='flex gap-2'>
                <input type='text' name='q' placeholder='Buscar por descrição, nome ou chave PIX...' class='px-4 py-2 border rounded-lg w-96'>
                <select name='status' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                    <option value='all'>Todos os status</option>
                    <option value='pending'>Pendentes</option>
                    <option value='paid'>Pagos</option>
                    <option value='expired'>Expirados</option>
                    <option value='cancelled'>Cancelados</option>
                </select>
            </form>
        </div>
        <div id='dynamic-pix-content' hx-get='/dynamic-pix/list' hx-trigger='load'>
            <p class='text-gray-500 text-center py-8'>Carregando...</p>
        </div>"#,
        pending = stats.total_pending,
        paid = stats.total_paid,
        expired = stats.total_expired,
        received = format_brl(stats.total_received),
    );

    axum::response::Html(crate::page_response(
        &headers,
        "PIX Dinâmico",
        "/dynamic-pix",
        &inner_content,
    ))
}

/// Badge palette per dynamic charge status
pub fn dynamic_status_badge_class(status: DynamicChargeStatus) -> &'static str {
    match status {
        DynamicChargeStatus::Pending => "bg-amber-100 text-amber-800 border-amber-200",
        DynamicChargeStatus::Paid => "bg-green-100 text-green-800 border-green-200",
        DynamicChargeStatus::Expired => "bg-red-100 text-red-800 border-red-200",
        DynamicChargeStatus::Cancelled => "bg-gray-100 text-gray-800 border-gray-200",
    }
}

//! Static PIX page rendering

use crate::AppState;
use pixmon_core::StaticChargeStatus;
use pixmon_utils::format_brl;

/// Static PIX page - stat cards, search, and payment cards
pub async fn page_static_pix(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let monitor = state.monitor.read().await;
    let stats = monitor.static_charge_stats();

    let inner_content = format!(
        r#"<div class='mb-6'>
            <h2 class='text-3xl font-bold tracking-tight'>PIX Estático</h2>
            <p class='text-gray-500'>Pagamentos recebidos por chave fixa</p>
        </div>
        <div class='grid grid-cols-1 md:grid-cols-3 gap-6 mb-6'>
            <div class='bg-white p-6 rounded-lg border'><p class='text-2xl font-bold'>{ok}</p><p class='text-sm text-gray-500'>Efetuados</p></div>
            <div class='bg-white p-6 rounded-lg border'><p class='text-2xl font-bold'>{error}</p><p class='text-sm text-gray-500'>Erros</p></div>
            <div class='bg-white p-6 rounded-lg border'><p class='text-2xl font-bold text-green-600'>{received}</p><p class='text-sm text-gray-500'>Total Recebido</p></div>
        </div>
        <div class='flex items-center justify-between mb-4'>
            <h3 class='text-2xl font-bold tracking-tight'>Pagamentos</h3>
            <form hx-get='/static-pix/list' hx-target='#static-pix-content' hx-trigger='input delay:400ms from:input, change from:select'
                class='flex gap-2'>
                <input type='text' name='q' placeholder='Buscar por descrição ou chave PIX...' class='px-4 py-2 border rounded-lg w-96'>
                <select name='status' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                    <option value='all'>Todos</option>
                    <option value='ok'>Efetuados</option>
                    <option value='error'>Falharam</option>
                </select>
            </form>
        </div>
        <div id='static-pix-content' hx-get='/static-pix/list' hx-trigger='load'>
            <p class='text-gray-500 text-center py-8'>Carregando...</p>
        </div>"#,
        ok = stats.total_ok,
        error = stats.total_error,
        received = format_brl(stats.total_received),
    );

    axum::response::Html(crate::page_response(
        &headers,
        "PIX Estático",
        "/static-pix",
        &inner_content,
    ))
}

/// Badge palette per static charge outcome
pub fn charge_status_badge_class(status: StaticChargeStatus) -> &'static str {
    match status {
        StaticChargeStatus::Ok => "bg-green-100 text-green-800 border-green-200",
        StaticChargeStatus::Error => "bg-red-100 text-red-800 border-red-200",
    }
}

//! Dashboard page rendering

use crate::AppState;

/// Dashboard page - system overview
pub async fn page_dashboard(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    // Touch the monitor so a failed load surfaces in the logs before render
    let _ = state.monitor.read().await;

    let inner_content = r#"<div class='mb-6'>
            <h2 class='text-3xl font-bold tracking-tight'>Dashboard</h2>
            <p class='text-gray-500'>Visão geral do sistema PIX municipal</p>
        </div>
        <div id='dashboard-stats' hx-get='/dashboard/stats' hx-trigger='load' class='mb-6'>
            <p class='text-gray-500'>Carregando...</p>
        </div>
        <div class='grid grid-cols-1 lg:grid-cols-2 gap-6'>
            <div class='bg-white rounded-lg border p-6'>
                <h3 class='font-semibold mb-4'>Transações Recentes</h3>
                <div id='dashboard-recent' hx-get='/dashboard/recent' hx-trigger='load'>
                    <p class='text-gray-500'>Carregando...</p>
                </div>
            </div>
            <div class='bg-white rounded-lg border p-6'>
                <h3 class='font-semibold mb-4'>Status dos Bancos</h3>
                <div hx-get='/status/banks?compact=1' hx-trigger='load'>
                    <p class='text-gray-500'>Carregando...</p>
                </div>
            </div>
        </div>"#;

    axum::response::Html(crate::page_response(&headers, "Dashboard", "/", inner_content))
}

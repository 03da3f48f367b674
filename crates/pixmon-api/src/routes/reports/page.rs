//! Reports page rendering

use crate::AppState;
use pixmon_core::ReportStatus;

/// Reports page - filter bar and report grid
pub async fn page_reports(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let monitor = state.monitor.read().await;
    let stats = monitor.report_stats();

    let inner_content = format!(
        r#"<div class='mb-6'>
            <h2 class='text-3xl font-bold tracking-tight'>Relatórios</h2>
            <p class='text-gray-500'>Gere e acesse relatórios detalhados do sistema</p>
        </div>
        <div class='grid grid-cols-2 md:grid-cols-4 gap-3 mb-6'>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Total</p><p class='text-2xl font-bold'>{total}</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Gerando</p><p class='text-2xl font-bold'>{generating}</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Concluídos</p><p class='text-2xl font-bold'>{completed}</p></div>
            <div class='bg-white p-4 rounded-lg border'><p class='text-sm text-gray-500'>Falharam</p><p class='text-2xl font-bold'>{failed}</p></div>
        </div>
        <div class='flex items-center justify-between mb-4'>
            <h3 class='text-2xl font-bold tracking-tight'>Relatórios Disponíveis</h3>
            <form hx-get='/reports/list' hx-target='#reports-content' hx-trigger='input delay:400ms from:input, change from:select'
                class='flex gap-2'>
                <input type='text' name='q' placeholder='Buscar por título ou descrição...' class='px-4 py-2 border rounded-lg w-80'>
                <select name='status' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                    <option value='all'>Todos os status</option>
                    <option value='generating'>Gerando</option>
                    <option value='completed'>Concluídos</option>
                    <option value='failed'>Falharam</option>
                </select>
                <select name='type' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                    <option value='all'>Todos os tipos</option>
                    <option value='daily'>Diário</option>
                    <option value='weekly'>Semanal</option>
                    <option value='monthly'>Mensal</option>
                    <option value='custom'>Personalizado</option>
                </select>
            </form>
        </div>
        <div id='reports-content' hx-get='/reports/list' hx-trigger='load'>
            <p class='text-gray-500 text-center py-8'>Carregando...</p>
        </div>"#,
        total = stats.total,
        generating = stats.generating,
        completed = stats.completed,
        failed = stats.failed,
    );

    axum::response::Html(crate::page_response(
        &headers,
        "Relatórios",
        "/reports",
        &inner_content,
    ))
}

/// Badge palette per report status
pub fn report_status_badge_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Generating => "bg-blue-100 text-blue-800 border-blue-200",
        ReportStatus::Completed => "bg-green-100 text-green-800 border-green-200",
        ReportStatus::Failed => "bg-red-100 text-red-800 border-red-200",
    }
}

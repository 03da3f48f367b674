//! PIX keys page rendering

use crate::AppState;
use pixmon_core::PixKeyStatus;

/// PIX keys page - search bar and key table
pub async fn page_pix_keys(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let _ = state.monitor.read().await;

    let inner_content = r#"<div class='mb-6'>
            <h2 class='text-3xl font-bold tracking-tight'>Chaves PIX</h2>
            <p class='text-gray-500'>Gerencie as chaves PIX cadastradas no sistema</p>
        </div>
        <div class='bg-white rounded-lg border'>
            <div class='p-4 border-b flex flex-col sm:flex-row gap-2 sm:items-center sm:justify-between'>
                <h3 class='font-semibold'>Chaves PIX</h3>
                <form hx-get='/pix-keys/list' hx-target='#pix-keys-content' hx-trigger='input delay:400ms from:input, change from:select'
                    class='flex gap-2'>
                    <input type='text' name='q' placeholder='Buscar chaves...' class='px-4 py-2 border rounded-lg w-full sm:w-80'>
                    <select name='status' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                        <option value='all'>Todos os status</option>
                        <option value='active'>Ativas</option>
                        <option value='inactive'>Inativas</option>
                        <option value='suspended'>Suspensas</option>
                    </select>
                    <select name='type' class='px-3 py-2 border rounded-lg bg-white text-sm'>
                        <option value='all'>Todos os tipos</option>
                        <option value='cpf'>CPF</option>
                        <option value='cnpj'>CNPJ</option>
                        <option value='email'>Email</option>
                        <option value='phone'>Telefone</option>
                        <option value='random'>Aleatória</option>
                    </select>
                </form>
            </div>
            <div id='pix-keys-content' hx-get='/pix-keys/list' hx-trigger='load'>
                <p class='text-gray-500 text-center py-8'>Carregando...</p>
            </div>
        </div>"#;

    axum::response::Html(crate::page_response(
        &headers,
        "Chaves PIX",
        "/pix-keys",
        inner_content,
    ))
}

/// Badge palette per key status
pub fn key_status_badge_class(status: PixKeyStatus) -> &'static str {
    match status {
        PixKeyStatus::Active => "bg-green-100 text-green-800 border-green-200",
        PixKeyStatus::Inactive => "bg-gray-100 text-gray-800 border-gray-200",
        PixKeyStatus::Suspended => "bg-red-100 text-red-800 border-red-200",
    }
}

//! HTTP API server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::dashboard: Overview stats and recent activity
//! - routes::transactions: Transaction list, search, filters, sorting
//! - routes::pix_keys: Registered PIX keys
//! - routes::static_pix: Payments against static keys
//! - routes::dynamic_pix: One-time charges with expiration
//! - routes::status: Bank API health and request logs
//! - routes::reports: Generated reports

pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use pixmon_config::Config;
use pixmon_core::Monitor;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub monitor: Arc<RwLock<Monitor>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::dashboard::{htmx_dashboard_recent, htmx_dashboard_stats, page_dashboard};
    use routes::dynamic_pix::{api_dynamic_pix, htmx_dynamic_pix_list, page_dynamic_pix};
    use routes::pix_keys::{api_pix_keys, htmx_pix_keys_list, page_pix_keys};
    use routes::reports::{api_reports, htmx_reports_list, page_reports};
    use routes::static_pix::{api_static_pix, htmx_static_pix_list, page_static_pix};
    use routes::status::{
        api_banks, api_logs, htmx_status_bank_logs, htmx_status_banks, htmx_status_logs,
        page_status,
    };
    use routes::transactions::{
        api_transaction_detail, api_transactions, htmx_transaction_detail, htmx_transactions_list,
        page_transactions,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/summary", get(api_summary))
        .route("/api/settings", get(api_settings))
        .route("/api/reload", post(api_reload))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/pix-keys", get(api_pix_keys))
        .route("/api/static-pix", get(api_static_pix))
        .route("/api/dynamic-pix", get(api_dynamic_pix))
        .route("/api/banks", get(api_banks))
        .route("/api/logs", get(api_logs))
        .route("/api/reports", get(api_reports))
        // Pages
        .route("/", get(page_dashboard))
        .route("/transactions", get(page_transactions))
        .route("/pix-keys", get(page_pix_keys))
        .route("/static-pix", get(page_static_pix))
        .route("/dynamic-pix", get(page_dynamic_pix))
        .route("/status", get(page_status))
        .route("/reports", get(page_reports))
        // HTMX partial routes
        .route("/dashboard/stats", get(htmx_dashboard_stats))
        .route("/dashboard/recent", get(htmx_dashboard_recent))
        .route("/transactions/list", get(htmx_transactions_list))
        .route("/transactions/:id/detail", get(htmx_transaction_detail))
        .route("/pix-keys/list", get(htmx_pix_keys_list))
        .route("/static-pix/list", get(htmx_static_pix_list))
        .route("/dynamic-pix/list", get(htmx_dynamic_pix_list))
        .route("/status/banks", get(htmx_status_banks))
        .route("/status/logs", get(htmx_status_logs))
        .route("/status/banks/:id/logs", get(htmx_status_bank_logs))
        .route("/reports/list", get(htmx_reports_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Get snapshot summary (JSON API)
async fn api_summary(state: axum::extract::State<AppState>) -> String {
    let monitor = state.monitor.read().await;
    serde_json::to_string(&monitor.summary()).unwrap_or_default()
}

/// Get active configuration (JSON API)
async fn api_settings(state: axum::extract::State<AppState>) -> String {
    serde_json::to_string(&state.config).unwrap_or_default()
}

/// Reload snapshot API endpoint
async fn api_reload(state: axum::extract::State<AppState>) -> String {
    let mut monitor = state.monitor.write().await;
    match monitor.reload().await {
        Ok(_) => r#"{"success": true, "message": "Dados recarregados"}"#.to_string(),
        Err(e) => format!(r#"{{"success": false, "message": "{}"}}"#, e),
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - PIX Municipal</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [
        ("/", "Dashboard", "dashboard"),
        ("/pix-keys", "Chaves PIX", "pix-keys"),
        ("/transactions", "Transações", "transactions"),
        ("/static-pix", "PIX Estático", "static-pix"),
        ("/dynamic-pix", "PIX Dinâmico", "dynamic-pix"),
        ("/status", "Status", "status"),
        ("/reports", "Relatórios", "reports"),
    ];

    let mut nav = String::from(
        "<div class='bg-white border-r h-screen flex flex-col sticky top-0'><div class='p-4 border-b'><h1 class='text-xl font-bold text-emerald-600'>PIX Municipal</h1><p class='text-xs text-gray-400'>Gestão de Pagamentos Instantâneos</p></div><ul class='flex-1 py-2 space-y-1 px-2'>",
    );

    for (path, label, id) in &links {
        let is_active = if *path == "/" {
            current_path == "/"
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active {
            "bg-emerald-50 text-emerald-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        let icon = match *id {
            "dashboard" => "📊",
            "pix-keys" => "🔑",
            "transactions" => "↕️",
            "static-pix" => "💰",
            "dynamic-pix" => "⏱️",
            "status" => "📡",
            "reports" => "📄",
            _ => "📄",
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'>{}<span>{}</span></a></li>"#,
            path, active_class, icon, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

/// Wrap page content in the full layout, or return it bare for HTMX swaps
pub fn page_response(
    headers: &axum::http::HeaderMap,
    title: &str,
    current_path: &str,
    inner_content: &str,
) -> String {
    if headers.contains_key("hx-request") {
        return inner_content.to_string();
    }
    let layout = format!(
        r#"<div class='grid grid-cols-[220px_1fr] min-h-screen'>
    {}
    <main class='p-8 overflow-x-auto'>{}</main>
</div>"#,
        nav_sidebar(current_path),
        inner_content
    );
    base_html(title, &layout)
}

/// Start the HTTP server
pub async fn start_server(config: Config, monitor: Arc<RwLock<Monitor>>) {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { monitor, config };

    let router = create_router(state);

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    log::info!("Starting pixmon server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /pix-keys (PIX key management)");
    log::info!("  - /transactions (Transaction list)");
    log::info!("  - /static-pix (Static PIX payments)");
    log::info!("  - /dynamic-pix (Dynamic PIX charges)");
    log::info!("  - /status (Bank API status)");
    log::info!("  - /reports (Generated reports)");
    log::info!("  - /api/* (JSON API endpoints)");

    match axum::serve(listener, router).await {
        Ok(_) => log::info!("Server stopped gracefully"),
        Err(e) => log::error!("Server error: {}", e),
    }
}

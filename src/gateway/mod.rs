//! HTTP gateway: router assembly and server loop

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::account::Database;
use state::AppState;

/// Build the application router around an explicitly constructed store
pub fn build_router(db: Arc<Database>) -> Router {
    let state = AppState::new(db);

    Router::new()
        .route("/", get(handlers::admin::hello_world))
        .route("/api/health", get(handlers::health::health_check))
        .route(
            "/api/users/",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/api/user/{id}/",
            get(handlers::users::get_user).delete(handlers::users::delete_user),
        )
        .route("/api/send/", post(handlers::transfer::send_money))
        .route("/api/reset/", post(handlers::admin::reset_tables))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, db: Arc<Database>) {
    let app = build_router(db);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("Gateway listening on http://{}", addr);
    println!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await.unwrap();
}

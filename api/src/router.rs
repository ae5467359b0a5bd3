use crate::config::Settings;
use crate::handlers::{chat_handler, root_handler, upload_pdf_handler};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn create_router(state: AppState, settings: &Settings) -> Router {
    // Credentials rule out wildcards, so methods and headers are mirrored
    // from the preflight instead. A list only echoes a matching origin.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([settings.allowed_origin.clone()]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/", get(root_handler))
        .route("/upload_pdf/", post(upload_pdf_handler))
        .route("/upload_pdf", post(upload_pdf_handler))
        .route("/chat/", post(chat_handler))
        .route("/chat", post(chat_handler))
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
        .layer(cors)
        .with_state(state)
}

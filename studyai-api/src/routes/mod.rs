//! REST API Routes Module
//!
//! Route handlers organized by entity:
//! - Notes save/retrieve
//! - Flashcard generation and listing
//! - Quiz generation, listing, and answer submission
//! - Health check endpoints (Kubernetes-compatible)
//!
//! The router also serves the pre-built front-end from the public directory
//! and applies a permissive CORS layer (the front-end may be hosted
//! anywhere during development), plus request tracing.

pub mod flashcards;
pub mod health;
pub mod notes;
pub mod quiz;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::db::DbClient;

// Re-export route creation functions for convenience
pub use flashcards::create_router as flashcards_router;
pub use health::create_router as health_router;
pub use notes::create_router as notes_router;
pub use quiz::create_router as quiz_router;

// ============================================================================
// OPENAPI ENDPOINT
// ============================================================================

/// Handler for /openapi.json endpoint. When the swagger-ui feature is on,
/// SwaggerUi registers this path itself and this handler stays out of the
/// router.
#[cfg(all(feature = "openapi", not(feature = "swagger-ui")))]
async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    axum::Json(crate::openapi::ApiDoc::openapi())
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// With no configured origins (the default), all origins are allowed,
/// mirroring the original backend's development posture.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        tracing::info!("CORS: allowing all origins");
        CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        tracing::info!("CORS: allowing origins: {:?}", config.cors_origins);
        let origins: Vec<axum::http::HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(origins)
    }
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the complete API router.
///
/// Layout:
/// - `/api/*` - the REST surface (notes, flashcards, quiz)
/// - `/health/*` - health checks
/// - `/openapi.json` - OpenAPI spec (openapi feature)
/// - `/swagger-ui` - interactive docs (swagger-ui feature)
/// - everything else - static front-end assets, `index.html` at `/`
pub fn create_api_router(db: DbClient, config: &ApiConfig) -> Router {
    let api_routes = Router::new()
        .merge(notes::create_router(db.clone()))
        .merge(flashcards::create_router(db.clone()))
        .merge(quiz::create_router(db.clone()));

    #[allow(unused_mut)]
    let mut router = Router::new()
        .nest("/api", api_routes)
        .nest("/health", health::create_router(db));

    #[cfg(all(feature = "openapi", not(feature = "swagger-ui")))]
    {
        router = router.route("/openapi.json", axum::routing::get(openapi_json));
    }

    #[cfg(feature = "swagger-ui")]
    {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/openapi.json", crate::openapi::ApiDoc::openapi()),
        );
    }

    // Static front-end: GET / serves index.html, other paths fall through
    // to the public directory.
    let static_files =
        ServeDir::new(&config.public_dir).not_found_service(ServeFile::new(config.index_file()));

    router
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

//! StudyAI API Server Entry Point
//!
//! Bootstraps configuration, builds the connection pool, and starts the
//! Axum HTTP server.

use std::net::SocketAddr;

use axum::Router;
use studyai_api::{create_api_router, ApiConfig, ApiError, ApiResult, DbClient, DbConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ApiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_config = DbConfig::from_env();
    if !db_config.has_credentials() {
        // Boot anyway; requests will fail lazily against the store.
        tracing::warn!(
            "Database credentials not found in the environment. \
             Set STUDYAI_DB_PASSWORD (and related STUDYAI_DB_* variables)."
        );
    }
    let db = DbClient::from_config(&db_config)?;

    let api_config = ApiConfig::from_env();
    let app: Router = create_api_router(db, &api_config);

    let addr = resolve_bind_addr()?;
    tracing::info!(%addr, "Starting StudyAI API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}

/// Resolve the listen address from the environment.
///
/// `STUDYAI_BIND` holds a full `host:port` address (default `0.0.0.0:3000`);
/// `PORT` or `STUDYAI_PORT`, when set, override just the port.
fn resolve_bind_addr() -> ApiResult<SocketAddr> {
    let bind = std::env::var("STUDYAI_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let port_override = std::env::var("PORT")
        .ok()
        .or_else(|| std::env::var("STUDYAI_PORT").ok());
    parse_bind_addr(&bind, port_override.as_deref())
}

fn parse_bind_addr(bind: &str, port_override: Option<&str>) -> ApiResult<SocketAddr> {
    let mut addr = bind
        .parse::<SocketAddr>()
        .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", bind, e)))?;

    if let Some(port) = port_override {
        let port = port
            .parse::<u16>()
            .map_err(|_| ApiError::invalid_input(format!("Invalid port value: {}", port)))?;
        addr.set_port(port);
    }

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_accepts_full_host_port() {
        let addr = parse_bind_addr("0.0.0.0:8080", None).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_env_overrides_bind_port() {
        let addr = parse_bind_addr("127.0.0.1:3000", Some("9090")).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(parse_bind_addr("0.0.0.0", None).is_err());
        assert!(parse_bind_addr("127.0.0.1:3000", Some("not-a-port")).is_err());
    }
}

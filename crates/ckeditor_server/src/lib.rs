//! HTTP server wiring for the editor binding (page, statements, shared state).

/// Environment configuration.
pub mod config;
/// HTTP error mapping for handlers.
pub mod error;
/// HTTP handlers for editor endpoints.
pub mod handlers;
/// Host page rendering.
pub mod page;

pub use config::{Config, DEFAULT_PORT};
pub use error::HttpError;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use ckeditor_core::{CkEditorBehavior, EditorSettings};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self'; connect-src 'self'; frame-ancestors 'none'; base-uri 'self'; form-action 'self'";

/// Shared state passed to HTTP handlers.
///
/// Settings are immutable; every request builds its own
/// [`CkEditorBehavior`] from them.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub settings: Arc<EditorSettings>,
}

impl AppState {
    /// Construct shared application state.
    ///
    /// # Arguments
    /// - `config`: Loaded configuration.
    /// - `settings`: Editor settings applied to every behavior.
    ///
    /// # Returns
    /// A new [`AppState`].
    pub fn new(config: Config, settings: EditorSettings) -> Self {
        Self {
            config: Arc::new(config),
            settings: Arc::new(settings),
        }
    }

    /// A fresh, unbound behavior with the shared settings applied.
    ///
    /// # Errors
    /// Returns an error when a setting holds an invalid value.
    pub fn behavior(&self) -> ckeditor_core::Result<CkEditorBehavior> {
        let mut behavior = CkEditorBehavior::new();
        self.settings.apply(&mut behavior)?;
        Ok(behavior)
    }
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
///
/// # Returns
/// Configured `axum::Router`.
pub fn create_app(state: AppState) -> Router {
    let cors_port = state.config.port;
    create_app_with_cors_port(state, cors_port)
}

/// Resolve the listener address from the `BIND` override and security policy.
///
/// # Arguments
/// - `config`: Server configuration holding `port`, `bind` and
///   `allow_public_access`.
///
/// # Returns
/// A validated socket address that enforces loopback when public access is disabled.
pub fn resolve_bind_address(config: &Config) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match config.bind.as_deref() {
        Some(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        None => default_bind,
    };

    if config.allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

fn cors_layer(allow_public_access: bool, cors_port: u16) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([Method::GET]);
    if allow_public_access {
        cors.allow_origin(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins = [
            format!("http://localhost:{}", cors_port),
            format!("http://127.0.0.1:{}", cors_port),
        ]
        .into_iter()
        .filter_map(|origin| HeaderValue::from_str(&origin).ok());
        cors.allow_origin(AllowOrigin::list(origins))
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    }
}

fn create_app_with_cors_port(state: AppState, cors_port: u16) -> Router {
    let cors = cors_layer(state.config.allow_public_access, cors_port);

    Router::new()
        .route("/", get(handlers::editor::index))
        .route("/api/editor/init", get(handlers::editor::init_statement))
        .route("/api/editor/options", get(handlers::editor::options_literal))
        .route(
            "/api/editor/command/:name",
            get(handlers::editor::command_statement),
        )
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(CONTENT_SECURITY_POLICY),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

fn listener_cors_port(listener: &tokio::net::TcpListener, fallback_port: u16) -> u16 {
    listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(fallback_port)
}

/// Run the Axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Returns
/// `Ok(())` when the server exits cleanly.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let cors_port = listener_cors_port(&listener, state.config.port);
    let app = create_app_with_cors_port(state, cors_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

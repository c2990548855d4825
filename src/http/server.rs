//! Application assembly and serving.
//!
//! # Responsibilities
//! - Construct every known service module and mount it at its prefix
//! - Register host-level (unprefixed) routes
//! - Wire up middleware (tracing, timeout, request ID)
//! - Hand the finished router to the engine for serving
//!
//! # Design Decisions
//! - `build_application` touches no global state; every call yields an
//!   independent Application, which keeps tests hermetic
//! - Module routes are mounted by prepending the prefix to each relative
//!   path; the relative root also answers at the bare prefix so both
//!   `/superapp` and `/superapp/` serve the index

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::mount::{MountError, MountTable};
use crate::services::module::DefinitionError;
use crate::services::templates::TemplateRegistry;
use crate::services::{duperapp, superapp};

const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Construction failed; the process must not start serving.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Mount(#[from] MountError),
}

/// State injected into handlers. Read-only after construction.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub templates: Arc<TemplateRegistry>,
}

/// A fully assembled host: immutable route table plus middleware.
///
/// Lifecycle is `build_application` (UNBUILT → BUILT) followed by [`serve`]
/// (BUILT → SERVING, consumes the value). There is no way back.
///
/// [`serve`]: Application::serve
pub struct Application {
    router: Router,
}

impl Application {
    /// Extract the router for in-process dispatch (tests).
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve until the listener fails. Dispatch is entirely the engine's.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");
        axum::serve(listener, self.router).await
    }

    /// Serve until the given future resolves, then drain and stop.
    pub async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        signal: F,
    ) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");
        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}

/// Build the host: construct all service modules, mount each at its prefix,
/// register host routes, apply middleware.
///
/// Static registration by design: adding a service means adding a `mount`
/// line here.
pub fn build_application(config: AppConfig) -> Result<Application, BuildError> {
    let mut table = MountTable::new();
    table.mount("/superapp", superapp::service()?)?;
    table.mount("/duperapp", duperapp::service()?)?;

    let mut registry = TemplateRegistry::default();
    registry.insert_host("home", HOME_TEMPLATE);

    let mut router: Router<AppContext> = Router::new().route("/", get(home));

    for (prefix, module) in table.into_entries() {
        let (name, routes, templates) = module.into_parts();
        if let Some(namespace) = &templates {
            registry.insert_namespace(name, namespace);
        }
        for route in routes {
            let (relative, handler) = route.into_parts();
            if relative == "/" {
                // The module root answers at the bare prefix and at the
                // trailing-slash form.
                router = router.route(&prefix, handler.clone());
                router = router.route(&format!("{prefix}/"), handler);
            } else {
                router = router.route(&format!("{prefix}{relative}"), handler);
            }
        }
    }

    let context = AppContext {
        config: Arc::new(config),
        templates: Arc::new(registry),
    };

    let router = router.with_state(context).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
    );

    Ok(Application { router })
}

/// Resolve and serve a template from the registry.
///
/// Templates are compiled in and registered at build time, so a miss here
/// means a handler asked for a name its module never declared.
pub(crate) fn render_page(context: &AppContext, name: &str) -> Response {
    match context.templates.render(name) {
        Some(body) => Html(body).into_response(),
        None => {
            tracing::error!(template = name, "template not registered");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn home(State(context): State<AppContext>) -> Response {
    render_page(&context, "home")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn dispatch(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_host_and_module_index_routes() {
        let app = build_application(AppConfig::default()).unwrap();
        let router = app.into_router();

        let (status, body) = dispatch(router.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Welcome"));

        for uri in ["/superapp", "/superapp/", "/duperapp", "/duperapp/"] {
            let (status, _) = dispatch(router.clone(), uri).await;
            assert_eq!(status, StatusCode::OK, "index not served at {uri}");
        }
    }

    #[tokio::test]
    async fn test_index_pages_come_from_module_namespaces() {
        let app = build_application(AppConfig::default()).unwrap();
        let router = app.into_router();

        let (_, superapp_body) = dispatch(router.clone(), "/superapp/").await;
        let (_, duperapp_body) = dispatch(router, "/duperapp/").await;
        assert!(superapp_body.contains("SuperApp"));
        assert!(duperapp_body.contains("DuperApp"));
        assert_ne!(superapp_body, duperapp_body);
    }

    #[tokio::test]
    async fn test_echo_round_trip_under_each_prefix() {
        let app = build_application(AppConfig::default()).unwrap();
        let router = app.into_router();

        for prefix in ["/superapp", "/duperapp"] {
            let (status, body) = dispatch(router.clone(), &format!("{prefix}/echo/hello")).await;
            assert_eq!(status, StatusCode::OK);
            let value: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(value["message"], "hello");
        }
    }

    #[tokio::test]
    async fn test_echo_decodes_percent_encoding_once() {
        let app = build_application(AppConfig::default()).unwrap();
        let (status, body) =
            dispatch(app.into_router(), "/superapp/echo/hello%20world%21").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["message"], "hello world!");
    }

    #[tokio::test]
    async fn test_echo_empty_message() {
        let app = build_application(AppConfig::default()).unwrap();
        let (status, body) = dispatch(app.into_router(), "/superapp/echo/").await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["message"], "");
    }

    #[tokio::test]
    async fn test_unknown_paths_are_not_found() {
        let app = build_application(AppConfig::default()).unwrap();
        let router = app.into_router();

        for uri in ["/superapp/doesnotexist", "/neitherapp", "/echo/hello"] {
            let (status, _) = dispatch(router.clone(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "expected 404 for {uri}");
        }
    }

    #[tokio::test]
    async fn test_builds_are_independent() {
        // Two builds share no state; both dispatch on their own tables.
        let first = build_application(AppConfig::default()).unwrap().into_router();
        let second = build_application(AppConfig::default()).unwrap().into_router();

        let (first_status, _) = dispatch(first, "/superapp/echo/a").await;
        let (second_status, _) = dispatch(second, "/superapp/echo/b").await;
        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
    }

    #[test]
    fn test_build_succeeds_with_default_config() {
        assert!(build_application(AppConfig::default()).is_ok());
    }
}

//! Service module definition and load-time validation.
//!
//! # Responsibilities
//! - Hold a module's ordered route declarations
//! - Validate declarations at construction (duplicate/invalid paths)
//! - Hand the routes to the host for mounting
//!
//! # Design Decisions
//! - Validation happens in `ServiceModule::new`, before anything is mounted;
//!   a bad declaration can never surface as a request-time fault
//! - Route paths use the engine's `{param}` capture syntax unchanged, so the
//!   core never re-implements path matching

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{self, MethodRouter};
use thiserror::Error;

use crate::http::server::AppContext;
use crate::services::templates::TemplateNamespace;

/// A module declared structurally invalid routes. Load-time and fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("route path {path:?} in module {module:?} must start with '/'")]
    InvalidPath { module: &'static str, path: String },

    #[error("module {module:?} declares {method} {path:?} more than once")]
    DuplicateRoute {
        module: &'static str,
        method: Method,
        path: String,
    },
}

/// One declared route: method, module-relative path, handler.
pub struct RouteDef {
    method: Method,
    path: String,
    handler: MethodRouter<AppContext>,
}

impl RouteDef {
    /// Declare a GET route at a module-relative path.
    pub fn get<H, T>(path: &str, handler: H) -> Self
    where
        H: Handler<T, AppContext>,
        T: 'static,
    {
        Self {
            method: Method::GET,
            path: path.to_string(),
            handler: routing::get(handler),
        }
    }

    /// Declare a POST route at a module-relative path.
    pub fn post<H, T>(path: &str, handler: H) -> Self
    where
        H: Handler<T, AppContext>,
        T: 'static,
    {
        Self {
            method: Method::POST,
            path: path.to_string(),
            handler: routing::post(handler),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn into_parts(self) -> (String, MethodRouter<AppContext>) {
        (self.path, self.handler)
    }
}

impl std::fmt::Debug for RouteDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDef")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// A self-contained group of routes and templates, mountable under a prefix.
///
/// The module knows nothing about the prefix it will be mounted under and
/// nothing about sibling modules.
pub struct ServiceModule {
    name: &'static str,
    routes: Vec<RouteDef>,
    templates: Option<TemplateNamespace>,
}

impl ServiceModule {
    /// Validate and assemble a module from its declared routes.
    pub fn new(
        name: &'static str,
        routes: Vec<RouteDef>,
        templates: Option<TemplateNamespace>,
    ) -> Result<Self, DefinitionError> {
        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(DefinitionError::InvalidPath {
                    module: name,
                    path: route.path.clone(),
                });
            }
            let pattern = normalized_pattern(&route.path);
            let duplicate = routes[..i].iter().any(|earlier| {
                earlier.method == route.method && normalized_pattern(&earlier.path) == pattern
            });
            if duplicate {
                return Err(DefinitionError::DuplicateRoute {
                    module: name,
                    method: route.method.clone(),
                    path: route.path.clone(),
                });
            }
        }
        Ok(Self {
            name,
            routes,
            templates,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn templates(&self) -> Option<&TemplateNamespace> {
        self.templates.as_ref()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (&'static str, Vec<RouteDef>, Option<TemplateNamespace>) {
        (self.name, self.routes, self.templates)
    }
}

/// Collapse capture names so syntactic conflicts are caught at definition
/// time. Two patterns conflict when their literal segments are equal and
/// their captures sit in the same positions, whatever the captures are
/// called; the engine would reject such a pair with a panic at registration.
fn normalized_pattern(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.len() > 1 && segment.starts_with('{') && segment.ends_with('}') {
                if segment.starts_with("{*") {
                    "{*}"
                } else {
                    "{}"
                }
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl std::fmt::Debug for ServiceModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceModule")
            .field("name", &self.name)
            .field("routes", &self.routes)
            .field("templates", &self.templates)
            .finish()
    }
}

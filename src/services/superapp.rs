//! The SuperApp service.
//!
//! Declares the module's routes and templates; the host decides the mount
//! prefix. The echo route is a contract-verification utility: it returns its
//! path parameter unmodified.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use crate::http::server::{render_page, AppContext};
use crate::services::module::{DefinitionError, RouteDef, ServiceModule};
use crate::services::templates::TemplateNamespace;
use crate::services::EchoResponse;

const INDEX_TEMPLATE: &str = include_str!("../../templates/superapp/index.html");

/// Assemble the SuperApp service module.
pub fn service() -> Result<ServiceModule, DefinitionError> {
    ServiceModule::new("superapp", define_routes(), Some(templates()))
}

/// Routes are relative to the module root; the prefix is the host's choice.
fn define_routes() -> Vec<RouteDef> {
    vec![
        RouteDef::get("/", index),
        RouteDef::get("/echo/{message}", echo),
        // Path parameters cannot match an empty segment, so the empty-string
        // echo gets a literal route.
        RouteDef::get("/echo/", echo_empty),
    ]
}

fn templates() -> TemplateNamespace {
    TemplateNamespace::new().with("index", INDEX_TEMPLATE)
}

async fn index(State(context): State<AppContext>) -> Response {
    render_page(&context, "superapp/index")
}

async fn echo(Path(message): Path<String>) -> Json<EchoResponse> {
    Json(EchoResponse { message })
}

async fn echo_empty() -> Json<EchoResponse> {
    Json(EchoResponse {
        message: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    #[test]
    fn test_module_definition_is_valid() {
        let module = service().unwrap();
        assert_eq!(module.name(), "superapp");
        assert!(module.templates().is_some());

        let paths: Vec<_> = module
            .routes()
            .iter()
            .map(|r| (r.method().clone(), r.path().to_string()))
            .collect();
        assert!(paths.contains(&(Method::GET, "/".to_string())));
        assert!(paths.contains(&(Method::GET, "/echo/{message}".to_string())));
    }
}

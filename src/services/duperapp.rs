//! The DuperApp service.
//!
//! Structurally identical to SuperApp on purpose: two modules with the same
//! route shapes and a same-named `index` template exercise the namespace
//! isolation the mount mechanism promises.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use crate::http::server::{render_page, AppContext};
use crate::services::module::{DefinitionError, RouteDef, ServiceModule};
use crate::services::templates::TemplateNamespace;
use crate::services::EchoResponse;

const INDEX_TEMPLATE: &str = include_str!("../../templates/duperapp/index.html");

/// Assemble the DuperApp service module.
pub fn service() -> Result<ServiceModule, DefinitionError> {
    ServiceModule::new("duperapp", define_routes(), Some(templates()))
}

fn define_routes() -> Vec<RouteDef> {
    vec![
        RouteDef::get("/", index),
        RouteDef::get("/echo/{message}", echo),
        RouteDef::get("/echo/", echo_empty),
    ]
}

fn templates() -> TemplateNamespace {
    TemplateNamespace::new().with("index", INDEX_TEMPLATE)
}

async fn index(State(context): State<AppContext>) -> Response {
    render_page(&context, "duperapp/index")
}

async fn echo(Path(message): Path<String>) -> Json<EchoResponse> {
    Json(EchoResponse { message })
}

async fn echo_empty() -> Json<EchoResponse> {
    Json(EchoResponse {
        message: String::new(),
    })
}

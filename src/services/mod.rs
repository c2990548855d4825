//! Service modules and their building blocks.
//!
//! # Data Flow
//! ```text
//! superapp.rs / duperapp.rs (define_routes + templates)
//!     → module.rs (ServiceModule::new, load-time validation)
//!     → mount table (host binds module to a prefix)
//!     → templates.rs (namespace folded into the host registry)
//! ```
//!
//! # Design Decisions
//! - A module is a value returned by a plain function, never a global; nothing
//!   registers itself as a side effect of being compiled in
//! - Relative paths only: a module never learns its mount prefix
//! - Handlers receive state exclusively through extractors, keeping every
//!   module testable without the host

pub mod duperapp;
pub mod module;
pub mod superapp;
pub mod templates;

pub use module::{DefinitionError, RouteDef, ServiceModule};
pub use templates::{TemplateNamespace, TemplateRegistry};

use serde::{Deserialize, Serialize};

/// Body of the echo contract-verification route, shared by all services.
#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub message: String,
}

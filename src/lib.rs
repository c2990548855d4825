//! Multi-service web application host.
//!
//! One process composes independently authored service modules, each
//! contributing its own routes and templates under a distinct URL prefix.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                APPLICATION HOST               │
//!                  │                                               │
//!   AppConfig ────▶│  build_application                            │
//!                  │      │                                        │
//!                  │      ├─ superapp::service() ─┐                │
//!                  │      ├─ duperapp::service() ─┤                │
//!                  │      │                       ▼                │
//!                  │      │                 MountTable             │
//!                  │      │              (prefix → module)         │
//!                  │      ▼                       │                │
//!                  │  host routes (/)             │                │
//!                  │      │                       │                │
//!                  │      └──────────┬────────────┘                │
//!                  │                 ▼                             │
//!                  │           axum::Router  ──▶  serve            │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! Modules never learn their mount prefix and never register themselves as a
//! side effect of being compiled in; the host composes them explicitly.

pub mod config;
pub mod http;
pub mod mount;
pub mod services;

pub use config::AppConfig;
pub use http::{build_application, Application, BuildError};
pub use mount::{MountError, MountTable};
pub use services::{DefinitionError, RouteDef, ServiceModule, TemplateNamespace};

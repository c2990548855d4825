//! HTTP host subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig
//!     → server.rs (build_application: construct modules, mount, assemble router)
//!     → Application (immutable route table + middleware stack)
//!     → Application::serve (delegates dispatch to the engine)
//! ```
//!
//! # Design Decisions
//! - All mounting happens inside `build_application`, atomically: either
//!   every module mounts or construction fails before a socket is bound
//! - Path matching, 404/405 behavior, timeouts and cancellation belong to
//!   the engine; the host only composes the route table

pub mod server;

pub use server::{build_application, AppContext, Application, BuildError};

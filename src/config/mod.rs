//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (SECRET_KEY)
//!     → schema.rs (AppConfig::from_env, defaults applied)
//!     → AppConfig (immutable)
//!     → shared via Arc inside the AppContext
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no reload mechanism
//! - All fields have defaults so the host runs with an empty environment
//! - The default secret key is a publicly known development value; callers
//!   are expected to check `uses_insecure_secret` and warn

pub mod schema;

pub use schema::AppConfig;
pub use schema::INSECURE_DEV_SECRET;

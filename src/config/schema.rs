//! Configuration schema definitions.
//!
//! The recognized options are enumerated explicitly; there is no dynamic
//! configuration map. All types derive Serde traits so a config could also be
//! deserialized from a file if a deployment ever needs that.

use serde::{Deserialize, Serialize};

/// Environment variable holding the session/signing secret.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Fallback secret used when `SECRET_KEY` is absent.
///
/// This value is publicly known and provides no integrity whatsoever. It
/// exists so local development works out of the box; it must never be used in
/// production.
pub const INSECURE_DEV_SECRET: &str = "default-secret-key";

/// Host configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Secret used for session integrity (cookie signing and the like).
    pub secret_key: String,

    /// Verbose logging; error-page detail is the HTTP engine's concern.
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: INSECURE_DEV_SECRET.to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A missing or empty `SECRET_KEY` falls back to [`INSECURE_DEV_SECRET`].
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(SECRET_KEY_ENV) {
            if !key.is_empty() {
                config.secret_key = key;
            }
        }
        config
    }

    /// True when the insecure development fallback secret is active.
    pub fn uses_insecure_secret(&self) -> bool {
        self.secret_key == INSECURE_DEV_SECRET
    }

    /// Default tracing filter for this configuration; `RUST_LOG` overrides.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "multiservice=debug,tower_http=debug"
        } else {
            "multiservice=info"
        }
    }
}

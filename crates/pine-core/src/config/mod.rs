//! Project configuration
//!
//! Configuration is collected by the prompt wizard, from CLI flags, or from a
//! YAML file passed with `--config`.

pub mod project;

pub use project::{
    default_endpoint, Backend, ModelConfig, NotificationService, ProjectConfig, Screen,
    DEFAULT_DESCRIPTION, DEFAULT_ORGANIZATION,
};

/// Environment variable overriding the `flutter` executable
pub const FLUTTER_BIN_ENV: &str = "PINE_FLUTTER_BIN";

/// Resolve the `flutter` executable, honouring [`FLUTTER_BIN_ENV`]
pub fn flutter_binary() -> String {
    std::env::var(FLUTTER_BIN_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "flutter".to_string())
}

//! Pine Core - Flutter project scaffolding with Pine architecture
//!
//! This library provides the core functionality behind the `pine` CLI: it
//! turns a project configuration and JSON samples into a Flutter project laid
//! out as service / repository / BLoC / UI layers.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Identifier case conversion, JSON type
//!   inference, template rendering, Flutter toolchain detection
//! - **Layer 2: Workflow Orchestration** - `ProjectGenerator`, `ModelGenerator`
//!   and `FeatureGenerator` writing files and driving `flutter`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use pine_core::{generator::ModelGenerator, templates::Renderer};
//! use serde_json::json;
//!
//! let renderer = Renderer::new()?;
//! let model = ModelGenerator::from_sample("BlogPost", &json!({"id": 1}), None, "my_app")?;
//! for file in model.render(&renderer)? {
//!     println!("{}", file.path);
//! }
//! ```

pub mod config;
pub mod generator;
pub mod naming;
pub mod runtime;
pub mod schema;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Backend, ModelConfig, ProjectConfig, Screen};
pub use generator::{FeatureGenerator, ModelGenerator, ProjectGenerator, Reporter};
pub use naming::Identifier;
pub use runtime::{check_flutter, FlutterCli, RuntimeInfo};
pub use schema::{extract_fields, infer_type, FieldSchema, InferredType, SchemaError};

#[cfg(feature = "tui")]
pub use tui::run;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

//! File generation on top of the template renderers
//!
//! Renderers in [`crate::templates`] produce file contents; the generators
//! here decide what to render for a command and write it to disk.

pub mod feature;
pub mod model;
pub mod project;
pub mod pubspec;
pub mod writer;

pub use feature::{ComponentKind, FeatureGenerator};
pub use model::ModelGenerator;
pub use project::{GenerationReport, ProjectGenerator, Reporter, TracingReporter, CODEGEN_HINT};
pub use pubspec::{is_flutter_project, read_package_name};
pub use writer::FileWriter;

//! Flutter toolchain detection and invocation
//!
//! This module provides:
//! - Flutter/Dart version detection
//! - An async wrapper around the `flutter` command line tool

pub mod check;
pub mod flutter;

pub use check::{check_flutter, parse_dart_version, parse_flutter_version, RuntimeInfo};
pub use flutter::{open_docs, FlutterCli, ToolchainError, FLUTTER_DOCS_URL};

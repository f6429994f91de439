//! Embedded templates and renderers for generated project files
//!
//! This module provides:
//! - A minijinja [`Renderer`] over templates compiled into the binary
//! - Dart type names for inferred field types
//! - Per-area render functions (project skeleton, models, features,
//!   backends, screens) returning [`RenderedFile`]s without touching disk
//! - Dart SDK compatibility checking

pub mod backend;
pub mod dart;
pub mod feature;
pub mod model;
pub mod project;
pub mod screens;
pub mod version;

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

pub use version::check_compatibility;

/// A generated file: path relative to the project root and its contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub contents: String,
}

impl RenderedFile {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Templates compiled into the binary, keyed by logical name
const TEMPLATES: &[(&str, &str)] = &[
    ("project/pubspec.yaml", include_str!("../../templates/project/pubspec.yaml.j2")),
    ("project/l10n.yaml", include_str!("../../templates/project/l10n.yaml.j2")),
    ("project/main.dart", include_str!("../../templates/project/main.dart.j2")),
    ("project/app.dart", include_str!("../../templates/project/app.dart.j2")),
    ("project/app_router.dart", include_str!("../../templates/project/app_router.dart.j2")),
    ("project/light_theme.dart", include_str!("../../templates/project/light_theme.dart.j2")),
    ("project/app.arb", include_str!("../../templates/project/app.arb.j2")),
    (
        "project/di/dependency_injector.dart",
        include_str!("../../templates/project/di/dependency_injector.dart.j2"),
    ),
    ("project/di/blocs.dart", include_str!("../../templates/project/di/blocs.dart.j2")),
    ("project/di/mappers.dart", include_str!("../../templates/project/di/mappers.dart.j2")),
    ("project/di/providers.dart", include_str!("../../templates/project/di/providers.dart.j2")),
    (
        "project/di/repositories.dart",
        include_str!("../../templates/project/di/repositories.dart.j2"),
    ),
    ("model/model.dart", include_str!("../../templates/model/model.dart.j2")),
    ("model/service.dart", include_str!("../../templates/model/service.dart.j2")),
    ("model/repository.dart", include_str!("../../templates/model/repository.dart.j2")),
    ("model/bloc.dart", include_str!("../../templates/model/bloc.dart.j2")),
    ("model/event.dart", include_str!("../../templates/model/event.dart.j2")),
    ("model/state.dart", include_str!("../../templates/model/state.dart.j2")),
    ("feature/service.dart", include_str!("../../templates/feature/service.dart.j2")),
    ("feature/repository.dart", include_str!("../../templates/feature/repository.dart.j2")),
    (
        "backend/firebase_initializer.dart",
        include_str!("../../templates/backend/firebase_initializer.dart.j2"),
    ),
    (
        "backend/firebase_auth_service.dart",
        include_str!("../../templates/backend/firebase_auth_service.dart.j2"),
    ),
    (
        "backend/notification_service.dart",
        include_str!("../../templates/backend/notification_service.dart.j2"),
    ),
    (
        "backend/firebase_providers.dart",
        include_str!("../../templates/backend/firebase_providers.dart.j2"),
    ),
    (
        "backend/supabase_client.dart",
        include_str!("../../templates/backend/supabase_client.dart.j2"),
    ),
    (
        "backend/supabase_auth_service.dart",
        include_str!("../../templates/backend/supabase_auth_service.dart.j2"),
    ),
    (
        "backend/supabase_providers.dart",
        include_str!("../../templates/backend/supabase_providers.dart.j2"),
    ),
    ("screens/login_page.dart", include_str!("../../templates/screens/login_page.dart.j2")),
    ("screens/home_page.dart", include_str!("../../templates/screens/home_page.dart.j2")),
    ("screens/profile_page.dart", include_str!("../../templates/screens/profile_page.dart.j2")),
    ("screens/settings_page.dart", include_str!("../../templates/screens/settings_page.dart.j2")),
];

/// Template renderer holding the parsed embedded templates
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Parse every embedded template
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Output is Dart/YAML/ARB source, never HTML
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .with_context(|| format!("Failed to parse template '{}'", name))?;
        }

        Ok(Self { env })
    }

    /// Render a template by name with the given context
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("Unknown template '{}'", name))?;
        template
            .render(ctx)
            .with_context(|| format!("Failed to render template '{}'", name))
    }

    /// Render a template straight into a [`RenderedFile`]
    pub fn render_file<S: Serialize>(
        &self,
        name: &str,
        path: impl Into<String>,
        ctx: S,
    ) -> Result<RenderedFile> {
        Ok(RenderedFile::new(path, self.render(name, ctx)?))
    }
}

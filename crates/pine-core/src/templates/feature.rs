//! Untyped feature components for `pine generate`

use super::{RenderedFile, Renderer};
use crate::naming::Identifier;
use anyhow::Result;
use minijinja::context;

pub fn render_service(
    renderer: &Renderer,
    identifier: &Identifier,
    endpoint: &str,
) -> Result<RenderedFile> {
    let snake = identifier.snake_case();
    renderer.render_file(
        "feature/service.dart",
        format!("lib/network/service/{}_service.dart", snake),
        context! { snake, pascal => identifier.pascal_case(), endpoint },
    )
}

pub fn render_repository(
    renderer: &Renderer,
    identifier: &Identifier,
    package: &str,
) -> Result<RenderedFile> {
    let snake = identifier.snake_case();
    renderer.render_file(
        "feature/repository.dart",
        format!("lib/repositories/{}_repository.dart", snake),
        context! { package, snake, pascal => identifier.pascal_case() },
    )
}

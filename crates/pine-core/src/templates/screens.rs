//! Example screens

use super::{RenderedFile, Renderer};
use crate::config::{ProjectConfig, Screen};
use crate::naming::{capitalize, Identifier};
use anyhow::Result;
use minijinja::context;

/// Human title for the app, e.g. `my_app` -> `My App`
pub fn app_title(project_name: &str) -> String {
    Identifier::new(project_name)
        .words()
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_screen(renderer: &Renderer, screen: Screen, app_title: &str) -> Result<RenderedFile> {
    renderer.render_file(
        &format!("screens/{}_page.dart", screen.key()),
        screen.output_path(),
        context! { app_title },
    )
}

/// Render every screen selected in the config
pub fn render_screens(renderer: &Renderer, config: &ProjectConfig) -> Result<Vec<RenderedFile>> {
    let title = app_title(&config.project_name);
    config
        .selected_screens()
        .into_iter()
        .map(|screen| render_screen(renderer, screen, &title))
        .collect()
}

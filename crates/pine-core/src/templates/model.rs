//! Typed model files: json_serializable record, Retrofit service,
//! repository and BLoC (bloc, event, state)

use super::dart::dart_type;
use super::{RenderedFile, Renderer};
use crate::naming::Identifier;
use crate::schema::FieldSchema;
use anyhow::Result;
use minijinja::context;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FieldContext<'a> {
    name: &'a str,
    dart_type: String,
}

/// Render the six files generated for one model
pub fn render_model_files(
    renderer: &Renderer,
    identifier: &Identifier,
    fields: &[FieldSchema],
    endpoint: &str,
    package: &str,
) -> Result<Vec<RenderedFile>> {
    let snake = identifier.snake_case();
    let pascal = identifier.pascal_case();
    let camel = identifier.camel_case();

    let fields: Vec<FieldContext<'_>> = fields
        .iter()
        .map(|f| FieldContext {
            name: &f.name,
            dart_type: dart_type(&f.ty),
        })
        .collect();

    let ctx = context! { package, snake, pascal, camel, endpoint, fields };
    let bloc_dir = format!("lib/state_management/bloc/{}", snake);

    Ok(vec![
        renderer.render_file("model/model.dart", format!("lib/model/{}.dart", snake), &ctx)?,
        renderer.render_file(
            "model/service.dart",
            format!("lib/network/service/{}_service.dart", snake),
            &ctx,
        )?,
        renderer.render_file(
            "model/repository.dart",
            format!("lib/repositories/{}_repository.dart", snake),
            &ctx,
        )?,
        renderer.render_file(
            "model/bloc.dart",
            format!("{}/{}_bloc.dart", bloc_dir, snake),
            &ctx,
        )?,
        renderer.render_file(
            "model/event.dart",
            format!("{}/{}_event.dart", bloc_dir, snake),
            &ctx,
        )?,
        renderer.render_file(
            "model/state.dart",
            format!("{}/{}_state.dart", bloc_dir, snake),
            &ctx,
        )?,
    ])
}

//! Model generation: typed record, service, repository and BLoC from a JSON sample

use super::FileWriter;
use crate::config::{default_endpoint, ModelConfig};
use crate::naming::{parse_component_name, Identifier};
use crate::schema::{extract_fields, FieldSchema};
use crate::templates::model::render_model_files;
use crate::templates::{RenderedFile, Renderer};
use anyhow::{Context, Result};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ModelGenerator {
    identifier: Identifier,
    fields: Vec<FieldSchema>,
    endpoint: String,
    package: String,
}

impl ModelGenerator {
    pub fn new(
        identifier: Identifier,
        fields: Vec<FieldSchema>,
        endpoint: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            identifier,
            fields,
            endpoint: endpoint.into(),
            package: package.into(),
        }
    }

    /// Build from a name and JSON sample, defaulting the endpoint
    pub fn from_sample(
        name: &str,
        sample: &Value,
        endpoint: Option<&str>,
        package: &str,
    ) -> Result<Self> {
        let identifier = parse_component_name(name).context("Invalid model name")?;
        let fields = extract_fields(sample)
            .with_context(|| format!("Invalid sample for model '{}'", name))?;
        let endpoint = match endpoint.map(str::trim) {
            Some(e) if !e.is_empty() => e.to_string(),
            _ => default_endpoint(&identifier),
        };
        Ok(Self::new(identifier, fields, endpoint, package))
    }

    pub fn from_config(model: &ModelConfig, package: &str) -> Result<Self> {
        Self::from_sample(&model.name, &model.sample, Some(&model.endpoint()), package)
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn render(&self, renderer: &Renderer) -> Result<Vec<RenderedFile>> {
        render_model_files(
            renderer,
            &self.identifier,
            &self.fields,
            &self.endpoint,
            &self.package,
        )
    }

    /// Render and write every model file, returning the written paths
    pub async fn generate(&self, renderer: &Renderer, writer: &FileWriter) -> Result<Vec<String>> {
        let files = self
            .render(renderer)
            .with_context(|| format!("Failed to generate model '{}'", self.identifier))?;
        writer.write_all(&files).await
    }
}

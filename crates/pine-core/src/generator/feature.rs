//! Feature components for `pine generate`

use super::{FileWriter, ModelGenerator};
use crate::config::default_endpoint;
use crate::naming::{parse_component_name, Identifier};
use crate::templates::{feature, RenderedFile, Renderer};
use anyhow::{Context, Result};
use serde_json::json;
use std::fmt;

/// Which components `pine generate` produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ComponentKind {
    /// Service, repository and BLoC
    #[default]
    All,
    /// Retrofit service only
    Service,
    /// Repository only
    Repository,
    /// BLoC with a minimal model
    Bloc,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::All,
        ComponentKind::Service,
        ComponentKind::Repository,
        ComponentKind::Bloc,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ComponentKind::All => "all",
            ComponentKind::Service => "service",
            ComponentKind::Repository => "repository",
            ComponentKind::Bloc => "bloc",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComponentKind::All => "All (Service + Repository + BLoC)",
            ComponentKind::Service => "Service only",
            ComponentKind::Repository => "Repository only",
            ComponentKind::Bloc => "BLoC only",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone)]
pub struct FeatureGenerator {
    identifier: Identifier,
    package: String,
}

impl FeatureGenerator {
    pub fn new(name: &str, package: impl Into<String>) -> Result<Self> {
        let identifier = parse_component_name(name).context("Invalid feature name")?;
        Ok(Self {
            identifier,
            package: package.into(),
        })
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Model generator over the minimal `{"id": "1"}` sample
    fn minimal_model(&self) -> Result<ModelGenerator> {
        ModelGenerator::from_sample(
            self.identifier.original(),
            &json!({ "id": "1" }),
            None,
            &self.package,
        )
    }

    pub fn render(&self, renderer: &Renderer, kind: ComponentKind) -> Result<Vec<RenderedFile>> {
        match kind {
            ComponentKind::Service => Ok(vec![feature::render_service(
                renderer,
                &self.identifier,
                &default_endpoint(&self.identifier),
            )?]),
            ComponentKind::Repository => Ok(vec![feature::render_repository(
                renderer,
                &self.identifier,
                &self.package,
            )?]),
            // The typed model files supersede the untyped service and repository
            ComponentKind::Bloc | ComponentKind::All => self.minimal_model()?.render(renderer),
        }
    }

    pub async fn generate(
        &self,
        renderer: &Renderer,
        writer: &FileWriter,
        kind: ComponentKind,
    ) -> Result<Vec<String>> {
        let files = self.render(renderer, kind)?;
        tracing::debug!(feature = %self.identifier, kind = %kind, files = files.len(), "generating");
        writer.write_all(&files).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_service_only() {
        let renderer = Renderer::new().unwrap();
        let files = FeatureGenerator::new("Product", "shop")
            .unwrap()
            .render(&renderer, ComponentKind::Service)
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "lib/network/service/product_service.dart");
        assert!(files[0].contents.contains("@GET('/api/product')"));
    }

    #[test]
    fn test_repository_only() {
        let renderer = Renderer::new().unwrap();
        let files = FeatureGenerator::new("Product", "shop")
            .unwrap()
            .render(&renderer, ComponentKind::Repository)
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "lib/repositories/product_repository.dart");
    }

    #[test]
    fn test_bloc_uses_minimal_model() {
        let renderer = Renderer::new().unwrap();
        let files = FeatureGenerator::new("user profile", "shop")
            .unwrap()
            .render(&renderer, ComponentKind::Bloc)
            .unwrap();
        assert_eq!(files.len(), 6);
        assert_eq!(files[0].path, "lib/model/user_profile.dart");
        assert!(files[0].contents.contains("final String id;"));
        assert!(files[1].contents.contains("@GET('/api/user-profile')"));
    }

    #[tokio::test]
    async fn test_generate_all_writes_typed_files() {
        let dir = TempDir::new().unwrap();
        let writer = FileWriter::new(dir.path());
        let renderer = Renderer::new().unwrap();

        let written = FeatureGenerator::new("order", "shop")
            .unwrap()
            .generate(&renderer, &writer, ComponentKind::All)
            .await
            .unwrap();

        assert!(written.contains(&"lib/network/service/order_service.dart".to_string()));
        let service = writer
            .read_to_string("lib/network/service/order_service.dart")
            .await
            .unwrap();
        assert!(service.contains("Future<List<Order>> getAll();"));
    }

    #[test]
    fn test_rejects_names_without_words() {
        let err = FeatureGenerator::new("***", "shop").unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Invalid feature name: '***' contains no letters or digits"
        );
    }

    #[test]
    fn test_component_kind_keys() {
        use clap::ValueEnum;
        for kind in ComponentKind::ALL {
            let parsed = ComponentKind::from_str(kind.key(), false).unwrap();
            assert_eq!(parsed, kind);
        }
    }
}

//! Project configuration types and parsing

use crate::naming::{
    parse_component_name, validate_organization, validate_project_name, Identifier,
};
use crate::schema::{extract_fields, FieldSchema, SchemaError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Description written to pubspec.yaml when none is given
pub const DEFAULT_DESCRIPTION: &str = "A new Flutter project with Pine architecture.";

/// Default organization in reverse domain notation
pub const DEFAULT_ORGANIZATION: &str = "com.example";

/// Backend service integrated into the generated app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    None,
    Firebase,
    Supabase,
}

impl Backend {
    pub fn display_name(&self) -> &'static str {
        match self {
            Backend::None => "None",
            Backend::Firebase => "Firebase",
            Backend::Supabase => "Supabase",
        }
    }

    /// Lowercase key used in templates and config files
    pub fn key(&self) -> &'static str {
        match self {
            Backend::None => "none",
            Backend::Firebase => "firebase",
            Backend::Supabase => "supabase",
        }
    }
}

/// Push notification provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationService {
    /// Firebase Cloud Messaging
    Fcm,
}

impl NotificationService {
    pub fn key(&self) -> &'static str {
        match self {
            NotificationService::Fcm => "fcm",
        }
    }
}

/// Example screens that can be generated
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Login,
    Home,
    Profile,
    Settings,
}

impl Screen {
    /// Every screen, in routing order
    pub const ALL: [Screen; 4] = [Screen::Login, Screen::Home, Screen::Profile, Screen::Settings];

    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Home => "Home",
            Screen::Profile => "Profile",
            Screen::Settings => "Settings",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Home => "home",
            Screen::Profile => "profile",
            Screen::Settings => "settings",
        }
    }

    /// auto_route route class generated for this screen's page
    pub fn route_name(&self) -> String {
        format!("{}Route", self.display_name())
    }

    /// Output path relative to the project root
    pub fn output_path(&self) -> String {
        format!("lib/ui/{key}/{key}_page.dart", key = self.key())
    }
}

/// A data model generated from a JSON sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name in any case convention (e.g. `blog post`, `BlogPost`)
    pub name: String,

    /// One example record; must be a JSON object
    pub sample: serde_json::Value,

    /// REST endpoint, defaults to `/api/<kebab-name>`
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ModelConfig {
    pub fn identifier(&self) -> Identifier {
        Identifier::new(self.name.as_str())
    }

    /// Configured endpoint, or `/api/<kebab-name>` when unset or blank
    pub fn endpoint(&self) -> String {
        match self.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint.to_string(),
            _ => default_endpoint(&self.identifier()),
        }
    }

    pub fn fields(&self) -> Result<Vec<FieldSchema>, SchemaError> {
        extract_fields(&self.sample)
    }
}

/// Default REST endpoint for a model
pub fn default_endpoint(identifier: &Identifier) -> String {
    format!("/api/{}", identifier.kebab_case())
}

/// Everything needed to generate a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Flutter package name (snake_case)
    pub project_name: String,

    /// Reverse domain organization (e.g. `com.example`)
    pub organization: String,

    pub description: String,

    /// Directory in which the project directory is created
    pub target_directory: PathBuf,

    pub backend: Backend,

    /// Only honoured with the Firebase backend
    pub notifications: Option<NotificationService>,

    pub models: Vec<ModelConfig>,

    pub screens: Vec<Screen>,

    /// Overwrite an existing project directory
    pub force: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            description: String::new(),
            target_directory: PathBuf::from("."),
            backend: Backend::None,
            notifications: None,
            models: Vec::new(),
            screens: vec![Screen::Login, Screen::Home],
            force: false,
        }
    }
}

impl ProjectConfig {
    /// Load a configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parent directory `flutter create` runs in
    pub fn target_dir(&self) -> &Path {
        if self.target_directory.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.target_directory.as_path()
        }
    }

    /// Directory the project is generated into
    pub fn project_path(&self) -> PathBuf {
        if self.target_directory.as_os_str().is_empty() || self.target_directory == Path::new(".") {
            PathBuf::from(&self.project_name)
        } else {
            self.target_directory.join(&self.project_name)
        }
    }

    /// Description for pubspec.yaml, falling back to the default text
    pub fn description_or_default(&self) -> &str {
        if self.description.trim().is_empty() {
            DEFAULT_DESCRIPTION
        } else {
            &self.description
        }
    }

    /// Whether FCM push notifications are enabled (requires Firebase)
    pub fn notifications_enabled(&self) -> bool {
        self.backend == Backend::Firebase && self.notifications.is_some()
    }

    /// Selected screens, deduplicated, in routing order
    pub fn selected_screens(&self) -> Vec<Screen> {
        Screen::ALL
            .into_iter()
            .filter(|s| self.screens.contains(s))
            .collect()
    }

    /// Check names, models and the target location before generating
    pub fn validate(&self) -> Result<()> {
        validate_project_name(&self.project_name)?;
        validate_organization(&self.organization)?;

        if self.notifications.is_some() && self.backend != Backend::Firebase {
            anyhow::bail!("Push notifications require the Firebase backend");
        }

        for model in &self.models {
            parse_component_name(&model.name).context("Invalid model name")?;
            model
                .fields()
                .with_context(|| format!("Invalid sample for model '{}'", model.name))?;
        }

        let target = self.target_dir();
        if !target.is_dir() {
            anyhow::bail!("Target directory '{}' does not exist", target.display());
        }

        let project_path = self.project_path();
        if project_path.exists() && !self.force {
            anyhow::bail!(
                "Directory '{}' already exists (use --force to overwrite)",
                project_path.display()
            );
        }

        Ok(())
    }

    /// Human-readable summary shown before confirmation
    pub fn summary_lines(&self) -> Vec<String> {
        let mut items = vec![
            format!("Name: {}", self.project_name),
            format!("Location: {}", self.project_path().display()),
            format!("Organization: {}", self.organization),
        ];

        if !self.description.trim().is_empty() {
            items.push(format!("Description: {}", self.description));
        }

        if self.backend != Backend::None {
            items.push(format!("Backend: {}", self.backend.display_name()));
        }

        if self.notifications_enabled() {
            if let Some(service) = self.notifications {
                items.push(format!("Push Notifications ({})", service.key()));
            }
        }

        if !self.models.is_empty() {
            let names: Vec<&str> = self.models.iter().map(|m| m.name.as_str()).collect();
            items.push(format!("Models: {}", names.join(", ")));
        }

        let screens = self.selected_screens();
        if !screens.is_empty() {
            let names: Vec<&str> = screens.iter().map(|s| s.display_name()).collect();
            items.push(format!("Screens: {}", names.join(", ")));
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> ProjectConfig {
        ProjectConfig {
            project_name: "my_app".to_string(),
            target_directory: dir.to_path_buf(),
            ..ProjectConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = ProjectConfig::default();
        assert_eq!(cfg.organization, "com.example");
        assert_eq!(cfg.target_directory, PathBuf::from("."));
        assert_eq!(cfg.screens, vec![Screen::Login, Screen::Home]);
        assert_eq!(cfg.backend, Backend::None);
        assert_eq!(cfg.description_or_default(), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
project_name: shop
organization: dev.pine
backend: firebase
notifications: fcm
screens: [home, settings]
models:
  - name: order line
    sample:
      id: 1
      total: 9.5
      tags: [a]
    endpoint: /v1/orders
"#;
        let cfg = ProjectConfig::from_yaml(yaml).unwrap();
        assert_eq!(cfg.project_name, "shop");
        assert_eq!(cfg.backend, Backend::Firebase);
        assert!(cfg.notifications_enabled());
        assert_eq!(cfg.screens, vec![Screen::Home, Screen::Settings]);
        // unspecified fields keep their defaults
        assert_eq!(cfg.target_directory, PathBuf::from("."));

        let model = &cfg.models[0];
        assert_eq!(model.endpoint(), "/v1/orders");
        let names: Vec<String> = model.fields().unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "total", "tags"]);
    }

    #[test]
    fn test_model_default_endpoint() {
        let model = ModelConfig {
            name: "BlogPost".to_string(),
            sample: json!({"id": 1}),
            endpoint: Some("  ".to_string()),
        };
        assert_eq!(model.endpoint(), "/api/blog-post");
    }

    #[test]
    fn test_project_path() {
        let cfg = ProjectConfig {
            project_name: "my_app".to_string(),
            ..ProjectConfig::default()
        };
        assert_eq!(cfg.project_path(), PathBuf::from("my_app"));

        let cfg = ProjectConfig {
            target_directory: PathBuf::from("/tmp/work"),
            ..cfg
        };
        assert_eq!(cfg.project_path(), PathBuf::from("/tmp/work/my_app"));
    }

    #[test]
    fn test_selected_screens_are_ordered_and_unique() {
        let cfg = ProjectConfig {
            screens: vec![Screen::Settings, Screen::Login, Screen::Settings],
            ..ProjectConfig::default()
        };
        assert_eq!(cfg.selected_screens(), vec![Screen::Login, Screen::Settings]);
    }

    #[test]
    fn test_validate_ok() {
        let dir = TempDir::new().unwrap();
        assert!(config_in(dir.path()).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let dir = TempDir::new().unwrap();
        let cfg = ProjectConfig {
            project_name: "my-app".to_string(),
            ..config_in(dir.path())
        };
        assert!(cfg.validate().is_err());

        let cfg = ProjectConfig {
            organization: "example".to_string(),
            ..config_in(dir.path())
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("com.example"));
    }

    #[test]
    fn test_validate_existing_directory_needs_force() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("my_app")).unwrap();

        let cfg = config_in(dir.path());
        assert!(cfg.validate().unwrap_err().to_string().contains("--force"));

        let cfg = ProjectConfig {
            force: true,
            ..cfg
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_target_directory() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(&dir.path().join("missing"));
        assert!(cfg.validate().unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_rejects_non_object_sample() {
        let dir = TempDir::new().unwrap();
        let cfg = ProjectConfig {
            models: vec![ModelConfig {
                name: "user".to_string(),
                sample: json!([1, 2]),
                endpoint: None,
            }],
            ..config_in(dir.path())
        };
        let err = cfg.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("must be a JSON object"));
    }

    #[test]
    fn test_validate_notifications_need_firebase() {
        let dir = TempDir::new().unwrap();
        let cfg = ProjectConfig {
            backend: Backend::Supabase,
            notifications: Some(NotificationService::Fcm),
            ..config_in(dir.path())
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_summary_lines() {
        let cfg = ProjectConfig {
            project_name: "shop".to_string(),
            description: "Shop app".to_string(),
            backend: Backend::Firebase,
            notifications: Some(NotificationService::Fcm),
            models: vec![ModelConfig {
                name: "Product".to_string(),
                sample: json!({"id": 1}),
                endpoint: None,
            }],
            ..ProjectConfig::default()
        };
        let lines = cfg.summary_lines();
        assert_eq!(lines[0], "Name: shop");
        assert!(lines.contains(&"Description: Shop app".to_string()));
        assert!(lines.contains(&"Backend: Firebase".to_string()));
        assert!(lines.contains(&"Push Notifications (fcm)".to_string()));
        assert!(lines.contains(&"Models: Product".to_string()));
        assert!(lines.contains(&"Screens: Login, Home".to_string()));
    }
}

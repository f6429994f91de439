//! Charm-style CLI prompts for `pine create`

use super::reporter::CliclackReporter;
use crate::config::{
    default_endpoint, flutter_binary, Backend, ModelConfig, NotificationService, ProjectConfig,
    Screen, DEFAULT_DESCRIPTION, DEFAULT_ORGANIZATION,
};
use crate::generator::ProjectGenerator;
use crate::naming::{validate_organization, validate_project_name, Identifier};
use crate::runtime::{check_flutter, open_docs, FLUTTER_DOCS_URL};
use crate::schema::extract_fields;
use crate::templates::{check_compatibility, project::MIN_DART_SDK};
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (snake_case)
    pub name: Option<String>,

    /// Directory the project folder is created in
    pub path: Option<PathBuf>,

    /// Organization in reverse domain notation
    pub org: Option<String>,

    pub description: Option<String>,

    /// Overwrite an existing project directory
    pub force: bool,

    pub backend: Option<Backend>,

    /// Enable FCM push notifications (Firebase only)
    pub notifications: bool,

    pub screens: Option<Vec<Screen>>,

    /// YAML file with the full project configuration
    pub config: Option<PathBuf>,

    /// Fail instead of prompting for missing values
    pub no_interactive: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl CreateArgs {
    fn is_interactive(&self) -> bool {
        !self.no_interactive && self.config.is_none()
    }
}

/// Run `pine create`
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("Pine - Flutter Project Generator")?;

    let mut config = base_config(&args)?;
    if args.is_interactive() {
        run_wizard(&mut config, &args)?;
    } else if config.project_name.trim().is_empty() {
        anyhow::bail!("Project name is required (use --name flag)");
    }

    if let Err(e) = config.validate() {
        cliclack::log::error(format!("Validation error: {:#}", e))?;
        return Err(e);
    }

    cliclack::note("Project Summary", config.summary_lines().join("\n"))?;

    let confirm = if args.yes || !args.is_interactive() {
        true
    } else {
        cliclack::confirm("Ready to create your project?")
            .initial_value(true)
            .interact()?
    };
    if !confirm {
        cliclack::outro_cancel("Project creation cancelled")?;
        return Ok(());
    }

    cliclack::log::info("Creating your Flutter project...")?;
    let generator = ProjectGenerator::new(config)?;
    let report = match generator.generate(&CliclackReporter).await {
        Ok(report) => report,
        Err(e) => {
            cliclack::log::error(format!("Failed to generate project: {:#}", e))?;
            return Err(e);
        }
    };

    cliclack::log::success(format!(
        "Created {} files in {}",
        report.files.len(),
        report.project_path.display()
    ))?;

    print_next_steps(&next_steps(generator.config(), &report.project_path))?;
    Ok(())
}

/// Config file (if any) overlaid with explicit flags
fn base_config(args: &CreateArgs) -> Result<ProjectConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let config = ProjectConfig::load(path)?;
            cliclack::log::info(format!("Using configuration from {}", path.display()))?;
            config
        }
        None => ProjectConfig::default(),
    };
    apply_flags(&mut config, args);
    Ok(config)
}

fn apply_flags(config: &mut ProjectConfig, args: &CreateArgs) {
    if let Some(name) = &args.name {
        config.project_name = name.trim().to_string();
    }
    if let Some(path) = &args.path {
        config.target_directory = path.clone();
    }
    if let Some(org) = &args.org {
        config.organization = org.trim().to_string();
    }
    if let Some(description) = &args.description {
        config.description = description.clone();
    }
    if args.force {
        config.force = true;
    }
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if args.notifications {
        config.notifications = Some(NotificationService::Fcm);
    }
    if let Some(screens) = &args.screens {
        config.screens = screens.clone();
    }
}

fn run_wizard(config: &mut ProjectConfig, args: &CreateArgs) -> Result<()> {
    if args.name.is_none() {
        config.project_name = cliclack::input("Project name")
            .placeholder("my_app")
            .validate(|input: &String| validate_project_name(input.trim()).map_err(|e| e.to_string()))
            .interact::<String>()?
            .trim()
            .to_string();
    }

    if args.path.is_none() {
        let input: String = cliclack::input("Target directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;
        config.target_directory = PathBuf::from(input.trim());
    }

    if args.org.is_none() {
        config.organization = cliclack::input("Organization")
            .placeholder(DEFAULT_ORGANIZATION)
            .default_input(DEFAULT_ORGANIZATION)
            .validate(|input: &String| validate_organization(input.trim()).map_err(|e| e.to_string()))
            .interact::<String>()?
            .trim()
            .to_string();
    }

    if args.description.is_none() {
        config.description = cliclack::input("Description")
            .placeholder(DEFAULT_DESCRIPTION)
            .default_input(DEFAULT_DESCRIPTION)
            .interact()?;
    }

    if args.backend.is_none() {
        config.backend = cliclack::select("Backend service")
            .item(Backend::None, Backend::None.display_name(), "")
            .item(Backend::Firebase, Backend::Firebase.display_name(), "Auth, Firestore, FCM")
            .item(Backend::Supabase, Backend::Supabase.display_name(), "Auth, Postgres")
            .initial_value(config.backend)
            .interact()?;
    }

    if config.backend == Backend::Firebase && !args.notifications {
        let enable: bool = cliclack::confirm("Enable push notifications? (Firebase Cloud Messaging)")
            .initial_value(false)
            .interact()?;
        config.notifications = enable.then_some(NotificationService::Fcm);
    } else if config.backend != Backend::Firebase {
        config.notifications = None;
    }

    let add_models: bool = cliclack::confirm("Add models from JSON?")
        .initial_value(false)
        .interact()?;
    if add_models {
        prompt_models(config)?;
    }

    if args.screens.is_none() {
        let mut select = cliclack::multiselect("Example screens");
        for screen in Screen::ALL {
            select = select.item(screen, screen.display_name(), "");
        }
        config.screens = select
            .initial_values(config.screens.clone())
            .required(false)
            .interact()?;
    }

    Ok(())
}

fn prompt_models(config: &mut ProjectConfig) -> Result<()> {
    loop {
        let number = config.models.len() + 1;
        let name: String = cliclack::input(format!("Model {} name", number))
            .placeholder("User")
            .validate(|input: &String| validate_model_name(input))
            .interact()?;
        let identifier = Identifier::new(name.trim());

        let text: String = cliclack::input("JSON sample")
            .placeholder(r#"{"id": 1, "name": "John"}"#)
            .multiline()
            .interact()?;
        let sample = match parse_sample(&text) {
            Ok(sample) => sample,
            Err(e) => {
                cliclack::log::error(format!("{:#}. Please try again.", e))?;
                continue;
            }
        };

        let endpoint: String = cliclack::input("API endpoint")
            .default_input(&default_endpoint(&identifier))
            .interact()?;

        config.models.push(ModelConfig {
            name: name.trim().to_string(),
            sample,
            endpoint: Some(endpoint.trim().to_string()).filter(|e| !e.is_empty()),
        });

        let another: bool = cliclack::confirm("Add another model?")
            .initial_value(false)
            .interact()?;
        if !another {
            return Ok(());
        }
    }
}

/// Model names must contain at least one letter or digit
pub(super) fn validate_model_name(input: &str) -> Result<(), &'static str> {
    if Identifier::new(input).words().is_empty() {
        Err("Model name is required")
    } else {
        Ok(())
    }
}

/// Parse a JSON sample, requiring a top-level object
pub fn parse_sample(text: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text.trim()).context("Invalid JSON format")?;
    extract_fields(&value)?;
    Ok(value)
}

/// Check that Flutter is installed before running any command
pub fn ensure_flutter(skip: bool, yes: bool) -> Result<()> {
    if skip {
        cliclack::log::info("Skipping Flutter check")?;
        return Ok(());
    }

    let info = check_flutter(&flutter_binary());
    if info.available {
        cliclack::log::success(format!(
            "{} installed ({})",
            info.name,
            info.version.as_deref().unwrap_or("unknown")
        ))?;
        if let Some(warning) = info
            .dart_version
            .as_deref()
            .and_then(|dart| check_compatibility(dart, MIN_DART_SDK))
        {
            cliclack::log::warning(warning)?;
        }
        return Ok(());
    }

    cliclack::log::error("Flutter is not installed or not in PATH")?;

    if yes {
        anyhow::bail!("Please install Flutter: {}", FLUTTER_DOCS_URL);
    }

    let action: &str = cliclack::select("What would you like to do?")
        .item("docs", format!("Open installation guide ({})", FLUTTER_DOCS_URL), "")
        .item("exit", "Exit", "")
        .interact()?;

    if action == "docs" {
        open_docs()?;
        cliclack::outro("After installing Flutter, run this command again.")?;
    } else {
        cliclack::outro_cancel("Flutter is required")?;
    }
    anyhow::bail!("Flutter is not installed");
}

fn next_steps(config: &ProjectConfig, project_path: &Path) -> Vec<String> {
    let mut steps = vec![format!("cd {}", project_path.display())];
    match config.backend {
        Backend::Firebase => steps.push("flutterfire configure".to_string()),
        Backend::Supabase => {
            steps.push("Add your Supabase credentials to lib/utils/supabase_client.dart".to_string())
        }
        Backend::None => {}
    }
    if !config.models.is_empty() {
        steps.push("Add the generated services, repositories and BLoCs to lib/di".to_string());
    }
    steps.push("flutter run".to_string());
    steps
}

pub(super) fn print_next_steps(steps: &[String]) -> Result<()> {
    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}

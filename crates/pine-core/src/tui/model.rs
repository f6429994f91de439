//! Prompts for `pine model` and `pine generate`

use super::prompts::{parse_sample, print_next_steps, validate_model_name};
use crate::config::default_endpoint;
use crate::generator::{
    is_flutter_project, read_package_name, ComponentKind, FeatureGenerator, FileWriter,
    ModelGenerator, CODEGEN_HINT,
};
use crate::naming::Identifier;
use crate::templates::Renderer;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the model command
#[derive(Debug, Clone, Default)]
pub struct ModelArgs {
    pub name: Option<String>,

    /// Inline JSON sample
    pub json: Option<String>,

    /// File holding the JSON sample
    pub json_file: Option<PathBuf>,

    /// REST endpoint, defaults to `/api/<kebab-name>`
    pub endpoint: Option<String>,

    /// Flutter project root
    pub project_dir: PathBuf,

    /// Fail instead of prompting for missing values
    pub yes: bool,
}

/// CLI arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub name: Option<String>,
    pub kind: Option<ComponentKind>,

    /// Flutter project root
    pub project_dir: PathBuf,
}

/// Run `pine model`
pub async fn run_model(args: ModelArgs) -> Result<()> {
    cliclack::intro("Pine - Model Generator")?;

    let package = require_flutter_project(&args.project_dir)?;

    let name = match args.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None if args.yes => anyhow::bail!("Model name is required (pass it as an argument or --name)"),
        None => cliclack::input("Model name")
            .placeholder("User")
            .validate(|input: &String| validate_model_name(input))
            .interact::<String>()?
            .trim()
            .to_string(),
    };

    let text = match sample_source(args.json.as_deref(), args.json_file.as_deref())? {
        Some(text) => text,
        None if args.yes => anyhow::bail!("A JSON sample is required (use --json or --json-file)"),
        None => cliclack::input("JSON sample")
            .placeholder(r#"{"id": 1, "name": "John"}"#)
            .validate(|input: &String| parse_sample(input).map(|_| ()).map_err(|e| format!("{:#}", e)))
            .multiline()
            .interact()?,
    };
    let sample = match parse_sample(&text) {
        Ok(sample) => sample,
        Err(e) => {
            cliclack::log::error(format!("{:#}", e))?;
            return Err(e);
        }
    };

    let endpoint = match &args.endpoint {
        Some(endpoint) => Some(endpoint.clone()),
        None if args.yes => None,
        None => {
            let input: String = cliclack::input("API endpoint")
                .default_input(&default_endpoint(&Identifier::new(name.as_str())))
                .interact()?;
            Some(input)
        }
    };

    let generator = ModelGenerator::from_sample(&name, &sample, endpoint.as_deref(), &package)?;
    cliclack::log::info(format!("Generating model: {}", generator.identifier()))?;
    cliclack::log::info(format!("Endpoint: {}", generator.endpoint()))?;

    let renderer = Renderer::new()?;
    let writer = FileWriter::new(&args.project_dir);
    let spinner = cliclack::spinner();
    spinner.start("Generating files...");
    let written = match generator.generate(&renderer, &writer).await {
        Ok(written) => written,
        Err(e) => {
            spinner.stop("Generation failed");
            return Err(e);
        }
    };
    spinner.stop("Model generated successfully!");

    cliclack::note("Generated files", written.join("\n"))?;
    print_next_steps(&[
        CODEGEN_HINT.to_string(),
        "Add the service, repository, and BLoC to your dependency injector".to_string(),
    ])
}

/// Run `pine generate`
pub async fn run_generate(args: GenerateArgs) -> Result<()> {
    cliclack::intro("Pine - Feature Generator")?;

    let package = require_flutter_project(&args.project_dir)?;

    let (name, kind) = match args.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => (name.to_string(), args.kind.unwrap_or_default()),
        None => {
            let name: String = cliclack::input("Feature name")
                .placeholder("User, Product, Post")
                .validate(|input: &String| validate_model_name(input))
                .interact()?;
            let kind = match args.kind {
                Some(kind) => kind,
                None => {
                    let mut select = cliclack::select("What do you want to generate?");
                    for kind in ComponentKind::ALL {
                        select = select.item(kind, kind.description(), "");
                    }
                    select.interact()?
                }
            };
            (name.trim().to_string(), kind)
        }
    };

    cliclack::log::info(format!("Generating {} for feature: {}", kind, name))?;

    let renderer = Renderer::new()?;
    let writer = FileWriter::new(&args.project_dir);
    let written = FeatureGenerator::new(&name, package)?
        .generate(&renderer, &writer, kind)
        .await?;
    for path in &written {
        cliclack::log::success(format!("Generated {}", path))?;
    }

    print_next_steps(&[CODEGEN_HINT.to_string()])
}

/// Package name of the Flutter project at `dir`, or an error outside one
fn require_flutter_project(dir: &Path) -> Result<String> {
    if !is_flutter_project(dir) {
        cliclack::log::error("Not in a Flutter project directory")?;
        cliclack::log::info("Please run this command from your Flutter project root")?;
        anyhow::bail!("pubspec.yaml not found in {}", dir.display());
    }
    read_package_name(dir)
}

/// Sample text from `--json-file` or `--json`; the file wins when both are set
fn sample_source(json: Option<&str>, json_file: Option<&Path>) -> Result<Option<String>> {
    if let Some(path) = json_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON file {}", path.display()))?;
        return Ok(Some(text));
    }
    Ok(json.filter(|j| !j.trim().is_empty()).map(str::to_string))
}

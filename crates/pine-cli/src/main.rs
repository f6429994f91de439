//! Pine CLI - Flutter project scaffolding with Pine architecture

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pine_core::generator::ComponentKind;
use pine_core::tui::{CreateArgs, GenerateArgs, ModelArgs};
use pine_core::{Backend, Screen};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pine")]
#[command(about = "Flutter project generator with Pine architecture")]
#[command(version)]
pub struct Args {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip the Flutter installation check
    #[arg(long = "skip-flutter-check", global = true)]
    pub skip_flutter_check: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Flutter project
    Create(CliCreateArgs),
    /// Generate model, service, repository and BLoC from a JSON sample
    Model(CliModelArgs),
    /// Generate a feature (service, repository, BLoC)
    Generate(CliGenerateArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Project name (snake_case)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory the project is created in
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Organization (e.g., com.example)
    #[arg(short, long)]
    pub org: Option<String>,

    /// Project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Overwrite the project directory if it exists
    #[arg(short, long)]
    pub force: bool,

    /// Enable Firebase integration
    #[arg(long, conflicts_with = "supabase")]
    pub firebase: bool,

    /// Enable Supabase integration
    #[arg(long)]
    pub supabase: bool,

    /// Enable push notifications (requires --firebase)
    #[arg(long, conflicts_with = "supabase")]
    pub notifications: bool,

    /// Example screens (comma-separated: login,home,profile,settings)
    #[arg(short, long, value_delimiter = ',', value_enum)]
    pub screens: Option<Vec<Screen>>,

    /// YAML file with the project configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable interactive prompts
    #[arg(long = "no-interactive")]
    pub no_interactive: bool,

    /// Auto-confirm all prompts
    #[arg(short, long)]
    pub yes: bool,
}

impl CliCreateArgs {
    /// Reject flag combinations clap does not catch
    fn check(&self) -> Result<()> {
        if self.notifications && !self.firebase {
            anyhow::bail!("--notifications requires --firebase");
        }
        Ok(())
    }

    fn backend(&self) -> Option<Backend> {
        if self.firebase {
            Some(Backend::Firebase)
        } else if self.supabase {
            Some(Backend::Supabase)
        } else {
            None
        }
    }
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            backend: args.backend(),
            name: args.name,
            path: args.path,
            org: args.org,
            description: args.description,
            force: args.force,
            notifications: args.notifications,
            screens: args.screens,
            config: args.config,
            no_interactive: args.no_interactive,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliModelArgs {
    /// Model name
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Model name (alternative to the positional argument)
    #[arg(short = 'n', long = "name", conflicts_with = "name")]
    pub name_flag: Option<String>,

    /// JSON sample as a string
    #[arg(short, long, conflicts_with = "json_file")]
    pub json: Option<String>,

    /// Path to a JSON sample file
    #[arg(short = 'f', long = "json-file")]
    pub json_file: Option<PathBuf>,

    /// API endpoint (e.g., /api/users)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Fail instead of prompting for missing values
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliModelArgs> for ModelArgs {
    fn from(args: CliModelArgs) -> Self {
        ModelArgs {
            name: args.name.or(args.name_flag),
            json: args.json,
            json_file: args.json_file,
            endpoint: args.endpoint,
            project_dir: PathBuf::from("."),
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliGenerateArgs {
    /// Feature name
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Feature name (alternative to the positional argument)
    #[arg(short = 'n', long = "name", conflicts_with = "name")]
    pub name_flag: Option<String>,

    /// Component type
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<ComponentKind>,
}

impl From<CliGenerateArgs> for GenerateArgs {
    fn from(args: CliGenerateArgs) -> Self {
        GenerateArgs {
            name: args.name.or(args.name_flag),
            kind: args.kind,
            project_dir: PathBuf::from("."),
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        filter = filter.add_directive("pine_core=debug".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn print_banner() {
    println!();
    println!("  {}", "Pine CLI".green().bold());
    println!(
        "  {}",
        "Flutter Project Generator with Pine Architecture".dimmed()
    );
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose)?;
    tracing::debug!(version = pine_core::CLI_VERSION, "starting");

    print_banner();

    if let Some(Command::Create(create)) = &args.command {
        create.check()?;
    }

    let yes = match &args.command {
        Some(Command::Create(create)) => create.yes || create.no_interactive,
        Some(Command::Model(model)) => model.yes,
        _ => false,
    };
    pine_core::tui::ensure_flutter(args.skip_flutter_check, yes)?;

    let result = match args.command {
        Some(Command::Create(create_args)) => pine_core::run(create_args.into()).await,
        Some(Command::Model(model_args)) => pine_core::tui::run_model(model_args.into()).await,
        Some(Command::Generate(generate_args)) => {
            pine_core::tui::run_generate(generate_args.into()).await
        }
        // No subcommand provided, default to create behavior (interactive mode)
        None => pine_core::run(CreateArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

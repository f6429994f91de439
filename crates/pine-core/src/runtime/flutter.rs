//! Wrapper around the `flutter` command line tool

use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Flutter installation guide
pub const FLUTTER_DOCS_URL: &str = "https://docs.flutter.dev/get-started/install";

#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("flutter is not installed or not in PATH ({binary}): {source}")]
    NotInstalled {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed: {status}\n{output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },
}

/// Runs `flutter` subcommands in a working directory
#[derive(Debug, Clone)]
pub struct FlutterCli {
    binary: String,
    working_dir: PathBuf,
}

impl FlutterCli {
    pub fn new(binary: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Use the configured `flutter` executable (see [`crate::config::flutter_binary`])
    pub fn from_env(working_dir: impl Into<PathBuf>) -> Self {
        Self::new(crate::config::flutter_binary(), working_dir)
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Same executable, different working directory
    pub fn in_dir(&self, working_dir: impl Into<PathBuf>) -> Self {
        Self::new(self.binary.clone(), working_dir)
    }

    /// `flutter create` in the working directory
    pub async fn create(
        &self,
        project_name: &str,
        org: &str,
        overwrite: bool,
    ) -> Result<(), ToolchainError> {
        let args = create_args(project_name, org, overwrite);
        self.run(args.as_slice()).await
    }

    pub async fn pub_get(&self) -> Result<(), ToolchainError> {
        self.run(&["pub", "get"]).await
    }

    pub async fn gen_l10n(&self) -> Result<(), ToolchainError> {
        self.run(&["gen-l10n"]).await
    }

    pub async fn build_runner_build(&self) -> Result<(), ToolchainError> {
        self.run(BUILD_RUNNER_ARGS).await
    }

    /// Run `flutter <args>`, capturing stdout and stderr together
    pub async fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<(), ToolchainError> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let command = command_line(&self.binary, &args);
        tracing::debug!(%command, dir = %self.working_dir.display(), "running");

        let output = TokioCommand::new(&self.binary)
            .args(&args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ToolchainError::NotInstalled {
                binary: self.binary.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let status = match output.status.code() {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        };
        tracing::debug!(%command, %status, "command failed");

        Err(ToolchainError::CommandFailed {
            command,
            status,
            output: combined,
        })
    }
}

const BUILD_RUNNER_ARGS: &[&str] = &[
    "pub",
    "run",
    "build_runner",
    "build",
    "--delete-conflicting-outputs",
];

/// Arguments for `flutter create`
pub fn create_args(project_name: &str, org: &str, overwrite: bool) -> Vec<String> {
    let mut args = vec![
        "create".to_string(),
        "--org".to_string(),
        org.to_string(),
        "--project-name".to_string(),
        project_name.to_string(),
    ];
    if overwrite {
        args.push("--overwrite".to_string());
    }
    args.push(project_name.to_string());
    args
}

/// Display form of a command, as a user would type it
pub fn command_line(binary: &str, args: &[&str]) -> String {
    let program = Path::new(binary)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| binary.to_string());
    std::iter::once(program.as_str())
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Open the Flutter install guide in the default browser
pub fn open_docs() -> anyhow::Result<()> {
    println!(
        "{}",
        "Opening Flutter documentation in your browser...".cyan()
    );
    open::that(FLUTTER_DOCS_URL)?;
    Ok(())
}

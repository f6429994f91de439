//! Full project generation pipeline

use super::{FileWriter, ModelGenerator};
use crate::config::ProjectConfig;
use crate::runtime::FlutterCli;
use crate::templates::{backend, project, screens, Renderer};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Number of pipeline steps reported to the user
pub const TOTAL_STEPS: usize = 8;

/// Shown when step 8 fails so the user can finish by hand
pub const CODEGEN_HINT: &str = "Run: flutter pub run build_runner build --delete-conflicting-outputs";

/// Sink for pipeline progress
pub trait Reporter {
    fn step(&self, index: usize, total: usize, message: &str);
    fn success(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    /// Code the user should paste somewhere
    fn snippet(&self, title: &str, content: &str);
}

/// Reports progress through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn step(&self, index: usize, total: usize, message: &str) {
        tracing::info!("[{}/{}] {}", index, total, message);
    }

    fn success(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn snippet(&self, title: &str, content: &str) {
        tracing::info!("{}\n{}", title, content);
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub project_path: PathBuf,
    /// Files written by pine, relative to the project root
    pub files: Vec<String>,
    /// Whether localization and build_runner generation succeeded
    pub codegen_ok: bool,
}

pub struct ProjectGenerator {
    config: ProjectConfig,
    flutter: FlutterCli,
    renderer: Renderer,
}

impl ProjectGenerator {
    /// `flutter` runs in the config's target directory
    pub fn new(config: ProjectConfig) -> Result<Self> {
        let flutter = FlutterCli::from_env(config.target_dir());
        Self::with_flutter(config, flutter)
    }

    pub fn with_flutter(config: ProjectConfig, flutter: FlutterCli) -> Result<Self> {
        Ok(Self {
            config,
            flutter,
            renderer: Renderer::new()?,
        })
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub async fn generate(&self, reporter: &dyn Reporter) -> Result<GenerationReport> {
        self.config.validate()?;
        let cfg = &self.config;

        reporter.step(1, TOTAL_STEPS, "Creating Flutter project...");
        self.flutter
            .in_dir(cfg.target_dir())
            .create(&cfg.project_name, &cfg.organization, cfg.force)
            .await
            .context("Failed to create Flutter project")?;

        let project_path = cfg.project_path();
        let writer = FileWriter::new(&project_path);
        let flutter = self.flutter.in_dir(&project_path);
        let mut files = Vec::new();

        reporter.step(2, TOTAL_STEPS, "Updating pubspec.yaml...");
        let pubspec = project::render_pubspec(&self.renderer, cfg)?;
        writer
            .write_rendered(&pubspec)
            .await
            .context("Failed to update pubspec")?;
        files.push(pubspec.path);

        reporter.step(3, TOTAL_STEPS, "Creating folder structure...");
        for folder in project::FOLDERS {
            writer
                .ensure_dir(folder)
                .await
                .context("Failed to create folders")?;
        }

        reporter.step(4, TOTAL_STEPS, "Generating core files...");
        let core = project::render_core_files(&self.renderer, cfg)?;
        files.extend(
            writer
                .write_all(&core)
                .await
                .context("Failed to generate core files")?,
        );

        reporter.step(5, TOTAL_STEPS, "Installing dependencies...");
        flutter
            .pub_get()
            .await
            .context("Failed to install dependencies")?;

        if let Some(setup) = backend::render_backend(&self.renderer, cfg)? {
            let name = setup.backend.display_name();
            reporter.step(6, TOTAL_STEPS, &format!("Setting up {}...", name));
            files.extend(
                writer
                    .write_all(&setup.files)
                    .await
                    .with_context(|| format!("Failed to setup {}", name))?,
            );

            reporter.success(&format!("{} integration configured", name));
            reporter.info("Don't forget to:");
            for (i, step) in setup.next_steps.iter().enumerate() {
                reporter.info(&format!("{}. {}", i + 1, step));
            }
            reporter.snippet(
                &format!("Remember to add {} providers to lib/di/providers.dart:", name),
                &setup.providers,
            );
        }

        if !cfg.models.is_empty() {
            reporter.step(
                7,
                TOTAL_STEPS,
                &format!("Generating {} models...", cfg.models.len()),
            );
            for model in &cfg.models {
                let generator = ModelGenerator::from_config(model, &cfg.project_name)?;
                files.extend(
                    generator
                        .generate(&self.renderer, &writer)
                        .await
                        .with_context(|| format!("Failed to generate model {}", model.name))?,
                );
                reporter.success(&format!("Generated model: {}", model.name));
            }
        }

        reporter.step(7, TOTAL_STEPS, "Generating screens...");
        let title = screens::app_title(&cfg.project_name);
        for screen in cfg.selected_screens() {
            let file = screens::render_screen(&self.renderer, screen, &title)?;
            writer
                .write_rendered(&file)
                .await
                .context("Failed to generate screens")?;
            files.push(file.path);
            reporter.success(&format!("Generated {} screen", screen.display_name()));
        }

        reporter.step(8, TOTAL_STEPS, "Running code generation...");
        let codegen_ok = match run_codegen(&flutter).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "code generation failed");
                reporter.warning("Code generation had issues, but you can run it manually later");
                reporter.info(CODEGEN_HINT);
                false
            }
        };

        Ok(GenerationReport {
            project_path,
            files,
            codegen_ok,
        })
    }
}

async fn run_codegen(flutter: &FlutterCli) -> Result<()> {
    flutter.gen_l10n().await?;
    flutter.build_runner_build().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Backend, ModelConfig, NotificationService, Screen};
    use serde_json::json;
    use std::cell::RefCell;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingReporter {
        lines: RefCell<Vec<String>>,
    }

    impl RecordingReporter {
        fn push(&self, line: String) {
            self.lines.borrow_mut().push(line);
        }

        fn lines(&self) -> Vec<String> {
            self.lines.borrow().clone()
        }
    }

    impl Reporter for RecordingReporter {
        fn step(&self, index: usize, total: usize, message: &str) {
            self.push(format!("step {}/{} {}", index, total, message));
        }
        fn success(&self, message: &str) {
            self.push(format!("success {}", message));
        }
        fn info(&self, message: &str) {
            self.push(format!("info {}", message));
        }
        fn warning(&self, message: &str) {
            self.push(format!("warning {}", message));
        }
        fn snippet(&self, title: &str, _content: &str) {
            self.push(format!("snippet {}", title));
        }
    }

    fn config(target: &std::path::Path) -> ProjectConfig {
        ProjectConfig {
            project_name: "demo_app".to_string(),
            target_directory: target.to_path_buf(),
            backend: Backend::Firebase,
            notifications: Some(NotificationService::Fcm),
            models: vec![ModelConfig {
                name: "user".to_string(),
                sample: json!({"id": 1, "email": "a@b.c"}),
                endpoint: None,
            }],
            screens: vec![Screen::Login, Screen::Home],
            ..ProjectConfig::default()
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_pipeline_writes_project() {
        let dir = TempDir::new().unwrap();
        // `true` accepts any flutter subcommand and succeeds
        let generator =
            ProjectGenerator::with_flutter(config(dir.path()), FlutterCli::new("true", dir.path()))
                .unwrap();
        let reporter = RecordingReporter::default();

        let report = generator.generate(&reporter).await.unwrap();
        let root = dir.path().join("demo_app");

        assert_eq!(report.project_path, root);
        assert!(report.codegen_ok);
        for path in [
            "pubspec.yaml",
            "l10n.yaml",
            "lib/main.dart",
            "lib/utils/firebase_initializer.dart",
            "lib/utils/notification_service.dart",
            "lib/model/user.dart",
            "lib/ui/login/login_page.dart",
            "lib/ui/home/home_page.dart",
        ] {
            assert!(root.join(path).is_file(), "missing {path}");
            assert!(report.files.contains(&path.to_string()), "unreported {path}");
        }
        for folder in project::FOLDERS {
            assert!(root.join(folder).is_dir(), "missing {folder}");
        }
        assert!(!root.join("lib/ui/profile").exists());

        let lines = reporter.lines();
        assert_eq!(lines[0], "step 1/8 Creating Flutter project...");
        assert!(lines.contains(&"step 6/8 Setting up Firebase...".to_string()));
        assert!(lines.contains(&"info 2. Run: flutterfire configure".to_string()));
        assert!(lines.contains(&"success Generated model: user".to_string()));
        assert!(lines.contains(&"success Generated Home screen".to_string()));
        assert_eq!(lines.last().unwrap(), "step 8/8 Running code generation...");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_codegen_failure_is_a_warning() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let bin = dir.path().join("fake-flutter");
        std::fs::write(&bin, "#!/bin/sh\n[ \"$1\" = \"gen-l10n\" ] && exit 1\nexit 0\n").unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut cfg = config(dir.path());
        cfg.backend = Backend::None;
        cfg.notifications = None;
        cfg.models.clear();
        let generator = ProjectGenerator::with_flutter(
            cfg,
            FlutterCli::new(bin.to_string_lossy().into_owned(), dir.path()),
        )
        .unwrap();
        let reporter = RecordingReporter::default();

        let report = generator.generate(&reporter).await.unwrap();
        assert!(!report.codegen_ok);
        let lines = reporter.lines();
        assert!(!lines.iter().any(|l| l.starts_with("step 6/8")));
        assert!(lines.contains(&"step 8/8 Running code generation...".to_string()));
        assert!(lines.contains(
            &"warning Code generation had issues, but you can run it manually later".to_string()
        ));
        assert!(lines.contains(&format!("info {}", CODEGEN_HINT)));
        assert!(dir.path().join("demo_app/lib/main.dart").is_file());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_create_failure_aborts() {
        let dir = TempDir::new().unwrap();
        let generator =
            ProjectGenerator::with_flutter(config(dir.path()), FlutterCli::new("false", dir.path()))
                .unwrap();

        let err = generator.generate(&TracingReporter).await.unwrap_err();
        assert!(err.to_string().contains("Failed to create Flutter project"));
        assert!(!dir.path().join("demo_app/pubspec.yaml").exists());
    }

    #[tokio::test]
    async fn test_invalid_config_fails_before_running_flutter() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(dir.path());
        cfg.project_name = "Bad-Name".to_string();
        let generator = ProjectGenerator::with_flutter(
            cfg,
            FlutterCli::new("pine-test-no-such-flutter-binary", dir.path()),
        )
        .unwrap();

        let err = generator.generate(&TracingReporter).await.unwrap_err();
        assert!(!err.to_string().contains("Failed to create Flutter project"));
    }
}

//! Project skeleton: pubspec, app entry points, DI, theme, router, l10n

use super::{RenderedFile, Renderer};
use crate::config::{Backend, ProjectConfig};
use anyhow::Result;
use minijinja::context;
use serde::Serialize;

/// Dart SDK constraint written to pubspec.yaml
pub const DART_SDK_CONSTRAINT: &str = ">=3.0.0 <4.0.0";

/// Lower bound of [`DART_SDK_CONSTRAINT`]
pub const MIN_DART_SDK: &str = "3.0.0";

/// Locales an ARB file is generated for, with their greeting
const LOCALES: &[(&str, &str)] = &[("en", "Hello"), ("it", "Ciao")];

/// Folder skeleton created under the project root
pub const FOLDERS: &[&str] = &[
    "lib/di",
    "lib/l10n",
    "lib/mappers",
    "lib/model",
    "lib/network/interceptor",
    "lib/network/service",
    "lib/repositories",
    "lib/routers",
    "lib/state_management/bloc",
    "lib/state_management/cubit",
    "lib/state_management/provider",
    "lib/ui",
    "lib/utils",
    "lib/theme",
];

/// One pubspec.yaml dependency entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PubDependency {
    pub name: &'static str,
    pub version: Option<&'static str>,
    pub sdk: Option<&'static str>,
}

const fn pkg(name: &'static str, version: &'static str) -> PubDependency {
    PubDependency {
        name,
        version: Some(version),
        sdk: None,
    }
}

const fn sdk(name: &'static str) -> PubDependency {
    PubDependency {
        name,
        version: None,
        sdk: Some("flutter"),
    }
}

const BASE_DEPENDENCIES: &[PubDependency] = &[
    sdk("flutter"),
    sdk("flutter_localizations"),
    pkg("cupertino_icons", "^1.0.8"),
    pkg("logger", "^2.5.0"),
    pkg("flutter_secure_storage", "^9.2.2"),
    pkg("flutter_bloc", "^8.1.6"),
    pkg("hydrated_bloc", "^9.1.5"),
    pkg("equatable", "^2.0.7"),
    pkg("font_awesome_flutter", "^10.8.0"),
    pkg("pine", "^1.0.3"),
    pkg("provider", "^6.0.5"),
    pkg("retrofit", "^4.4.1"),
    pkg("dio", "^5.7.0"),
    pkg("pretty_dio_logger", "^1.4.0"),
    pkg("auto_route", "^9.2.2"),
    pkg("cached_network_image", "^3.2.3"),
    pkg("json_annotation", "^4.9.0"),
    pkg("sqlite3_flutter_libs", "^0.5.27"),
    pkg("path_provider", "^2.1.5"),
    pkg("path", "^1.9.0"),
    pkg("shared_preferences", "^2.3.3"),
    pkg("intl", "^0.20.2"),
    pkg("google_fonts", "^6.3.2"),
    pkg("flutter_local_notifications", "^18.0.1"),
];

const FIREBASE_DEPENDENCIES: &[PubDependency] = &[
    pkg("firebase_core", "^4.1.1"),
    pkg("firebase_auth", "^6.1.0"),
    pkg("cloud_firestore", "^6.0.2"),
    pkg("google_sign_in", "^7.2.0"),
];

const FCM_DEPENDENCY: PubDependency = pkg("firebase_messaging", "^15.1.6");

const SUPABASE_DEPENDENCY: PubDependency = pkg("supabase_flutter", "^2.9.1");

const DEV_DEPENDENCIES: &[PubDependency] = &[
    sdk("flutter_test"),
    pkg("flutter_lints", "^5.0.0"),
    pkg("build_runner", "^2.4.13"),
    pkg("bloc_test", "^9.1.0"),
    pkg("retrofit_generator", "^9.1.5"),
    pkg("auto_route_generator", "^9.0.0"),
    pkg("http_mock_adapter", "^0.6.1"),
    pkg("data_fixture_dart", "^2.2.0"),
    pkg("mockito", "^5.3.2"),
    pkg("json_serializable", "^6.7.1"),
];

/// Runtime dependencies for the configured backend and features
pub fn dependencies(config: &ProjectConfig) -> Vec<PubDependency> {
    let mut deps = BASE_DEPENDENCIES.to_vec();
    match config.backend {
        Backend::Firebase => {
            deps.extend_from_slice(FIREBASE_DEPENDENCIES);
            if config.notifications_enabled() {
                deps.push(FCM_DEPENDENCY);
            }
        }
        Backend::Supabase => deps.push(SUPABASE_DEPENDENCY),
        Backend::None => {}
    }
    deps
}

pub fn render_pubspec(renderer: &Renderer, config: &ProjectConfig) -> Result<RenderedFile> {
    renderer.render_file(
        "project/pubspec.yaml",
        "pubspec.yaml",
        context! {
            name => config.project_name,
            description => config.description_or_default(),
            sdk_constraint => DART_SDK_CONSTRAINT,
            dependencies => dependencies(config),
            dev_dependencies => DEV_DEPENDENCIES,
        },
    )
}

/// Core application files written after the pubspec
pub fn render_core_files(renderer: &Renderer, config: &ProjectConfig) -> Result<Vec<RenderedFile>> {
    let package = config.project_name.as_str();
    let routes: Vec<String> = config
        .selected_screens()
        .iter()
        .map(|s| s.route_name())
        .collect();
    let locales: Vec<&str> = LOCALES.iter().map(|(locale, _)| *locale).collect();

    let mut files = vec![
        renderer.render_file("project/l10n.yaml", "l10n.yaml", context! {})?,
        renderer.render_file(
            "project/main.dart",
            "lib/main.dart",
            context! { package, backend => config.backend.key() },
        )?,
        renderer.render_file(
            "project/app.dart",
            "lib/app.dart",
            context! { package, locales },
        )?,
        renderer.render_file(
            "project/di/dependency_injector.dart",
            "lib/di/dependency_injector.dart",
            context! {},
        )?,
        renderer.render_file("project/di/blocs.dart", "lib/di/blocs.dart", context! {})?,
        renderer.render_file("project/di/mappers.dart", "lib/di/mappers.dart", context! {})?,
        renderer.render_file("project/di/providers.dart", "lib/di/providers.dart", context! {})?,
        renderer.render_file(
            "project/di/repositories.dart",
            "lib/di/repositories.dart",
            context! {},
        )?,
        renderer.render_file(
            "project/light_theme.dart",
            "lib/theme/light_theme.dart",
            context! {},
        )?,
        renderer.render_file(
            "project/app_router.dart",
            "lib/routers/app_router.dart",
            context! { package, routes },
        )?,
    ];

    for (locale, hello) in LOCALES {
        files.push(renderer.render_file(
            "project/app.arb",
            format!("lib/l10n/app_{}.arb", locale),
            context! { locale, hello, app_title => config.project_name },
        )?);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NotificationService, Screen};

    fn config(backend: Backend) -> ProjectConfig {
        ProjectConfig {
            project_name: "my_app".to_string(),
            backend,
            ..ProjectConfig::default()
        }
    }

    fn find<'a>(files: &'a [RenderedFile], path: &str) -> &'a RenderedFile {
        files
            .iter()
            .find(|f| f.path == path)
            .unwrap_or_else(|| panic!("{path} not rendered"))
    }

    #[test]
    fn test_dependencies_follow_backend() {
        let names = |cfg: &ProjectConfig| -> Vec<&str> {
            dependencies(cfg).iter().map(|d| d.name).collect()
        };

        let none = names(&config(Backend::None));
        assert!(none.contains(&"flutter_bloc"));
        assert!(!none.contains(&"firebase_core"));
        assert!(!none.contains(&"supabase_flutter"));

        let firebase = names(&config(Backend::Firebase));
        assert!(firebase.contains(&"firebase_auth"));
        assert!(!firebase.contains(&"firebase_messaging"));

        let mut with_fcm = config(Backend::Firebase);
        with_fcm.notifications = Some(NotificationService::Fcm);
        assert!(names(&with_fcm).contains(&"firebase_messaging"));

        let supabase = names(&config(Backend::Supabase));
        assert!(supabase.contains(&"supabase_flutter"));
        assert!(!supabase.contains(&"firebase_core"));
    }

    #[test]
    fn test_render_pubspec() {
        let renderer = Renderer::new().unwrap();
        let file = render_pubspec(&renderer, &config(Backend::Supabase)).unwrap();
        assert_eq!(file.path, "pubspec.yaml");
        assert!(file.contents.starts_with("name: my_app\n"));
        assert!(file.contents.contains(DEFAULT_DESCRIPTION_LINE));
        assert!(file.contents.contains("  sdk: '>=3.0.0 <4.0.0'"));
        assert!(file.contents.contains("  flutter:\n    sdk: flutter\n"));
        assert!(file.contents.contains("  supabase_flutter: ^2.9.1\n"));
        assert!(file.contents.contains("  build_runner: ^2.4.13\n"));
    }

    const DEFAULT_DESCRIPTION_LINE: &str =
        "description: \"A new Flutter project with Pine architecture.\"\n";

    #[test]
    fn test_rendered_pubspec_is_valid_yaml() {
        let renderer = Renderer::new().unwrap();
        let mut cfg = config(Backend::Firebase);
        cfg.notifications = Some(NotificationService::Fcm);
        let file = render_pubspec(&renderer, &cfg).unwrap();

        let doc: serde_yaml::Value = serde_yaml::from_str(&file.contents).unwrap();
        assert_eq!(doc["name"].as_str(), Some("my_app"));
        assert_eq!(
            doc["dependencies"]["firebase_messaging"].as_str(),
            Some("^15.1.6")
        );
        assert_eq!(doc["dev_dependencies"]["flutter_test"]["sdk"].as_str(), Some("flutter"));
        assert_eq!(doc["flutter"]["generate"].as_bool(), Some(true));
    }

    #[test]
    fn test_pubspec_description_is_quoted() {
        let renderer = Renderer::new().unwrap();
        for description in [
            "Shop: the app",
            "Orders # and returns",
            r#"The "best" app's home"#,
            "- starts like a list",
            "<b>bold</b> & more",
        ] {
            let mut cfg = config(Backend::None);
            cfg.description = description.to_string();
            let file = render_pubspec(&renderer, &cfg).unwrap();

            let doc: serde_yaml::Value = serde_yaml::from_str(&file.contents)
                .unwrap_or_else(|e| panic!("{description:?}: {e}"));
            assert_eq!(doc["description"].as_str(), Some(description));
            assert_eq!(doc["name"].as_str(), Some("my_app"));
        }
    }

    #[test]
    fn test_core_files() {
        let renderer = Renderer::new().unwrap();
        let files = render_core_files(&renderer, &config(Backend::None)).unwrap();

        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        for expected in [
            "l10n.yaml",
            "lib/main.dart",
            "lib/app.dart",
            "lib/di/dependency_injector.dart",
            "lib/di/blocs.dart",
            "lib/di/mappers.dart",
            "lib/di/providers.dart",
            "lib/di/repositories.dart",
            "lib/theme/light_theme.dart",
            "lib/routers/app_router.dart",
            "lib/l10n/app_en.arb",
            "lib/l10n/app_it.arb",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }

        let app = find(&files, "lib/app.dart");
        assert!(app.contents.contains("import 'package:my_app/routers/app_router.dart';"));
        assert!(app.contents.contains("Locale('it'),"));

        let main = find(&files, "lib/main.dart");
        assert!(main.contents.contains("void main() {\n  runApp(const App());\n}"));
    }

    #[test]
    fn test_main_initializes_backend() {
        let renderer = Renderer::new().unwrap();
        let files = render_core_files(&renderer, &config(Backend::Firebase)).unwrap();
        let main = find(&files, "lib/main.dart");
        assert!(main.contents.contains("await FirebaseInitializer.initialize();"));

        let files = render_core_files(&renderer, &config(Backend::Supabase)).unwrap();
        let main = find(&files, "lib/main.dart");
        assert!(main.contents.contains("await SupabaseConfig.initialize();"));
    }

    #[test]
    fn test_router_registers_selected_screens() {
        let renderer = Renderer::new().unwrap();
        let mut cfg = config(Backend::None);
        cfg.screens = vec![Screen::Settings, Screen::Home];
        let files = render_core_files(&renderer, &cfg).unwrap();
        let router = find(&files, "lib/routers/app_router.dart");

        assert!(router
            .contents
            .contains("AutoRoute(page: HomeRoute.page, initial: true),"));
        assert!(router.contents.contains("AutoRoute(page: SettingsRoute.page),"));
        assert!(!router.contents.contains("LoginRoute"));
    }

    #[test]
    fn test_arb_files_are_valid_json() {
        let renderer = Renderer::new().unwrap();
        let files = render_core_files(&renderer, &config(Backend::None)).unwrap();
        let arb: serde_json::Value =
            serde_json::from_str(&find(&files, "lib/l10n/app_it.arb").contents).unwrap();
        assert_eq!(arb["appTitle"], "my_app");
        assert_eq!(arb["hello"], "Ciao");
        assert_eq!(arb["@@locale"], "it");
    }
}

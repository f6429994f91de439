//! Backend integration files (Firebase, Supabase)

use super::{RenderedFile, Renderer};
use crate::config::{Backend, ProjectConfig};
use anyhow::Result;
use minijinja::context;

const FIREBASE_NEXT_STEPS: &[&str] = &[
    "Create a Firebase project at https://console.firebase.google.com",
    "Run: flutterfire configure",
    "Follow the setup instructions",
];

const SUPABASE_NEXT_STEPS: &[&str] = &[
    "Create a Supabase project at https://supabase.com",
    "Get your project URL and anon key",
    "Update lib/utils/supabase_client.dart with your credentials",
];

/// Rendered backend integration
#[derive(Debug, Clone)]
pub struct BackendSetup {
    pub backend: Backend,
    pub files: Vec<RenderedFile>,
    /// Provider entries to paste into `lib/di/providers.dart`
    pub providers: String,
    /// Manual steps left to the user
    pub next_steps: &'static [&'static str],
}

/// Render the backend files for the configured backend, if any
pub fn render_backend(renderer: &Renderer, config: &ProjectConfig) -> Result<Option<BackendSetup>> {
    let setup = match config.backend {
        Backend::None => return Ok(None),
        Backend::Firebase => render_firebase(renderer, config)?,
        Backend::Supabase => render_supabase(renderer)?,
    };
    Ok(Some(setup))
}

fn render_firebase(renderer: &Renderer, config: &ProjectConfig) -> Result<BackendSetup> {
    let package = config.project_name.as_str();
    let notifications = config.notifications_enabled();

    let mut files = vec![
        renderer.render_file(
            "backend/firebase_initializer.dart",
            "lib/utils/firebase_initializer.dart",
            context! { package },
        )?,
        renderer.render_file(
            "backend/firebase_auth_service.dart",
            "lib/network/service/auth_service.dart",
            context! {},
        )?,
    ];

    if notifications {
        files.push(renderer.render_file(
            "backend/notification_service.dart",
            "lib/utils/notification_service.dart",
            context! {
                channel_id => format!("{}_notifications", package),
                channel_name => "Notifications",
            },
        )?);
    }

    Ok(BackendSetup {
        backend: Backend::Firebase,
        files,
        providers: renderer.render("backend/firebase_providers.dart", context! { notifications })?,
        next_steps: FIREBASE_NEXT_STEPS,
    })
}

fn render_supabase(renderer: &Renderer) -> Result<BackendSetup> {
    Ok(BackendSetup {
        backend: Backend::Supabase,
        files: vec![
            renderer.render_file(
                "backend/supabase_client.dart",
                "lib/utils/supabase_client.dart",
                context! {},
            )?,
            renderer.render_file(
                "backend/supabase_auth_service.dart",
                "lib/network/service/supabase_auth_service.dart",
                context! {},
            )?,
        ],
        providers: renderer.render("backend/supabase_providers.dart", context! {})?,
        next_steps: SUPABASE_NEXT_STEPS,
    })
}

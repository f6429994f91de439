//! Flutter toolchain detection

use std::process::Command;

/// Toolchain detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub dart_version: Option<String>,
    pub available: bool,
}

/// Check if Flutter is available, using the given executable
pub fn check_flutter(binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let text = String::from_utf8_lossy(&out.stdout);
            tracing::debug!(binary, output = %text.trim(), "flutter --version");
            RuntimeInfo {
                name: "Flutter",
                version: parse_flutter_version(&text),
                dart_version: parse_dart_version(&text),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Flutter",
            version: None,
            dart_version: None,
            available: false,
        },
    }
}

/// Version following the `Flutter` token of `flutter --version`
pub fn parse_flutter_version(output: &str) -> Option<String> {
    token_after(output, "Flutter")
}

/// Version following the `Dart` token of `flutter --version`
pub fn parse_dart_version(output: &str) -> Option<String> {
    token_after(output, "Dart")
}

fn token_after(output: &str, marker: &str) -> Option<String> {
    let mut tokens = output.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == marker {
            return tokens
                .next()
                .filter(|v| v.starts_with(|c: char| c.is_ascii_digit()))
                .map(str::to_string);
        }
    }
    None
}

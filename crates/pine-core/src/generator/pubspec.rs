//! Reading an existing Flutter project's pubspec.yaml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const PUBSPEC_FILE: &str = "pubspec.yaml";

#[derive(Debug, Deserialize)]
struct Pubspec {
    name: Option<String>,
}

/// Whether `dir` looks like a Flutter project root
pub fn is_flutter_project(dir: &Path) -> bool {
    dir.join(PUBSPEC_FILE).is_file()
}

/// Package name declared in `<dir>/pubspec.yaml`
pub fn read_package_name(dir: &Path) -> Result<String> {
    let path = dir.join(PUBSPEC_FILE);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_package_name(&content).with_context(|| format!("Invalid {}", path.display()))
}

/// Extract `name` from pubspec.yaml contents
pub fn parse_package_name(content: &str) -> Result<String> {
    let pubspec: Pubspec = serde_yaml::from_str(content).context("Failed to parse YAML")?;
    match pubspec.name.map(|n| n.trim().to_string()) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => anyhow::bail!("package name not found in pubspec.yaml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_package_name() {
        let content = "name: coffee_shop\ndescription: Coffee\nversion: 1.0.0+1\n";
        assert_eq!(parse_package_name(content).unwrap(), "coffee_shop");
    }

    #[test]
    fn test_parse_missing_name() {
        let err = parse_package_name("description: nothing\n").unwrap_err();
        assert!(err.to_string().contains("package name not found"));
    }

    #[test]
    fn test_read_package_name_from_dir() {
        let dir = TempDir::new().unwrap();
        assert!(!is_flutter_project(dir.path()));
        assert!(read_package_name(dir.path()).is_err());

        std::fs::write(dir.path().join(PUBSPEC_FILE), "name: my_app\n").unwrap();
        assert!(is_flutter_project(dir.path()));
        assert_eq!(read_package_name(dir.path()).unwrap(), "my_app");
    }
}

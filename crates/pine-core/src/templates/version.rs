//! Dart SDK compatibility with the generated pubspec constraint

use anyhow::Result;
use semver::Version;

/// Compare the detected Dart SDK against the minimum the templates require.
/// Returns a warning message if the SDK is older.
pub fn check_compatibility(dart_version: &str, min_version: &str) -> Option<String> {
    let dart_ver = parse_version(dart_version).ok()?;
    let min_ver = parse_version(min_version).ok()?;

    if dart_ver < min_ver {
        Some(format!(
            "Warning: generated projects require Dart SDK {} or newer.\n\
             You are running Dart {}.\n\
             Consider updating: flutter upgrade",
            min_version, dart_version
        ))
    } else {
        None
    }
}

/// Parse a version string, tolerating a leading `v` and pre-release tags
/// such as `3.5.0-180.3.beta`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dart_older_than_required() {
        let warning = check_compatibility("2.19.6", "3.0.0");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("3.0.0"));
    }

    #[test]
    fn test_dart_same_as_required() {
        assert!(check_compatibility("3.0.0", "3.0.0").is_none());
    }

    #[test]
    fn test_dart_newer_than_required() {
        assert!(check_compatibility("3.5.4", "3.0.0").is_none());
    }

    #[test]
    fn test_invalid_versions() {
        // Should return None (no warning) for invalid versions
        assert!(check_compatibility("unknown", "3.0.0").is_none());
    }

    #[test]
    fn test_parse_version_prefix_and_prerelease() {
        assert_eq!(parse_version("v3.1.0").unwrap(), Version::new(3, 1, 0));
        assert!(parse_version("3.5.0-180.3.beta").unwrap().pre.len() > 0);
    }
}

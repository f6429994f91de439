//! Identifier case conversion and project name validation
//!
//! An [`Identifier`] keeps the name exactly as the user typed it and derives
//! every case variant on demand from the same word list, so the variants are
//! always consistent with each other.

use thiserror::Error;

/// Dart/Flutter package names that cannot be used for a new project
const RESERVED_NAMES: &[&str] = &[
    "test",
    "flutter",
    "dart",
    "build",
    "integration_test",
    "flutter_test",
    "flutter_driver",
    "sky_engine",
];

/// A human-supplied name rendered in several case conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    original: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            original: name.into(),
        }
    }

    /// The name as supplied
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Words recovered from the original name, in order, case preserved
    pub fn words(&self) -> Vec<String> {
        split_words(&self.original)
    }

    /// `blog_post`
    pub fn snake_case(&self) -> String {
        self.join_lower("_")
    }

    /// `blog-post`
    pub fn kebab_case(&self) -> String {
        self.join_lower("-")
    }

    /// `BLOG_POST`
    pub fn screaming_snake_case(&self) -> String {
        self.words()
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// `BlogPost`
    pub fn pascal_case(&self) -> String {
        self.words().iter().map(|w| capitalize(w)).collect()
    }

    /// `blogPost`
    pub fn camel_case(&self) -> String {
        self.words()
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect()
    }

    fn join_lower(&self, separator: &str) -> String {
        self.words()
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

/// Split a name into words.
///
/// Any non-alphanumeric character separates words. A new word also starts at
/// an uppercase letter following a lowercase letter or a digit, and at the
/// last letter of an uppercase run when a lowercase letter follows it
/// (`HTTPServer` splits into `HTTP` and `Server`).
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // current is non-empty, so chars[i - 1] is the previous alphanumeric
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Rejected project name or organization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("project name cannot be empty")]
    EmptyName,

    #[error("project name cannot contain spaces")]
    NameContainsSpaces,

    #[error("project name should use underscores instead of dashes")]
    NameContainsDashes,

    #[error("project name must start with a letter")]
    NameMustStartWithLetter,

    #[error("'{0}' is a reserved name and cannot be used. Please choose a different name")]
    ReservedName(String),

    #[error("organization cannot be empty")]
    EmptyOrganization,

    #[error("organization must be in format: com.example")]
    OrganizationFormat,

    #[error("'{0}' contains no letters or digits")]
    NoWords(String),
}

impl ValidationError {
    /// Name of the configuration field this error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyOrganization | ValidationError::OrganizationFormat => {
                "organization"
            }
            _ => "name",
        }
    }
}

/// Check that a project name is usable as a Flutter package name
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.contains(' ') {
        return Err(ValidationError::NameContainsSpaces);
    }
    if name.contains('-') {
        return Err(ValidationError::NameContainsDashes);
    }
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(ValidationError::NameMustStartWithLetter);
    }
    if RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(name)) {
        return Err(ValidationError::ReservedName(name.to_string()));
    }
    Ok(())
}

/// Identifier for a model or feature name, rejecting names with no words
pub fn parse_component_name(name: &str) -> Result<Identifier, ValidationError> {
    let identifier = Identifier::new(name.trim());
    if identifier.words().is_empty() {
        return Err(ValidationError::NoWords(name.to_string()));
    }
    Ok(identifier)
}

/// Check that an organization is in reverse domain notation
pub fn validate_organization(org: &str) -> Result<(), ValidationError> {
    if org.is_empty() {
        return Err(ValidationError::EmptyOrganization);
    }
    if org.split('.').count() < 2 {
        return Err(ValidationError::OrganizationFormat);
    }
    Ok(())
}

//! File output rooted at a project directory

use crate::templates::RenderedFile;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes files relative to a base directory, creating parents as needed
#[derive(Debug, Clone)]
pub struct FileWriter {
    base_dir: PathBuf,
}

impl FileWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn full_path(&self, relative_path: &str) -> PathBuf {
        self.base_dir.join(relative_path)
    }

    /// Write a file, creating its parent directories
    pub async fn write_file(&self, relative_path: &str, contents: &str) -> Result<()> {
        let target_path = self.full_path(relative_path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        tracing::debug!(path = %target_path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }

    pub async fn write_rendered(&self, file: &RenderedFile) -> Result<()> {
        self.write_file(&file.path, &file.contents).await
    }

    /// Write every rendered file, returning their relative paths
    pub async fn write_all(&self, files: &[RenderedFile]) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            self.write_rendered(file).await?;
            written.push(file.path.clone());
        }
        Ok(written)
    }

    pub async fn ensure_dir(&self, relative_path: &str) -> Result<()> {
        let dir = self.full_path(relative_path);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))
    }

    pub async fn exists(&self, relative_path: &str) -> bool {
        fs::try_exists(self.full_path(relative_path))
            .await
            .unwrap_or(false)
    }

    pub async fn read_to_string(&self, relative_path: &str) -> Result<String> {
        let path = self.full_path(relative_path);
        fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}

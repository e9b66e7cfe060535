//! Config files on disk for tests.

use std::path::{Path, PathBuf};

use siegel_config::AppConfig;
use tempfile::TempDir;

/// A TOML config written into a temporary directory.
///
/// The directory is removed when this value is dropped, including on panic.
pub struct TempConfig {
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TempConfig {
    /// Write `toml_content` to `siegel.toml` in a fresh temp directory.
    pub async fn with_toml(toml_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("siegel.toml");
        tokio::fs::write(&path, toml_content)
            .await
            .expect("failed to write test config");
        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Path of the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the file through [`AppConfig::load`].
    pub async fn load(&self) -> AppConfig {
        AppConfig::load(&self.path)
            .await
            .expect("failed to parse test config")
    }

    /// Overwrite the file with new content.
    pub async fn rewrite(&self, toml_content: &str) {
        tokio::fs::write(&self.path, toml_content)
            .await
            .expect("failed to write updated config");
    }
}

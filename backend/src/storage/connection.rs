use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the directory that holds the application's files
#[derive(Debug, Clone)]
pub struct FileConnection {
    base_directory: PathBuf,
}

impl FileConnection {
    /// Open a data directory, creating it if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of a file directly under the data directory
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("fin");

        let connection = FileConnection::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(connection.base_directory(), nested.as_path());
        assert_eq!(connection.file_path("preferences.yaml"), nested.join("preferences.yaml"));
    }
}

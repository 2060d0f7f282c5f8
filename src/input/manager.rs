//! Input manager for loading resume records from disk

use crate::analysis::record::ResumeRecord;
use crate::config::BatchConfig;
use crate::error::{Result, ResumeScorerError};
use crate::input::file_detector::FileType;
use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct InputManager {
    extensions: Vec<String>,
    recursive: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&BatchConfig::default())
    }

    pub fn from_config(config: &BatchConfig) -> Self {
        Self {
            extensions: config.extensions.iter().map(|e| e.to_lowercase()).collect(),
            recursive: config.recursive,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Load a resume record from a JSON or TOML file
    pub fn load_record(&self, path: &Path) -> Result<ResumeRecord> {
        if !path.exists() {
            return Err(ResumeScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let content = std::fs::read_to_string(path)?;

        let record = match file_type {
            FileType::Json => {
                info!("Reading JSON resume record: {}", path.display());
                serde_json::from_str(&content)?
            }
            FileType::Toml => {
                info!("Reading TOML resume record: {}", path.display());
                toml::from_str(&content)?
            }
            FileType::Unknown => {
                return Err(ResumeScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(record)
    }

    /// Find resume files under a directory, sorted by path
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(ResumeScorerError::InvalidInput(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).max_depth(max_depth) {
            let entry = entry.map_err(|e| {
                ResumeScorerError::InvalidInput(format!("Failed to read {}: {}", dir.display(), e))
            })?;

            if entry.file_type().is_file() && self.has_allowed_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        debug!("Discovered {} resume files in {}", files.len(), dir.display());
        Ok(files)
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.contains(&ext) && FileType::from_extension(&ext) != FileType::Unknown
            })
            .unwrap_or(false)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeScorerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_and_toml() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("a.json");
        let toml_path = dir.path().join("b.toml");
        fs::write(&json_path, r#"{"summary": "hello", "skills": ["Rust"]}"#).unwrap();
        fs::write(&toml_path, "summary = \"hello\"\nskills = [\"Rust\"]\n").unwrap();

        let manager = InputManager::new();
        let from_json = manager.load_record(&json_path).unwrap();
        let from_toml = manager.load_record(&toml_path).unwrap();
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let manager = InputManager::new();

        assert!(matches!(
            manager.load_record(&dir.path().join("missing.json")),
            Err(ResumeScorerError::InvalidInput(_))
        ));

        let pdf = dir.path().join("resume.pdf");
        fs::write(&pdf, "%PDF").unwrap();
        assert!(matches!(
            manager.load_record(&pdf),
            Err(ResumeScorerError::UnsupportedFormat(_))
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            manager.load_record(&broken),
            Err(ResumeScorerError::Serialization(_))
        ));
    }

    #[test]
    fn test_discover_respects_recursion() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("one.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("nested").join("two.toml"), "").unwrap();

        let flat = InputManager::new().discover(dir.path()).unwrap();
        assert_eq!(flat, vec![dir.path().join("one.json")]);

        let deep = InputManager::new().with_recursive(true).discover(dir.path()).unwrap();
        assert_eq!(deep.len(), 2);
    }
}

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for a photo-sorting run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory to receive organised photos, created if absent
    pub destination: PathBuf,

    /// Directories to scan recursively for JPEG files
    pub sources: Vec<PathBuf>,

    /// Whether to plan and report without touching the filesystem
    pub dry_run: bool,

    /// Number of threads for metadata extraction (0 = auto)
    pub threads: usize,

    /// Upper bound on a single metadata-extraction call
    pub extraction_timeout: Duration,
}

impl Config {
    pub fn new(destination: impl Into<PathBuf>, sources: Vec<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            sources,
            ..Self::default()
        }
    }

    /// Check that the configuration describes a runnable job
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::Configuration(
                "at least one source directory is required".to_string(),
            ));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(Error::Configuration(
                "destination must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination: PathBuf::new(),
            sources: Vec::new(),
            dry_run: false,
            threads: 0, // Auto
            extraction_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_sources() {
        let config = Config::new("photos", vec![]);
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_validate_accepts_minimal_config() {
        let config = Config::new("photos", vec![PathBuf::from("camera")]);
        assert!(config.validate().is_ok());
    }
}

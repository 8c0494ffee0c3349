//! Path management for GigForge
//!
//! ## Path Resolution Order
//!
//! 1. `GIGFORGE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/gigforge` or `~/.config/gigforge`
//! 3. Windows: `%APPDATA%\gigforge`

use std::path::{Path, PathBuf};

use crate::error::GigForgeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "GIGFORGE_DATA_DIR";

/// Locations of GigForge's settings, history, templates and fonts
#[derive(Debug, Clone)]
pub struct GigForgePaths {
    base_dir: PathBuf,
}

impl GigForgePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory is known.
    pub fn new() -> Result<Self, GigForgeError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `config.json`
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// `history.log` (JSONL)
    pub fn history_log(&self) -> PathBuf {
        self.base_dir.join("history.log")
    }

    /// User overrides for the built-in templates
    pub fn templates_dir(&self) -> PathBuf {
        self.base_dir.join("templates")
    }

    /// Preferred TrueType faces for promo images
    pub fn fonts_dir(&self) -> PathBuf {
        self.base_dir.join("fonts")
    }

    /// Create the base, templates and fonts directories
    pub fn ensure_directories(&self) -> Result<(), GigForgeError> {
        for dir in [self.base_dir.clone(), self.templates_dir(), self.fonts_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                GigForgeError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Whether `gigforge init` has written a settings file
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, GigForgeError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var_os("HOME").ok_or_else(|| {
                GigForgeError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("gigforge"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, GigForgeError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| GigForgeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("gigforge"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.history_log(), temp_dir.path().join("history.log"));
        assert_eq!(paths.templates_dir(), temp_dir.path().join("templates"));
        assert_eq!(paths.fonts_dir(), temp_dir.path().join("fonts"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = GigForgePaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GigForgePaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.templates_dir().is_dir());
        assert!(paths.fonts_dir().is_dir());
        assert!(!paths.is_initialized());
    }
}

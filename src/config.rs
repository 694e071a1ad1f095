//! Configuration for folio paths and runtime settings.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (FOLIO_HOME, FOLIO_REDUCED_MOTION)
//! 2. Config file (.folio/config.yaml)
//! 3. Defaults (~/.folio)
//!
//! Config file discovery:
//! - Searches current directory and parents for .folio/config.yaml
//! - Paths in config file are relative to the config file's parent directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::theme::ThemeMode;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub theme: Option<ThemeConfig>,
    #[serde(default)]
    pub animator: Option<AnimatorConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to config file)
    pub home: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Mode applied when nothing valid was persisted
    pub default_mode: Option<ThemeMode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimatorConfig {
    pub tick_ms: Option<u64>,
    pub reduced_motion: Option<bool>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to folio home (preference storage)
    pub home: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Theme defaults
    pub theme: ThemeSettings,
    /// Animator settings
    pub animator: AnimatorSettings,
}

#[derive(Debug, Clone)]
pub struct ThemeSettings {
    pub default_mode: ThemeMode,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::Auto,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimatorSettings {
    /// Tick interval in milliseconds (default: 1000)
    pub tick_ms: u64,
    /// Reduced-motion override; None means not configured
    pub reduced_motion: Option<bool>,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            reduced_motion: None,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".folio").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    // Default home directory
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".folio");

    // Check for config file
    let config_file = find_config_file();

    let (home, theme, animator) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Resolve home path
        let home = if let Ok(env_home) = std::env::var("FOLIO_HOME") {
            PathBuf::from(env_home)
        } else if let Some(ref home_path) = config.paths.home {
            // home is relative to the .folio/ directory
            let folio_dir = config_path.parent().unwrap_or(Path::new("."));
            resolve_path(folio_dir, home_path)
        } else {
            default_home.clone()
        };

        let theme = ThemeSettings {
            default_mode: config
                .theme
                .as_ref()
                .and_then(|t| t.default_mode)
                .unwrap_or(ThemeMode::Auto),
        };

        let animator = AnimatorSettings {
            tick_ms: config
                .animator
                .as_ref()
                .and_then(|a| a.tick_ms)
                .unwrap_or(1000),
            reduced_motion: config.animator.as_ref().and_then(|a| a.reduced_motion),
        };

        (home, theme, animator)
    } else {
        // No config file - use env vars or defaults
        let home = std::env::var("FOLIO_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_home.clone());

        (home, ThemeSettings::default(), AnimatorSettings::default())
    };

    Ok(ResolvedConfig {
        home,
        config_file,
        theme,
        animator,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

/// Get the folio home directory.
pub fn folio_home() -> Result<PathBuf> {
    Ok(config()?.home.clone())
}

/// Get the preferences path ($FOLIO_HOME/preferences.json)
pub fn preferences_path() -> Result<PathBuf> {
    Ok(config()?.home.join("preferences.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let folio_dir = temp.path().join(".folio");
        std::fs::create_dir_all(&folio_dir).unwrap();

        let config_path = folio_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
paths:
  home: ./
theme:
  default_mode: dark
animator:
  tick_ms: 250
  reduced_motion: true
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.home, Some("./".to_string()));
        assert_eq!(config.theme.unwrap().default_mode, Some(ThemeMode::Dark));

        let animator = config.animator.unwrap();
        assert_eq!(animator.tick_ms, Some(250));
        assert_eq!(animator.reduced_motion, Some(true));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let temp = TempDir::new().unwrap();
        let folio_dir = temp.path().join(".folio");
        std::fs::create_dir_all(&folio_dir).unwrap();

        let config_path = folio_dir.join("config.yaml");
        std::fs::write(&config_path, "version: \"1.0\"\n").unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!(config.paths.home.is_none());
        assert!(config.theme.is_none());
        assert!(config.animator.is_none());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}

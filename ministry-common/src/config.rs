//! Configuration loading and root folder resolution
//!
//! Settings are layered, highest priority first:
//! 1. Command-line arguments (clap also folds `MINISTRY_*` environment variables in here)
//! 2. Environment variables (`MINISTRY_ROOT_FOLDER`, then `MINISTRY_ROOT`)
//! 3. TOML config file
//! 4. Compiled defaults
//!
//! A missing or malformed TOML file never stops startup: it is logged and
//! the compiled defaults are used instead.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the SQLite file inside the root folder
pub const DATABASE_FILE_NAME: &str = "ministry.db";

/// Environment variables consulted for the root folder, in priority order
pub const ROOT_FOLDER_ENV_VARS: [&str; 2] = ["MINISTRY_ROOT_FOLDER", "MINISTRY_ROOT"];

/// Compiled-in fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub port: u16,
    pub bind_address: String,
    pub session_ttl_hours: u64,
    pub anchor_denomination: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl CompiledDefaults {
    /// Defaults for the platform this binary was compiled for
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            port: 5780,
            bind_address: "127.0.0.1".to_string(),
            session_ttl_hours: 24 * 7,
            anchor_denomination: "Amillennial".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/ministry
        dirs::data_local_dir()
            .map(|d| d.join("ministry"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/ministry"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/ministry
        dirs::data_dir()
            .map(|d| d.join("ministry"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/ministry"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\ministry
        dirs::data_local_dir()
            .map(|d| d.join("ministry"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\ministry"))
    } else {
        PathBuf::from("./ministry_data")
    }
}

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional; absent fields fall through to the compiled defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Folder holding `ministry.db`
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// HTTP bind address
    #[serde(default)]
    pub bind_address: Option<String>,

    /// Lifetime of a browser session
    #[serde(default)]
    pub session_ttl_hours: Option<u64>,

    /// Denomination pinned first in the anchor comparison
    #[serde(default)]
    pub anchor_denomination: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Locates the config file and resolves the root folder
pub struct RootFolderResolver {
    module_name: String,
    cli_arg: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            cli_arg: None,
            config_file: None,
        }
    }

    /// Root folder given on the command line (highest priority)
    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    /// Use an explicit config file instead of searching the platform locations
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    /// Resolve the root folder. Never fails: falls back to the compiled default.
    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            return path.clone();
        }

        for var in ROOT_FOLDER_ENV_VARS {
            if let Ok(path) = std::env::var(var) {
                if !path.trim().is_empty() {
                    return PathBuf::from(path);
                }
            }
        }

        if let Some(root) = self.load_toml().and_then(|c| c.root_folder) {
            return root;
        }

        CompiledDefaults::for_current_platform().root_folder
    }

    /// Load the TOML config if one can be found and parsed
    pub fn load_toml(&self) -> Option<TomlConfig> {
        let path = self.config_file_path()?;
        match TomlConfig::load(&path) {
            Ok(config) => {
                debug!("Loaded config file {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// First existing config file among: explicit path, `<module>.toml`, `config.toml`
    fn config_file_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_file {
            if path.exists() {
                return Some(path.clone());
            }
            warn!("Config file not found: {}", path.display());
            return None;
        }

        let mut candidates = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            let dir = dir.join("ministry");
            candidates.push(dir.join(format!("{}.toml", self.module_name)));
            candidates.push(dir.join("config.toml"));
        }
        if cfg!(target_os = "linux") {
            candidates.push(PathBuf::from("/etc/ministry/config.toml"));
        }

        candidates.into_iter().find(|p| p.exists())
    }
}

/// Creates the root folder and locates files inside it
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    /// Create the root folder (and parents). Safe to call repeatedly.
    pub fn ensure_directory_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder)?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE_NAME)
    }

    pub fn database_exists(&self) -> bool {
        self.database_path().exists()
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub root_folder: PathBuf,
    pub port: u16,
    pub bind_address: String,
    pub session_ttl_hours: u64,
    pub anchor_denomination: String,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Merge command line, environment, TOML and compiled defaults
    pub fn resolve(module_name: &str, overrides: &ConfigOverrides) -> Self {
        let resolver = RootFolderResolver::new(module_name)
            .with_cli_arg(overrides.root_folder.clone())
            .with_config_file(overrides.config_file.clone());
        let toml = resolver.load_toml().unwrap_or_default();
        let defaults = CompiledDefaults::for_current_platform();

        Self::merge(resolver.resolve(), overrides, toml, defaults)
    }

    fn merge(
        root_folder: PathBuf,
        overrides: &ConfigOverrides,
        toml: TomlConfig,
        defaults: CompiledDefaults,
    ) -> Self {
        let session_ttl_hours = match toml.session_ttl_hours {
            Some(0) => {
                warn!("session_ttl_hours = 0 is not usable, using {}", defaults.session_ttl_hours);
                defaults.session_ttl_hours
            }
            Some(hours) => hours,
            None => defaults.session_ttl_hours,
        };

        Self {
            root_folder,
            port: overrides.port.or(toml.port).unwrap_or(defaults.port),
            bind_address: overrides
                .bind_address
                .clone()
                .or(toml.bind_address)
                .unwrap_or(defaults.bind_address),
            session_ttl_hours,
            anchor_denomination: toml
                .anchor_denomination
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.anchor_denomination),
            logging: toml.logging,
        }
    }

    /// `host:port` string for the TCP listener
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overrides_then_toml() {
        let overrides = ConfigOverrides {
            port: Some(9000),
            ..Default::default()
        };
        let toml = TomlConfig {
            port: Some(8000),
            bind_address: Some("0.0.0.0".to_string()),
            ..Default::default()
        };
        let settings = Settings::merge(
            PathBuf::from("/srv/ministry"),
            &overrides,
            toml,
            CompiledDefaults::for_current_platform(),
        );

        assert_eq!(settings.port, 9000);
        assert_eq!(settings.bind_address, "0.0.0.0");
        assert_eq!(settings.anchor_denomination, "Amillennial");
        assert_eq!(settings.listen_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_zero_session_ttl_falls_back_to_default() {
        let toml = TomlConfig {
            session_ttl_hours: Some(0),
            anchor_denomination: Some("  ".to_string()),
            ..Default::default()
        };
        let defaults = CompiledDefaults::for_current_platform();
        let settings = Settings::merge(
            PathBuf::from("/tmp"),
            &ConfigOverrides::default(),
            toml,
            defaults.clone(),
        );

        assert_eq!(settings.session_ttl_hours, defaults.session_ttl_hours);
        assert_eq!(settings.anchor_denomination, defaults.anchor_denomination);
    }
}

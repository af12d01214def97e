use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{FfPwdError, Result};

/// Directory under `$HOME` used when no `--config-dir` is given.
const DEFAULT_CONFIG_SUBDIR: &str = ".config/ff-pwd";

/// Optional settings, loaded from `<config_dir>/config.toml`.
///
/// Every field has a default so ff-pwd works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File name of the encrypted store inside the config directory.
    #[serde(default = "default_storage_file")]
    pub storage_file: String,

    /// CSV file read by `import` when `--file` is not given.
    /// Defaults to `$HOME/Downloads/logins.csv`.
    #[serde(default)]
    pub import_file: Option<PathBuf>,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_storage_file() -> String {
    "data.json".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            import_file: None,
        }
    }
}

impl Settings {
    /// Name of the config file inside the config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from `<config_dir>/config.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            FfPwdError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;
        settings.validate()?;

        Ok(settings)
    }

    /// Full path to the store file.
    ///
    /// Example: `~/.config/ff-pwd/data.json`
    pub fn storage_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.storage_file)
    }

    /// The CSV file to import when none is given on the command line.
    pub fn import_path(&self) -> Result<PathBuf> {
        match &self.import_file {
            Some(path) => Ok(path.clone()),
            None => Ok(home_dir()?.join("Downloads").join("logins.csv")),
        }
    }

    fn validate(&self) -> Result<()> {
        let name = Path::new(&self.storage_file);
        if self.storage_file.is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(FfPwdError::ConfigError(format!(
                "storage_file '{}' must be a plain file name",
                self.storage_file
            )));
        }
        Ok(())
    }
}

/// `$HOME/.config/ff-pwd`.
pub fn default_config_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(DEFAULT_CONFIG_SUBDIR))
}

/// Create the config directory if needed and restrict it to the owner.
pub fn ensure_config_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    }

    Ok(())
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| FfPwdError::ConfigError("cannot determine home directory".into()))
}

// ── Tests ────────────────────────────────────────────────────────────

//! Configuration file management for larder.
//!
//! Provides a TOML-based config file at `~/.config/larder/config.toml` and
//! a resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use larder_core::genai::OpenAiConfig;
use larder_db::config::DbConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub database: DatabaseSection,
    #[serde(default)]
    pub openai: Option<OpenAiSection>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAiSection {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the larder config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/larder` or `~/.config/larder`.
/// We intentionally ignore the platform-specific `dirs::config_dir()`
/// (which returns `~/Library/Application Support` on macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("larder");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("larder")
}

/// Return the path to the larder config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix (it may hold an API key).
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved database configuration, ready for use.
#[derive(Debug)]
pub struct LarderConfig {
    pub db_config: DbConfig,
}

impl LarderConfig {
    /// Resolve the database URL using the chain:
    /// CLI flag > `LARDER_DATABASE_URL` env > config file > default.
    pub fn resolve(cli_db_url: Option<&str>) -> Result<Self> {
        let file_config = load_config().ok();

        let db_url = if let Some(url) = cli_db_url {
            url.to_string()
        } else if let Ok(url) = std::env::var("LARDER_DATABASE_URL") {
            url
        } else if let Some(ref cfg) = file_config {
            cfg.database.url.clone()
        } else {
            DbConfig::DEFAULT_URL.to_string()
        };

        Ok(Self {
            db_config: DbConfig::new(db_url),
        })
    }
}

/// Resolve the generation adapter configuration.
///
/// The API key comes from `LARDER_OPENAI_API_KEY` / `OPENAI_API_KEY` env
/// vars, then the config file's `[openai]` section. Model and base URL
/// resolve the same way with compile-time defaults at the end.
pub fn resolve_openai() -> Result<OpenAiConfig> {
    let file_config = load_config().ok();
    let section = file_config.and_then(|cfg| cfg.openai);

    let api_key = std::env::var("LARDER_OPENAI_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
        .or_else(|| section.as_ref().and_then(|s| s.api_key.clone()));

    let Some(api_key) = api_key else {
        bail!(
            "no model API key found; set LARDER_OPENAI_API_KEY or add an [openai] section \
             via `larder init`"
        );
    };

    let model = std::env::var("LARDER_OPENAI_MODEL")
        .ok()
        .or_else(|| section.as_ref().and_then(|s| s.model.clone()))
        .unwrap_or_else(|| OpenAiConfig::DEFAULT_MODEL.to_owned());

    let base_url = std::env::var("LARDER_OPENAI_BASE_URL")
        .ok()
        .or_else(|| section.as_ref().and_then(|s| s.base_url.clone()))
        .unwrap_or_else(|| OpenAiConfig::DEFAULT_BASE_URL.to_owned());

    Ok(OpenAiConfig::new(api_key, model, base_url))
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

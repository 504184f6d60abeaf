//! User configuration at ~/.config/calink/config.toml

use std::fmt;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{LinkError, LinkResult};
use crate::provider::Provider;

/// How links are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// The name used for this format in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_providers() -> Vec<Provider> {
    Provider::ALL.to_vec()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalinkConfig {
    /// IANA zone used to read picker dates. Falls back to the system zone.
    pub timezone: Option<String>,

    /// Providers to print, in order.
    #[serde(default = "default_providers")]
    pub providers: Vec<Provider>,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for CalinkConfig {
    fn default() -> Self {
        CalinkConfig {
            timezone: None,
            providers: default_providers(),
            format: OutputFormat::default(),
        }
    }
}

impl CalinkConfig {
    pub fn config_path() -> LinkResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LinkError::Config("Could not determine config directory".into()))?
            .join("calink");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, or defaults if no config file exists.
    pub fn load() -> LinkResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> LinkResult<Self> {
        let contents = std::fs::read_to_string(path)?;

        let config: CalinkConfig = toml::from_str(&contents)
            .map_err(|e| LinkError::Config(format!("{}: {}", path.display(), e)))?;

        if let Some(name) = &config.timezone {
            parse_zone(name)?;
        }

        Ok(config)
    }

    /// The configured zone, if one is set.
    pub fn zone(&self) -> LinkResult<Option<Tz>> {
        self.timezone.as_deref().map(parse_zone).transpose()
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> LinkResult<()> {
        let contents = "\
# calink configuration

# Time zone used to read start/end dates (defaults to the system zone):
# timezone = \"Europe/Berlin\"

# Which links to print, in order:
# providers = [\"google\", \"outlook\", \"yahoo\"]

# Output format: \"text\" or \"json\"
# format = \"text\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LinkError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LinkError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

pub fn parse_zone(name: &str) -> LinkResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| LinkError::TimeZone(name.to_string()))
}

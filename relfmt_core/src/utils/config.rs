use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::color::{DEFAULT_CONTRAST_THRESHOLD, DEFAULT_HIGHLIGHT_FACTOR};
use crate::utils::error::{RelfmtError, RelfmtResult};
use crate::utils::locale::TimeFormat;
use crate::utils::time::{RelativeTimeFormatter, SystemClock};

/// `time_format` value that defers to the locale.
pub const LOCALE_TIME_FORMAT: &str = "locale";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "RELFMT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `locale`, `12h`, `24h` or a strftime pattern such as `%H:%M:%S`
    pub time_format: String,

    /// Locale tag used when `time_format` is `locale`; the environment is
    /// consulted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Factor for lighter/darker/highlight when none is given
    pub highlight_factor: f32,

    /// Contrast ratio under which colors get adjusted
    pub contrast_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_format: LOCALE_TIME_FORMAT.to_string(),
            locale: None,
            highlight_factor: DEFAULT_HIGHLIGHT_FACTOR,
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RelfmtResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> RelfmtResult<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// `$RELFMT_CONFIG`, else `~/.relfmt/config.yaml`.
    pub fn get_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".relfmt")
            .join("config.yaml")
    }

    /// Load from the default path, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(Self::get_config_path())
    }

    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> RelfmtResult<()> {
        self.save_to_file(Self::get_config_path())
    }

    pub fn validate(&self) -> RelfmtResult<()> {
        if self.highlight_factor.is_nan() || self.highlight_factor <= 0.0 {
            return Err(RelfmtError::Config(format!(
                "highlight_factor must be positive, got {}",
                self.highlight_factor
            )));
        }
        if self.contrast_threshold.is_nan() || self.contrast_threshold < 1.0 {
            return Err(RelfmtError::Config(format!(
                "contrast_threshold must be at least 1, got {}",
                self.contrast_threshold
            )));
        }
        self.resolve_time_format()?;
        Ok(())
    }

    /// Turn the `time_format`/`locale` settings into a concrete format.
    pub fn resolve_time_format(&self) -> RelfmtResult<TimeFormat> {
        if self.time_format.trim().eq_ignore_ascii_case(LOCALE_TIME_FORMAT) {
            return Ok(match &self.locale {
                Some(tag) => TimeFormat::for_locale(tag),
                None => TimeFormat::from_env(),
            });
        }
        self.time_format.parse()
    }

    /// Relative formatter on the system clock using these settings.
    pub fn formatter(&self) -> RelfmtResult<RelativeTimeFormatter<SystemClock, TimeFormat>> {
        Ok(RelativeTimeFormatter::new(
            SystemClock,
            self.resolve_time_format()?,
        ))
    }
}

use crate::model::lang::Lang;
use crate::utils::constants::{DEFAULT_CACHE_TTL_SECS, DEFAULT_VENUES_PATH, TIME_FORMAT};
use chrono::{FixedOffset, Local, Utc};
use log::LevelFilter;
use secrecy::SecretString;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown log level {0:?}")]
    InvalidLevel(String),

    #[error("utc offset of {0} minutes is out of range")]
    InvalidOffset(i32),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bot: BotConfig,
    pub venues: VenuesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Falls back to `TELOXIDE_TOKEN` when absent.
    pub token: Option<SecretString>,
    /// Used when a button is pressed before the user picked a language.
    pub default_language: Lang,
    /// Fixed offset for the happy hour clock; the host time zone when absent.
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VenuesConfig {
    pub path: PathBuf,
    /// 0 reads the file on every query.
    pub cache_ttl_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log to this file with log4rs; stderr otherwise.
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for VenuesConfig {
    fn default() -> Self {
        VenuesConfig {
            path: PathBuf::from(DEFAULT_VENUES_PATH),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            level: "info".to_owned(),
        }
    }
}

impl Config {
    /// A missing file is not an error: every setting has a default.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(raw) => Config::from_toml(&raw),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("VENUES_PATH") {
            self.venues.path = PathBuf::from(path);
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.logging.level_filter()?;
        self.bot.utc_offset()?;
        Ok(())
    }
}

impl BotConfig {
    fn utc_offset(&self) -> Result<Option<FixedOffset>, ConfigError> {
        self.utc_offset_minutes
            .map(|minutes| {
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or(ConfigError::InvalidOffset(minutes))
            })
            .transpose()
    }

    /// Wall clock as zero-padded `HH:MM`.
    pub fn current_time(&self) -> String {
        match self.utc_offset() {
            Ok(Some(offset)) => Utc::now()
                .with_timezone(&offset)
                .format(TIME_FORMAT)
                .to_string(),
            _ => Local::now().format(TIME_FORMAT).to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| ConfigError::InvalidLevel(self.level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [bot]
            token = "123:abc"
            default_language = "he"
            utc_offset_minutes = 120

            [venues]
            path = "/srv/venues.json"
            cache_ttl_secs = 0

            [logging]
            file = "log/output.log"
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.bot.token.as_ref().map(|token| token.expose_secret().as_str()),
            Some("123:abc")
        );
        assert_eq!(config.bot.default_language, Lang::He);
        assert_eq!(config.venues.path, PathBuf::from("/srv/venues.json"));
        assert_eq!(config.venues.cache_ttl_secs, 0);
        assert_eq!(config.logging.file, Some(PathBuf::from("log/output.log")));
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_token_is_not_printed() {
        let config = Config::from_toml("[bot]\ntoken = \"123:abc\"").unwrap();
        assert!(!format!("{config:?}").contains("123:abc"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.bot.token.is_none());
        assert_eq!(config.bot.default_language, Lang::En);
        assert_eq!(config.venues.path, PathBuf::from(DEFAULT_VENUES_PATH));
        assert_eq!(config.venues.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_toml("[logging]\nlevel = \"loud\""),
            Err(ConfigError::InvalidLevel(_))
        ));
        assert!(matches!(
            Config::from_toml("[bot]\nutc_offset_minutes = 100000"),
            Err(ConfigError::InvalidOffset(100000))
        ));
        assert!(matches!(
            Config::from_toml("[bot]\ndefault_language = \"fr\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[venues]\ncache_ttl_secs = 5\n").unwrap();
        assert_eq!(Config::load(file.path()).unwrap().venues.cache_ttl_secs, 5);

        let dir = tempdir().unwrap();
        let missing = Config::load(dir.path().join("config.toml")).unwrap();
        assert_eq!(missing.venues.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_env_overrides(|key| {
            (key == "VENUES_PATH").then(|| "/tmp/other.json".to_owned())
        });
        assert_eq!(config.venues.path, PathBuf::from("/tmp/other.json"));

        let untouched = Config::default().with_env_overrides(|_| None);
        assert_eq!(untouched.venues.path, PathBuf::from(DEFAULT_VENUES_PATH));
    }

    #[test]
    fn test_current_time_format() {
        for offset in [None, Some(0), Some(180), Some(-300)] {
            let bot = BotConfig {
                utc_offset_minutes: offset,
                ..BotConfig::default()
            };
            let now = bot.current_time();
            assert_eq!(now.len(), 5, "{now}");
            assert_eq!(&now[2..3], ":");
        }
    }
}

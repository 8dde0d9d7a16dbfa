// File: ./src/config.rs
// Reads config.toml, and writes the defaults on first run.
use crate::context::AppContext;
use crate::controller::DEFAULT_HELP_THRESHOLD;
use crate::storage::LocalStorage;
use anyhow::{Context, Error, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_help_threshold() -> u32 {
    DEFAULT_HELP_THRESHOLD
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Overrides `<data dir>/duke.txt`.
    #[serde(default)]
    pub store_file: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_help_threshold")]
    pub help_threshold: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: None,
            // Match the serde defaults
            log_level: default_log_level(),
            help_threshold: default_help_threshold(),
        }
    }
}

impl Config {
    /// Reads `config.toml` from the context's config directory.
    /// A missing file surfaces as an `io::ErrorKind::NotFound` in the error chain.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// First run: writes the defaults so there is a file to edit, then returns them.
    /// Failing to write the file is not an error.
    pub fn load_or_init(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                let config = Self::default();
                if let Err(e) = config.save(ctx) {
                    log::warn!("Could not write default config: {:#}", e);
                }
                Ok(config)
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_missing_config_error(err: &Error) -> bool {
        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Writes `config.toml` atomically under the same lock the task store uses.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        LocalStorage::with_lock(&path, || LocalStorage::atomic_write(&path, &body))
            .with_context(|| format!("Failed to write config file '{}'", path.display()))
    }

    /// Where the task store lives: the configured override or the context default.
    /// A relative override is resolved against the data directory.
    pub fn store_path(&self, ctx: &dyn AppContext) -> Result<PathBuf> {
        match &self.store_file {
            Some(p) if p.is_absolute() => Ok(p.clone()),
            Some(p) => Ok(ctx.get_data_dir()?.join(p)),
            None => ctx.get_store_path(),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", self.log_level))
    }

    /// The configured level, or `Info` when `log_level` does not parse.
    pub fn level_filter_or_info(&self) -> LevelFilter {
        self.level_filter().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn missing_file_gives_defaults() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));
        assert_eq!(Config::load_or_init(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn first_run_writes_editable_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        assert!(!path.exists());
        Config::load_or_init(&ctx).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("log_level = \"info\""));
        assert!(written.contains("help_threshold = 2"));
        assert_eq!(Config::load(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "help_threshold = 5\n").unwrap();
        assert_eq!(Config::load_or_init(&ctx).unwrap().help_threshold, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "help_threshold = 5\n");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "log_level = \"debug\"\n").unwrap();
        let cfg = Config::load(&ctx).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.help_threshold, 2);
        assert_eq!(cfg.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn broken_file_is_an_error() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "help_threshold = \"many\"\n").unwrap();
        let err = Config::load_or_init(&ctx).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(!Config::is_missing_config_error(&err));
    }

    #[test]
    fn save_then_load() {
        let ctx = TestContext::new();
        let cfg = Config {
            store_file: Some(PathBuf::from("tasks.txt")),
            log_level: "warn".into(),
            help_threshold: 3,
        };
        cfg.save(&ctx).unwrap();
        assert_eq!(Config::load(&ctx).unwrap(), cfg);
        assert_eq!(
            cfg.store_path(&ctx).unwrap(),
            ctx.get_data_dir().unwrap().join("tasks.txt")
        );
    }

    #[test]
    fn unknown_level_is_rejected() {
        let cfg = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert!(cfg.level_filter().is_err());
        assert_eq!(cfg.level_filter_or_info(), LevelFilter::Info);
    }

    #[test]
    fn valid_level_is_kept_by_fallback() {
        let cfg = Config {
            log_level: " warn ".into(),
            ..Config::default()
        };
        assert_eq!(cfg.level_filter_or_info(), LevelFilter::Warn);
    }
}

//! Where the store, the config file and the log file live.
//!
//! Implementors only answer [`AppContext::dir`]; every file path is derived
//! from it. `StandardContext` is the real one (platform dirs, or `--root`),
//! `TestContext` a throwaway temp tree.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

pub const STORE_FILENAME: &str = "duke.txt";
pub const LOG_FILENAME: &str = "duke.log";
pub const CONFIG_FILENAME: &str = "config.toml";

/// The two directories the program writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Task store and log.
    Data,
    Config,
}

impl Location {
    fn subdir(self) -> &'static str {
        match self {
            Location::Data => "data",
            Location::Config => "config",
        }
    }
}

pub trait AppContext: std::fmt::Debug {
    /// The directory for `location`, created if it does not exist yet.
    fn dir(&self, location: Location) -> Result<PathBuf>;

    fn get_data_dir(&self) -> Result<PathBuf> {
        self.dir(Location::Data)
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        self.dir(Location::Config)
    }

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join(CONFIG_FILENAME))
    }

    fn get_store_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join(STORE_FILENAME))
    }

    fn get_log_path(&self) -> Result<PathBuf> {
        Ok(self.get_data_dir()?.join(LOG_FILENAME))
    }
}

fn created(path: PathBuf) -> Result<PathBuf> {
    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    Ok(path)
}

/// Platform directories, or `<root>/data` and `<root>/config` under `--root`.
#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }
}

impl AppContext for StandardContext {
    fn dir(&self, location: Location) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return created(root.join(location.subdir()));
        }
        let proj = ProjectDirs::from("com", "duke", "duke")
            .ok_or_else(|| anyhow!("No home directory to keep tasks in"))?;
        let base = match location {
            Location::Data => proj.data_dir(),
            Location::Config => proj.config_dir(),
        };
        created(base.to_path_buf())
    }
}

/// A fresh directory under the OS temp dir, removed on drop.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("duke_test_{}", uuid::Uuid::new_v4()));
        // Only tests build this; they cannot run without the directory.
        fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn dir(&self, location: Location) -> Result<PathBuf> {
        created(self.root.join(location.subdir()))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_root_splits_data_and_config() {
        let tmp = TestContext::new();
        let ctx = StandardContext::new(Some(tmp.root.clone()));
        let store = ctx.get_store_path().unwrap();
        let config = ctx.get_config_file_path().unwrap();
        assert_eq!(store, tmp.root.join("data").join(STORE_FILENAME));
        assert_eq!(config, tmp.root.join("config").join(CONFIG_FILENAME));
        assert!(tmp.root.join("data").is_dir());
        assert!(tmp.root.join("config").is_dir());
    }

    #[test]
    fn log_sits_next_to_store() {
        let ctx = TestContext::new();
        let log = ctx.get_log_path().unwrap();
        assert_eq!(log.parent(), ctx.get_store_path().unwrap().parent());
    }

    #[test]
    fn test_context_cleans_up() {
        let root = {
            let ctx = TestContext::new();
            ctx.get_data_dir().unwrap();
            ctx.root.clone()
        };
        assert!(!root.exists());
    }
}

// launchdee-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::UserDirs;
use serde::Serialize;
use tracing::debug;

use super::error::{LaunchdeeError, Result};
use crate::model::{Scope, Uid};

const DEFAULT_LAUNCHD_DB_DIR: &str = "/var/db/com.apple.xpc.launchd";
const DEFAULT_GLOBAL_AGENTS_DIR: &str = "/Library/LaunchAgents";
const DEFAULT_LAUNCHCTL: &str = "/bin/launchctl";
const DEFAULT_MDFIND: &str = "/usr/bin/mdfind";

/// What to do when a registry file does not exist at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryFallback {
    /// Missing registry is a hard `RegistryUnavailable` error.
    #[default]
    Strict,
    /// Missing registry reads as an empty mapping. Corrupt files still fail.
    Empty,
}

impl FromStr for RegistryFallback {
    type Err = LaunchdeeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "empty" => Ok(Self::Empty),
            other => Err(LaunchdeeError::Config(format!(
                "unknown registry fallback '{other}' (expected 'strict' or 'empty')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub uid: Uid,
    pub home_dir: PathBuf,
    pub launchd_db_dir: PathBuf,
    pub user_agents_dir: PathBuf,
    pub global_agents_dir: PathBuf,
    pub launchctl_path: PathBuf,
    pub mdfind_path: PathBuf,
    /// Base for relative program paths in manifests. `None` if the cwd was unavailable.
    pub working_dir: Option<PathBuf>,
    pub registry_fallback: RegistryFallback,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading launchdee configuration");
        let home_dir = UserDirs::new()
            .map(|ud| ud.home_dir().to_path_buf())
            .ok_or_else(|| {
                LaunchdeeError::Config("could not determine the user's home directory".into())
            })?;
        let working_dir = match env::current_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                debug!("Current directory unavailable, relative targets won't resolve: {}", e);
                None
            }
        };
        Self::from_lookup(Uid::current(), home_dir, working_dir, |key| {
            env::var(key).ok().filter(|v| !v.is_empty())
        })
    }

    /// Builds a config from an arbitrary variable lookup. `load` passes the process environment.
    pub fn from_lookup<F>(
        uid: Uid,
        home_dir: PathBuf,
        working_dir: Option<PathBuf>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path_or = |key: &str, default: PathBuf| {
            lookup(key).map(PathBuf::from).unwrap_or_else(|| {
                debug!("{} not set, using {}", key, default.display());
                default
            })
        };

        let launchd_db_dir = path_or("LAUNCHDEE_LAUNCHD_DB", PathBuf::from(DEFAULT_LAUNCHD_DB_DIR));
        let user_agents_dir = path_or(
            "LAUNCHDEE_USER_AGENTS_DIR",
            home_dir.join("Library").join("LaunchAgents"),
        );
        let global_agents_dir = path_or(
            "LAUNCHDEE_GLOBAL_AGENTS_DIR",
            PathBuf::from(DEFAULT_GLOBAL_AGENTS_DIR),
        );
        let launchctl_path = path_or("LAUNCHDEE_LAUNCHCTL", PathBuf::from(DEFAULT_LAUNCHCTL));
        let mdfind_path = path_or("LAUNCHDEE_MDFIND", PathBuf::from(DEFAULT_MDFIND));
        let registry_fallback = match lookup("LAUNCHDEE_MISSING_REGISTRY") {
            Some(raw) => raw.parse()?,
            None => RegistryFallback::default(),
        };

        debug!("Configuration loaded for uid {}.", uid);
        Ok(Self {
            uid,
            home_dir,
            launchd_db_dir,
            user_agents_dir,
            global_agents_dir,
            launchctl_path,
            mdfind_path,
            working_dir,
            registry_fallback,
        })
    }

    pub fn override_registry_path(&self) -> PathBuf {
        self.launchd_db_dir.join(format!("disabled.{}.plist", self.uid))
    }

    pub fn login_items_registry_path(&self) -> PathBuf {
        self.launchd_db_dir
            .join(format!("loginitems.{}.plist", self.uid))
    }

    pub fn agents_dir(&self, scope: Scope) -> &Path {
        match scope {
            Scope::User => &self.user_agents_dir,
            Scope::Global => &self.global_agents_dir,
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.home_dir.join("Library").join("Logs").join("launchdee")
    }
}

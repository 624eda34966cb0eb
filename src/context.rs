use anyhow::{bail, Context as _, Result};
use std::{
    collections::BTreeMap,
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::config::Config;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "TOML_ALIAS_CONFIG";

/// Everything the dispatcher learns about the process before it reads config.
#[derive(Debug, Clone)]
pub struct ContextEnv {
    vars: BTreeMap<String, String>,
    home: PathBuf,
    alias_name: String,
}

impl ContextEnv {
    pub fn new() -> Result<Self> {
        let vars = utf8_vars(std::env::vars_os());
        let argv0 = std::env::args_os().next().map(PathBuf::from);

        let invoked = match argv0 {
            Some(p) => p,
            None => std::env::current_exe().context("could not determine executable path")?,
        };

        Self::from_parts(vars, &invoked)
    }

    /// Builds a context from an explicit environment and invocation path.
    pub fn from_parts(vars: BTreeMap<String, String>, invoked: &Path) -> Result<Self> {
        // HOME first, the platform lookup only as a fallback
        let home = match vars.get("HOME").filter(|s| !s.is_empty()) {
            Some(h) => PathBuf::from(h),
            None => dirs::home_dir().context("could not determine home directory")?,
        };

        let alias_name = alias_name_from_path(invoked)
            .with_context(|| format!("could not derive alias name from {}", invoked.display()))?;

        tracing::debug!(binary = %alias_name, home = %home.display(), "invocation context");

        Ok(Self {
            vars,
            home,
            alias_name,
        })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn alias_name(&self) -> &str {
        &self.alias_name
    }

    pub fn default_config_path(&self) -> PathBuf {
        self.home
            .join(".config")
            .join("toml-alias")
            .join("config.toml")
    }

    /// Config path precedence:
    /// 1) TOML_ALIAS_CONFIG (must exist)
    /// 2) default $HOME/.config/toml-alias/config.toml
    pub fn locate_config(&self) -> Result<PathBuf> {
        if let Some(p) = self.get_env_path(CONFIG_ENV) {
            if !p.exists() {
                bail!("{CONFIG_ENV} is set but file does not exist: {}", p.display());
            }
            return Ok(p);
        }

        Ok(self.default_config_path())
    }

    pub fn load_config(&self) -> Result<Config> {
        let path = self.locate_config()?;
        tracing::debug!(path = %path.display(), "config path");
        Config::load_from_path(&path).context("failed to read configuration")
    }

    fn get_env_path(&self, key: &str) -> Option<PathBuf> {
        self.vars
            .get(key)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}

/// Keeps the variables whose name and value are both UTF-8; the rest are never read.
fn utf8_vars<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// File name of the invoked binary with the platform executable suffix removed.
pub fn alias_name_from_path(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let stem = name
        .strip_suffix(std::env::consts::EXE_SUFFIX)
        .unwrap_or(&name);

    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

// src/config/mod.rs
use anyhow::{Context as _, Result};
use std::path::Path;

pub mod aliases;

pub use aliases::{select_alias, AliasDefinition, AliasMap, StageDefinition};

/// Whole config.toml: every top-level table is one alias.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(transparent)]
pub struct Config {
	pub aliases: AliasMap,
}

impl Config {
	pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		if !path.exists() {
			anyhow::bail!("configuration file not found: {}", path.display());
		}

		let text = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read configuration file {}", path.display()))?;
		let cfg = Self::parse(&text)
			.with_context(|| format!("failed to parse TOML file {}", path.display()))?;

		tracing::debug!(path = %path.display(), aliases = cfg.aliases.len(), "configuration read");
		Ok(cfg)
	}

	pub fn parse(text: &str) -> Result<Self> {
		let cfg: Config = toml::from_str(text)?;
		Ok(cfg)
	}

	pub fn alias(&self, name: &str) -> AliasDefinition {
		select_alias(&self.aliases, name)
	}
}

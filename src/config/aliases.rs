// src/config/aliases.rs
use std::collections::BTreeMap;

/// Alias name → definition, as laid out in config.toml.
pub type AliasMap = BTreeMap<String, AliasDefinition>;

#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AliasDefinition {
	#[serde(default)]
	pub hide_base_help: bool,

	#[serde(default)]
	pub hide_base_version: bool,

	#[serde(default)]
	pub custom_help: Option<String>,

	#[serde(default)]
	pub custom_version: Option<String>,

	/// `[[<alias>.stage]]` tables, run in declaration order.
	#[serde(default, rename = "stage")]
	pub stages: Vec<StageDefinition>,
}

#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StageDefinition {
	/// Program followed by its arguments. Must not be empty.
	#[serde(default)]
	pub cmd: Vec<String>,

	#[serde(default)]
	pub pre_cmd: Vec<String>,

	#[serde(default)]
	pub post_cmd: Vec<String>,

	#[serde(default)]
	pub print_stdout: bool,

	#[serde(default)]
	pub match_stdout: Option<String>,

	#[serde(default)]
	pub match_msg: Option<String>,

	#[serde(default)]
	pub print_match: bool,

	#[serde(default)]
	pub allow_fail: bool,

	#[serde(default, rename = "print-on-end")]
	pub on_end: String,

	#[serde(default, rename = "print-on-success")]
	pub on_success: String,

	#[serde(default, rename = "print-on-failure")]
	pub on_failure: String,
}

impl StageDefinition {
	/// The configured pattern, treating an empty string the same as an absent one.
	pub fn pattern(&self) -> Option<&str> {
		self.match_stdout.as_deref().filter(|p| !p.is_empty())
	}
}

/// Picks the definition keyed by `name`, or an empty one when nothing matches.
pub fn select_alias(aliases: &AliasMap, name: &str) -> AliasDefinition {
	match aliases.get(name) {
		Some(def) => {
			tracing::debug!(alias = name, stages = def.stages.len(), "alias selected");
			def.clone()
		}
		None => {
			tracing::debug!(alias = name, "no alias configured under this name");
			AliasDefinition::default()
		}
	}
}

use color_eyre::Result;
use v_utils::macros::{MyConfigPrimitives, Settings};

use crate::blacklist::{Blacklist, DEFAULT_BLACKLIST};

#[derive(Clone, Debug, Default, MyConfigPrimitives, Settings)]
pub struct AppConfig {
	/// Extra words or phrases to reject, comma separated (e.g. "Suivant, Next question")
	#[serde(default)]
	pub extra_blacklist: Option<String>,
	/// Do not start from the built-in list of player labels
	#[serde(default)]
	pub skip_default_blacklist: bool,
	/// Labels longer than this are never taken as answer options (default: 200)
	#[serde(default = "default_max_label_len")]
	pub max_label_len: u32,
	/// Print JSON instead of human-readable output
	#[serde(default)]
	pub json: bool,
}

fn default_max_label_len() -> u32 {
	200
}

impl AppConfig {
	/// Built-in entries (unless skipped) followed by the configured extras
	pub fn blacklist(&self) -> Result<Blacklist> {
		let mut blacklist = if self.skip_default_blacklist { Blacklist::default() } else { Blacklist::new(DEFAULT_BLACKLIST)? };
		if let Some(extra) = &self.extra_blacklist {
			blacklist.extend(split_entries(extra))?;
		}
		Ok(blacklist)
	}

	/// A zero limit (e.g. from a defaulted config) falls back to the standard one
	pub fn max_label_len(&self) -> usize {
		match self.max_label_len {
			0 => default_max_label_len() as usize,
			n => n as usize,
		}
	}
}

fn split_entries(list: &str) -> impl Iterator<Item = &str> {
	list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

//! Rejection of UI chrome text ("Continuer", "Correct", ...) scraped alongside real answers

use color_eyre::{Result, eyre::eyre};
use regex::Regex;

/// Labels the Altissia exercise player renders around questions and feedback.
pub const DEFAULT_BLACKLIST: &[&str] = &[
	"Incorrect",
	"Correct",
	"Wrong",
	"Faux",
	"Vrai",
	"Error",
	"Success",
	"Valider",
	"Continuer",
	"Revenir",
	"Ressayer",
	"Réessayer",
	"Pause",
	"Play",
	"Mute",
	"Skip",
	"Select the right answer",
	"Choose",
	"Click",
	"Put the elements in the right order",
	"Sélectionnez le premier élément",
	"Listen to",
	"Max is writing",
	"Accueil",
	"Toutes les leçons",
	"Actualités",
];

#[derive(Clone, Debug)]
enum Entry {
	/// Multi-word entry, matched as a plain substring
	Phrase(String),
	/// Single word, matched only as a whole token
	Word(Regex),
}

/// Compiled word/phrase list. Matching is case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct Blacklist {
	entries: Vec<Entry>,
}

impl Blacklist {
	pub fn new<I, S>(entries: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>, {
		let mut blacklist = Self::default();
		blacklist.extend(entries)?;
		Ok(blacklist)
	}

	/// Append entries, keeping list order for matching
	pub fn extend<I, S>(&mut self, entries: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>, {
		for entry in entries {
			let lower = entry.as_ref().trim().to_lowercase();
			if lower.is_empty() {
				continue;
			}
			let entry = if lower.contains(' ') {
				Entry::Phrase(lower)
			} else {
				let pattern = format!(r"\b{}\b", regex::escape(&lower));
				Entry::Word(Regex::new(&pattern).map_err(|e| eyre!("Regex error for blacklist entry {lower:?}: {e}"))?)
			};
			self.entries.push(entry);
		}
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether `text` contains any entry; first match wins
	pub fn is_blacklisted(&self, text: &str) -> bool {
		if text.is_empty() {
			return false;
		}
		let lower = text.to_lowercase();
		self.entries.iter().any(|entry| match entry {
			Entry::Phrase(phrase) => lower.contains(phrase.as_str()),
			Entry::Word(re) => re.is_match(&lower),
		})
	}

	/// Keep the answers that are not blacklisted, in order. Each rejected answer is logged at `info`.
	pub fn filter<I, S>(&self, answers: I) -> Vec<String>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>, {
		answers
			.into_iter()
			.map(Into::into)
			.filter(|answer| {
				let rejected = self.is_blacklisted(answer);
				if rejected {
					tracing::info!("Ignored (blacklist): {answer}");
				}
				!rejected
			})
			.collect()
	}
}

pub fn is_blacklisted(text: &str, blacklist: &Blacklist) -> bool {
	blacklist.is_blacklisted(text)
}

pub fn filter_blacklist<I, S>(answers: I, blacklist: &Blacklist) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: Into<String>, {
	blacklist.filter(answers)
}

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod answers;
pub mod blacklist;
pub mod color;
pub mod config;
pub mod text;

pub use blacklist::{Blacklist, DEFAULT_BLACKLIST, filter_blacklist, is_blacklisted};
pub use color::{REFERENCE_GREENS, Rgb, is_color_green};
pub use text::{clean_text, normalize_quotes, text_variants, texts_match};

/// Exercise question types the player can show
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
	/// Fill-in-the-blank text inputs
	Text,
	/// Clickable choices, one or several correct
	Choice,
	/// True / false buttons
	TrueFalse,
	/// Words to click in sentence order
	Order,
}

impl QuestionKind {
	pub fn marker(&self) -> &'static str {
		match self {
			QuestionKind::Text => "[text]",
			QuestionKind::Choice => "[choice]",
			QuestionKind::TrueFalse => "[truefalse]",
			QuestionKind::Order => "[order]",
		}
	}
}

/// Revealed answers for one question, in the order they must be replayed
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, derive_new::new)]
pub struct AnswerRecord {
	/// 1-based position in the exercise
	pub question_num: u32,
	#[serde(rename = "type")]
	pub kind: QuestionKind,
	pub answers: Vec<String>,
}

impl fmt::Display for AnswerRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Q{} {}", self.question_num, self.kind.marker())?;
		match self.kind {
			QuestionKind::Order => {
				writeln!(f, "  {}", self.answers.join(" -> "))?;
			}
			QuestionKind::TrueFalse => {
				let answer = answers::truefalse_answer(&self.answers).map(|b| b.to_string()).unwrap_or_else(|| "?".to_string());
				writeln!(f, "  {answer}")?;
			}
			QuestionKind::Text | QuestionKind::Choice => {
				for (i, answer) in self.answers.iter().enumerate() {
					writeln!(f, "  {}. {}", i + 1, answer)?;
				}
			}
		}
		Ok(())
	}
}

/// Answer key collected during the reveal pass, replayed after the exercise restarts
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerKey {
	records: Vec<AnswerRecord>,
}

impl AnswerKey {
	pub fn records(&self) -> &[AnswerRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Store answers for the next question after dropping blacklisted ones.
	/// Returns false (and stores nothing) when no answer survives.
	pub fn push_filtered(&mut self, kind: QuestionKind, answers: Vec<String>, blacklist: &Blacklist) -> bool {
		let answers = blacklist.filter(answers);
		if answers.is_empty() {
			return false;
		}
		let question_num = self.records.len() as u32 + 1;
		self.records.push(AnswerRecord::new(question_num, kind, answers));
		true
	}

	/// Re-run the blacklist over stored answers, e.g. after the list was extended.
	/// Records left empty are dropped and the rest renumbered.
	pub fn refilter(self, blacklist: &Blacklist) -> Self {
		let mut key = Self::default();
		for record in self.records {
			key.push_filtered(record.kind, record.answers, blacklist);
		}
		key
	}

	pub fn from_json(s: &str) -> color_eyre::Result<Self> {
		serde_json::from_str(s).map_err(|e| color_eyre::eyre::eyre!("Failed to parse answer key JSON: {e}"))
	}

	pub fn to_json(&self) -> color_eyre::Result<String> {
		serde_json::to_string_pretty(self).map_err(|e| color_eyre::eyre::eyre!("Failed to serialize answer key: {e}"))
	}
}

impl fmt::Display for AnswerKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for record in &self.records {
			write!(f, "{record}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn blacklist() -> Blacklist {
		Blacklist::new(DEFAULT_BLACKLIST).unwrap()
	}

	#[test]
	fn push_filtered_numbers_and_drops() {
		let bl = blacklist();
		let mut key = AnswerKey::default();
		assert!(key.push_filtered(QuestionKind::Text, vec!["maison".into(), "Correct".into()], &bl));
		assert!(!key.push_filtered(QuestionKind::Choice, vec!["Continuer".into()], &bl));
		assert!(key.push_filtered(QuestionKind::TrueFalse, vec!["true".into()], &bl));

		assert_eq!(key.len(), 2);
		assert_eq!(key.records()[0], AnswerRecord::new(1, QuestionKind::Text, vec!["maison".into()]));
		assert_eq!(key.records()[1].question_num, 2);
	}

	#[test]
	fn json_uses_type_field_name() {
		let json = r#"[{"question_num": 1, "type": "truefalse", "answers": ["false"]}, {"question_num": 2, "type": "order", "answers": ["I", "am", "here"]}]"#;
		let key = AnswerKey::from_json(json).unwrap();
		assert_eq!(key.len(), 2);
		assert_eq!(key.records()[0].kind, QuestionKind::TrueFalse);

		let back = AnswerKey::from_json(&key.to_json().unwrap()).unwrap();
		assert_eq!(back, key);
	}

	#[test]
	fn from_json_reports_errors() {
		assert!(AnswerKey::from_json("{not json").is_err());
		assert!(AnswerKey::from_json(r#"[{"question_num": 1, "type": "essay", "answers": []}]"#).is_err());
	}

	#[test]
	fn refilter_renumbers() {
		let key = AnswerKey::from_json(r#"[{"question_num": 1, "type": "choice", "answers": ["Suivant"]}, {"question_num": 2, "type": "choice", "answers": ["chat"]}]"#).unwrap();
		let mut bl = blacklist();
		bl.extend(["Suivant"]).unwrap();
		let key = key.refilter(&bl);
		assert_eq!(key.len(), 1);
		assert_eq!(key.records()[0], AnswerRecord::new(1, QuestionKind::Choice, vec!["chat".into()]));
	}

	#[test]
	fn display_per_kind() {
		let order = AnswerRecord::new(3, QuestionKind::Order, vec!["I".into(), "am".into()]);
		assert_eq!(order.to_string(), "Q3 [order]\n  I -> am\n");

		let tf = AnswerRecord::new(1, QuestionKind::TrueFalse, vec!["False.".into()]);
		assert_eq!(tf.to_string(), "Q1 [truefalse]\n  false\n");

		let choice = AnswerRecord::new(2, QuestionKind::Choice, vec!["a".into(), "b".into()]);
		assert_eq!(choice.to_string(), "Q2 [choice]\n  1. a\n  2. b\n");
	}
}

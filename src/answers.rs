//! Answer harvesting and replay helpers that work on plain label strings.
//!
//! The browser layer scrapes labels, colors and class lists; everything deciding
//! what counts as an answer and which label to click for it lives here.

use crate::{
	blacklist::Blacklist,
	color::is_color_green,
	text::{clean_text, text_variants, texts_match},
};

/// Longer labels are paragraphs of instructions, not answer options
pub const MAX_LABEL_LEN: usize = 200;

/// Highlighted choices and fallback texts at least this long are surrounding blocks, not one answer
pub const MAX_HIGHLIGHT_LEN: usize = 100;

/// A revealed order sentence is longer than this; shorter green text is a single word or a badge
pub const MIN_ORDER_SENTENCE_LEN: usize = 10;

/// Class-name fragments the player uses on correct answers
const CORRECT_CLASS_MARKERS: [&str; 3] = ["correct", "success", "iscorrect-true"];

/// Whether a clickable element's label could be an answer option
pub fn is_valid_choice_label(text: &str, blacklist: &Blacklist) -> bool {
	is_valid_choice_label_with_limit(text, blacklist, MAX_LABEL_LEN)
}

pub fn is_valid_choice_label_with_limit(text: &str, blacklist: &Blacklist, max_len: usize) -> bool {
	let text = text.trim();
	!text.is_empty() && text.chars().count() <= max_len && !blacklist.is_blacklisted(text)
}

/// Whether a class attribute marks the element as the correct answer
pub fn marks_correct(classes: &str) -> bool {
	let lower = classes.to_lowercase();
	CORRECT_CLASS_MARKERS.iter().any(|m| lower.contains(m))
}

/// Element feedback check: any of its computed colors (text, background, border) is green, or its classes say correct.
pub fn is_highlighted_correct<I, S>(colors: I, classes: &str) -> bool
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>, {
	colors.into_iter().any(|c| is_color_green(c.as_ref())) || marks_correct(classes)
}

/// Add a highlighted choice label unless it overlaps one already collected.
///
/// Nested elements report the same text at several levels, so a label that contains or is contained in an existing one is skipped.
pub fn merge_choice_answer(results: &mut Vec<String>, text: &str) -> bool {
	let text = text.trim();
	if text.is_empty() || results.iter().any(|existing| existing.contains(text) || text.contains(existing.as_str())) {
		return false;
	}
	results.push(text.to_owned());
	true
}

/// A visible element as scraped after validating: its text, computed colors (text, background, border) and class attribute
#[derive(Clone, Debug, Default, Eq, PartialEq, derive_new::new)]
pub struct Candidate {
	pub text: String,
	pub colors: Vec<String>,
	pub classes: String,
}

impl Candidate {
	fn trimmed(&self) -> &str {
		self.text.trim()
	}
}

/// Highlighted choice labels in page order, skipping overlong blocks, player labels and nested duplicates
pub fn collect_choice_answers(candidates: &[Candidate], blacklist: &Blacklist) -> Vec<String> {
	let mut results = Vec::new();
	for candidate in candidates {
		let text = candidate.trimmed();
		if text.is_empty() || text.chars().count() > MAX_HIGHLIGHT_LEN || blacklist.is_blacklisted(text) {
			continue;
		}
		if is_highlighted_correct(&candidate.colors, &candidate.classes) && merge_choice_answer(&mut results, text) {
			tracing::debug!("highlighted choice: {text}");
		}
	}
	results
}

/// Texts of elements whose classes already say correct, used when no highlighted answer was found.
/// Kept in order, exact duplicates dropped.
pub fn collect_fallback_answers<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
	let mut results: Vec<String> = Vec::new();
	for text in texts {
		let text = text.as_ref().trim();
		if !text.is_empty() && text.chars().count() < MAX_HIGHLIGHT_LEN && !results.iter().any(|r| r == text) {
			results.push(text.to_owned());
		}
	}
	results
}

/// The revealed sentence of an order question: first non-blacklisted candidate longer than
/// [`MIN_ORDER_SENTENCE_LEN`] whose text color is green or whose classes contain `correct`.
///
/// Only the text color counts here, and `success` classes do not, unlike the choice harvest.
pub fn pick_order_sentence<'a>(candidates: &'a [Candidate], blacklist: &Blacklist) -> Option<&'a str> {
	candidates.iter().map(|c| (c, c.trimmed())).find_map(|(candidate, text)| {
		if text.is_empty() || blacklist.is_blacklisted(text) {
			return None;
		}
		let green = candidate.colors.first().is_some_and(|c| is_color_green(c)) || candidate.classes.to_lowercase().contains("correct");
		(green && text.chars().count() > MIN_ORDER_SENTENCE_LEN).then_some(text)
	})
}

/// Words of the revealed sentence, in click order
pub fn split_order_sentence(sentence: &str) -> Vec<String> {
	sentence.split_whitespace().map(str::to_owned).collect()
}

/// The stored true/false verdict, if the first answer is one
pub fn truefalse_answer<S: AsRef<str>>(answers: &[S]) -> Option<bool> {
	let first = answers.first()?;
	match clean_text(first.as_ref()).to_lowercase().as_str() {
		"true" => Some(true),
		"false" => Some(false),
		_ => None,
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchKind {
	/// Label equals the variant, ignoring case and surrounding whitespace
	Exact,
	/// Label contains the variant, ignoring case
	Partial,
	/// Only [`texts_match`] agreed
	Fuzzy,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabelMatch {
	/// Index into the labels slice
	pub index: usize,
	/// Variant of the answer that matched
	pub variant: String,
	pub kind: MatchKind,
}

/// Pick the on-screen label to click for a stored answer.
///
/// Every variant is first tried for an exact label, so "animals" is never resolved to "animals and people"
/// while a plain "animals" button exists. Partial matches come next, then [`texts_match`] as a last resort.
/// The exact and partial passes go variant by variant over all labels; the last-resort pass goes label by label
/// over all variants, so there the first matching label wins.
pub fn locate_label<S: AsRef<str>>(answer: &str, labels: &[S]) -> Option<LabelMatch> {
	let variants = text_variants(answer);
	let lowered: Vec<String> = labels.iter().map(|l| l.as_ref().trim().to_lowercase()).collect();

	for variant in &variants {
		let needle = variant.trim().to_lowercase();
		if needle.is_empty() {
			continue;
		}
		if let Some(index) = lowered.iter().position(|l| *l == needle) {
			tracing::debug!("exact label match for {answer:?}: {variant:?} at {index}");
			return Some(LabelMatch { index, variant: variant.clone(), kind: MatchKind::Exact });
		}
	}

	for variant in &variants {
		if variant.trim().is_empty() {
			continue;
		}
		let needle = variant.to_lowercase();
		if let Some(index) = lowered.iter().position(|l| l.contains(&needle)) {
			tracing::debug!("partial label match for {answer:?}: {variant:?} at {index}");
			return Some(LabelMatch { index, variant: variant.clone(), kind: MatchKind::Partial });
		}
	}

	for (index, label) in labels.iter().enumerate() {
		if let Some(variant) = variants.iter().find(|v| texts_match(label.as_ref().trim(), v)) {
			return Some(LabelMatch { index, variant: variant.clone(), kind: MatchKind::Fuzzy });
		}
	}

	None
}

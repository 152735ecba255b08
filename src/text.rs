//! Answer text canonicalization and variant generation for fuzzy label matching

use std::borrow::Cow;

/// Trailing punctuation removed by [`clean_text`], in removal order
const TERMINAL_PUNCTUATION: [char; 6] = ['.', '!', '?', ',', ';', ':'];

/// Trailing punctuation removed for the stripped variant. Narrower than [`TERMINAL_PUNCTUATION`].
const VARIANT_PUNCTUATION: [char; 4] = ['.', '!', '?', ','];

fn ascii_quote(c: char) -> Option<char> {
	match c {
		'\u{201C}' | '\u{201D}' | '\u{00AB}' | '\u{00BB}' => Some('"'),
		'\u{2018}' | '\u{2019}' => Some('\''),
		_ => None,
	}
}

/// Map typographic quotes and guillemets to their ASCII equivalents.
///
/// Borrows the input when there is nothing to replace.
pub fn normalize_quotes(text: &str) -> Cow<'_, str> {
	if !text.chars().any(|c| ascii_quote(c).is_some()) {
		return Cow::Borrowed(text);
	}
	Cow::Owned(text.chars().map(|c| ascii_quote(c).unwrap_or(c)).collect())
}

/// One cleaning pass over already-normalized text: trim, drop surrounding quotes, drop trailing punctuation, trim.
fn clean_pass(text: &str) -> &str {
	let mut s = text.trim().trim_matches('"').trim_matches('\'');
	for p in TERMINAL_PUNCTUATION {
		s = s.trim_end_matches(p);
	}
	s.trim()
}

/// Strip whitespace, surrounding quotes and trailing terminal punctuation.
///
/// Passes are repeated until the slice stops shrinking, so `clean_text(clean_text(t)) == clean_text(t)` for any `t`.
/// Each pass only scans what it removes, and the result is allocated once.
pub fn clean_text(text: &str) -> String {
	let normalized = normalize_quotes(text);
	let mut current: &str = &normalized;
	loop {
		let next = clean_pass(current);
		if next.len() == current.len() {
			return next.to_owned();
		}
		current = next;
	}
}

/// Whether two answer strings should be considered the same on-screen text.
pub fn texts_match(a: &str, b: &str) -> bool {
	if a.is_empty() || b.is_empty() {
		return false;
	}
	normalize_quotes(a.trim()) == normalize_quotes(b.trim()) || clean_text(a) == clean_text(b)
}

/// Ordered, deduplicated renderings of `text` to probe against differently punctuated labels.
///
/// Never contains an empty string or a duplicate; the first occurrence of a rendering wins.
pub fn text_variants(text: &str) -> Vec<String> {
	let mut variants: Vec<String> = Vec::new();
	let mut push = |v: String| {
		if !v.is_empty() && !variants.contains(&v) {
			variants.push(v);
		}
	};

	push(text.to_owned());

	let normalized = normalize_quotes(text);
	if normalized != text {
		push(normalized.into_owned());
	}

	let cleaned = clean_text(text);
	if cleaned != text {
		push(cleaned.clone());
	}

	let stripped = VARIANT_PUNCTUATION.iter().fold(text, |s, p| s.trim_end_matches(*p));
	if stripped != text {
		push(stripped.to_owned());
	}

	if !text.contains('"') && !cleaned.is_empty() {
		push(format!("\"{cleaned}\""));
	}

	let no_quotes: String = text.chars().filter(|c| *c != '"' && *c != '\'').collect();
	if !no_quotes.is_empty() {
		let cleaned_no_quotes = clean_text(&no_quotes);
		push(no_quotes);
		push(cleaned_no_quotes);
	}

	variants
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalize_quotes_maps_typographic_marks() {
		assert_eq!(normalize_quotes("\u{201C}hi\u{201D}"), "\"hi\"");
		assert_eq!(normalize_quotes("\u{00AB}salut\u{00BB}"), "\"salut\"");
		assert_eq!(normalize_quotes("it\u{2019}s \u{2018}ok\u{2019}"), "it's 'ok'");
		assert_eq!(normalize_quotes("é — ç"), "é — ç");
	}

	#[test]
	fn normalize_quotes_borrows_when_unchanged() {
		assert!(matches!(normalize_quotes("plain"), Cow::Borrowed("plain")));
		assert!(matches!(normalize_quotes(""), Cow::Borrowed("")));
	}

	#[test]
	fn clean_text_basics() {
		assert_eq!(clean_text("\"Hello\""), "Hello");
		assert_eq!(clean_text("Hello."), "Hello");
		assert_eq!(clean_text("  Hello  "), "Hello");
		assert_eq!(clean_text(""), "");
	}

	#[test]
	fn clean_text_handles_quotes_and_punctuation_together() {
		assert_eq!(clean_text("\u{201C}I\u{2019}m fine.\u{201D}"), "I'm fine");
		assert_eq!(clean_text("'Bonjour !'"), "Bonjour");
		assert_eq!(clean_text("Wait...?"), "Wait");
		assert_eq!(clean_text("list: a; b;"), "list: a; b");
	}

	#[test]
	fn clean_text_reaches_fixed_point() {
		// a single pass would stop at "Hello." since `!` is stripped after `.`
		assert_eq!(clean_text("Hello.!"), "Hello");
		assert_eq!(clean_text("Hello. !"), "Hello");
		assert_eq!(clean_text("\"Yes.\"!"), "Yes");
	}

	#[test]
	fn clean_text_long_alternating_tail() {
		let text = format!("x{}", ".!".repeat(20_000));
		assert_eq!(clean_text(&text), "x");
		let text = format!("\"y{}\"", "?;".repeat(20_000));
		assert_eq!(clean_text(&text), "y");
	}

	#[test]
	fn clean_text_keeps_inner_punctuation() {
		assert_eq!(clean_text("Mr. Smith"), "Mr. Smith");
		assert_eq!(clean_text("don't"), "don't");
	}

	#[test]
	fn texts_match_cases() {
		assert!(texts_match("Hello!", "Hello"));
		assert!(texts_match(" it\u{2019}s ", "it's"));
		assert!(texts_match("\u{00AB}oui\u{00BB}", "oui"));
		assert!(!texts_match("", "Hello"));
		assert!(!texts_match("Hello", ""));
		assert!(!texts_match("Hello", "hello"));
	}

	#[test]
	fn variants_of_plain_word() {
		assert_eq!(text_variants("cat"), vec!["cat", "\"cat\""]);
	}

	#[test]
	fn variants_follow_documented_order() {
		assert_eq!(text_variants("It\u{2019}s fine."), vec![
			"It\u{2019}s fine.",
			"It's fine.",
			"It's fine",
			"It\u{2019}s fine",
			"\"It's fine\"",
		]);
	}

	#[test]
	fn variants_narrow_punctuation_keeps_colon() {
		let variants = text_variants("Note:");
		assert_eq!(variants, vec!["Note:", "Note", "\"Note\""]);
	}

	#[test]
	fn variants_drop_quotes() {
		assert_eq!(text_variants("\"go\""), vec!["\"go\"", "go"]);
		assert_eq!(text_variants("l'eau"), vec!["l'eau", "\"l'eau\"", "leau"]);
	}

	#[test]
	fn variants_never_empty() {
		assert!(text_variants("").is_empty());
		assert!(text_variants("\"\"").iter().all(|v| !v.is_empty()));
		assert_eq!(text_variants("\"\""), vec!["\"\""]);
	}
}

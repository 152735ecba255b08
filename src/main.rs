use std::{io::BufRead, path::PathBuf};

use altissia_answers::{
	AnswerKey, REFERENCE_GREENS, Rgb,
	answers::{MatchKind, is_valid_choice_label_with_limit, locate_label},
	clean_text,
	config::{AppConfig, SettingsFlags},
	normalize_quotes, text_variants, texts_match,
};
use clap::{Parser, Subcommand};
use color_eyre::{
	Result,
	eyre::{bail, eyre},
};
use tracing_subscriber::EnvFilter;
use v_utils::{elog, log};

#[derive(Parser)]
#[command(name = "altissia_answers")]
#[command(about = "Answer-key tooling for Altissia exercises: text matching, blacklist filtering, highlight detection", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
	#[clap(flatten)]
	settings: SettingsFlags,
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// Normalize quotes and strip surrounding quotes / trailing punctuation
	Clean { text: String },
	/// List the renderings tried when looking for an answer on screen
	Variants { text: String },
	/// Check whether two strings count as the same answer
	Match { a: String, b: String },
	/// Drop player labels from scraped answers (reads stdin lines when none are given)
	Filter { answers: Vec<String> },
	/// Keep the clickable labels that could be answer options
	Choices {
		#[arg(required = true)]
		labels: Vec<String>,
	},
	/// Classify CSS colors as highlight green
	Green {
		#[arg(required = true)]
		colors: Vec<String>,
	},
	/// Self-check the classifier against the player's known greens
	Palette,
	/// Find which on-screen label to click for an answer
	Locate {
		answer: String,
		#[arg(required = true)]
		labels: Vec<String>,
	},
	/// Re-filter and print a stored answer key (JSON)
	Key { path: PathBuf },
}

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
	let cli = Cli::parse();

	let config = match AppConfig::try_build(cli.settings) {
		Ok(config) => config,
		Err(e) => {
			elog!("Failed to load config, falling back to defaults: {e}");
			AppConfig::default()
		}
	};

	match cli.command {
		Commands::Clean { text } => {
			println!("{}", clean_text(&text));
		}
		Commands::Variants { text } => {
			let variants = text_variants(&text);
			if config.json {
				println!("{}", serde_json::to_string(&variants)?);
			} else {
				for v in variants {
					println!("{v}");
				}
			}
		}
		Commands::Match { a, b } => {
			let matched = texts_match(&a, &b);
			tracing::debug!("normalized: {:?} / {:?}", normalize_quotes(a.trim()), normalize_quotes(b.trim()));
			println!("{matched}");
			if !matched {
				std::process::exit(1);
			}
		}
		Commands::Filter { answers } => {
			let answers = if answers.is_empty() {
				std::io::stdin().lock().lines().collect::<std::io::Result<Vec<_>>>().map_err(|e| eyre!("Failed to read answers from stdin: {e}"))?
			} else {
				answers
			};
			let blacklist = config.blacklist()?;
			let kept = blacklist.filter(answers.into_iter().filter(|a| !a.trim().is_empty()));
			if config.json {
				println!("{}", serde_json::to_string(&kept)?);
			} else {
				for answer in kept {
					println!("{answer}");
				}
			}
		}
		Commands::Choices { labels } => {
			let blacklist = config.blacklist()?;
			let max_len = config.max_label_len();
			for label in labels.iter().filter(|l| is_valid_choice_label_with_limit(l, &blacklist, max_len)) {
				println!("{}", label.trim());
			}
		}
		Commands::Green { colors } => {
			for color in colors {
				match Rgb::parse(&color) {
					Some(rgb) => println!("{color}: {}", if rgb.is_green() { "green" } else { "not green" }),
					None => println!("{color}: not green (unparseable)"),
				}
			}
		}
		Commands::Palette => {
			let misses: Vec<&str> = REFERENCE_GREENS.iter().copied().filter(|c| !altissia_answers::is_color_green(c)).collect();
			if !misses.is_empty() {
				bail!("{} reference greens not recognized: {}", misses.len(), misses.join(", "));
			}
			log!("All {} reference greens recognized", REFERENCE_GREENS.len());
		}
		Commands::Locate { answer, labels } => {
			let Some(found) = locate_label(&answer, &labels) else {
				elog!("No label found for {answer:?}");
				std::process::exit(1);
			};
			let how = match found.kind {
				MatchKind::Exact => "exact",
				MatchKind::Partial => "partial",
				MatchKind::Fuzzy => "fuzzy",
			};
			println!("{}. {} ({how}, via {:?})", found.index + 1, labels[found.index], found.variant);
		}
		Commands::Key { path } => {
			let raw = std::fs::read_to_string(&path).map_err(|e| eyre!("Failed to read {}: {e}", path.display()))?;
			let key = AnswerKey::from_json(&raw)?;
			let before = key.len();
			let key = key.refilter(&config.blacklist()?);
			if key.len() < before {
				log!("Dropped {} question(s) left without answers", before - key.len());
			}
			if config.json {
				println!("{}", key.to_json()?);
			} else {
				print!("{key}");
			}
		}
	}

	Ok(())
}

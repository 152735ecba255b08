//! Heuristic for the green the exercise player uses to highlight correct answers

use std::sync::LazyLock;

use regex::Regex;

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)").expect("RGB_PATTERN regex should compile"));

/// Greens observed in the player's stylesheet. Reference data for self-checks, not consulted by [`is_color_green`].
pub const REFERENCE_GREENS: &[&str] = &[
	"rgb(26, 179, 92)",
	"rgb(233, 251, 241)",
	"rgb(34, 197, 94)",
	"rgb(22, 163, 74)",
	"rgb(16, 185, 129)",
	"rgb(5, 150, 105)",
	"rgb(0, 128, 0)",
	"rgb(0, 255, 0)",
	"rgb(76, 175, 80)",
	"rgb(46, 125, 50)",
	"rgb(67, 160, 71)",
	"rgb(102, 187, 106)",
	"rgb(139, 195, 74)",
	"rgb(156, 204, 101)",
	"rgb(200, 230, 201)",
	"rgb(165, 214, 167)",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_new::new)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	/// First `rgb(r, g, b)` / `rgba(r, g, b, a)` triple in `s`. Alpha is ignored.
	///
	/// `None` when there is no complete triple or a component does not fit 0..=255.
	pub fn parse(s: &str) -> Option<Self> {
		let caps = RGB_PATTERN.captures(s)?;
		let component = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
		Some(Self::new(component(1)?, component(2)?, component(3)?))
	}

	/// Checked in order; first rule that holds wins.
	pub fn is_green(&self) -> bool {
		let (r, g, b) = (u16::from(self.r), u16::from(self.g), u16::from(self.b));

		// saturated green / lime
		if g > 100 && r < 100 && b < 100 {
			return true;
		}
		// green clearly dominant, mid-tones like (34, 197, 94)
		if g > r + 20 && g > b + 20 && g > 100 {
			return true;
		}
		// pastel backgrounds leaning green, but not near-white
		let near_white = r > 240 && g > 240 && b > 240;
		g >= r && g >= b && g > 200 && !near_white
	}
}

/// Whether a CSS color string is the highlight green. Unparseable input is simply not green.
pub fn is_color_green(color: &str) -> bool {
	Rgb::parse(color).is_some_and(|rgb| rgb.is_green())
}

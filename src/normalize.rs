use once_cell::sync::Lazy;
use regex::Regex;

static RE_LINE_ENDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());
static RE_TRAILING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

/// Canonicalizes text for tolerant comparison: every line ending becomes
/// `\n` and trailing spaces/tabs are stripped from every line. Leading
/// whitespace and blank lines are preserved.
pub(crate) fn normalize(text: &str) -> String {
	let unified = RE_LINE_ENDING.replace_all(text, "\n");
	RE_TRAILING_WS.replace_all(&unified, "").into_owned()
}

/// Single-line form of `normalize`: strips the trailing carriage return and
/// trailing spaces/tabs.
pub(crate) fn normalize_line(line: &str) -> &str {
	line.trim_end_matches([' ', '\t', '\r'])
}

// region:    --- Tests


// endregion: --- Tests

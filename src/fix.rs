use crate::{Error, Result};
use serde::{Deserialize, Deserializer};

/// A proposed, file-scoped text replacement produced by an upstream review.
///
/// The declared line range and the expected snippet both come from a model
/// earlier in the pipeline and may be stale by apply time. They anchor the
/// search, nothing more.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Fix {
	pub id: String,
	pub title: String,
	/// Document-relative path of the target file.
	pub file_path: String,
	/// 1-based, inclusive.
	pub start_line: u32,
	/// 1-based, inclusive. Must be >= `start_line`.
	pub end_line: u32,
	pub replacement: String,
	/// The literal text the fix expects to replace. An explicit `null` means
	/// the review never produced a content anchor for this fix.
	#[serde(deserialize_with = "de_explicit_null")]
	pub expected_original_snippet: Option<String>,
}

impl Fix {
	/// Parses and validates a single fix from its JSON form.
	pub fn from_json(json: &str) -> Result<Fix> {
		let fix: Fix = serde_json::from_str(json)?;
		fix.validate()?;
		Ok(fix)
	}

	pub fn hint(&self) -> LineHint {
		LineHint {
			start_line: self.start_line,
			end_line: self.end_line,
		}
	}

	pub(crate) fn validate(&self) -> Result<()> {
		if self.file_path.is_empty() {
			return Err(Error::invalid_fix(&self.id, "filePath must not be empty"));
		}
		if self.start_line < 1 {
			return Err(Error::invalid_fix(&self.id, "startLine must be >= 1"));
		}
		if self.end_line < self.start_line {
			return Err(Error::invalid_fix(
				&self.id,
				format!("endLine {} must be >= startLine {}", self.end_line, self.start_line),
			));
		}
		Ok(())
	}
}

/// Parses one review's worth of fixes (a JSON array).
pub fn parse_fixes(json: &str) -> Result<Vec<Fix>> {
	let fixes: Vec<Fix> = serde_json::from_str(json)?;
	for fix in &fixes {
		fix.validate()?;
	}
	Ok(fixes)
}

/// Nullable fields must be explicitly null in the schema; a plain `Option`
/// would silently accept an omitted key.
fn de_explicit_null<'de, D>(deserializer: D) -> core::result::Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Option::deserialize(deserializer)
}

// region:    --- LineHint

/// The declared (and possibly stale) line range of a fix, 1-based.
/// Biases the search toward a region, but is never trusted as ground truth.
#[derive(Debug, Clone, Copy)]
pub struct LineHint {
	pub start_line: u32,
	pub end_line: u32,
}

impl LineHint {
	/// 0-based inclusive line band of `radius` lines around the hint,
	/// clamped to a document of `line_count` lines.
	pub(crate) fn band(&self, radius: u32, line_count: usize) -> (usize, usize) {
		let start = (self.start_line as i64 - 1 - radius as i64).max(0) as usize;
		let last_idx = line_count.saturating_sub(1);
		let end = ((self.end_line as i64 - 1 + radius as i64).max(0) as usize).min(last_idx);
		(start.min(last_idx), end)
	}

	/// Midpoint of the hinted range in 0-based line space.
	pub(crate) fn midpoint(&self) -> f64 {
		((self.start_line as f64 - 1.0) + (self.end_line as f64 - 1.0)) / 2.0
	}
}

// endregion: --- LineHint

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;

	#[test]
	fn test_fix_from_json_simple() -> Result<()> {
		// -- Setup & Fixtures
		let json = r#"{
			"id": "fix-1",
			"title": "Use checked add",
			"filePath": "src/main.rs",
			"startLine": 3,
			"endLine": 4,
			"replacement": "a.checked_add(b)",
			"expectedOriginalSnippet": "a + b"
		}"#;

		// -- Exec
		let fix = Fix::from_json(json)?;

		// -- Check
		assert_eq!(fix.id, "fix-1");
		assert_eq!(fix.file_path, "src/main.rs");
		assert_eq!(fix.start_line, 3);
		assert_eq!(fix.expected_original_snippet.as_deref(), Some("a + b"));

		Ok(())
	}

	#[test]
	fn test_fix_from_json_explicit_null_snippet() -> Result<()> {
		// -- Setup & Fixtures
		let json = r#"{
			"id": "fix-2",
			"title": "Rewrite block",
			"filePath": "src/lib.rs",
			"startLine": 1,
			"endLine": 2,
			"replacement": "new block",
			"expectedOriginalSnippet": null
		}"#;

		// -- Exec
		let fix = Fix::from_json(json)?;

		// -- Check
		assert!(fix.expected_original_snippet.is_none());

		Ok(())
	}

	#[test]
	fn test_fix_from_json_omitted_snippet_rejected() {
		// -- Setup & Fixtures
		let json = r#"{
			"id": "fix-3",
			"title": "Missing key",
			"filePath": "src/lib.rs",
			"startLine": 1,
			"endLine": 1,
			"replacement": "x"
		}"#;

		// -- Exec & Check
		assert!(Fix::from_json(json).is_err());
	}

	#[test]
	fn test_fix_from_json_unknown_field_rejected() {
		// -- Setup & Fixtures
		let json = r#"{
			"id": "fix-4",
			"title": "Extra key",
			"filePath": "src/lib.rs",
			"startLine": 1,
			"endLine": 1,
			"replacement": "x",
			"expectedOriginalSnippet": null,
			"confidence": 0.9
		}"#;

		// -- Exec & Check
		assert!(Fix::from_json(json).is_err());
	}

	#[test]
	fn test_fix_from_json_invalid_ranges() {
		// -- Setup & Fixtures
		let zero_start = r#"{
			"id": "fix-5",
			"title": "Zero start",
			"filePath": "src/lib.rs",
			"startLine": 0,
			"endLine": 1,
			"replacement": "x",
			"expectedOriginalSnippet": null
		}"#;
		let inverted = r#"{
			"id": "fix-6",
			"title": "Inverted",
			"filePath": "src/lib.rs",
			"startLine": 5,
			"endLine": 2,
			"replacement": "x",
			"expectedOriginalSnippet": null
		}"#;

		// -- Exec & Check
		assert!(Fix::from_json(zero_start).is_err());
		assert!(Fix::from_json(inverted).is_err());
	}

	#[test]
	fn test_fix_hint_band_clamps() {
		// -- Setup & Fixtures
		let hint = LineHint {
			start_line: 3,
			end_line: 4,
		};

		// -- Exec
		let (start, end) = hint.band(100, 20);

		// -- Check
		assert_eq!(start, 0);
		assert_eq!(end, 19);
	}

	#[test]
	fn test_fix_hint_midpoint() {
		// -- Setup & Fixtures
		let hint = LineHint {
			start_line: 10,
			end_line: 12,
		};

		// -- Exec & Check
		assert_eq!(hint.midpoint(), 10.0);
	}
}

// endregion: --- Tests

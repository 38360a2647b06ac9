/// 0-based line/column range within a document. Columns are byte offsets
/// within their line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRange {
	pub start_line: usize,
	pub start_col: usize,
	pub end_line: usize,
	pub end_col: usize,
}

impl LineRange {
	/// Span covering whole lines `start_idx..=end_idx`, ending at the last
	/// line's length.
	pub(crate) fn of_line_span(start_idx: usize, end_idx: usize, last_line_len: usize) -> Self {
		Self {
			start_line: start_idx,
			start_col: 0,
			end_line: end_idx,
			end_col: last_line_len,
		}
	}

	pub(crate) fn midpoint(&self) -> f64 {
		(self.start_line as f64 + self.end_line as f64) / 2.0
	}
}

/// A located region of the document that might correspond to a fix's anchor.
/// Ephemeral; owned by the matcher that produced it.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
	pub range: LineRange,
	pub matched_text: String,
	pub score: Option<f64>,
}

/// Builds the line/column range for a match of `matched` starting at byte
/// `offset` in `text`.
pub(crate) fn build_range(text: &str, offset: usize, matched: &str) -> LineRange {
	let prefix = &text[..offset];
	let start_line = prefix.bytes().filter(|b| *b == b'\n').count();
	let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
	let start_col = offset - line_start;

	let inner_breaks = matched.bytes().filter(|b| *b == b'\n').count();
	let end_line = start_line + inner_breaks;
	let end_col = match matched.rfind('\n') {
		Some(i) => matched.len() - (i + 1),
		None => start_col + matched.len(),
	};

	LineRange {
		start_line,
		start_col,
		end_line,
		end_col,
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_range_build_range_single_line() {
		// -- Setup & Fixtures
		let text = "alpha\nbeta gamma\ndelta";

		// -- Exec
		let range = build_range(text, 11, "gamma");

		// -- Check
		assert_eq!(
			range,
			LineRange {
				start_line: 1,
				start_col: 5,
				end_line: 1,
				end_col: 10
			}
		);
	}

	#[test]
	fn test_range_build_range_multi_line() {
		// -- Setup & Fixtures
		let text = "alpha\nbeta\ngamma\ndelta";

		// -- Exec
		let range = build_range(text, 6, "beta\ngamma");

		// -- Check
		assert_eq!(
			range,
			LineRange {
				start_line: 1,
				start_col: 0,
				end_line: 2,
				end_col: 5
			}
		);
	}

	#[test]
	fn test_range_build_range_at_document_end() {
		// -- Setup & Fixtures
		let text = "alpha\nomega";

		// -- Exec
		let range = build_range(text, 6, "omega");

		// -- Check
		assert_eq!(range.start_line, 1);
		assert_eq!(range.end_line, 1);
		assert_eq!(range.end_col, 5);
	}

	#[test]
	fn test_range_midpoint() {
		// -- Setup & Fixtures
		let range = LineRange::of_line_span(4, 6, 10);

		// -- Exec & Check
		assert_eq!(range.midpoint(), 5.0);
		assert_eq!(range.end_col, 10);
	}
}

// endregion: --- Tests

use crate::document::Document;
use crate::fix::LineHint;
use crate::normalize::normalize;
use crate::range::{LineRange, MatchCandidate, build_range};

/// Line radius around the hint for the first-pass windowed search.
pub(crate) const WINDOWED_SEARCH_RADIUS: u32 = 100;

/// Finds every literal occurrence of `snippet` in `text`, in document order.
///
/// The search resumes one character past each found start, so overlapping
/// occurrences are all reported. Tolerance filtering downstream relies on
/// seeing every candidate, not only non-overlapping ones.
pub(crate) fn find_all_exact(text: &str, snippet: &str) -> Vec<MatchCandidate> {
	let mut candidates = Vec::new();
	if snippet.is_empty() {
		return candidates;
	}

	let mut from = 0;
	while let Some(rel_idx) = text[from..].find(snippet) {
		let idx = from + rel_idx;
		candidates.push(MatchCandidate {
			range: build_range(text, idx, snippet),
			matched_text: snippet.to_string(),
			score: None,
		});

		let step = text[idx..].chars().next().map(|c| c.len_utf8()).unwrap_or(1);
		from = idx + step;
	}

	candidates
}

/// First-pass search: slides a window of the snippet's line count across a
/// band of `radius` lines around the hint, returning the first window whose
/// normalized text equals the normalized snippet.
pub(crate) fn find_windowed_exact(
	doc: &Document,
	snippet: &str,
	hint: &LineHint,
	radius: u32,
) -> Option<MatchCandidate> {
	if snippet.is_empty() {
		return None;
	}

	let lines = doc.lines();
	let snippet_line_count = snippet.split('\n').count();
	let norm_snippet = normalize(snippet);
	let (band_start, band_end) = hint.band(radius, lines.len());

	for start in band_start..=band_end {
		let end = start + snippet_line_count;
		if end > lines.len() {
			break;
		}
		let window = lines[start..end].join("\n");
		if normalize(&window) == norm_snippet {
			let range = LineRange::of_line_span(start, end - 1, lines[end - 1].len());
			return Some(MatchCandidate {
				range,
				matched_text: window,
				score: None,
			});
		}
	}

	None
}

// region:    --- Tests


// endregion: --- Tests

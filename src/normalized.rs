use crate::document::Document;
use crate::fix::LineHint;
use crate::locate::select_near_hint;
use crate::normalize::normalize;
use crate::range::{LineRange, MatchCandidate};

/// Whitespace-normalized fallback, consulted only when no literal occurrence
/// exists anywhere in the document. Recovers matches that differ only by
/// trailing whitespace or line-ending style.
pub(crate) fn find_normalized(doc: &Document, snippet: &str, hint: Option<&LineHint>) -> Option<MatchCandidate> {
	if snippet.is_empty() {
		return None;
	}

	let norm_doc = normalize(doc.text());
	let norm_snippet = normalize(snippet);
	if !norm_doc.contains(&norm_snippet) {
		return None;
	}

	let lines = doc.lines();
	let snippet_line_count = snippet.split('\n').count();

	let mut candidates = Vec::new();
	for start in 0..lines.len() {
		let end = start + snippet_line_count;
		if end > lines.len() {
			break;
		}
		let window = lines[start..end].join("\n");
		if normalize(&window) == norm_snippet {
			candidates.push(MatchCandidate {
				range: LineRange::of_line_span(start, end - 1, lines[end - 1].len()),
				matched_text: window,
				score: None,
			});
		}
	}

	select_near_hint(candidates, hint)
}

// region:    --- Tests


// endregion: --- Tests

use crate::document::Document;
use crate::fix::LineHint;
use crate::range::MatchCandidate;
use crate::{exact, normalized};
use tracing::debug;

/// Tolerance band, in lines, within which a global exact match is still
/// considered plausible relative to the hint.
pub(crate) const EXACT_TOLERANCE_LINES: u32 = 50;

type LocateStrategy = fn(&Document, &str, Option<&LineHint>) -> Option<MatchCandidate>;

/// Confident strategies, in decreasing-confidence order. The driver stops at
/// the first hit. The fuzzy matcher is deliberately not part of this ladder;
/// only `apply_fix` consults it, as a last resort.
const LADDER: &[(&str, LocateStrategy)] = &[
	("windowed-exact", windowed_exact_strategy),
	("global-exact", global_exact_strategy),
	("normalized", normalized_strategy),
];

/// Runs the confident strategy ladder and returns the first candidate found.
pub(crate) fn locate_snippet(doc: &Document, snippet: &str, hint: Option<&LineHint>) -> Option<MatchCandidate> {
	for (name, strategy) in LADDER {
		if let Some(candidate) = strategy(doc, snippet, hint) {
			debug!(
				strategy = name,
				start_line = candidate.range.start_line,
				end_line = candidate.range.end_line,
				"snippet located"
			);
			return Some(candidate);
		}
	}
	None
}

fn windowed_exact_strategy(doc: &Document, snippet: &str, hint: Option<&LineHint>) -> Option<MatchCandidate> {
	let hint = hint?;
	exact::find_windowed_exact(doc, snippet, hint, exact::WINDOWED_SEARCH_RADIUS)
}

fn global_exact_strategy(doc: &Document, snippet: &str, hint: Option<&LineHint>) -> Option<MatchCandidate> {
	let candidates = exact::find_all_exact(doc.text(), snippet);
	select_near_hint(candidates, hint)
}

fn normalized_strategy(doc: &Document, snippet: &str, hint: Option<&LineHint>) -> Option<MatchCandidate> {
	normalized::find_normalized(doc, snippet, hint)
}

/// Selects among candidates found anywhere in the document.
///
/// Unhinted, the first candidate in document order wins. Hinted, candidates
/// must overlap the tolerance band around the hint; among survivors the one
/// whose midpoint is closest to the hint's midpoint wins, first-found on
/// equal distance. No survivor means no match: an out-of-tolerance candidate
/// is never used.
pub(crate) fn select_near_hint(candidates: Vec<MatchCandidate>, hint: Option<&LineHint>) -> Option<MatchCandidate> {
	let Some(hint) = hint else {
		return candidates.into_iter().next();
	};

	let band_lo = hint.start_line as i64 - 1 - EXACT_TOLERANCE_LINES as i64;
	let band_hi = hint.end_line as i64 - 1 + EXACT_TOLERANCE_LINES as i64;
	let hint_mid = hint.midpoint();

	let mut best: Option<(f64, MatchCandidate)> = None;
	for candidate in candidates {
		let overlaps_band =
			band_lo <= candidate.range.end_line as i64 && (candidate.range.start_line as i64) <= band_hi;
		if !overlaps_band {
			continue;
		}

		let dist = (candidate.range.midpoint() - hint_mid).abs();
		let better = match &best {
			None => true,
			Some((best_dist, _)) => dist < *best_dist,
		};
		if better {
			best = Some((dist, candidate));
		}
	}

	best.map(|(_, candidate)| candidate)
}

// region:    --- Tests


// endregion: --- Tests

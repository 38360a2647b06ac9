use crate::document::Document;
use crate::fix::LineHint;
use crate::normalize::normalize_line;
use crate::range::{LineRange, MatchCandidate};
use tracing::trace;

/// Line radius around the hint for the fuzzy search window.
pub(crate) const FUZZY_SEARCH_RADIUS: u32 = 200;

/// Score bonus for a matching first or last line.
const EDGE_BONUS: f64 = 0.15;

/// Minimum acceptable score for a snippet of `line_count` lines. Short
/// snippets collide by accident far more easily, so they demand more.
fn min_score_for(line_count: usize) -> f64 {
	match line_count {
		0..=2 => 0.95,
		3..=6 => 0.80,
		7..=25 => 0.70,
		_ => 0.65,
	}
}

/// Scores a candidate window of the same line count as the expected lines:
/// the fraction of lines equal at the same index, plus `EDGE_BONUS` for a
/// matching first line and for a matching last line, clamped to [0, 1].
fn score_window(expected: &[&str], window: &[&str]) -> f64 {
	let line_count = expected.len();
	if line_count == 0 || window.len() != line_count {
		return 0.0;
	}

	let exact = expected.iter().zip(window).filter(|(e, w)| e == w).count();
	let mut score = exact as f64 / line_count as f64;
	if expected.first() == window.first() {
		score += EDGE_BONUS;
	}
	if expected.last() == window.last() {
		score += EDGE_BONUS;
	}

	score.clamp(0.0, 1.0)
}

/// Last-resort, hint-required search: scores every window of exactly the
/// snippet's line count within the radius and returns the best one clearing
/// the size-dependent minimum score. Ties go to the window whose midpoint is
/// closest to the hint's.
///
/// Windows are fixed-length: a region that gained or lost a line since the
/// review will never fuzzy-match. That is a known limit of this strategy;
/// swap the strategy rather than loosening the scoring.
pub(crate) fn find_fuzzy_near_hint(doc: &Document, snippet: &str, hint: &LineHint) -> Option<MatchCandidate> {
	if snippet.is_empty() {
		return None;
	}

	let lines = doc.lines();
	let expected: Vec<&str> = snippet.split('\n').map(normalize_line).collect();
	let line_count = expected.len();
	let min_score = min_score_for(line_count);
	let (band_start, band_end) = hint.band(FUZZY_SEARCH_RADIUS, lines.len());
	let hint_mid = hint.midpoint();

	// (score, midpoint distance, candidate)
	let mut best: Option<(f64, f64, MatchCandidate)> = None;

	for start in band_start..=band_end {
		let end = start + line_count;
		if end > lines.len() {
			break;
		}

		let window: Vec<&str> = lines[start..end].iter().copied().map(normalize_line).collect();
		let score = score_window(&expected, &window);
		if score < min_score {
			continue;
		}

		let range = LineRange::of_line_span(start, end - 1, lines[end - 1].len());
		let dist = (range.midpoint() - hint_mid).abs();
		let better = match &best {
			None => true,
			Some((best_score, best_dist, _)) => {
				score > *best_score || (score == *best_score && dist < *best_dist)
			}
		};
		if better {
			trace!(start_line = start, score, "fuzzy window accepted");
			let matched_text = lines[start..end].join("\n");
			best = Some((
				score,
				dist,
				MatchCandidate {
					range,
					matched_text,
					score: Some(score),
				},
			));
		}
	}

	best.map(|(_, _, candidate)| candidate)
}

// region:    --- Tests


// endregion: --- Tests

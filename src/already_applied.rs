use crate::document::Document;
use crate::fix::LineHint;
use crate::normalize::normalize;

/// Line radius around the hint for hinted normalized containment.
pub(crate) const ALREADY_APPLIED_RADIUS: u32 = 200;

/// Returns true when the replacement text is already present, so that
/// re-running a review's fixes is a safe no-op.
///
/// Literal containment counts anywhere in the document. Normalized
/// containment counts anywhere only when no hint is available; with a hint it
/// is confined to a window around it, so unrelated identical code elsewhere
/// in a large file does not read as "applied".
pub(crate) fn is_already_applied(doc: &Document, replacement: &str, hint: Option<&LineHint>) -> bool {
	if replacement.is_empty() {
		return false;
	}

	if doc.text().contains(replacement) {
		return true;
	}

	let norm_replacement = normalize(replacement);
	if norm_replacement.is_empty() {
		return false;
	}

	match hint {
		None => normalize(doc.text()).contains(&norm_replacement),
		Some(hint) => {
			let lines = doc.lines();
			if lines.is_empty() {
				return false;
			}
			let (band_start, band_end) = hint.band(ALREADY_APPLIED_RADIUS, lines.len());
			let window = lines[band_start..=band_end].join("\n");
			normalize(&window).contains(&norm_replacement)
		}
	}
}

// region:    --- Tests


// endregion: --- Tests

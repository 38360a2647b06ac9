use crate::apply_report::{ApplyReport, FixOutcome};
use crate::document::{Document, DocumentStore};
use crate::fix::Fix;
use crate::{Error, Result, already_applied, fuzzy, locate};
use tracing::debug;

/// Outcome of one `apply_fix` call. `applied == true` with a reason denotes
/// an idempotent no-op (the document already contained the replacement).
#[derive(Debug, Clone)]
pub struct ApplyResult {
	pub applied: bool,
	pub reason: Option<String>,
}

impl ApplyResult {
	fn applied() -> Self {
		Self {
			applied: true,
			reason: None,
		}
	}

	fn already_applied() -> Self {
		Self {
			applied: true,
			reason: Some("already applied".to_string()),
		}
	}

	fn failed(err: &Error) -> Self {
		Self {
			applied: false,
			reason: Some(err.to_string()),
		}
	}
}

/// Applies one fix against the live document at `fix.file_path`.
///
/// The strategy ladder runs in decreasing-confidence order and the first hit
/// wins: windowed exact, global exact within the hint tolerance, normalized,
/// then fuzzy near the hint. When nothing matches but the replacement is
/// already in place, the call is a no-op success.
///
/// At most one range is replaced per call, and no error escapes: every
/// failure is folded into `ApplyResult { applied: false, .. }`. Fixes
/// targeting the same file must be applied sequentially; earlier edits
/// legitimately shift later fixes' expected lines, which is what the wide
/// fuzzy radius is for.
pub fn apply_fix(store: &impl DocumentStore, fix: &Fix) -> ApplyResult {
	match try_apply_fix(store, fix) {
		Ok(result) => result,
		Err(err) => {
			debug!(fix_id = %fix.id, %err, "fix not applied");
			ApplyResult::failed(&err)
		}
	}
}

fn try_apply_fix(store: &impl DocumentStore, fix: &Fix) -> Result<ApplyResult> {
	fix.validate()?;
	let mut doc = store.open(&fix.file_path)?;

	let Some(snippet) = fix.expected_original_snippet.as_deref() else {
		return apply_line_range_only(store, &mut doc, fix);
	};

	let hint = fix.hint();

	// -- Confident ladder first, fuzzy as last resort
	let candidate = locate::locate_snippet(&doc, snippet, Some(&hint))
		.or_else(|| fuzzy::find_fuzzy_near_hint(&doc, snippet, &hint));

	if let Some(candidate) = candidate {
		doc.replace_range(&candidate.range, &fix.replacement)?;
		store.commit(&doc)?;
		debug!(fix_id = %fix.id, start_line = candidate.range.start_line, "fix applied");
		return Ok(ApplyResult::applied());
	}

	// -- Idempotent re-run: the replacement may already be in place
	if already_applied::is_already_applied(&doc, &fix.replacement, Some(&hint)) {
		debug!(fix_id = %fix.id, "replacement already present, no-op");
		return Ok(ApplyResult::already_applied());
	}

	Err(Error::snippet_not_found(&fix.file_path))
}

/// Snippet-less fallback: trusts the declared line numbers completely.
/// Exists only for fixes that never carried a content anchor.
fn apply_line_range_only(store: &impl DocumentStore, doc: &mut Document, fix: &Fix) -> Result<ApplyResult> {
	let line_count = doc.line_count();
	if fix.end_line as usize > line_count {
		return Err(Error::range_out_of_bounds(fix.start_line, fix.end_line, line_count));
	}

	let start_idx = fix.start_line.max(1) as usize - 1;
	let end_idx = fix.end_line as usize - 1;
	doc.replace_line_span(start_idx, end_idx, &fix.replacement)?;
	store.commit(doc)?;
	debug!(fix_id = %fix.id, start_idx, end_idx, "fix applied by line range only");

	Ok(ApplyResult::applied())
}

/// Read-only pre-flight: can the confident ladder still locate this fix's
/// anchor? The fuzzy fallback is deliberately not consulted, so a `true`
/// here means a high-confidence location exists right now.
pub fn can_apply_fix(store: &impl DocumentStore, fix: &Fix) -> bool {
	if fix.validate().is_err() {
		return false;
	}
	let Ok(doc) = store.open(&fix.file_path) else {
		return false;
	};

	match fix.expected_original_snippet.as_deref() {
		Some(snippet) => locate::locate_snippet(&doc, snippet, Some(&fix.hint())).is_some(),
		// No content anchor: viability is only the line-range bounds check.
		None => fix.end_line as usize <= doc.line_count(),
	}
}

/// Applies one review's fixes strictly sequentially, one outcome per fix.
///
/// A failed fix never aborts the batch; later fixes run against the
/// then-current file contents.
pub fn apply_fixes(store: &impl DocumentStore, fixes: &[Fix]) -> ApplyReport {
	let mut items = Vec::with_capacity(fixes.len());

	for fix in fixes {
		let result = apply_fix(store, fix);
		let mut outcome = FixOutcome::from(fix);
		outcome.applied = result.applied;
		outcome.reason = result.reason;
		items.push(outcome);
	}

	ApplyReport { items }
}

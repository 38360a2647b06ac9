use crate::Fix;

/// Report for one review's batch application.
#[derive(Debug, Clone)]
pub struct ApplyReport {
	pub items: Vec<FixOutcome>,
}

impl ApplyReport {
	pub fn applied_count(&self) -> usize {
		self.items.iter().filter(|item| item.applied).count()
	}

	pub fn failed_count(&self) -> usize {
		self.items.iter().filter(|item| !item.applied).count()
	}
}

/// Per-fix outcome within an `ApplyReport`.
#[derive(Debug, Clone)]
pub struct FixOutcome {
	pub fix_id: String,
	pub title: String,
	pub file_path: String,
	pub applied: bool,
	pub reason: Option<String>,
}

impl FixOutcome {
	pub fn applied(&self) -> bool {
		self.applied
	}

	pub fn reason(&self) -> Option<&str> {
		self.reason.as_deref()
	}
}

// region:    --- Froms

impl From<&Fix> for FixOutcome {
	fn from(fix: &Fix) -> Self {
		Self {
			fix_id: fix.id.clone(),
			title: fix.title.clone(),
			file_path: fix.file_path.clone(),
			applied: false,
			reason: None,
		}
	}
}

// endregion: --- Froms

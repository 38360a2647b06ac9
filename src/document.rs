use crate::range::LineRange;
use crate::{Error, Result};
use simple_fs::{SPath, read_to_string};
use std::fs;

/// A live text buffer loaded from a `DocumentStore`.
///
/// The engine never retains a `Document` across calls. Per apply attempt it
/// reads line content and performs at most one range replacement before
/// handing the buffer back to its store for commit.
#[derive(Debug, Clone)]
pub struct Document {
	path: SPath,
	text: String,
}

impl Document {
	pub fn new(path: impl Into<SPath>, text: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			text: text.into(),
		}
	}

	pub fn path(&self) -> &SPath {
		&self.path
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Number of lines, counting a trailing empty line after a final `\n`.
	pub fn line_count(&self) -> usize {
		self.text.split('\n').count()
	}

	/// Text of line `idx` (0-based), without its line break.
	pub fn line(&self, idx: usize) -> Option<&str> {
		self.text.split('\n').nth(idx)
	}

	pub(crate) fn lines(&self) -> Vec<&str> {
		self.text.split('\n').collect()
	}

	/// Byte offset of the start of line `idx` (0-based).
	fn line_start_offset(&self, idx: usize) -> Option<usize> {
		let mut offset = 0;
		for (i, line) in self.text.split('\n').enumerate() {
			if i == idx {
				return Some(offset);
			}
			offset += line.len() + 1;
		}
		None
	}

	/// Replaces `range` with `replacement`. This is the single mutation an
	/// apply call is allowed to perform.
	pub(crate) fn replace_range(&mut self, range: &LineRange, replacement: &str) -> Result<()> {
		let start = self
			.line_start_offset(range.start_line)
			.map(|offset| offset + range.start_col)
			.ok_or_else(|| Error::custom(format!("replace start line {} is out of bounds", range.start_line)))?;
		let end = self
			.line_start_offset(range.end_line)
			.map(|offset| offset + range.end_col)
			.ok_or_else(|| Error::custom(format!("replace end line {} is out of bounds", range.end_line)))?;

		if start > end || end > self.text.len() {
			return Err(Error::custom(format!("invalid replace range {range:?}")));
		}

		self.text.replace_range(start..end, replacement);
		Ok(())
	}

	/// Replaces the whole lines `start_idx..=end_idx` (0-based).
	pub(crate) fn replace_line_span(&mut self, start_idx: usize, end_idx: usize, replacement: &str) -> Result<()> {
		let last_line_len = self
			.line(end_idx)
			.map(str::len)
			.ok_or_else(|| Error::custom(format!("replace end line {end_idx} is out of bounds")))?;
		let range = LineRange::of_line_span(start_idx, end_idx, last_line_len);
		self.replace_range(&range, replacement)
	}
}

// region:    --- DocumentStore

/// Access to documents by review-relative path.
///
/// `open` fails with a `FileUnavailable` error class; `commit` is the single
/// write operation and fails with `EditRejected` when the underlying storage
/// refuses it.
pub trait DocumentStore {
	fn open(&self, path: &str) -> Result<Document>;
	fn commit(&self, doc: &Document) -> Result<()>;
}

/// Filesystem-backed store. All paths resolve under `base_dir`; a path that
/// escapes it is refused for both read and write.
pub struct FsDocumentStore {
	base_dir: SPath,
}

impl FsDocumentStore {
	pub fn new(base_dir: impl Into<SPath>) -> Self {
		Self {
			base_dir: base_dir.into().into_collapsed(),
		}
	}

	fn full_path(&self, path: &str) -> Result<SPath> {
		let full = self.base_dir.join(path).into_collapsed();
		if !full.as_str().starts_with(self.base_dir.as_str()) {
			return Err(Error::path_outside_base(path, self.base_dir.as_str()));
		}
		Ok(full)
	}
}

impl DocumentStore for FsDocumentStore {
	fn open(&self, path: &str) -> Result<Document> {
		let full = self.full_path(path)?;
		let text = read_to_string(&full).map_err(|err| Error::file_unavailable(path, err))?;
		Ok(Document::new(SPath::new(path), text))
	}

	fn commit(&self, doc: &Document) -> Result<()> {
		let full = self.full_path(doc.path().as_str())?;
		fs::write(&full, doc.text()).map_err(|err| Error::edit_rejected(doc.path().as_str(), err))
	}
}

// endregion: --- DocumentStore

// region:    --- Tests


// endregion: --- Tests

use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	// -- Fix ingestion
	#[display("invalid fix '{fix_id}': {cause}")]
	InvalidFix { fix_id: String, cause: String },

	// -- Locate & apply
	#[display("unable to open file '{path}': {cause}")]
	FileUnavailable { path: String, cause: String },

	#[display("line range {start_line}..{end_line} exceeds document length of {line_count} lines")]
	RangeOutOfBounds {
		start_line: u32,
		end_line: u32,
		line_count: usize,
	},

	#[display("could not find original snippet in '{path}' (file modified or fix already applied)")]
	SnippetNotFound { path: String },

	#[display("edit rejected for '{path}': {cause}")]
	EditRejected { path: String, cause: String },

	#[display("path '{target}' is outside of base dir '{base_dir}'")]
	PathOutsideBase { target: String, base_dir: String },

	// -- Externals
	#[from]
	Io(std::io::Error),

	#[from]
	SimpleFs(simple_fs::Error),

	#[from]
	SerdeJson(serde_json::Error),
}

// region:    --- Constructors

impl Error {
	pub fn custom(val: impl std::fmt::Display) -> Self {
		Self::Custom(val.to_string())
	}

	pub fn invalid_fix(fix_id: impl Into<String>, cause: impl Into<String>) -> Self {
		Self::InvalidFix {
			fix_id: fix_id.into(),
			cause: cause.into(),
		}
	}

	pub fn file_unavailable(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
		Self::FileUnavailable {
			path: path.into(),
			cause: cause.to_string(),
		}
	}

	pub fn range_out_of_bounds(start_line: u32, end_line: u32, line_count: usize) -> Self {
		Self::RangeOutOfBounds {
			start_line,
			end_line,
			line_count,
		}
	}

	pub fn snippet_not_found(path: impl Into<String>) -> Self {
		Self::SnippetNotFound { path: path.into() }
	}

	pub fn edit_rejected(path: impl Into<String>, cause: impl std::fmt::Display) -> Self {
		Self::EditRejected {
			path: path.into(),
			cause: cause.to_string(),
		}
	}

	pub fn path_outside_base(target: impl Into<String>, base_dir: impl Into<String>) -> Self {
		Self::PathOutsideBase {
			target: target.into(),
			base_dir: base_dir.into(),
		}
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

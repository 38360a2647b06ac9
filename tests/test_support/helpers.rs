use super::TestResult;
use simple_fs::{SPath, ensure_file_dir};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates a unique scratch dir under `tests/.out` for one fs-store scenario.
pub fn new_out_dir_path(prefix: &str) -> TestResult<SPath> {
	let now_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
	let dir = PathBuf::from("tests/.out").join(format!("{prefix}_{now_ms}"));
	std::fs::create_dir_all(&dir)?;
	let dir = SPath::try_from(dir)?;

	Ok(dir)
}

/// Writes `content` at `rel_path` under `dir`, creating parent dirs as needed.
pub fn write_file(dir: &SPath, rel_path: &str, content: &str) -> TestResult<SPath> {
	let full = dir.join(rel_path);
	ensure_file_dir(&full)?;
	std::fs::write(&full, content)?;

	Ok(full)
}

/// Reads the file at `rel_path` under `dir`.
pub fn read_file(dir: &SPath, rel_path: &str) -> TestResult<String> {
	let content = std::fs::read_to_string(dir.join(rel_path))?;
	Ok(content)
}

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use job_board_common::{IngestError, Intent};

pub const JOB_FILE_EXTENSIONS: &[&str] = &["json"];

pub fn read_job_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Runs on the loader thread; parsing happens later in `update`.
pub fn read_intent(path: &Path) -> Intent {
    match read_job_file(path) {
        Ok(contents) => Intent::FileLoaded { contents },
        Err(err) => Intent::FileFailed(IngestError::Read(format!("{err:#}"))),
    }
}

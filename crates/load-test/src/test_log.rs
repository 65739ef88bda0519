use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::Error;

/// Append-only record of every mass-test exchange.
///
/// Each entry is written as
/// ```text
/// TEST: <request>
/// EXPECTED: <expected response>
/// RESULT: <actual response>
/// ---
/// ```
pub struct TestLog {
    path: PathBuf,
    file: File,
}

impl TestLog {
    /// Opens `path` for appending, discarding any previous contents.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        File::create(&path)?;
        let file = OpenOptions::new().append(true).open(&path)?;
        Ok(Self { path, file })
    }

    pub fn record(&mut self, request: &str, expected: &str, result: &str) -> Result<(), Error> {
        write!(
            self.file,
            "TEST: {}\nEXPECTED: {}\nRESULT: {}\n---\n",
            request, expected, result
        )?;
        self.file.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! Temp-file-then-rename writes, so a failed or partial transfer never leaves
//! a truncated asset or manifest under its final name.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{BrandkitError, Result};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `logo.svg` → `logo.svg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Open `.part` file for one asset. Dropping it without `finalize` removes the temp file.
pub struct PartFile {
    file: Option<File>,
    temp_path: PathBuf,
    finalized: bool,
}

impl PartFile {
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::create(&temp_path).map_err(|e| BrandkitError::io(&temp_path, e))?;
        Ok(Self {
            file: Some(file),
            temp_path,
            finalized: false,
        })
    }

    /// Sync, close and rename the temp file onto `final_path`.
    /// On failure the temp file is removed when `self` drops.
    pub fn finalize(mut self, final_path: &Path) -> Result<()> {
        if let Some(file) = self.file.take() {
            file.sync_all()
                .map_err(|e| BrandkitError::io(&self.temp_path, e))?;
        }
        fs::rename(&self.temp_path, final_path).map_err(|e| BrandkitError::io(final_path, e))?;
        self.finalized = true;
        Ok(())
    }
}

impl Write for PartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.as_mut() {
            Some(f) => f.write(buf),
            None => Err(io::Error::new(io::ErrorKind::Other, "part file closed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        if !self.finalized {
            self.file.take();
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

/// Writes `contents` to `path` through a `.part` file and rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let mut part = PartFile::create(path)?;
    part.write_all(contents)
        .map_err(|e| BrandkitError::io(temp_path(path), e))?;
    part.finalize(path)
}

use crate::error::{JungError, Result};
use crate::task::Task;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Outcome of loading the task file
///
/// Corrupted lines do not fail the load; they are dropped and counted so the
/// caller can warn the user once the whole file has been read.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Valid tasks in file order
    pub tasks: Vec<Task>,
    /// Number of non-blank lines that could not be parsed
    pub corrupted: usize,
}

/// Flat-file task storage, one record per line
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load all tasks from the file
    ///
    /// A missing file is created (with its parent directories) and yields an
    /// empty list. Blank lines are ignored; any other line that is not valid
    /// UTF-8 or does not parse is skipped and counted in [`LoadReport::corrupted`].
    pub fn load(&self) -> Result<LoadReport> {
        if !self.file_path.exists() {
            self.create_empty_file()?;
            info!("Created task file {}", self.file_path.display());
            return Ok(LoadReport::default());
        }

        let content = fs::read(&self.file_path).map_err(|source| JungError::StorageRead {
            path: self.file_path.clone(),
            source,
        })?;

        let mut report = LoadReport::default();
        for (line_no, raw) in content.split(|&b| b == b'\n').enumerate() {
            let line = match std::str::from_utf8(raw) {
                Ok(line) => line.strip_suffix('\r').unwrap_or(line),
                Err(e) => {
                    warn!(
                        "Skipping corrupted line {} in {}: {}",
                        line_no + 1,
                        self.file_path.display(),
                        e
                    );
                    report.corrupted += 1;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match Task::deserialize(line) {
                Ok(task) => report.tasks.push(task),
                Err(reason) => {
                    warn!(
                        "Skipping corrupted line {} in {}: {}",
                        line_no + 1,
                        self.file_path.display(),
                        reason
                    );
                    report.corrupted += 1;
                }
            }
        }

        info!(
            "Loaded {} task(s) from {} ({} corrupted line(s) skipped)",
            report.tasks.len(),
            self.file_path.display(),
            report.corrupted
        );
        Ok(report)
    }

    /// Replace the file contents with the given tasks
    ///
    /// The records are written to a temporary file in the same directory and
    /// then renamed over the target, so an interrupted save leaves either the
    /// old or the new file, never a truncated one.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let write_err = |source: std::io::Error| JungError::StorageWrite {
            path: self.file_path.clone(),
            source,
        };

        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(write_err)?;

        let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
        for task in tasks {
            writeln!(temp, "{}", task.serialize()).map_err(write_err)?;
        }
        temp.as_file().sync_all().map_err(write_err)?;
        temp.persist(&self.file_path)
            .map_err(|e| write_err(e.error))?;

        debug!("Saved {} task(s) to {}", tasks.len(), self.file_path.display());
        Ok(())
    }

    fn create_empty_file(&self) -> Result<()> {
        let read_err = |source: std::io::Error| JungError::StorageRead {
            path: self.file_path.clone(),
            source,
        };
        fs::create_dir_all(self.parent_dir()).map_err(read_err)?;
        fs::File::create(&self.file_path).map_err(read_err)?;
        Ok(())
    }

    /// Directory holding the file; `.` for a bare file name
    fn parent_dir(&self) -> &Path {
        match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

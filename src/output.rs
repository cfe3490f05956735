//! Output directory handling.
//!
//! Files are written to a temporary sibling first and renamed into place, so a
//! failed write never leaves a half-written file behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "/mnt/data";

pub const WORKBOOK_FILE: &str = "Apple_Watch_Activity_Health_Sleep_Data.xlsx";
pub const ACTIVITY_CHART_FILE: &str = "Activity_Data_Barplot.png";
pub const HEALTH_CHART_FILE: &str = "Health_Metrics_Piechart.png";
pub const SLEEP_CHART_FILE: &str = "Sleep_Data_Barplot.png";

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("output directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("output path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A validated, existing output directory.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Checks that `root` exists and is a directory. Nothing is created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, OutputError> {
        let root = root.into();
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => Ok(OutputDir { root }),
            Ok(_) => Err(OutputError::NotADirectory(root)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(OutputError::MissingDirectory(root))
            }
            Err(source) => Err(OutputError::Io { path: root, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Write `bytes` to `file_name`, replacing any existing file.
    pub fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, OutputError> {
        let path = self.join(file_name);
        let tmp = self.join(&format!(".{}.tmp", file_name));

        write_then_rename(&tmp, &path, bytes).map_err(|source| {
            // best effort, the temporary file may never have been created
            let _ = fs::remove_file(&tmp);
            OutputError::Io {
                path: path.clone(),
                source,
            }
        })?;

        log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

fn write_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = OutputDir::open(&missing).unwrap_err();
        assert!(matches!(err, OutputError::MissingDirectory(p) if p == missing));
        assert!(!missing.exists());
    }

    #[test]
    fn file_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, b"x").unwrap();
        let err = OutputDir::open(&file).unwrap_err();
        assert!(matches!(err, OutputError::NotADirectory(_)));
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputDir::open(dir.path()).unwrap();
        out.write("report.bin", b"first version").unwrap();
        let path = out.write("report.bin", b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn write_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputDir::open(dir.path()).unwrap();
        out.write(WORKBOOK_FILE, b"data").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![WORKBOOK_FILE.to_string()]);
    }

    #[test]
    fn failed_write_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let out = OutputDir::open(dir.path()).unwrap();
        // a directory in the way makes the final rename fail
        fs::create_dir(dir.path().join("blocked.png")).unwrap();
        fs::write(dir.path().join("blocked.png").join("keep"), b"x").unwrap();

        let err = out.write("blocked.png", b"data").unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
        assert!(!dir.path().join(".blocked.png.tmp").exists());
    }
}

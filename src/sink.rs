//! Report sink: writes rendered reports to disk and rotates old artifacts.
//!
//! Each write lands in the sink's directory as
//! `analysis-<utc-timestamp>-<seq>.txt`; the sequence counter disambiguates
//! writes within the same millisecond and keeps lexicographic filename order
//! equal to write order. After every write the directory is pruned so only
//! the most recent `keep` artifacts remain.
//!
//! This is a thin collaborator outside the analysis core; it only consumes a
//! finished [`TopKReport`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::error::ConfigError;
use crate::report::TopKReport;

const ARTIFACT_PREFIX: &str = "analysis-";
const ARTIFACT_SUFFIX: &str = ".txt";

static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Writes formatted reports into one directory, keeping the newest `keep`.
///
/// # Example
///
/// ```no_run
/// use freqtop::report::TopKReport;
/// use freqtop::sink::ReportSink;
///
/// let sink = ReportSink::new("out", 5).unwrap();
/// let path = sink.write(&TopKReport::default()).unwrap();
/// assert!(path.starts_with("out"));
/// ```
#[derive(Debug)]
pub struct ReportSink {
    dir: PathBuf,
    keep: usize,
}

impl ReportSink {
    /// Creates a sink rooted at `dir` retaining the `keep` newest artifacts.
    ///
    /// Rejects `keep = 0`: a sink that deletes everything it writes is a
    /// configuration mistake. The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>, keep: usize) -> Result<Self, ConfigError> {
        if keep == 0 {
            return Err(ConfigError::new("keep must be > 0"));
        }
        Ok(ReportSink {
            dir: dir.into(),
            keep,
        })
    }

    /// The sink's target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Renders `report` to a fresh artifact file and prunes old ones.
    ///
    /// Returns the path of the written artifact.
    pub fn write(&self, report: &TopKReport) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%3f");
        let name = format!("{ARTIFACT_PREFIX}{stamp}-{seq:06}{ARTIFACT_SUFFIX}");
        let path = self.dir.join(name);
        fs::write(&path, report.to_string())?;
        self.prune()?;
        Ok(path)
    }

    /// Deletes the oldest artifacts beyond `keep`, by filename order.
    fn prune(&self) -> io::Result<()> {
        let mut artifacts: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(ARTIFACT_PREFIX) && name.ends_with(ARTIFACT_SUFFIX) {
                artifacts.push(entry.path());
            }
        }
        if artifacts.len() <= self.keep {
            return Ok(());
        }
        artifacts.sort();
        let excess = artifacts.len() - self.keep;
        for stale in &artifacts[..excess] {
            fs::remove_file(stale)?;
        }
        Ok(())
    }
}

// ==============================================
// REPORT SINK TESTS
// ==============================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    /// Fresh scratch directory per test, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new() -> Self {
            let id = DIR_SEQ.fetch_add(1, Ordering::Relaxed);
            let dir = std::env::temp_dir().join(format!(
                "freqtop-sink-{}-{id}",
                std::process::id()
            ));
            ScratchDir(dir)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn artifact_count(dir: &Path) -> usize {
        fs::read_dir(dir).map(|it| it.count()).unwrap_or(0)
    }

    #[test]
    fn write_creates_directory_and_artifact() {
        let scratch = ScratchDir::new();
        let sink = ReportSink::new(scratch.path(), 3).unwrap();

        let path = sink.write(&TopKReport::default()).unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("analysis-"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn artifact_contains_rendered_report() {
        let scratch = ScratchDir::new();
        let sink = ReportSink::new(scratch.path(), 3).unwrap();

        let path = sink.write(&TopKReport::default()).unwrap();
        let body = fs::read_to_string(path).unwrap();
        assert!(body.starts_with("top 0 tokens:"));
    }

    #[test]
    fn rotation_keeps_only_newest() {
        let scratch = ScratchDir::new();
        let sink = ReportSink::new(scratch.path(), 2).unwrap();

        let first = sink.write(&TopKReport::default()).unwrap();
        let second = sink.write(&TopKReport::default()).unwrap();
        let third = sink.write(&TopKReport::default()).unwrap();

        assert_eq!(artifact_count(scratch.path()), 2);
        assert!(!first.exists());
        assert!(second.exists());
        assert!(third.exists());
    }

    #[test]
    fn unrelated_files_are_not_pruned() {
        let scratch = ScratchDir::new();
        let sink = ReportSink::new(scratch.path(), 1).unwrap();

        fs::create_dir_all(scratch.path()).unwrap();
        let bystander = scratch.path().join("notes.md");
        fs::write(&bystander, "keep me").unwrap();

        sink.write(&TopKReport::default()).unwrap();
        sink.write(&TopKReport::default()).unwrap();

        assert!(bystander.exists());
        assert_eq!(artifact_count(scratch.path()), 2); // 1 artifact + notes.md
    }

    #[test]
    fn zero_keep_is_rejected() {
        let err = ReportSink::new("out", 0).unwrap_err();
        assert!(err.to_string().contains("keep"));
    }
}

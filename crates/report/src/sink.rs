//! Where downloaded reports go.
//!
//! A browser would pop a save dialog; here the host picks a [`ReportSink`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::info;

use crate::error::ReportError;

/// Host "save file" mechanism for report artifacts.
pub trait ReportSink: Send + Sync + 'static {
    fn offer(&self, content: &str, file_name: &str) -> Result<(), ReportError>;
}

/// Offer a serialized report to the user under `suggested_name`.
pub fn download_report<S: ReportSink + ?Sized>(
    sink: &S,
    content: &str,
    suggested_name: &str,
) -> Result<(), ReportError> {
    sink.offer(content, suggested_name)?;
    info!(file_name = suggested_name, bytes = content.len(), "report offered for download");
    Ok(())
}

/// Writes reports into a directory (the user's downloads folder by default).
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform downloads directory, or the working directory when there is none.
    pub fn downloads() -> Self {
        Self::new(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `file_name` would be written. Names must be a single path component.
    pub fn path_for(&self, file_name: &str) -> Result<PathBuf, ReportError> {
        let is_plain = !file_name.is_empty()
            && file_name != "."
            && file_name != ".."
            && !file_name.contains(['/', '\\']);
        if !is_plain {
            return Err(ReportError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.dir.join(file_name))
    }
}

impl Default for DirectorySink {
    fn default() -> Self {
        Self::downloads()
    }
}

impl ReportSink for DirectorySink {
    fn offer(&self, content: &str, file_name: &str) -> Result<(), ReportError> {
        let path = self.path_for(file_name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

/// In-memory sink for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryReportSink {
    inner: Mutex<Vec<(String, String)>>,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(file_name, content)` offered so far, oldest first.
    pub fn all(&self) -> Vec<(String, String)> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl ReportSink for InMemoryReportSink {
    fn offer(&self, content: &str, file_name: &str) -> Result<(), ReportError> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((file_name.to_string(), content.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_sink_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(tmp.path().join("reports"));

        download_report(&sink, "{\"a\": 1}", "text-analysis-x.json").unwrap();

        let written = fs::read_to_string(tmp.path().join("reports/text-analysis-x.json")).unwrap();
        assert_eq!(written, "{\"a\": 1}");
    }

    #[test]
    fn directory_sink_rejects_path_like_names() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(tmp.path());
        for bad in ["", "..", "../escape.json", "nested/name.json", "c:\\x.json"] {
            assert!(
                matches!(sink.offer("{}", bad), Err(ReportError::InvalidFileName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn in_memory_sink_records_offers_in_order() {
        let sink = InMemoryReportSink::new();
        download_report(&sink, "one", "a.json").unwrap();
        download_report(&sink, "two", "b.json").unwrap();
        assert_eq!(
            sink.all(),
            vec![
                ("a.json".to_string(), "one".to_string()),
                ("b.json".to_string(), "two".to_string()),
            ]
        );
    }
}

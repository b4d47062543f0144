use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use url::Url;

/// Outcome recorded for one download attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Downloaded,
    /// The destination file already existed; no request was made.
    Skipped,
    Failed,
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogStatus::Downloaded => "downloaded",
            LogStatus::Skipped => "skipped",
            LogStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// One row of the download log.
pub struct LogEvent<'a> {
    pub date: NaiveDate,
    pub label: &'a str,
    pub url: &'a Url,
    /// Basename the file was (or would have been) saved under.
    pub saved_file: &'a str,
    pub status: LogStatus,
}

/// Append-only CSV record of every download attempt. Each event is a single
/// appended row; the header is written once when the file is created. This
/// replaces the original spreadsheet, which was re-read and rewritten in full
/// on every logged event.
pub struct DownloadLog {
    path: PathBuf,
}

impl DownloadLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DownloadLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, event: &LogEvent<'_>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let fresh = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open log {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if fresh {
            writer.write_record(["date", "label", "url", "saved_file", "status"])?;
        }
        writer.write_record([
            event.date.format("%Y-%m-%d").to_string(),
            event.label.to_string(),
            event.url.to_string(),
            event.saved_file.to_string(),
            event.status.to_string(),
        ])?;
        writer
            .flush()
            .with_context(|| format!("failed to write log {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event<'a>(url: &'a Url, status: LogStatus) -> LogEvent<'a> {
        LogEvent {
            date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
            label: "Judge-A_18-10-2025.pdf",
            url,
            saved_file: "Judge_A_18_10_2025pdf_18_10_2025.pdf",
            status,
        }
    }

    #[test]
    fn header_written_once_and_rows_append() {
        let dir = tempfile::tempdir().unwrap();
        let log = DownloadLog::new(dir.path().join("log.csv"));
        let url = Url::parse("https://example.org/a.pdf").unwrap();

        log.append(&event(&url, LogStatus::Downloaded)).unwrap();
        log.append(&event(&url, LogStatus::Skipped)).unwrap();

        let text = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,label,url,saved_file,status");
        assert!(lines[1].ends_with("downloaded"));
        assert!(lines[2].ends_with("skipped"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let log = DownloadLog::new(dir.path().join("nested/deeper/log.csv"));
        let url = Url::parse("https://example.org/a.pdf").unwrap();
        log.append(&event(&url, LogStatus::Failed)).unwrap();
        assert!(log.path().exists());
    }
}

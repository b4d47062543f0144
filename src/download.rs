use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use url::Url;

use crate::extract::PdfLink;
use crate::fetch::Fetch;
use crate::log::{DownloadLog, LogEvent, LogStatus};
use crate::sanitize;

/// Fallback label when sanitization leaves nothing usable.
const DEFAULT_LABEL: &str = "cause_list";

/// Flat pause between consecutive downloads; not a rate limiter, just basic
/// courtesy towards the court server.
pub const COURTESY_PAUSE: Duration = Duration::from_millis(300);

/// One failed download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub url: Url,
    pub error: String,
}

/// Aggregate outcome of one dispatch run.
#[derive(Debug, Default)]
pub struct Report {
    pub found: usize,
    pub downloaded: Vec<PathBuf>,
    pub failed: Vec<Failure>,
}

/// Sequentially downloads matched links into an output directory.
///
/// Links are processed strictly in order. A file that already exists under
/// its destination name is counted as downloaded without touching the
/// network, which makes re-runs idempotent. A failing link is recorded and
/// does not stop the rest. After every attempt the progress callback receives
/// the integer percentage of links processed so far.
pub struct Dispatcher<'a, F: Fetch> {
    fetcher: &'a F,
    out_dir: PathBuf,
    date: NaiveDate,
    log: Option<&'a DownloadLog>,
    pause: Duration,
}

impl<'a, F: Fetch> Dispatcher<'a, F> {
    pub fn new(fetcher: &'a F, out_dir: impl Into<PathBuf>, date: NaiveDate) -> Self {
        Dispatcher {
            fetcher,
            out_dir: out_dir.into(),
            date,
            log: None,
            pause: COURTESY_PAUSE,
        }
    }

    pub fn with_log(mut self, log: &'a DownloadLog) -> Self {
        self.log = Some(log);
        self
    }

    #[cfg(test)]
    fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Destination filename for a link: sanitized label (or the fallback)
    /// plus the target date, with a guaranteed `.pdf` extension.
    fn dest_name(&self, label: &str) -> PathBuf {
        let mut token = sanitize::filename_token(label);
        if token.is_empty() {
            token = DEFAULT_LABEL.to_string();
        }
        let name = format!("{token}_{}", self.date.format("%d_%m_%Y"));
        sanitize::ensure_extension(&PathBuf::from(name), ".pdf")
    }

    pub fn run(&self, links: &[PdfLink], mut on_progress: impl FnMut(u8)) -> Report {
        let mut report = Report {
            found: links.len(),
            ..Report::default()
        };
        let total = links.len();
        let mut log_broken = false;

        for (i, link) in links.iter().enumerate() {
            let dest = self.out_dir.join(self.dest_name(&link.label));
            let status = if dest.exists() {
                report.downloaded.push(dest.clone());
                LogStatus::Skipped
            } else {
                thread::sleep(self.pause);
                match self.fetcher.download(&link.url, &dest) {
                    Ok(()) => {
                        report.downloaded.push(dest.clone());
                        LogStatus::Downloaded
                    }
                    Err(e) => {
                        report.failed.push(Failure {
                            url: link.url.clone(),
                            error: format!("{e:#}"),
                        });
                        LogStatus::Failed
                    }
                }
            };

            if let Some(log) = self.log {
                let saved_file = dest
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let event = LogEvent {
                    date: self.date,
                    label: &link.label,
                    url: &link.url,
                    saved_file: &saved_file,
                    status,
                };
                // The log is an audit trail, not a dependency; a broken log
                // must not abort the downloads. Complain once.
                if let Err(e) = log.append(&event)
                    && !log_broken
                {
                    eprintln!("warning: could not write download log: {e:#}");
                    log_broken = true;
                }
            }

            let pct = ((i + 1) * 100 / total) as u8;
            on_progress(pct);
        }
        report
    }
}

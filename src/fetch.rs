use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use url::Url;

/// Daily-board listing page for the New Delhi district courts.
pub const BASE_PAGE: &str = "https://newdelhi.dcourts.gov.in/cause-list-%e2%81%84-daily-board/";

/// The court site serves some clients a block page for unknown agents, so
/// requests identify as a common desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0 Safari/537.36";

const PAGE_TIMEOUT: Duration = Duration::from_secs(20);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Network seam between the pipeline and the outside world. The dispatcher
/// only ever talks to this trait, which keeps its skip/failure/ordering
/// behaviour testable without a server.
pub trait Fetch {
    /// GET `url` and return the body as text.
    fn page(&self, url: &Url) -> anyhow::Result<String>;

    /// GET `url`, streaming the body into a new file at `dest`.
    fn download(&self, url: &Url, dest: &Path) -> anyhow::Result<()>;
}

/// Blocking `ureq` implementation. One request per call, no retries; a
/// timeout, connection failure or non-2xx status surfaces as an error with
/// the URL attached.
pub struct HttpFetcher;

fn agent(global_timeout: Duration) -> ureq::Agent {
    let cfg = ureq::Agent::config_builder()
        .timeout_connect(Some(Duration::from_secs(5)))
        .timeout_global(Some(global_timeout))
        .build();
    ureq::Agent::new_with_config(cfg)
}

impl Fetch for HttpFetcher {
    fn page(&self, url: &Url) -> anyhow::Result<String> {
        let body = agent(PAGE_TIMEOUT)
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call()
            .with_context(|| format!("failed to fetch listing page {url}"))?
            .body_mut()
            .read_to_string()
            .with_context(|| format!("failed to read listing page body from {url}"))?;
        Ok(body)
    }

    fn download(&self, url: &Url, dest: &Path) -> anyhow::Result<()> {
        let res = agent(DOWNLOAD_TIMEOUT)
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call()
            .with_context(|| format!("failed request for {url}"))?;

        let mut reader = res.into_body().into_reader();
        let mut file =
            File::create(dest).with_context(|| format!("failed to create {}", dest.display()))?;
        if let Err(e) = io::copy(&mut reader, &mut file) {
            // Don't leave a truncated PDF behind; it would satisfy the
            // exists-check on the next run.
            drop(file);
            let _ = fs::remove_file(dest);
            return Err(e).with_context(|| format!("failed to download {url}"));
        }
        Ok(())
    }
}

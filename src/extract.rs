use std::collections::HashSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use crate::dates::{self, normalize};
use chrono::NaiveDate;

/// A cause-list link discovered on the daily-board page. The label is the
/// href's filename component, which on this site carries the judge name and
/// date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfLink {
    pub label: String,
    pub url: Url,
}

/// All PDF links on the page whose URL text contains the target date in any
/// of its variant renderings.
///
/// Matching is on href text only, after stripping spaces, hyphens and
/// underscores from both sides, so `18_10_2025` in a filename matches the
/// `18-10-2025` variant. Surrounding page text is never consulted. Relative
/// hrefs are resolved against `base`; results are deduplicated by resolved
/// URL in first-seen order. An empty result is the normal "no cause list
/// that day" outcome, and malformed HTML simply yields fewer anchors.
pub fn pdf_links_for_date(html: &str, base: &Url, date: NaiveDate) -> Vec<PdfLink> {
    static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

    let variants: Vec<String> = dates::variants(date)
        .iter()
        .map(|v| normalize(v))
        .collect();

    let doc = Html::parse_document(html);
    let mut seen: HashSet<Url> = HashSet::new();
    let mut found = Vec::new();

    for anchor in doc.select(&ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if !href.to_lowercase().ends_with(".pdf") {
            continue;
        }

        let clean = normalize(href);
        if !variants.iter().any(|v| clean.contains(v.as_str())) {
            continue;
        }

        let Ok(url) = base.join(href) else {
            continue;
        };
        if !seen.insert(url.clone()) {
            continue;
        }

        found.push(PdfLink {
            label: filename_component(href),
            url,
        });
    }
    found
}

/// Last path segment of an href, e.g. `files/Judge-A_18-10-2025.pdf` →
/// `Judge-A_18-10-2025.pdf`.
fn filename_component(href: &str) -> String {
    href.rsplit('/').next().unwrap_or(href).to_string()
}

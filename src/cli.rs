use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use url::Url;

use crate::fetch::BASE_PAGE;

#[derive(Parser, Debug)]
#[command(version, about = "Download a date's cause-list PDFs from the Delhi district courts daily board", long_about = None)]
pub struct Cli {
    /// Date of the cause lists to fetch (YYYY-MM-DD or DD-MM-YYYY)
    #[arg(value_name = "DATE", value_parser = parse_date)]
    pub date: NaiveDate,

    /// Directory downloads are written under
    #[arg(long, value_name = "DIR", default_value = "output/cause_lists")]
    pub out_dir: PathBuf,

    /// Write files directly into the output directory instead of a
    /// per-date subfolder
    #[arg(long)]
    pub flat: bool,

    /// Bundle the downloaded PDFs into a ZIP archive next to them
    #[arg(long)]
    pub zip: bool,

    /// CSV file every download attempt is appended to
    #[arg(long, value_name = "FILE", default_value = "output/download_log.csv")]
    pub log: PathBuf,

    /// Listing page to scrape (defaults to the daily-board page)
    #[arg(long, value_name = "URL", default_value = BASE_PAGE)]
    pub page_url: Url,
}

/// Accept the ISO rendering first, then the day-first one people copy off
/// the court site.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d-%m-%Y"))
        .map_err(|_| format!("'{s}' is not a date; expected YYYY-MM-DD or DD-MM-YYYY"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_and_day_first_dates_parse_to_the_same_day() {
        let expected = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        assert_eq!(parse_date("2025-10-18").unwrap(), expected);
        assert_eq!(parse_date("18-10-2025").unwrap(), expected);
    }

    #[test]
    fn garbage_dates_are_rejected() {
        for bad in ["tomorrow", "2025-13-40", "18/10/2025", ""] {
            assert!(parse_date(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn defaults_are_wired() {
        let cli = Cli::parse_from(["causelist", "2025-10-18"]);
        assert_eq!(cli.out_dir, PathBuf::from("output/cause_lists"));
        assert_eq!(cli.log, PathBuf::from("output/download_log.csv"));
        assert_eq!(cli.page_url.as_str(), BASE_PAGE);
        assert!(!cli.flat);
        assert!(!cli.zip);
    }
}

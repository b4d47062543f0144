use std::fs;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::cli::Cli;
use crate::download::Dispatcher;
use crate::fetch::{Fetch, HttpFetcher};
use crate::log::DownloadLog;

mod archive;
mod cli;
mod dates;
mod download;
mod extract;
mod fetch;
mod log;
mod sanitize;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let out_dir = if args.flat {
        args.out_dir.clone()
    } else {
        args.out_dir.join(args.date.format("%d_%m_%Y").to_string())
    };
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let fetcher = HttpFetcher;
    eprintln!("Fetching cause lists for {} ...", args.date.format("%d-%m-%Y"));
    let html = fetcher.page(&args.page_url)?;
    let links = extract::pdf_links_for_date(&html, &args.page_url, args.date);

    if links.is_empty() {
        eprintln!(
            "{}",
            format!(
                "No cause list PDFs found for {}. Try another date.",
                args.date.format("%d-%m-%Y")
            )
            .yellow()
        );
        return Ok(());
    }

    let log = DownloadLog::new(&args.log);
    let dispatcher = Dispatcher::new(&fetcher, &out_dir, args.date).with_log(&log);

    let bar = ProgressBar::new(100).with_style(
        ProgressStyle::with_template("{bar:40} {pos:>3}%")
            .expect("valid progress template"),
    );
    let report = dispatcher.run(&links, |pct| bar.set_position(pct as u64));
    bar.finish_and_clear();

    eprintln!(
        "Found {} PDF link(s). {} {} {} {}",
        report.found,
        "✓".green(),
        report.downloaded.len(),
        "✗".red(),
        report.failed.len(),
    );

    if !report.downloaded.is_empty() {
        println!("Downloaded files:");
        for path in &report.downloaded {
            println!("  {}", path.display());
        }

        if args.zip {
            let zip_path = out_dir.with_extension("zip");
            archive::bundle(&report.downloaded, &zip_path)?;
            println!("ZIP archive created: {}", zip_path.display());
        }
    }

    if !report.failed.is_empty() {
        eprintln!("{}", "Failed downloads:".red());
        for failure in &report.failed {
            eprintln!("  {} -> {}", failure.url, failure.error);
        }
    }

    Ok(())
}

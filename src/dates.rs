use chrono::NaiveDate;

/// String renderings of `date` covering the filename conventions seen on the
/// daily-board page. The site's filenames are human-authored and not
/// standardized, so matching has to tolerate several separator and month-name
/// styles rather than one canonical format.
pub fn variants(date: NaiveDate) -> Vec<String> {
    let formats = [
        "%d-%m-%Y",
        "%d_%m_%Y",
        "%d/%m/%Y",
        "%d %B %Y",  // 18 October 2025
        "%-d %B %Y", // 8 October 2025 (no zero padding)
        "%d %b %Y",  // 18 Oct 2025
        "%m_%d_%y",
    ];
    let mut out: Vec<String> = Vec::with_capacity(formats.len());
    for fmt in formats {
        let v = date.format(fmt).to_string();
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// Collapse a string to the form links are matched in: spaces, hyphens and
/// underscores removed, everything lowercased. Applied identically to hrefs
/// and to date variants, so `18_10_2025` in a URL matches a `18-10-2025`
/// variant and vice versa.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

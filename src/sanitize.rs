use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Reduce an arbitrary label (anchor text or filename) to a filesystem-safe
/// token: NFKD-normalized, stripped of everything outside the word/space/hyphen
/// class, with runs of whitespace and hyphens collapsed into single
/// underscores. May come out empty; callers supply their own fallback.
pub fn filename_token(s: &str) -> String {
    static STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
    static COLLAPSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());

    let normalized: String = s.trim().nfkd().collect();
    let stripped = STRIP_RE.replace_all(&normalized, "");
    COLLAPSE_RE.replace_all(&stripped, "_").into_owned()
}

/// Append `ext` unless the path already ends with it (case-insensitively).
pub fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    let s = path.to_string_lossy();
    if s.to_lowercase().ends_with(&ext.to_lowercase()) {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{s}{ext}"))
    }
}

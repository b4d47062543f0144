use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Bundle `files` into a single ZIP at `dest`, one deflated entry per file
/// under its basename. Overwrites an existing archive.
pub fn bundle(files: &[PathBuf], dest: &Path) -> anyhow::Result<()> {
    let out = File::create(dest).with_context(|| format!("failed to create {}", dest.display()))?;
    let mut zip = ZipWriter::new(out);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("file has no basename: {}", path.display()))?;
        zip.start_file(name, options)?;
        let mut src =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        io::copy(&mut src, &mut zip)
            .with_context(|| format!("failed to archive {}", path.display()))?;
    }
    zip.finish()
        .with_context(|| format!("failed to finish archive {}", dest.display()))?;
    Ok(())
}

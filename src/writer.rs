use anyhow::Result;
use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufWriter, prelude::*},
    path::Path,
};

use crate::{constants::M3U_HEADER, model::entry::Entry};

/// Writes `entries` to an m3u file at `path`, keeping only the first occurrence
/// of every (`#EXTINF`, URL) pair. Missing parent directories are created and an
/// existing file is overwritten. Returns the number of entries written.
pub fn dedup_write<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    path: &Path,
) -> Result<usize> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}", M3U_HEADER)?;

    let mut seen = HashSet::new();
    for entry in entries {
        if seen.insert(entry) {
            writeln!(out, "{}", entry.extinf)?;
            writeln!(out, "{}", entry.url)?;
        }
    }
    out.flush()?;

    Ok(seen.len())
}

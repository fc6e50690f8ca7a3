use anyhow::{Result, bail};
use jwalk::WalkDir;
use std::path::{Path, PathBuf};

use crate::error::MyError;

fn has_allowed_ext(path: &Path, allowed_exts: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            allowed_exts
                .iter()
                .any(|allowed_ext| allowed_ext.eq_ignore_ascii_case(ext))
        })
}

// resolves the directory only, so a symlinked file keeps its own name
fn full_path(path: PathBuf) -> PathBuf {
    let resolved = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => dunce::canonicalize(parent)
            .ok()
            .map(|parent| parent.join(name)),
        _ => None,
    };

    resolved.unwrap_or(path)
}

/// Returns paths of files anywhere under `root_dir` whose extension
/// (ignoring ASCII case) is contained in `allowed_exts`, in sorted order.
pub fn walk_dir(root_dir: &Path, allowed_exts: &[&str]) -> Result<Vec<PathBuf>> {
    if !root_dir.is_dir() {
        bail!(MyError::Config(format!(
            "source directory `{}` does not exist or is not a directory",
            root_dir.to_string_lossy()
        )));
    }

    let list = WalkDir::new(root_dir)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true);
    let mut files: Vec<_> = list
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                let path = entry.path();
                // links to directories are not walked, links to files are read through
                let is_file = entry.file_type.is_file()
                    || (entry.file_type.is_symlink() && path.is_file());
                if is_file && has_allowed_ext(&path, allowed_exts) {
                    Some(full_path(path))
                } else {
                    None
                }
            }
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                None
            }
        })
        .collect();
    files.sort();

    Ok(files)
}

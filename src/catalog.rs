use anyhow::Result;
use std::{
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{
    config::OutputConfig,
    model::{
        category::{Category, Classifier},
        entry::Entry,
        playlist::Playlist,
    },
    writer,
};

/// Entries of all scanned playlists, sorted into one list per category.
/// An entry matching several categories is shared between their lists.
#[derive(Debug, Default)]
pub struct Catalog {
    lists: [Vec<Rc<Entry>>; 3],
    n_files: usize,
    n_failed: usize,
    n_entries: usize,
}

#[derive(Debug)]
pub struct SummaryRow {
    pub category: Category,
    pub path: PathBuf,
    pub collected: usize,
    pub written: usize,
}

#[derive(Debug)]
pub struct Summary {
    pub n_files: usize,
    pub n_failed: usize,
    pub n_entries: usize,
    pub rows: Vec<SummaryRow>,
}

impl Catalog {
    pub fn add(&mut self, entry: Entry, classifier: &Classifier) {
        self.n_entries += 1;
        let entry = Rc::new(entry);
        for category in classifier.classify(&entry.url) {
            self.lists[category.index()].push(Rc::clone(&entry));
        }
    }

    /// Parses `files` in order. A file that can't be read is logged and skipped.
    /// `on_file` is called before each file is parsed.
    pub fn from_files(
        files: &[PathBuf],
        classifier: &Classifier,
        mut on_file: impl FnMut(&Path),
    ) -> Self {
        let mut catalog = Self::default();
        for file in files {
            on_file(file);
            catalog.n_files += 1;
            match Playlist::try_from_file(file) {
                Ok(playlist) => {
                    let entries = playlist.into_inner();
                    log::debug!(
                        "{} entries in `{}`",
                        entries.len(),
                        file.to_string_lossy()
                    );
                    for entry in entries {
                        catalog.add(entry, classifier);
                    }
                }
                Err(e) => {
                    log::error!("{}", e);
                    catalog.n_failed += 1;
                }
            }
        }

        catalog
    }

    pub fn list(&self, category: Category) -> &[Rc<Entry>] {
        &self.lists[category.index()]
    }

    /// Writes one deduplicated playlist per category.
    pub fn save(&self, output_config: &OutputConfig) -> Result<Summary> {
        let mut rows = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let list = self.list(category);
            let path = output_config.path_for(category);
            let written = writer::dedup_write(list.iter().map(|entry| &**entry), &path)?;
            log::info!(
                "{}: wrote {} of {} entries to `{}`",
                category,
                written,
                list.len(),
                path.to_string_lossy()
            );
            rows.push(SummaryRow {
                category,
                path,
                collected: list.len(),
                written,
            });
        }

        Ok(Summary {
            n_files: self.n_files,
            n_failed: self.n_failed,
            n_entries: self.n_entries,
            rows,
        })
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Done.")?;
        writeln!(
            f,
            "{} entries from {} files",
            self.n_entries, self.n_files
        )?;
        if self.n_failed > 0 {
            writeln!(f, "{} files could not be read", self.n_failed)?;
        }
        for row in self.rows.iter() {
            writeln!(
                f,
                "{}: {} ({} unique, written to {})",
                row.category,
                row.collected,
                row.written,
                row.path.display()
            )?;
        }

        Ok(())
    }
}

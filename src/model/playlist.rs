use anyhow::Result;
use std::{fs, path::Path};

use crate::{error::MyError, model::entry::Entry, parsers::m3u};

#[derive(Debug)]
pub struct Playlist(Vec<Entry>);

impl Playlist {
    /// Reads and parses an m3u file. Invalid UTF-8 is replaced rather than rejected.
    pub fn try_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| MyError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        Ok(Self(m3u::parse_lines(m3u::lines(&text))))
    }

    pub fn into_inner(self) -> Vec<Entry> {
        self.0
    }
}

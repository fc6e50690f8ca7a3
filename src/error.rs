use std::{
    fmt::{self, Display, Formatter},
    io,
    path::PathBuf,
};

#[derive(Debug)]
pub enum MyError {
    /// Bad settings or a missing source directory; aborts the run.
    Config(String),
    /// A single playlist that couldn't be read; the run goes on without it.
    File { path: PathBuf, source: io::Error },
}

impl Display for MyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "ConfigError: {}", e),
            Self::File { path, source } => {
                write!(f, "FileError: cannot read `{}`: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for MyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::File { source, .. } => Some(source),
        }
    }
}

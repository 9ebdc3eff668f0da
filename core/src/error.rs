use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Error {
        Error::Io { path: path.as_ref().to_path_buf(), source }
    }

    /// Maps a failed open of a document to `DocumentNotFound` when the file is missing.
    pub(crate) fn open_document(path: impl AsRef<Path>, source: io::Error) -> Error {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::DocumentNotFound { path },
            _ => Error::Io { path, source },
        }
    }

    /// Maps a failed open of an input list (documents or noise words).
    pub(crate) fn open_input(path: impl AsRef<Path>, source: io::Error) -> Error {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound { path },
            _ => Error::Io { path, source },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::DocumentNotFound { .. } | Error::FileNotFound { .. })
    }
}

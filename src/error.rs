//! Error types for rubberduck.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Rubberduck error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{editor}' exited with status {code}")]
    EditorExit { editor: String, code: i32 },
}

impl Error {
    /// Build a `map_err` adapter that tags an IO error with what was being done.
    pub fn io<'a>(op: &'static str, path: &'a Path) -> impl FnOnce(std::io::Error) -> Self + 'a {
        move |source| Error::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Process exit status for this error.
    ///
    /// A failing editor hands its own code through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::EditorExit { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

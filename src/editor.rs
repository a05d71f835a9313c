//! Hand a file over to the user's editor.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Error;

/// An editor command, run interactively on the current terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    program: String,
}

impl Editor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Open `path` and block until the editor exits.
    ///
    /// The editor inherits stdin, stdout and stderr. A non-zero exit is an
    /// error carrying the editor's code (1 if it was killed by a signal).
    pub fn open(&self, path: &Path) -> Result<(), Error> {
        debug!(editor = %self.program, path = %path.display(), "Launching editor");

        let status = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::EditorLaunch {
                editor: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::EditorExit {
                editor: self.program.clone(),
                code: status.code().unwrap_or(1),
            })
        }
    }
}

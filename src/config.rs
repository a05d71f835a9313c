//! Runtime configuration for rubberduck.
//!
//! Everything comes from the home directory and the environment; there is no
//! config file.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Primary editor variable.
pub const EDITOR_PRIMARY_VAR: &str = "NEOVIM";

/// Fallback editor variable.
pub const EDITOR_FALLBACK_VAR: &str = "EDITOR";

/// Editor used when neither variable is set.
pub const DEFAULT_EDITOR: &str = "nvim";

/// Overrides the scratch directory location.
pub const SCRATCH_DIR_VAR: &str = "RUBBERDUCK_DIR";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the daily scratch files.
    pub scratch_dir: PathBuf,

    /// Editor command to hand the file to.
    pub editor: String,
}

impl Config {
    /// Resolve config from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        Ok(Self::resolve(&home, |key| std::env::var(key).ok()))
    }

    /// Resolve config against a home directory and an environment lookup.
    pub fn resolve<F>(home: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let scratch_dir = var(SCRATCH_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::default_scratch_dir(home));

        let editor = var(EDITOR_PRIMARY_VAR)
            .or_else(|| var(EDITOR_FALLBACK_VAR))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Self {
            scratch_dir,
            editor,
        }
    }

    /// Path to the scratch directory (~/Documents/rubberducks/)
    pub fn default_scratch_dir(home: &Path) -> PathBuf {
        home.join("Documents").join("rubberducks")
    }
}

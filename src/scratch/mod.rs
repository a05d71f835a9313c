//! Daily scratch files.
//!
//! [`ScratchDir::prepare`] makes sure today's file exists: it is left alone if
//! already there, otherwise cloned from the newest earlier file with a fresh
//! heading, or seeded with just a heading when there is nothing to clone.

pub mod heading;
pub mod naming;

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::Error;

/// How today's file came to be ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// Already existed; left untouched.
    Existing(PathBuf),
    /// Created with only a heading.
    Seeded(PathBuf),
    /// Cloned from `source` with the heading rewritten.
    Cloned { path: PathBuf, source: PathBuf },
}

impl Prepared {
    /// Path of today's scratch file.
    pub fn path(&self) -> &Path {
        match self {
            Prepared::Existing(path) | Prepared::Seeded(path) => path,
            Prepared::Cloned { path, .. } => path,
        }
    }
}

/// The directory holding one scratch file per day.
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the scratch file for `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root.join(naming::file_name(date))
    }

    /// Ensure the scratch file for `date` exists and return where it is.
    pub fn prepare(&self, date: NaiveDate, console: &Console) -> Result<Prepared, Error> {
        let path = self.path_for(date);

        if path.is_file() {
            console.info("Opening today's scratch...");
            return Ok(Prepared::Existing(path));
        }

        fs::create_dir_all(&self.root).map_err(Error::io("create scratch directory", &self.root))?;

        let prepared = match self.latest()? {
            None => {
                console.info("No scratch files yet, starting a fresh one...");
                self.seed(&path, date)?.map(Prepared::Seeded)
            }
            Some(source) => {
                console.info(format!(
                    "Carrying over {}...",
                    source.file_name().unwrap_or_default().to_string_lossy()
                ));
                self.clone_from(&source, &path, date)?
                    .map(|path| Prepared::Cloned { path, source })
            }
        };

        Ok(prepared.unwrap_or_else(|| {
            warn!(path = %path.display(), "Scratch file appeared while preparing it");
            console.warn("Today's scratch was created by someone else, opening it as is");
            Prepared::Existing(path)
        }))
    }

    /// Scratch file names in the directory, oldest first.
    ///
    /// Only regular files directly inside the directory are listed.
    pub fn list(&self) -> Result<Vec<String>, Error> {
        let entries = fs::read_dir(&self.root).map_err(Error::io("read scratch directory", &self.root))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(Error::io("read scratch directory", &self.root))?;
            let file_type = entry
                .file_type()
                .map_err(Error::io("inspect", &entry.path()))?;
            if file_type.is_dir() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if naming::is_scratch_name(&name) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// The most recent scratch file, if any.
    pub fn latest(&self) -> Result<Option<PathBuf>, Error> {
        Ok(self.list()?.pop().map(|name| self.root.join(name)))
    }

    /// Write a heading-only file. `None` if the file already exists.
    fn seed(&self, path: &Path, date: NaiveDate) -> Result<Option<PathBuf>, Error> {
        debug!(path = %path.display(), "Seeding scratch file");
        write_new(path, "write", |out| heading::rewrite(io::empty(), out, date))
    }

    /// Clone `source` into `path` with a fresh heading. `None` if `path`
    /// already exists.
    fn clone_from(
        &self,
        source: &Path,
        path: &Path,
        date: NaiveDate,
    ) -> Result<Option<PathBuf>, Error> {
        let input = File::open(source).map_err(Error::io("open", source))?;
        debug!(source = %source.display(), path = %path.display(), "Cloning scratch file");
        write_new(path, "copy into", |out| {
            heading::rewrite(BufReader::new(input), out, date)
        })
    }
}

/// Create `path` and hand it to `fill`.
///
/// `None` if a regular file is already there. Anything else in the way is an
/// error. A half-written file is removed so the next run does not mistake it
/// for today's.
fn write_new<F>(path: &Path, op: &'static str, fill: F) -> Result<Option<PathBuf>, Error>
where
    F: FnOnce(BufWriter<File>) -> io::Result<()>,
{
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_file() => return Ok(None),
        Err(e) => return Err(Error::io("create", path)(e)),
    };

    match fill(BufWriter::new(file)) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(e) => {
            let _ = fs::remove_file(path);
            Err(Error::io(op, path)(e))
        }
    }
}

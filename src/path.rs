//! Filesystem enumeration for path completions.
use std::fs;
use std::path::Path;

/// Which entries a path completion may offer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PathKind {
    /// Files and directories both.
    Any,
    /// Directories only.
    DirOnly,
}

/// A source of directory entries. Candidate generation goes through this
/// seam so tests can substitute a fixed listing for the real filesystem.
pub trait PathScanner {
    /// Enumerates the names of the entries directly under `dir`, lazily.
    /// Dropping the iterator abandons the walk.
    fn scan(&self, dir: &Path, kind: PathKind) -> Box<dyn Iterator<Item = String> + '_>;
}

/// The real filesystem.
pub struct FsScanner;

impl PathScanner for FsScanner {
    fn scan(&self, dir: &Path, kind: PathKind) -> Box<dyn Iterator<Item = String> + '_> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                trace!("scan: cannot read {}: {}", dir.display(), err);
                return Box::new(std::iter::empty());
            }
        };

        Box::new(entries.filter_map(move |entry| {
            let entry = entry.ok()?;

            // `path().is_dir()` resolves symlinks, so a link to a
            // directory still counts as one.
            if kind == PathKind::DirOnly && !entry.path().is_dir() {
                return None;
            }

            // Names we cannot offer as UTF-8 candidates are skipped.
            entry.file_name().to_str().map(|name| name.to_owned())
        }))
    }
}

use anyhow::{anyhow, ensure, Result};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, FilterEntry, IntoIter, WalkDir};

use super::{EntryKind, EntryOrder, ExcludeSet, TreeConfig, TreeEntry};

type EntryFilter = Box<dyn FnMut(&DirEntry) -> bool>;

/// Streaming depth-first walk yielding one [`TreeEntry`] per output line.
///
/// Within each directory, files are yielded before subdirectories are
/// descended into. The iterator ends after the first error.
pub struct TreeWalk {
    inner: FilterEntry<IntoIter, EntryFilter>,
    root: PathBuf,
    excludes: ExcludeSet,
    failed: bool,
}

/// Start a walk over `root`. Nothing is read until the first `next()`.
pub fn walk_tree(root: &Path, config: &TreeConfig) -> TreeWalk {
    let order = config.order;
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(move |a, b| sort_cmp(a, b, order));

    // filter_entry prunes excluded directories before they are yielded,
    // so neither their header line nor their contents are ever produced.
    let excludes = config.excludes.clone();
    let filter: EntryFilter = Box::new(move |entry: &DirEntry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        if excludes.contains_name(&entry.file_name().to_string_lossy()) {
            debug!(path = %entry.path().display(), "skipping excluded directory");
            return false;
        }
        true
    });

    TreeWalk {
        inner: walker.into_iter().filter_entry(filter),
        root: root.to_path_buf(),
        excludes: config.excludes.clone(),
        failed: false,
    }
}

impl Iterator for TreeWalk {
    type Item = Result<TreeEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let result = match self.inner.next()? {
                Ok(entry) => self.to_tree_entry(&entry),
                Err(err) => Err(walk_error(err)),
            };
            match result {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => continue,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl TreeWalk {
    /// Map a walkdir entry to a printable entry, or `None` if it produces no line.
    fn to_tree_entry(&self, entry: &DirEntry) -> Result<Option<TreeEntry>> {
        let depth = entry.depth();
        let path = entry.path();
        let is_dir = entry.file_type().is_dir();

        if depth == 0 {
            ensure!(is_dir, "{}: Not a directory", path.display());
        }

        if is_dir {
            if self.excludes.matches_path(path) {
                debug!(path = %path.display(), "path contains an excluded name, not listing its files");
            }
            trace!(path = %path.display(), depth, "directory");
            return Ok(Some(TreeEntry {
                name: base_name(path),
                path: path.to_path_buf(),
                depth,
                kind: EntryKind::Dir,
            }));
        }

        // Symlinks are not followed; one pointing at a directory is neither
        // descended into nor listed as a file.
        if entry.path_is_symlink() && path.is_dir() {
            debug!(path = %path.display(), "skipping symlinked directory");
            return Ok(None);
        }

        let parent = path.parent().unwrap_or(self.root.as_path());
        if self.excludes.matches_path(parent) {
            return Ok(None);
        }

        trace!(path = %path.display(), depth, "file");
        Ok(Some(TreeEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: path.to_path_buf(),
            depth,
            kind: EntryKind::File,
        }))
    }
}

/// Final path component as text. Paths ending in `.` or `..` have no
/// `file_name`, so the component itself is used (`.` prints as `.`).
pub fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path
            .components()
            .next_back()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Convert a walkdir error into one naming the failing path.
fn walk_error(err: walkdir::Error) -> anyhow::Error {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "???".to_string());
    let detail = match err.io_error() {
        Some(io_err) => io_err.to_string(),
        None => err.to_string(),
    };
    anyhow!("{path}: {detail}")
}

/// Comparison function for walkdir sorting.
/// Non-directories first so a directory's files print before any subtree.
/// The sort is stable, so `Listing` keeps the OS order inside each group.
fn sort_cmp(a: &DirEntry, b: &DirEntry, order: EntryOrder) -> Ordering {
    let by_kind = a.file_type().is_dir().cmp(&b.file_type().is_dir());
    match order {
        EntryOrder::Listing => by_kind,
        EntryOrder::ByName => by_kind.then_with(|| a.file_name().cmp(b.file_name())),
    }
}

//! Tree walking, exclusion filtering, and line layout.

mod layout;
pub(crate) mod walk;

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub use layout::{format_entry, render_lines};
pub use walk::{base_name, walk_tree, TreeWalk};

/// Directory names skipped when the caller supplies no exclusion set.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "__pycache__", "node_modules", ".venv", "venv"];

/// Whether an entry is printed as a directory header or a file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// A single line of the printed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Base name of the directory or file.
    pub name: String,
    /// Path as walked (root joined with each component, never canonicalized).
    pub path: PathBuf,
    /// Path segments between the root and this entry (root = 0).
    pub depth: usize,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Immutable, ordered set of directory names to skip.
///
/// Names are matched two ways: exactly against a directory's base name to
/// prune it before descent, and as a substring of a directory's full path to
/// suppress the listing of its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet {
    names: Vec<String>,
}

impl ExcludeSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// An exclusion set that skips nothing.
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Exact match against a directory's base name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// True if any excluded name occurs anywhere in `path`'s text.
    pub fn matches_path(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.names.iter().any(|n| text.contains(n.as_str()))
    }
}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for ExcludeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Order of entries within one directory.
///
/// Files always come before subdirectories; this only decides the order
/// inside each group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Whatever order the OS directory listing returns.
    #[default]
    Listing,
    /// Byte-wise by file name, for reproducible output across platforms.
    ByName,
}

/// Configuration for a tree walk.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    pub excludes: ExcludeSet,
    pub order: EntryOrder,
}

/// Walk `root` and collect every entry that would be printed.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<Vec<TreeEntry>> {
    walk_tree(root, config).collect()
}

/// Walk `root`, writing each line to `out` as soon as it is produced.
///
/// Stops at the first filesystem error; lines written before it stay written.
pub fn write_tree<W: Write>(root: &Path, config: &TreeConfig, out: &mut W) -> Result<()> {
    for entry in walk_tree(root, config) {
        let entry = entry?;
        writeln!(out, "{}", format_entry(&entry)).context("failed to write output")?;
    }
    out.flush().context("failed to write output")?;
    Ok(())
}

/// Walk `root` and print the tree to standard output.
pub fn print_tree(root: &Path, config: &TreeConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(root, config, &mut out)
}

/// Write the tree under `startpath` to `out`, skipping `exclude_dirs`
/// (or [`DEFAULT_EXCLUDES`] when `None`).
pub fn write_directory_tree<W: Write>(
    startpath: impl AsRef<Path>,
    exclude_dirs: Option<ExcludeSet>,
    out: &mut W,
) -> Result<()> {
    let config = TreeConfig {
        excludes: exclude_dirs.unwrap_or_default(),
        ..TreeConfig::default()
    };
    write_tree(startpath.as_ref(), &config, out)
}

/// Print the tree under `startpath` to standard output.
pub fn print_directory_tree(
    startpath: impl AsRef<Path>,
    exclude_dirs: Option<ExcludeSet>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_directory_tree(startpath, exclude_dirs, &mut out)
}

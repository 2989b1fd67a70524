#![allow(dead_code)]

use dirtree::tree::{build_tree, render_lines, EntryOrder, TreeConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber; `RUST_LOG=debug cargo test -- --nocapture` shows walk decisions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Default excludes with name ordering, so assertions don't depend on the OS listing order.
pub fn by_name_config() -> TreeConfig {
    TreeConfig {
        order: EntryOrder::ByName,
        ..TreeConfig::default()
    }
}

/// Create a directory structure from a list of relative paths under `<tmp>/proj`.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    for p in paths {
        let full = root.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// The walk root inside a fixture.
pub fn fixture_root(tmp: &TempDir) -> std::path::PathBuf {
    tmp.path().join("proj")
}

/// Walk `root` and return the printed lines.
pub fn render(root: &Path, config: &TreeConfig) -> Vec<String> {
    render_lines(&build_tree(root, config).unwrap())
}

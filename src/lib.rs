#![forbid(unsafe_code)]
//! dirtree — print an indented text tree of a directory, skipping excluded directories.

pub mod cli;
pub mod tree;

pub use tree::{print_directory_tree, write_directory_tree, ExcludeSet, TreeConfig};

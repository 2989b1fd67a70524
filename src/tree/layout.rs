use super::{EntryKind, TreeEntry};

const INDENT: &str = "  ";

/// Format one entry as its output line.
///
/// Directories: `<indent>|-<name>/`. Files: `<indent>|- <name>`.
/// A file's depth is already one more than its directory's, so both use
/// `depth` indent units.
pub fn format_entry(entry: &TreeEntry) -> String {
    let indent = INDENT.repeat(entry.depth);
    match entry.kind {
        EntryKind::Dir => format!("{indent}|-{}/", entry.name),
        EntryKind::File => format!("{indent}|- {}", entry.name),
    }
}

/// Format a collected tree, one string per line.
pub fn render_lines(entries: &[TreeEntry]) -> Vec<String> {
    entries.iter().map(format_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(name: &str, depth: usize, kind: EntryKind) -> TreeEntry {
        TreeEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            depth,
            kind,
        }
    }

    #[test]
    fn root_dir_has_no_indent() {
        assert_eq!(format_entry(&entry(".", 0, EntryKind::Dir)), "|-./");
    }

    #[test]
    fn nested_dir_indent() {
        assert_eq!(format_entry(&entry("b", 2, EntryKind::Dir)), "    |-b/");
    }

    #[test]
    fn file_has_space_after_connector() {
        assert_eq!(format_entry(&entry("x.txt", 1, EntryKind::File)), "  |- x.txt");
    }

    #[test]
    fn render_lines_keeps_order() {
        let lines = render_lines(&[
            entry(".", 0, EntryKind::Dir),
            entry("x.txt", 1, EntryKind::File),
            entry("a", 1, EntryKind::Dir),
        ]);
        assert_eq!(lines, vec!["|-./", "  |- x.txt", "  |-a/"]);
    }
}

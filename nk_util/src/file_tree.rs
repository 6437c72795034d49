use crate::error::{Error, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Lists everything under `root` as tab-indented names, one line per entry.
///
/// Directories are always listed, followed by their contents one tab deeper.
/// Files are listed only when their name ends with `filter`; `None` or an
/// empty filter keeps every file. Siblings come in file-name order.
pub fn file_tree(root: impl AsRef<Path>, filter: Option<&str>) -> Result<Vec<String>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.display().to_string()));
    }
    let filter = filter.filter(|f| !f.is_empty());

    let mut lines = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy();
        let keep = entry.file_type().is_dir()
            || filter.map(|f| name.ends_with(f)).unwrap_or(true);
        if keep {
            lines.push(format!("{}{}", "\t".repeat(entry.depth() - 1), name));
        }
    }
    Ok(lines)
}

pub fn print_file_tree(root: impl AsRef<Path>, filter: Option<&str>) -> Result<()> {
    for line in file_tree(root, filter)? {
        println!("{line}");
    }
    Ok(())
}

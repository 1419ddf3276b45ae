use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Lazily list the files directly inside `dir` whose extension is in
/// `extensions`, skipping file names that match an ignore glob.
///
/// The scan is not recursive. Entries are yielded in file-name order.
/// A missing or unreadable directory is an error, as is any entry that
/// cannot be read during traversal.
pub fn scan_files(
    dir: &Path,
    extensions: &HashSet<String>,
    ignores: &[String],
) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    let metadata = dir
        .metadata()
        .with_context(|| format!("Cannot read source directory: {}", dir.display()))?;
    if !metadata.is_dir() {
        return Err(anyhow!("Not a directory: {}", dir.display()));
    }

    let ignore_patterns = ignores
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter();

    Ok(walker.filter_map(move |entry| match entry {
        Ok(entry) => is_candidate(&entry, extensions, &ignore_patterns)
            .then(|| Ok(entry.into_path())),
        Err(e) => Some(Err(anyhow!(e).context("Cannot access path while scanning"))),
    }))
}

fn is_candidate(entry: &DirEntry, extensions: &HashSet<String>, ignores: &[Pattern]) -> bool {
    // Follows symlinks, so a linked page is scanned like a regular one.
    if !entry.path().is_file() || !has_extension(entry.path(), extensions) {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    !ignores.iter().any(|p| p.matches(&name))
}

fn has_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(e))
}

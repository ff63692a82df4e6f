//! Deterministic collection of source paths for one index target.

use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Collect the relative module paths for an index target.
///
/// Sources that do not exist are reported to stderr and skipped; the
/// remaining sources still produce an index. Directory sources are
/// walked depth-first with hidden entries pruned; within each directory
/// files come before subdirectories and each group is ordered by name,
/// so repeated runs see the same sequence on every filesystem. Returned
/// paths are relative to `dest_dir`, the directory the index file lands
/// in, so the emitted references resolve from there.
pub fn collect_module_paths(sources: &[PathBuf], dest_dir: &Path) -> Vec<String> {
    let mut paths = Vec::new();

    for source in sources {
        if !source.exists() {
            eprintln!("error: source '{}' is missing, skipping", source.display());
            continue;
        }

        if source.is_dir() {
            for entry in WalkDir::new(source)
                .sort_by(files_first)
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() {
                    paths.push(unixify(&relative_from(entry.path(), dest_dir)));
                }
            }
        } else {
            paths.push(unixify(&relative_from(source, dest_dir)));
        }
    }

    paths
}

/// Sibling order inside one directory: files first, then
/// subdirectories, each group by name ascending.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_is_dir = a.file_type().is_dir();
    let b_is_dir = b.file_type().is_dir();
    a_is_dir
        .cmp(&b_is_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Compute `path` relative to `base` without touching the filesystem.
///
/// Both paths must be rooted the same way (both project-relative, as the
/// manifest declares them, or both absolute). `..` components in `base`
/// beyond the common prefix are not invertible and are treated as
/// opaque, which matches how destinations are declared in practice.
fn relative_from(path: &Path, base: &Path) -> PathBuf {
    let path_components: Vec<Component> = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let base_components: Vec<Component> = base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_components.len() {
        rel.push("..");
    }
    for component in &path_components[common..] {
        rel.push(component);
    }
    rel
}

fn unixify(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

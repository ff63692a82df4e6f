//! Per-path resolution of module names and require references.

use modex_manifest::IndexOptions;

/// A source path resolved against the path-handling options.
///
/// Separators are normalized to `/` regardless of the host convention, so
/// the emitted references are valid require paths everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Directory segments, filtered of empty and relative (`.`, `..`)
    /// components. These drive the namespace walk only; the reference
    /// keeps the path verbatim.
    pub dirs: Vec<String>,
    /// Name the module is bound to in the tree: the file stem, or the
    /// full file name when extensions are kept.
    pub name: String,
    /// Reference emitted into the require expression.
    pub reference: String,
}

impl ModuleEntry {
    /// Resolve a relative file path into its tree binding.
    pub fn resolve(path: &str, options: &IndexOptions) -> Self {
        let path = path.replace('\\', "/");

        let (dir_part, file) = match path.rsplit_once('/') {
            Some((dirs, file)) => (dirs, file),
            None => ("", path.as_str()),
        };

        let stem = match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file,
        };
        let name = if options.require_with_extension {
            file
        } else {
            stem
        };

        let dirs = dir_part
            .split('/')
            .filter(|seg| !seg.is_empty() && *seg != "." && *seg != "..")
            .map(str::to_string)
            .collect();

        let ref_path = if options.require_with_extension {
            path.clone()
        } else if dir_part.is_empty() {
            stem.to_string()
        } else {
            format!("{}/{}", dir_part, stem)
        };

        Self {
            dirs,
            name: name.to_string(),
            reference: format!("{}{}", options.path_prefix, ref_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> IndexOptions {
        IndexOptions::default()
    }

    #[test]
    fn test_resolve_nested_path() {
        let entry = ModuleEntry::resolve("a/b/c.js", &options());
        assert_eq!(entry.dirs, vec!["a", "b"]);
        assert_eq!(entry.name, "c");
        assert_eq!(entry.reference, "a/b/c");
    }

    #[test]
    fn test_resolve_root_file() {
        let entry = ModuleEntry::resolve("z.js", &options());
        assert!(entry.dirs.is_empty());
        assert_eq!(entry.name, "z");
        assert_eq!(entry.reference, "z");
    }

    #[test]
    fn test_resolve_keeps_extension_when_asked() {
        let mut options = options();
        options.require_with_extension = true;

        let entry = ModuleEntry::resolve("x/y.coffee", &options);
        assert_eq!(entry.name, "y.coffee");
        assert_eq!(entry.reference, "x/y.coffee");
    }

    #[test]
    fn test_resolve_applies_prefix() {
        let mut options = options();
        options.path_prefix = "./lib/".to_string();

        let entry = ModuleEntry::resolve("z.js", &options);
        assert_eq!(entry.reference, "./lib/z");
    }

    #[test]
    fn test_resolve_normalizes_backslashes() {
        let entry = ModuleEntry::resolve(r"a\b\c.js", &options());
        assert_eq!(entry.dirs, vec!["a", "b"]);
        assert_eq!(entry.reference, "a/b/c");
    }

    #[test]
    fn test_resolve_filters_relative_segments_from_dirs_only() {
        let entry = ModuleEntry::resolve("../lib/foo.js", &options());
        assert_eq!(entry.dirs, vec!["lib"]);
        assert_eq!(entry.reference, "../lib/foo");
    }

    #[test]
    fn test_resolve_file_without_extension() {
        let entry = ModuleEntry::resolve("bin/tool", &options());
        assert_eq!(entry.name, "tool");
        assert_eq!(entry.reference, "bin/tool");
    }

    #[test]
    fn test_resolve_dotted_directory_keeps_its_name() {
        let entry = ModuleEntry::resolve("v1.2/api.js", &options());
        assert_eq!(entry.dirs, vec!["v1.2"]);
        assert_eq!(entry.reference, "v1.2/api");
    }
}

//! Manifest types and parsing for modex.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::ModexToml;
use serde::Deserialize;

use crate::IndexOptions;

/// Root manifest for modex.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Index targets, one generated file each
    #[serde(default, rename = "index")]
    pub indexes: Vec<IndexTarget>,
}

/// A single `[[index]]` target: what to aggregate and where to write it.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexTarget {
    /// Source files and directories to aggregate
    pub sources: Vec<PathBuf>,

    /// Destination file, or a directory that receives `index.<ext>`
    /// (defaults to `index.<ext>` in the current directory)
    pub dest: Option<PathBuf>,

    /// Path-handling options
    #[serde(flatten)]
    pub options: IndexOptions,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use modex_core::Dialect;

    use super::*;

    #[test]
    fn test_parse_minimal() {
        let manifest = Manifest::from_str(
            r#"
            [[index]]
            sources = ["lib"]
            "#,
        )
        .unwrap();

        assert_eq!(manifest.indexes.len(), 1);
        let target = &manifest.indexes[0];
        assert_eq!(target.sources, vec![PathBuf::from("lib")]);
        assert_eq!(target.dest, None);
        assert_eq!(target.options.format, Dialect::Js);
    }

    #[test]
    fn test_parse_full_target() {
        let manifest = Manifest::from_str(
            r#"
            [[index]]
            sources = ["lib", "vendor/extra.js"]
            dest = "lib/index.coffee"
            format = "coffee"
            require_with_extension = true
            path_prefix = "./"
            omit_dirs = ["impl"]
            indent = "    "
            flat_index = false
            notice = "See CONTRIBUTING.md before editing sources"
            "#,
        )
        .unwrap();

        let target = &manifest.indexes[0];
        assert_eq!(target.dest, Some(PathBuf::from("lib/index.coffee")));
        assert_eq!(target.options.format, Dialect::Coffee);
        assert!(target.options.require_with_extension);
        assert_eq!(target.options.path_prefix, "./");
        assert!(target.options.omit_dirs.contains("impl"));
        assert_eq!(
            target.options.notice.as_deref(),
            Some("See CONTRIBUTING.md before editing sources")
        );
    }

    #[test]
    fn test_parse_multiple_targets() {
        let manifest = Manifest::from_str(
            r#"
            [[index]]
            sources = ["lib"]
            dest = "lib/index.js"

            [[index]]
            sources = ["src"]
            dest = "src/index.coffee"
            format = "coffee"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.indexes.len(), 2);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Manifest::from_str("[[index]\nsources = []").unwrap_err();
        assert!(matches!(*err, crate::Error::Parse { .. }));
    }

    #[test]
    fn test_no_targets_is_invalid() {
        let err = Manifest::from_str("").unwrap_err();
        assert!(matches!(*err, crate::Error::Validation { .. }));
    }

    #[test]
    fn test_empty_sources_is_invalid() {
        let err = Manifest::from_str(
            r#"
            [[index]]
            sources = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, crate::Error::Validation { .. }));
    }

    #[test]
    fn test_non_whitespace_indent_is_invalid() {
        let err = Manifest::from_str(
            r#"
            [[index]]
            sources = ["lib"]
            indent = ".."
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, crate::Error::Validation { .. }));
    }
}

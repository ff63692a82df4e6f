//! Path-handling options for one index target.

use std::collections::BTreeSet;

use modex_core::{Dialect, Indent};
use serde::{Deserialize, Deserializer};

/// Options governing how source paths become index entries.
///
/// Every field has a default, so an empty `[[index]]` target is valid and
/// produces a plain `index.js` with two-space indentation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    /// Output syntax for the generated file.
    pub format: Dialect,

    /// Keep file extensions in the emitted require references.
    pub require_with_extension: bool,

    /// Prefix prepended verbatim to every require reference.
    pub path_prefix: String,

    /// Directory names elided from the tree; their files rise to the
    /// parent level. Accepts a single name or a list.
    #[serde(deserialize_with = "one_or_many")]
    pub omit_dirs: BTreeSet<String>,

    /// Indentation unit, repeated once per nesting level.
    pub indent: Indent,

    /// Collapse all directory structure into a flat, top-level index.
    pub flat_index: bool,

    /// Extra notice line appended to the generated header.
    pub notice: Option<String>,
}

impl IndexOptions {
    /// Whether a directory segment should be skipped rather than become a
    /// namespace of its own.
    pub fn skips_segment(&self, segment: &str) -> bool {
        self.flat_index || self.omit_dirs.contains(segment)
    }
}

/// Deserialize a single string or a list of strings into a set.
fn one_or_many<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(dir) => BTreeSet::from([dir]),
        OneOrMany::Many(dirs) => dirs.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options: IndexOptions = toml::from_str("").unwrap();
        assert_eq!(options.format, Dialect::Js);
        assert!(!options.require_with_extension);
        assert_eq!(options.path_prefix, "");
        assert!(options.omit_dirs.is_empty());
        assert_eq!(options.indent, Indent::TWO);
        assert!(!options.flat_index);
        assert_eq!(options.notice, None);
    }

    #[test]
    fn test_omit_dirs_single_string() {
        let options: IndexOptions = toml::from_str(r#"omit_dirs = "impl""#).unwrap();
        assert!(options.omit_dirs.contains("impl"));
        assert_eq!(options.omit_dirs.len(), 1);
    }

    #[test]
    fn test_omit_dirs_list() {
        let options: IndexOptions =
            toml::from_str(r#"omit_dirs = ["impl", "internal"]"#).unwrap();
        assert!(options.omit_dirs.contains("impl"));
        assert!(options.omit_dirs.contains("internal"));
    }

    #[test]
    fn test_skips_segment() {
        let options: IndexOptions = toml::from_str(r#"omit_dirs = "impl""#).unwrap();
        assert!(options.skips_segment("impl"));
        assert!(!options.skips_segment("lib"));

        let flat: IndexOptions = toml::from_str("flat_index = true").unwrap();
        assert!(flat.skips_segment("anything"));
    }

    #[test]
    fn test_custom_indent_and_format() {
        let options: IndexOptions = toml::from_str(
            r#"
            format = "coffee"
            indent = "\t"
            "#,
        )
        .unwrap();
        assert_eq!(options.format, Dialect::Coffee);
        assert_eq!(options.indent, Indent::Tab);
    }
}

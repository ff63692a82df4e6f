//! Post-parse validation of manifest contents.

use super::Manifest;
use crate::{Error, Result};

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    if manifest.indexes.is_empty() {
        return Err(Error::validation(
            "manifest declares no [[index]] targets",
            src,
            filename,
        ));
    }

    for (i, target) in manifest.indexes.iter().enumerate() {
        if target.sources.is_empty() {
            return Err(Error::validation(
                format!("[[index]] target #{} declares no sources", i + 1),
                src,
                filename,
            ));
        }

        let unit = target.options.indent.as_str();
        if !unit.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::validation(
                format!(
                    "[[index]] target #{} has indent {:?}, which is not whitespace",
                    i + 1,
                    unit
                ),
                src,
                filename,
            ));
        }
    }

    Ok(())
}

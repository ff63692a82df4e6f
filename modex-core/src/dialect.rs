//! Output dialects for generated index files.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported output syntaxes for the generated index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Indentation-significant CoffeeScript syntax.
    Coffee,
    /// Brace-delimited JavaScript syntax.
    Js,
}

impl Dialect {
    /// Returns the dialect identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Coffee => "coffee",
            Dialect::Js => "js",
        }
    }

    /// File extension for the generated index file.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Dialect::Coffee => "coffee",
            Dialect::Js => "js",
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Js
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coffee" | "coffeescript" => Ok(Dialect::Coffee),
            "js" | "javascript" => Ok(Dialect::Js),
            _ => Err(format!("unknown format '{}', expected 'coffee' or 'js'", s)),
        }
    }
}

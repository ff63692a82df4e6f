//! Indentation configuration for rendered output.

use serde::Deserialize;

/// Indentation unit applied once per nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
    /// An arbitrary unit taken verbatim from configuration.
    Unit(String),
}

impl Indent {
    /// 2-space indentation (JavaScript, CoffeeScript).
    pub const TWO: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const FOUR: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 2 whitespaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
            Self::Unit(unit) => unit,
        }
    }

    /// Build an indent from a raw unit string, collapsing the common
    /// units onto their named variants.
    pub fn from_unit(unit: &str) -> Self {
        match unit {
            "\t" => Self::Tab,
            "  " => Self::Spaces(2),
            "    " => Self::Spaces(4),
            "        " => Self::Spaces(8),
            other => Self::Unit(other.to_string()),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO
    }
}

impl From<String> for Indent {
    fn from(unit: String) -> Self {
        Self::from_unit(&unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::Unit(" . ".to_string()).as_str(), " . ");
    }

    #[test]
    fn test_from_unit() {
        assert_eq!(Indent::from_unit("\t"), Indent::Tab);
        assert_eq!(Indent::from_unit("  "), Indent::Spaces(2));
        assert_eq!(Indent::from_unit("    "), Indent::Spaces(4));
        assert_eq!(Indent::from_unit("   "), Indent::Unit("   ".to_string()));
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TWO);
    }

    #[test]
    fn test_deserialize_from_string() {
        let indent: Indent = serde_json::from_str(r#""\t""#).unwrap();
        assert_eq!(indent, Indent::Tab);

        let indent: Indent = serde_json::from_str(r#""  ""#).unwrap();
        assert_eq!(indent, Indent::Spaces(2));
    }
}

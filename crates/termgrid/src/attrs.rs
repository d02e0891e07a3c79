//! Column display attributes.
//!
//! Columns are described by short flag strings such as `"R"`, `"LM"` or `"A"`:
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `L` / `R` / `C` | Left, right or center alignment (default left) |
//! | `W` | Resizable: may shrink down to its header width when the table is too wide |
//! | `M` | Multi-line: resizable, and overflowing text wraps instead of being cut |
//! | `A` | Auto-width: content is never cut, only padded (pre-colored content) |
//!
//! Flags are independent except alignment, of which at most one may be given.
//! Parsing is case-insensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad on both sides.
    Center,
}

impl Align {
    fn flag(self) -> char {
        match self {
            Align::Left => 'L',
            Align::Right => 'R',
            Align::Center => 'C',
        }
    }
}

/// Parsed display attributes for one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnAttrs {
    /// Explicit alignment, `None` when the attribute string names none.
    pub align: Option<Align>,
    /// The column may shrink toward its header width under width pressure.
    pub resizable: bool,
    /// Overflowing content reflows onto extra lines.
    pub wrap: bool,
    /// Content is neither truncated nor padded by raw length.
    pub auto_width: bool,
}

impl ColumnAttrs {
    /// Left-aligned, fixed, truncating column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an attribute string such as `"RW"`.
    pub fn parse(attribute: &str) -> Result<Self> {
        let mut attrs = ColumnAttrs::default();
        for flag in attribute.chars().filter(|c| !c.is_whitespace()) {
            match flag.to_ascii_uppercase() {
                'L' => attrs.set_align(Align::Left, attribute)?,
                'R' => attrs.set_align(Align::Right, attribute)?,
                'C' => attrs.set_align(Align::Center, attribute)?,
                'W' => attrs.resizable = true,
                'M' => {
                    attrs.resizable = true;
                    attrs.wrap = true;
                }
                'A' => attrs.auto_width = true,
                _ => {
                    return Err(TableError::UnknownAttribute {
                        attribute: attribute.to_string(),
                        flag,
                    })
                }
            }
        }
        Ok(attrs)
    }

    /// Parses one attribute string per column.
    pub fn parse_all<S: AsRef<str>>(attributes: &[S]) -> Result<Vec<Self>> {
        attributes.iter().map(|a| Self::parse(a.as_ref())).collect()
    }

    fn set_align(&mut self, align: Align, attribute: &str) -> Result<()> {
        match self.align {
            Some(existing) if existing != align => Err(TableError::ConflictingAlignment {
                attribute: attribute.to_string(),
            }),
            _ => {
                self.align = Some(align);
                Ok(())
            }
        }
    }

    /// Set the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set alignment to right (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set alignment to center (shorthand for `.align(Align::Center)`).
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Allow the column to shrink.
    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    /// Wrap overflowing text. Implies resizable.
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self.resizable = true;
        self
    }

    /// Exempt the column from truncation.
    pub fn auto_width(mut self) -> Self {
        self.auto_width = true;
        self
    }

    /// Alignment used for regular cells.
    pub fn alignment(&self) -> Align {
        self.align.unwrap_or_default()
    }

    /// Alignment used for auto-width cells: left only when asked for
    /// explicitly, right otherwise.
    pub fn auto_alignment(&self) -> Align {
        match self.align {
            Some(Align::Left) => Align::Left,
            _ => Align::Right,
        }
    }
}

impl FromStr for ColumnAttrs {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ColumnAttrs {
    type Error = TableError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<ColumnAttrs> for String {
    fn from(attrs: ColumnAttrs) -> Self {
        attrs.to_string()
    }
}

impl fmt::Display for ColumnAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(align) = self.align {
            write!(f, "{}", align.flag())?;
        }
        if self.wrap {
            f.write_str("M")?;
        } else if self.resizable {
            f.write_str("W")?;
        }
        if self.auto_width {
            f.write_str("A")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default_left() {
        let attrs = ColumnAttrs::parse("").unwrap();
        assert_eq!(attrs, ColumnAttrs::default());
        assert_eq!(attrs.alignment(), Align::Left);
    }

    #[test]
    fn test_alignment_flags() {
        assert_eq!(ColumnAttrs::parse("R").unwrap().alignment(), Align::Right);
        assert_eq!(ColumnAttrs::parse("C").unwrap().alignment(), Align::Center);
        assert_eq!(ColumnAttrs::parse("l").unwrap().alignment(), Align::Left);
    }

    #[test]
    fn test_m_implies_resizable() {
        let attrs = ColumnAttrs::parse("LM").unwrap();
        assert!(attrs.wrap);
        assert!(attrs.resizable);
    }

    #[test]
    fn test_w_is_resizable_only() {
        let attrs = ColumnAttrs::parse("W").unwrap();
        assert!(attrs.resizable);
        assert!(!attrs.wrap);
    }

    #[test]
    fn test_combined_flags() {
        let attrs = ColumnAttrs::parse("RWA").unwrap();
        assert_eq!(attrs.align, Some(Align::Right));
        assert!(attrs.resizable);
        assert!(attrs.auto_width);
    }

    #[test]
    fn test_repeated_alignment_is_accepted() {
        assert_eq!(ColumnAttrs::parse("RR").unwrap().alignment(), Align::Right);
    }

    #[test]
    fn test_conflicting_alignment() {
        assert!(matches!(
            ColumnAttrs::parse("LR"),
            Err(TableError::ConflictingAlignment { .. })
        ));
    }

    #[test]
    fn test_unknown_flag() {
        match ColumnAttrs::parse("RX") {
            Err(TableError::UnknownAttribute { flag, attribute }) => {
                assert_eq!(flag, 'X');
                assert_eq!(attribute, "RX");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_auto_alignment() {
        assert_eq!(ColumnAttrs::parse("A").unwrap().auto_alignment(), Align::Right);
        assert_eq!(ColumnAttrs::parse("LA").unwrap().auto_alignment(), Align::Left);
        assert_eq!(ColumnAttrs::parse("CA").unwrap().auto_alignment(), Align::Right);
    }

    #[test]
    fn test_display_normalizes() {
        assert_eq!(ColumnAttrs::parse("wmr").unwrap().to_string(), "RM");
        assert_eq!(ColumnAttrs::parse("aW").unwrap().to_string(), "WA");
        assert_eq!(ColumnAttrs::new().to_string(), "");
    }

    #[test]
    fn test_builder_matches_parse() {
        assert_eq!(
            ColumnAttrs::new().center().wrap(),
            ColumnAttrs::parse("CM").unwrap()
        );
    }

    #[test]
    fn test_serde_from_string() {
        let attrs: Vec<ColumnAttrs> = serde_json::from_str(r#"["R", "LM", ""]"#).unwrap();
        assert_eq!(attrs[0].alignment(), Align::Right);
        assert!(attrs[1].wrap);
        assert_eq!(attrs[2], ColumnAttrs::default());

        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"["R","LM",""]"#);
    }

    #[test]
    fn test_serde_rejects_unknown_flag() {
        let result: std::result::Result<ColumnAttrs, _> = serde_json::from_str(r#""Q""#);
        assert!(result.is_err());
    }
}

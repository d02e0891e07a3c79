//! Declarative table descriptions.
//!
//! A [`TableSpec`] describes headings, column attributes and an optional
//! width budget, and can be loaded from YAML or JSON:
//!
//! ```rust
//! use termgrid::TableSpec;
//!
//! let spec = TableSpec::from_yaml(r#"
//! heading: [ID, Description]
//! columns: [R, LM]
//! width: 40
//! "#).unwrap();
//!
//! let table = spec.into_table();
//! assert_eq!(table.num_columns(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::attrs::ColumnAttrs;
use crate::error::{Result, TableError};
use crate::table::Table;

/// Serializable description of a table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Primary heading labels.
    pub heading: Vec<String>,
    /// Optional second heading row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheading: Option<Vec<String>>,
    /// Attribute string per column. Missing entries default to `""`.
    #[serde(default)]
    pub columns: Vec<ColumnAttrs>,
    /// Width budget; the console width is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
}

impl TableSpec {
    /// Parses a YAML description.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let spec: TableSpec = serde_yaml::from_str(yaml)?;
        spec.validated()
    }

    /// Parses a JSON description.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: TableSpec = serde_json::from_str(json)?;
        spec.validated()
    }

    fn validated(mut self) -> Result<Self> {
        if self.heading.is_empty() {
            return Err(TableError::EmptyHeading);
        }
        if self.columns.len() > self.heading.len() {
            return Err(TableError::AttributeCount {
                expected: self.heading.len(),
                actual: self.columns.len(),
            });
        }
        self.columns.resize(self.heading.len(), ColumnAttrs::default());
        Ok(self)
    }

    /// Builds the [`Table`] this spec describes.
    pub fn into_table(self) -> Table {
        let mut table = Table::new(self.heading, self.columns);
        if let Some(subheading) = self.subheading {
            table = table.subheading(subheading);
        }
        if let Some(width) = self.width {
            table = table.width(width);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Align;

    #[test]
    fn test_yaml_full() {
        let spec = TableSpec::from_yaml(
            r#"
heading: [Name, Size]
subheading: ["", bytes]
columns: [LW, R]
width: 60
"#,
        )
        .unwrap();
        assert_eq!(spec.heading, vec!["Name", "Size"]);
        assert_eq!(spec.subheading, Some(vec!["".to_string(), "bytes".to_string()]));
        assert!(spec.columns[0].resizable);
        assert_eq!(spec.columns[1].alignment(), Align::Right);
        assert_eq!(spec.width, Some(60));
    }

    #[test]
    fn test_missing_columns_default_left() {
        let spec = TableSpec::from_json(r#"{"heading": ["a", "b", "c"], "columns": ["R"]}"#).unwrap();
        assert_eq!(spec.columns.len(), 3);
        assert_eq!(spec.columns[2], ColumnAttrs::default());
    }

    #[test]
    fn test_too_many_columns() {
        let err = TableSpec::from_json(r#"{"heading": ["a"], "columns": ["R", "L"]}"#).unwrap_err();
        assert!(matches!(err, TableError::AttributeCount { .. }));
    }

    #[test]
    fn test_empty_heading_rejected() {
        assert!(matches!(
            TableSpec::from_yaml("heading: []"),
            Err(TableError::EmptyHeading)
        ));
    }

    #[test]
    fn test_bad_attribute_is_spec_error() {
        let err = TableSpec::from_yaml("heading: [a]\ncolumns: [Z]").unwrap_err();
        assert!(matches!(err, TableError::Spec(_)));
        assert!(err.to_string().contains("unknown flag 'Z'"));
    }

    #[test]
    fn test_into_table_renders() {
        let table = TableSpec::from_yaml("heading: [k, v]\ncolumns: [L, R]\nwidth: 80")
            .unwrap()
            .into_table();
        let lines = table.render(&[vec!["x", "1"]]).unwrap();
        assert_eq!(lines[1], "|k|v|");
        assert_eq!(lines[3], "|x|1|");
    }
}

//! Tabular projection of student records.

use serde::{Serialize, Serializer};

/// One cell of the result table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value; exported as an empty cell.
    Empty,
    /// Free text (names, grades, placeholders).
    Text(String),
    /// Whole-number count.
    Count(u32),
    /// Floating point value (GPA, credit totals).
    Number(f64),
}

impl Cell {
    /// Text cell, or [`Cell::Empty`] when `value` is `None`.
    #[must_use]
    pub fn text_or_empty(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, |v| Self::Text(v.to_owned()))
    }

    /// Number cell, or [`Cell::Empty`] when `value` is `None`.
    #[must_use]
    pub fn number_or_empty(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }

    /// Renders the cell the way it appears in delimited output.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Count(n) => n.to_string(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Count(n) => serializer.serialize_u32(*n),
            Self::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

/// Column-named rows ready for export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultTable {
    /// Column headers, in export order.
    pub columns: Vec<String>,
    /// One row per student; every row has `columns.len()` cells.
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Index of the column named `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` under the column named `column`.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Number of student rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_render_blank() {
        assert_eq!(Cell::Empty.render(), "");
        assert_eq!(Cell::number_or_empty(None), Cell::Empty);
        assert_eq!(Cell::text_or_empty(Some("A")), Cell::Text("A".to_owned()));
    }

    #[test]
    fn looks_up_cells_by_column_name() {
        let table = ResultTable {
            columns: vec!["Name".to_owned(), "MTH 9".to_owned()],
            rows: vec![vec![Cell::Text("Ada".to_owned()), Cell::Count(3)]],
        };
        assert_eq!(table.cell(0, "MTH 9"), Some(&Cell::Count(3)));
        assert_eq!(table.cell(0, "PHY 1"), None);
        assert_eq!(table.cell(1, "Name"), None);
    }
}

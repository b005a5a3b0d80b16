use std::fmt;

use csv::StringRecord;

// ---------------------------------------------------------------------------
// CellValue – typed view of a single cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Infer the most specific type for raw cell text.
    pub fn infer(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        match s {
            "true" | "True" => CellValue::Bool(true),
            "false" | "False" => CellValue::Bool(false),
            _ => CellValue::String(s.to_string()),
        }
    }

    pub fn kind(&self) -> ColumnType {
        match self {
            CellValue::String(_) => ColumnType::Text,
            CellValue::Integer(_) => ColumnType::Integer,
            CellValue::Float(_) => ColumnType::Float,
            CellValue::Bool(_) => ColumnType::Bool,
            CellValue::Null => ColumnType::Empty,
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred dtype of a whole column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every cell is empty.
    Empty,
    Bool,
    Integer,
    Float,
    Text,
}

impl ColumnType {
    /// Widen two types to one that can hold both. Empty cells never widen a
    /// column; integers widen to float; any other mix becomes text.
    pub fn merge(self, other: ColumnType) -> ColumnType {
        use ColumnType::*;
        match (self, other) {
            (Empty, t) | (t, Empty) => t,
            (a, b) if a == b => a,
            (Integer, Float) | (Float, Integer) => Float,
            _ => Text,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Empty => "empty",
            ColumnType::Bool => "bool",
            ColumnType::Integer => "int64",
            ColumnType::Float => "float64",
            ColumnType::Text => "object",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Dataset – a loaded table
// ---------------------------------------------------------------------------

/// Rows × named columns. Cells keep the exact text of the source file;
/// typing is only ever inferred on read.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Dataset {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Dataset { headers, rows }
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Ordered column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.headers.iter().collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.n_columns())
    }

    /// Typed value of a cell, `None` when out of range.
    pub fn cell(&self, row: usize, column: &str) -> Option<CellValue> {
        let col = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row)?.get(col).map(CellValue::infer)
    }

    /// Inferred type of every column, in column order.
    pub fn column_types(&self) -> Vec<(&str, ColumnType)> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let kind = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(idx))
                    .map(|s| CellValue::infer(s).kind())
                    .fold(ColumnType::Empty, ColumnType::merge);
                (name, kind)
            })
            .collect()
    }

    /// New dataset holding the given rows, in the given order.
    ///
    /// Panics if an index is out of range.
    pub(crate) fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            headers: self.headers.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            StringRecord::from(vec!["gender", "math_score", "ratio", "flag", "note"]),
            vec![
                StringRecord::from(vec!["female", "72", "0.5", "true", ""]),
                StringRecord::from(vec!["male", "69", "1", "false", ""]),
                StringRecord::from(vec!["female", "90", "", "true", ""]),
            ],
        )
    }

    #[test]
    fn infers_cell_values() {
        assert_eq!(CellValue::infer("72"), CellValue::Integer(72));
        assert_eq!(CellValue::infer("-3.25"), CellValue::Float(-3.25));
        assert_eq!(CellValue::infer("True"), CellValue::Bool(true));
        assert_eq!(CellValue::infer(""), CellValue::Null);
        assert_eq!(
            CellValue::infer("group B"),
            CellValue::String("group B".to_string())
        );
    }

    #[test]
    fn column_types_widen() {
        let ds = sample();
        assert_eq!(
            ds.column_types(),
            vec![
                ("gender", ColumnType::Text),
                ("math_score", ColumnType::Integer),
                ("ratio", ColumnType::Float),
                ("flag", ColumnType::Bool),
                ("note", ColumnType::Empty),
            ]
        );
        assert_eq!(ColumnType::Bool.merge(ColumnType::Integer), ColumnType::Text);
    }

    #[test]
    fn shape_and_cells() {
        let ds = sample();
        assert_eq!(ds.shape(), (3, 5));
        assert_eq!(ds.cell(1, "math_score"), Some(CellValue::Integer(69)));
        assert_eq!(ds.cell(3, "math_score"), None);
        assert_eq!(ds.cell(0, "missing"), None);
    }

    #[test]
    fn select_keeps_header_and_order() {
        let ds = sample();
        let picked = ds.select(&[2, 0]);
        assert_eq!(picked.headers(), ds.headers());
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.cell(0, "math_score"), Some(CellValue::Integer(90)));
        assert_eq!(picked.cell(1, "math_score"), Some(CellValue::Integer(72)));
    }
}

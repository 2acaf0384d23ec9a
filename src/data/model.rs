use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common spreadsheet dtypes.
/// Used as a `BTreeMap` key and dedup key downstream so `CellValue` must be
/// `Ord` and `Hash`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// An empty cell. Distinct from the empty string.
    Missing,
}

// -- Manual Eq/Ord so we can use CellValue as a map key --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Missing => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                Text(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Missing, Missing) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Text(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Missing => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Missing => write!(f, "<missing>"),
        }
    }
}

impl CellValue {
    /// Type-aware equality between a cell and user-entered filter text:
    /// the text is parsed into the cell's own type before comparing, so
    /// `"1"` matches `Integer(1)` and `"1.5"` matches `Float(1.5)`.
    /// `Missing` matches nothing.
    pub fn matches_text(&self, text: &str) -> bool {
        match self {
            CellValue::Text(s) => s == text,
            CellValue::Integer(i) => text.parse::<i64>() == Ok(*i),
            CellValue::Float(v) => text.parse::<f64>().is_ok_and(|t| t == *v),
            CellValue::Bool(b) => text.parse::<bool>() == Ok(*b),
            CellValue::Missing => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Row / Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// One row of the table: column_name → value.
pub type Row = BTreeMap<String, CellValue>;

/// The full parsed dataset. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names in order of appearance in the source file.
    pub column_names: Vec<String>,
    /// All rows; every row holds a value for every column.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, padding rows so every column is present in every
    /// row (absent cells become [`CellValue::Missing`]).
    pub fn new(column_names: Vec<String>, mut rows: Vec<Row>) -> Self {
        for row in &mut rows {
            for col in &column_names {
                row.entry(col.clone()).or_insert(CellValue::Missing);
            }
        }
        Dataset { column_names, rows }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// Which export layout the application reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Base,
    Extended,
}

const BASE_PROJECTION: [usize; 4] = [0, 5, 10, 13];
const EXTENDED_PROJECTION: [usize; 7] = [0, 5, 10, 13, 1, 2, 15];

const BASE_LABELS: [&str; 4] = ["Id", "Nabywca", "NIP", "Brutto"];
const EXTENDED_LABELS: [&str; 7] = [
    "Id",
    "Nabywca",
    "NIP",
    "Brutto",
    "Nr faktury",
    "Data",
    "Forma płatności",
];

impl Variant {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "base" | "podstawowy" => Some(Variant::Base),
            "extended" | "rozszerzony" => Some(Variant::Extended),
            _ => None,
        }
    }

    /// Source field indices kept for every accepted line, in output order.
    pub fn projection(self) -> &'static [usize] {
        match self {
            Variant::Base => &BASE_PROJECTION,
            Variant::Extended => &EXTENDED_PROJECTION,
        }
    }

    /// Lines with fewer tab-separated fields than this are rejected.
    pub fn min_fields(self) -> usize {
        match self {
            Variant::Base => 14,
            Variant::Extended => 16,
        }
    }

    pub fn column_labels(self) -> &'static [&'static str] {
        match self {
            Variant::Base => &BASE_LABELS,
            Variant::Extended => &EXTENDED_LABELS,
        }
    }

    /// Row position holding the annotation key (the invoice number).
    pub fn key_column(self) -> Option<usize> {
        match self {
            Variant::Base => None,
            Variant::Extended => Some(4),
        }
    }

    pub fn has_annotations(self) -> bool {
        self.key_column().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::Extended => "extended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Vec<String>);

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Row(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }

    pub fn annotation_key(&self, variant: Variant) -> Option<&str> {
        variant.key_column().and_then(|idx| self.get(idx))
    }
}

impl From<Vec<&str>> for Row {
    fn from(value: Vec<&str>) -> Self {
        Row(value.into_iter().map(str::to_string).collect())
    }
}

/// Ordered rows in insertion order. Serializes as an array of string arrays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table(Vec<Row>);

impl Table {
    #[allow(dead_code)]
    pub fn new(rows: Vec<Row>) -> Self {
        Table(rows)
    }

    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.0.extend(rows);
    }

    pub fn remove(&mut self, idx: usize) -> Option<Row> {
        if idx < self.0.len() {
            Some(self.0.remove(idx))
        } else {
            None
        }
    }

    /// Inserts at `idx`, or at the end when the table has shrunk below it.
    pub fn insert(&mut self, idx: usize, row: Row) -> usize {
        let at = idx.min(self.0.len());
        self.0.insert(at, row);
        at
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Single-slot undo buffer for the most recent deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedRow {
    pub index: usize,
    pub row: Row,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_serializes_as_nested_string_arrays() {
        let table = Table::new(vec![Row::from(vec!["1", "Firma", "123", "10,00"])]);
        let json = serde_json::to_string(&table).expect("serialize table");
        assert_eq!(json, r#"[["1","Firma","123","10,00"]]"#);

        let back: Table = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(back, table);
    }

    #[test]
    fn insert_past_end_appends() {
        let mut table = Table::new(vec![Row::from(vec!["a"])]);
        let at = table.insert(5, Row::from(vec!["b"]));
        assert_eq!(at, 1);
        assert_eq!(table.rows()[1], Row::from(vec!["b"]));
    }

    #[test]
    fn variant_parses_known_names() {
        assert_eq!(Variant::parse("Extended"), Some(Variant::Extended));
        assert_eq!(Variant::parse(" base "), Some(Variant::Base));
        assert_eq!(Variant::parse("wide"), None);
    }

    #[test]
    fn projections_fit_within_minimum_field_count() {
        for variant in [Variant::Base, Variant::Extended] {
            let max = variant.projection().iter().copied().max().unwrap_or(0);
            assert!(max < variant.min_fields());
            assert_eq!(variant.projection().len(), variant.column_labels().len());
        }
    }
}

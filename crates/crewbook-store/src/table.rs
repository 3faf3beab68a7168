use rusqlite::types::Value;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Eager result of a read: column names plus every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Text of a cell; `None` for NULL, out-of-range, or unknown columns.
    pub fn text(&self, row: usize, column: &str) -> Option<String> {
        match self.value(row, column)? {
            Value::Null => None,
            value => Some(format_value(value)),
        }
    }

    pub fn real(&self, row: usize, column: &str) -> Option<f64> {
        match self.value(row, column)? {
            Value::Real(v) => Some(*v),
            Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn integer(&self, row: usize, column: &str) -> Option<i64> {
        match self.value(row, column)? {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Every row as display strings, NULL rendered as empty text.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(format_value).collect())
            .collect()
    }
}

/// Render a cell for CSV and plain-text output.
///
/// Whole reals keep one decimal (`8.0`) so hour and quantity columns read
/// as numbers with a fractional part, the same way spreadsheets show them.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(v) => v.to_string(),
        Value::Real(v) if v.is_finite() && v.fract() == 0.0 => format!("{:.1}", v),
        Value::Real(v) => v.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}

struct Cell<'a>(&'a Value);

impl Serialize for Cell<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_none(),
            Value::Integer(v) => serializer.serialize_i64(*v),
            Value::Real(v) => serializer.serialize_f64(*v),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Blob(bytes) => serializer.serialize_bytes(bytes),
        }
    }
}

struct Row<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(column, &Cell(value))?;
        }
        map.end()
    }
}

/// Serializes as an array of objects, keys in column order.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for values in &self.rows {
            seq.serialize_element(&Row {
                columns: &self.columns,
                values,
            })?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            columns: vec!["worker".into(), "total_hours".into(), "notes".into()],
            rows: vec![
                vec![Value::Text("Ana".into()), Value::Real(14.5), Value::Null],
                vec![
                    Value::Text("Luis".into()),
                    Value::Real(8.0),
                    Value::Text("flu".into()),
                ],
            ],
        }
    }

    #[test]
    fn test_lookup_by_column_name() {
        let table = sample();
        assert_eq!(table.text(0, "worker").as_deref(), Some("Ana"));
        assert_eq!(table.real(0, "total_hours"), Some(14.5));
        assert_eq!(table.text(0, "notes"), None);
        assert_eq!(table.text(0, "missing"), None);
        assert_eq!(table.text(5, "worker"), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&Value::Null), "");
        assert_eq!(format_value(&Value::Integer(3)), "3");
        assert_eq!(format_value(&Value::Real(8.0)), "8.0");
        assert_eq!(format_value(&Value::Real(2.5)), "2.5");
    }

    #[test]
    fn test_serialize_keeps_column_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"[{"worker":"Ana","total_hours":14.5,"notes":null},{"worker":"Luis","total_hours":8.0,"notes":"flu"}]"#
        );
    }
}

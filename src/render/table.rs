//! Tabular results: the header fixes column order, rows are looked up by name.

use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
}

pub type Record = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub header: Vec<Column>,

    #[serde(default)]
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            header: columns
                .iter()
                .map(|name| Column {
                    name: name.to_string(),
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.rows.push(record);
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.header.iter().map(|c| c.name.as_str())
    }

    /// Cells of every row in header order.
    fn cells(&self) -> Result<Vec<Vec<String>>> {
        let mut out = Vec::with_capacity(self.rows.len());
        for (row, record) in self.rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(self.header.len());
            for name in self.names() {
                let value = record.get(name).ok_or_else(|| PortalError::MissingField {
                    row,
                    column: name.to_string(),
                })?;
                cells.push(cell_text(value));
            }
            out.push(cells);
        }
        Ok(out)
    }

    /// RFC 4180 CSV: minimal quoting, CRLF after every record.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());
        writer.write_record(self.names())?;
        for cells in self.cells()? {
            writer.write_record(&cells)?;
        }
        writer
            .into_inner()
            .map_err(|e| PortalError::Csv(e.into_error().into()))
    }

    /// Tab-joined header and rows, newline after each.
    ///
    /// Tabs and newlines inside values are written as-is.
    pub fn to_tsv(&self) -> Result<Vec<u8>> {
        let header = self.names().collect::<Vec<_>>().join("\t");
        let rows: Vec<String> = self
            .cells()?
            .into_iter()
            .map(|cells| cells.join("\t"))
            .collect();
        Ok(format!("{}\n{}\n", header, rows.join("\n")).into_bytes())
    }
}

/// Text of one cell: strings verbatim, null empty, containers as compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn scores() -> Table {
        let mut t = Table::new(&["id", "score"]);
        t.push(record(&[("id", json!("a")), ("score", json!("1"))]));
        t.push(record(&[("id", json!("b")), ("score", json!("2"))]));
        t
    }

    #[test]
    fn csv_scenario() {
        let body = String::from_utf8(scores().to_csv().unwrap()).unwrap();
        assert_eq!(body, "id,score\r\na,1\r\nb,2\r\n");
    }

    #[test]
    fn tsv_scenario() {
        let body = String::from_utf8(scores().to_tsv().unwrap()).unwrap();
        assert_eq!(body, "id\tscore\na\t1\nb\t2\n");
    }

    #[test]
    fn header_order_wins_over_record_order() {
        let mut t = Table::new(&["score", "id"]);
        t.push(record(&[("id", json!("a")), ("score", json!(0.5)), ("extra", json!(true))]));
        let body = String::from_utf8(t.to_csv().unwrap()).unwrap();
        assert_eq!(body, "score,id\r\n0.5,a\r\n");
    }

    #[test]
    fn csv_quotes_when_needed() {
        let mut t = Table::new(&["term", "note"]);
        t.push(record(&[("term", json!("a,b")), ("note", json!("say \"hi\""))]));
        t.push(record(&[("term", json!("line\nbreak")), ("note", json!("ünï"))]));
        let body = String::from_utf8(t.to_csv().unwrap()).unwrap();
        assert_eq!(
            body,
            "term,note\r\n\"a,b\",\"say \"\"hi\"\"\"\r\n\"line\nbreak\",ünï\r\n"
        );
    }

    #[test]
    fn tsv_does_not_escape() {
        let mut t = Table::new(&["term"]);
        t.push(record(&[("term", json!("a\tb"))]));
        let body = String::from_utf8(t.to_tsv().unwrap()).unwrap();
        assert_eq!(body, "term\na\tb\n");
    }

    #[test]
    fn row_count_is_rows_plus_header() {
        let csv = String::from_utf8(scores().to_csv().unwrap()).unwrap();
        assert_eq!(csv.matches("\r\n").count(), scores().rows.len() + 1);

        let tsv = String::from_utf8(scores().to_tsv().unwrap()).unwrap();
        assert_eq!(tsv.lines().count(), scores().rows.len() + 1);
    }

    #[test]
    fn empty_table_keeps_blank_row_line_in_tsv() {
        let t = Table::new(&["id"]);
        assert_eq!(t.to_tsv().unwrap(), b"id\n\n".to_vec());
        assert_eq!(t.to_csv().unwrap(), b"id\r\n".to_vec());
    }

    #[test]
    fn missing_field_is_an_error() {
        let mut t = Table::new(&["id", "score"]);
        t.push(record(&[("id", json!("a"))]));
        let err = t.to_tsv().unwrap_err();
        assert!(matches!(err, PortalError::MissingField { row: 0, ref column } if column == "score"));
        assert!(t.to_csv().is_err());
    }

    #[test]
    fn cell_text_forms() {
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(3)), "3");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&json!(["x", 1])), "[\"x\",1]");
    }
}

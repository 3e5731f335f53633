//! Minimal comma-separated parser for the teams roster.
//!
//! The roster is a plain export with no quoting, so a line is split on every
//! comma. The first line names the columns; keys and values are trimmed.

use std::collections::HashMap;

/// One accepted data row, keyed by trimmed header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRecord {
    fields: HashMap<String, String>,
}

impl CsvRecord {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parses `text` into records. A row is kept only when it has exactly as many
/// fields as the header and its first field is not blank; anything else is
/// dropped without error.
pub fn parse_csv(text: &str) -> Vec<CsvRecord> {
    let mut lines = text.split('\n');
    let headers: Vec<&str> = match lines.next() {
        Some(header_line) => header_line.split(',').collect(),
        None => return Vec::new(),
    };

    lines
        .filter_map(|line| {
            let values: Vec<&str> = line.split(',').collect();
            if values.len() != headers.len() || values[0].trim().is_empty() {
                return None;
            }
            let fields = headers
                .iter()
                .zip(values)
                .map(|(header, value)| (header.trim().to_string(), value.trim().to_string()))
                .collect();
            Some(CsvRecord { fields })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROSTER: &str = "TEAM NAME,TEAM LEAD NAME,PS ID,Venue,TOTAL\n\
        GenNext,Asha,SIH1524,SEMINAR HALL,42\n\
        Tesla,Ravi,SIH1525,IOT LAB,37\n";

    #[test]
    fn test_parses_header_keyed_rows() {
        let records = parse_csv(ROSTER);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("TEAM NAME"), Some("GenNext"));
        assert_eq!(records[1].get("Venue"), Some("IOT LAB"));
        assert_eq!(records[1].get("TOTAL"), Some("37"));
    }

    #[test]
    fn test_drops_rows_with_wrong_field_count() {
        let text = "A,B,C\n1,2,3\n1,2\n1,2,3,4\n4,5,6";
        let records = parse_csv(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("A"), Some("1"));
        assert_eq!(records[1].get("A"), Some("4"));
    }

    #[test]
    fn test_drops_rows_with_blank_first_field() {
        let text = "A,B\n,2\n   ,3\nx,4";
        let records = parse_csv(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("B"), Some("4"));
    }

    #[test]
    fn test_trims_carriage_returns_and_spaces() {
        let text = "TEAM NAME , TOTAL\r\n  Koshin , 12 \r\n";
        let records = parse_csv(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("TEAM NAME"), Some("Koshin"));
        assert_eq!(records[0].get("TOTAL"), Some("12"));
    }

    #[test]
    fn test_empty_input_has_no_records() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("A,B,C").is_empty());
    }

    #[test]
    fn test_missing_column_reads_as_empty() {
        let records = parse_csv("A\nvalue");
        assert_eq!(records[0].get_or_empty("B"), "");
        assert_eq!(records[0].len(), 1);
    }
}

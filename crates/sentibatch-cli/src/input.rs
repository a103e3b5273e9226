//! Input readers: CSV file and JSON stream
//!
//! Structural problems (missing file, missing `text` column, non-array
//! JSON) are batch-fatal input errors; everything downstream is
//! recovered per record.

use sentibatch_core::{Error, Record, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A parsed CSV batch: the verbatim table plus the extracted records.
///
/// Rows are kept untouched so the augmented side-file can reproduce
/// every input column.
#[derive(Debug)]
pub struct CsvBatch {
    pub headers: csv::StringRecord,
    pub rows: Vec<csv::StringRecord>,
    pub records: Vec<Record>,
    /// Index of the optional `label` column
    pub label_column: Option<usize>,
}

/// Read and validate a CSV batch from a file.
///
/// The file must exist and carry a `text` column; a `label` column is
/// optional. Empty label cells are treated as absent.
pub fn read_csv_batch(path: &Path) -> Result<CsvBatch> {
    if !path.is_file() {
        return Err(Error::input(format!(
            "input file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let text_column = headers
        .iter()
        .position(|h| h == "text")
        .ok_or_else(|| Error::input("CSV must have a 'text' column"))?;
    let label_column = headers.iter().position(|h| h == "label");

    let mut rows = Vec::new();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let text = row.get(text_column).unwrap_or("").to_string();
        let label = label_column
            .and_then(|idx| row.get(idx))
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        records.push(Record { text, label });
        rows.push(row);
    }

    debug!(rows = rows.len(), has_labels = label_column.is_some(), "parsed csv input");
    Ok(CsvBatch {
        headers,
        rows,
        records,
        label_column,
    })
}

/// Read a JSON array of `{text, label?}` objects.
///
/// Missing `text` fields default to empty strings; anything that is
/// not an array of objects is a batch-fatal input error. An empty
/// array is valid and yields an empty batch.
pub fn read_stream_records(reader: impl Read) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_reader(reader)
        .map_err(|err| Error::input(format!("expected a JSON array of text entries: {err}")))?;

    debug!(records = records.len(), "parsed stream input");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_csv_with_labels_and_extra_columns() {
        let file = write_temp_csv("id,text,label,source\n1,all good,joy,web\n2,meh day,,app\n");
        let batch = read_csv_batch(file.path()).unwrap();

        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[0].text, "all good");
        assert_eq!(batch.records[0].label.as_deref(), Some("joy"));
        // Empty label cells are treated as absent.
        assert_eq!(batch.records[1].label, None);
        assert_eq!(batch.label_column, Some(2));
        assert_eq!(batch.headers.len(), 4);
    }

    #[test]
    fn reads_csv_without_label_column() {
        let file = write_temp_csv("text\nhello there\n");
        let batch = read_csv_batch(file.path()).unwrap();
        assert_eq!(batch.label_column, None);
        assert_eq!(batch.records[0].label, None);
    }

    #[test]
    fn missing_text_column_is_fatal() {
        let file = write_temp_csv("body,label\nhello,joy\n");
        let err = read_csv_batch(file.path()).unwrap_err();
        assert!(err.is_batch_fatal());
        assert_eq!(err.to_string(), "input error: CSV must have a 'text' column");
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = read_csv_batch(Path::new("/nonexistent/input.csv")).unwrap_err();
        assert!(err.is_batch_fatal());
        assert!(err.to_string().contains("input file not found"));
    }

    #[test]
    fn reads_json_array_with_optional_fields() {
        let json = r#"[{"text": "great", "label": "joy"}, {"text": "hm"}, {"label": "anger"}]"#;
        let records = read_stream_records(json.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].label.as_deref(), Some("joy"));
        assert_eq!(records[1].label, None);
        // Missing text defaults to empty.
        assert_eq!(records[2].text, "");
    }

    #[test]
    fn empty_json_array_is_valid() {
        let records = read_stream_records("[]".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn non_array_json_is_fatal() {
        let err = read_stream_records(r#"{"text": "solo"}"#.as_bytes()).unwrap_err();
        assert!(err.is_batch_fatal());
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let err = read_stream_records("[{".as_bytes()).unwrap_err();
        assert!(err.is_batch_fatal());
    }
}

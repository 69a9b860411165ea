//! Delimited-text export.
//!
//! Turns any list of serializable records into CSV. The header row is the
//! field order of the first record; every later record is written against
//! those headers, with missing fields left empty.

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PortalError, PortalResult};

/// A generated CSV document and the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// `<base name>.csv`.
    pub filename: String,
    /// The document text. Empty when there were no records.
    pub content: String,
}

/// Builds a CSV export from `records`.
///
/// Cells containing commas, quotes or line breaks are quoted, with embedded
/// quotes doubled. Lines end with `\n`. Nested arrays and objects are written
/// as compact JSON and nulls as empty cells.
///
/// # Errors
///
/// Returns [`PortalError::Export`] if a record does not serialize to a JSON
/// object.
///
/// # Example
///
/// ```
/// use hr_portal::export::export_csv;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Row { name: &'static str, position: &'static str }
///
/// let export = export_csv(&[Row { name: "Ann", position: "A, B" }], "employees").unwrap();
/// assert_eq!(export.filename, "employees.csv");
/// assert_eq!(export.content, "name,position\nAnn,\"A, B\"\n");
/// ```
pub fn export_csv<T: Serialize>(records: &[T], base_name: &str) -> PortalResult<CsvExport> {
    let filename = format!("{}.csv", base_name);

    let objects = records
        .iter()
        .map(to_object)
        .collect::<PortalResult<Vec<_>>>()?;

    let Some(first) = objects.first() else {
        return Ok(CsvExport {
            filename,
            content: String::new(),
        });
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&headers).map_err(export_error)?;
    for object in &objects {
        let row: Vec<String> = headers
            .iter()
            .map(|header| object.get(header).map(cell_text).unwrap_or_default())
            .collect();
        writer.write_record(&row).map_err(export_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| PortalError::Export {
        message: e.to_string(),
    })?;
    let content = String::from_utf8(bytes).map_err(|e| PortalError::Export {
        message: e.to_string(),
    })?;

    Ok(CsvExport { filename, content })
}

fn to_object<T: Serialize>(record: &T) -> PortalResult<Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(PortalError::Export {
            message: format!("expected an object record, got {}", kind_of(&other)),
        }),
        Err(e) => Err(PortalError::Export {
            message: e.to_string(),
        }),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn export_error(error: csv::Error) -> PortalError {
    PortalError::Export {
        message: error.to_string(),
    }
}

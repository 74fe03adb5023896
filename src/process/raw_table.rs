use anyhow::{bail, Context, Result};
use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use csv::ReaderBuilder;
use std::{path::Path, sync::Arc};
use tracing::debug;

use crate::process::utils::is_missing;

#[derive(Debug)]
pub struct RawTable {
    /// Column names from the header row, index column already removed.
    pub headers: Vec<String>,
    /// Data rows as read, one String per header, index column already removed.
    pub rows: Vec<Vec<String>>,
}

/// Read a delimited file whose first column is a row index.
///
/// The index column is dropped from both header and rows. Records with a
/// field count different from the header are an error.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_raw_table<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<RawTable> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open input file: {:?}", path))?;

    let header = rdr
        .headers()
        .with_context(|| format!("Failed to read header row of {:?}", path))?;
    if header.is_empty() {
        bail!("{:?} has an empty header row", path);
    }
    let headers: Vec<String> = header.iter().skip(1).map(str::to_string).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        rows.push(record.iter().skip(1).map(str::to_string).collect());
    }

    debug!(columns = headers.len(), rows = rows.len(), "loaded raw table");
    Ok(RawTable { headers, rows })
}

impl RawTable {
    /// One nullable Utf8 column per header; missing cells become nulls.
    pub fn into_record_batch(self) -> Result<RecordBatch> {
        if self.headers.is_empty() {
            bail!("table has no columns besides the row index");
        }

        let fields: Vec<Field> = self
            .headers
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect();

        let columns: Vec<ArrayRef> = (0..self.headers.len())
            .map(|j| {
                let col: StringArray = self
                    .rows
                    .iter()
                    .map(|row| row.get(j).map(String::as_str).filter(|v| !is_missing(v)))
                    .collect();
                Arc::new(col) as ArrayRef
            })
            .collect();

        RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).map_err(Into::into)
    }
}

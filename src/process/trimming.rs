use crate::process::utils::{clean_text, normalize_amount};
use anyhow::{anyhow, Context, Result};
use arrow::{
    array::{ArrayRef, StringArray},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Rewrite every non-null value of the named Utf8 columns with `f`.
/// Other columns are passed through untouched.
fn map_text_columns<F>(batch: &RecordBatch, columns: &[&str], f: F) -> Result<RecordBatch>
where
    F: Fn(&str) -> String,
{
    let schema = batch.schema();
    for name in columns {
        schema
            .index_of(name)
            .with_context(|| format!("column {:?} not found", name))?;
    }

    let mut cols = Vec::with_capacity(batch.num_columns());
    for (i, field) in schema.fields().iter().enumerate() {
        let arr = batch.column(i);
        if columns.contains(&field.name().as_str()) {
            let sarr = arr
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| anyhow!("column {:?} is not text", field.name()))?;
            let mapped: StringArray = sarr.iter().map(|opt| opt.map(&f)).collect();
            cols.push(Arc::new(mapped) as ArrayRef);
            continue;
        }
        cols.push(arr.clone());
    }

    RecordBatch::try_new(schema, cols).map_err(Into::into)
}

/// Lowercase only.
pub fn lowercase_columns(batch: &RecordBatch, columns: &[&str]) -> Result<RecordBatch> {
    map_text_columns(batch, columns, str::to_lowercase)
}

/// Lowercase and replace `-`/`_` by spaces.
pub fn normalize_text(batch: &RecordBatch, columns: &[&str]) -> Result<RecordBatch> {
    map_text_columns(batch, columns, clean_text)
}

/// Strip currency formatting from a single monetary column.
pub fn normalize_amount_column(batch: &RecordBatch, column: &str) -> Result<RecordBatch> {
    map_text_columns(batch, &[column], normalize_amount)
}

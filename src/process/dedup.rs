use anyhow::Result;
use arrow::{
    array::{Array, BooleanArray},
    compute::filter_record_batch,
    record_batch::RecordBatch,
    row::{RowConverter, SortField},
};
use std::collections::HashSet;

/// Keep the first occurrence of every full-row value combination.
/// Nulls compare equal to nulls.
pub fn drop_duplicates(batch: &RecordBatch) -> Result<RecordBatch> {
    let sort_fields: Vec<SortField> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| SortField::new(f.data_type().clone()))
        .collect();
    let converter = RowConverter::new(sort_fields)?;
    let rows = converter.convert_columns(batch.columns())?;

    let mut seen = HashSet::with_capacity(rows.num_rows());
    let keep: Vec<bool> = rows.iter().map(|row| seen.insert(row)).collect();

    filter_record_batch(batch, &BooleanArray::from(keep)).map_err(Into::into)
}

/// Drop every row with a null in any column.
pub fn drop_incomplete(batch: &RecordBatch) -> Result<RecordBatch> {
    let keep: Vec<bool> = (0..batch.num_rows())
        .map(|i| batch.columns().iter().all(|col| col.is_valid(i)))
        .collect();

    filter_record_batch(batch, &BooleanArray::from(keep)).map_err(Into::into)
}

use crate::process::date_parser;
use anyhow::{anyhow, Context, Result};
use arrow::{
    array::{ArrayRef, Date32Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::debug;

/// Replace the named Utf8 column by a nullable `Date32` column.
///
/// Values neither date layout accepts become null; nulls stay null.
pub fn convert_date_column(batch: &RecordBatch, column: &str) -> Result<RecordBatch> {
    let schema = batch.schema();
    let idx = schema
        .index_of(column)
        .with_context(|| format!("date column {:?} not found", column))?;
    let sarr = batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| anyhow!("date column {:?} is not text", column))?;

    let mut unparsed = 0usize;
    let dates: Date32Array = sarr
        .iter()
        .map(|opt| {
            opt.and_then(|s| {
                let parsed = date_parser::parse_benefit_date(s);
                if parsed.is_none() {
                    unparsed += 1;
                }
                parsed.map(date_parser::days_since_epoch)
            })
        })
        .collect();
    if unparsed > 0 {
        debug!(column, unparsed, "unparseable dates marked missing");
    }

    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .enumerate()
        .map(|(i, f)| {
            if i == idx {
                Field::new(f.name(), DataType::Date32, true)
            } else {
                f.as_ref().clone()
            }
        })
        .collect();

    let mut cols: Vec<ArrayRef> = batch.columns().to_vec();
    cols[idx] = Arc::new(dates);

    RecordBatch::try_new(Arc::new(Schema::new(fields)), cols).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;
    use chrono::NaiveDate;

    #[test]
    fn both_layouts_and_garbage() -> Result<()> {
        let schema = Arc::new(Schema::new(vec![
            Field::new("sexo", DataType::Utf8, true),
            Field::new("fecha_de_beneficio", DataType::Utf8, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["f", "m", "f", "m"])) as ArrayRef,
                Arc::new(StringArray::from(vec![
                    Some("15/03/2021"),
                    Some("2021/03/15"),
                    Some("99/99/9999"),
                    None,
                ])) as ArrayRef,
            ],
        )?;

        let out = convert_date_column(&batch, "fecha_de_beneficio")?;
        assert_eq!(out.schema().field(1).data_type(), &DataType::Date32);
        assert_eq!(out.schema().field(0).data_type(), &DataType::Utf8);

        let dates = out
            .column(1)
            .as_any()
            .downcast_ref::<Date32Array>()
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        assert_eq!(dates.value_as_date(0), Some(expected));
        assert_eq!(dates.value_as_date(1), Some(expected));
        assert!(dates.is_null(2));
        assert!(dates.is_null(3));
        Ok(())
    }

    #[test]
    fn missing_date_column_is_an_error() {
        let schema = Arc::new(Schema::new(vec![Field::new("sexo", DataType::Utf8, true)]));
        let col = Arc::new(StringArray::from(vec!["f"])) as ArrayRef;
        let batch = RecordBatch::try_new(schema, vec![col]).unwrap();
        assert!(convert_date_column(&batch, "fecha_de_beneficio").is_err());
    }
}

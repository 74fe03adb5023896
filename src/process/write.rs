use anyhow::{Context, Result};
use arrow::{csv::WriterBuilder, record_batch::RecordBatch};
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};
use std::{fs::File, path::Path};
use tracing::debug;

/// Header row plus one line per row, no index column.
pub fn write_csv(batch: &RecordBatch, path: &Path, delimiter: u8) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating output file {:?}", path))?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .with_delimiter(delimiter)
        .build(file);
    writer
        .write(batch)
        .with_context(|| format!("writing CSV to {:?}", path))?;
    debug!(rows = batch.num_rows(), path = %path.display(), "wrote CSV");
    Ok(())
}

pub fn write_parquet(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating parquet file {:?}", path))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .context("creating Arrow writer for cleaned table")?;
    writer.write(batch).context("writing cleaned batch")?;
    writer.close().context("closing parquet writer")?;
    debug!(rows = batch.num_rows(), path = %path.display(), "wrote parquet");
    Ok(())
}

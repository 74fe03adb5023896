// src/process/mod.rs
pub mod convert;
pub mod date_parser;
pub mod dedup;
pub mod raw_table;
pub mod trimming;
pub mod utils;
pub mod write;

use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};
use tracing::info;

use crate::config::CleanConfig;
use crate::process::{
    convert::convert_date_column,
    dedup::{drop_duplicates, drop_incomplete},
    raw_table::load_raw_table,
    trimming::{lowercase_columns, normalize_amount_column, normalize_text},
    write::{write_csv, write_parquet},
};

pub const SEXO: &str = "sexo";
pub const TIPO_DE_EMPRENDIMIENTO: &str = "tipo_de_emprendimiento";
pub const BARRIO: &str = "barrio";
pub const LINEA_CREDITO: &str = "línea_credito";
pub const IDEA_NEGOCIO: &str = "idea_negocio";
pub const MONTO_DEL_CREDITO: &str = "monto_del_credito";
pub const FECHA_DE_BENEFICIO: &str = "fecha_de_beneficio";

/// Columns the pipeline touches; all must be present in the input header.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    SEXO,
    TIPO_DE_EMPRENDIMIENTO,
    BARRIO,
    LINEA_CREDITO,
    IDEA_NEGOCIO,
    MONTO_DEL_CREDITO,
    FECHA_DE_BENEFICIO,
];

/// Free-text columns that get lowercase + separator cleanup.
/// `monto_del_credito` is listed again on purpose; on digits it changes nothing.
pub const TEXT_COLUMNS: [&str; 4] = [BARRIO, LINEA_CREDITO, IDEA_NEGOCIO, MONTO_DEL_CREDITO];

/// Row counts for one cleaning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub rows_read: usize,
    pub duplicates_dropped: usize,
    pub incomplete_dropped: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
}

fn ensure_required_columns(headers: &[String]) -> Result<()> {
    for name in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name) {
            bail!("required column {:?} missing from input header", name);
        }
    }
    Ok(())
}

/// Load, normalize, deduplicate, drop incomplete rows, write.
///
/// Unparseable dates only surface as dropped rows; I/O and CSV structure
/// errors abort the run.
#[tracing::instrument(level = "info", skip(config), fields(input = %config.input_path.display()))]
pub fn run(config: &CleanConfig) -> Result<RunReport> {
    // 1) load
    let raw = load_raw_table(&config.input_path, config.delimiter)?;
    ensure_required_columns(&raw.headers)?;
    let rows_read = raw.rows.len();
    let batch = raw.into_record_batch()?;
    info!(rows = rows_read, columns = batch.num_columns(), "loaded");

    // 2) per-column normalization
    let batch = lowercase_columns(&batch, &[SEXO, TIPO_DE_EMPRENDIMIENTO])?;
    let batch = normalize_amount_column(&batch, MONTO_DEL_CREDITO)?;
    let batch = normalize_text(&batch, &TEXT_COLUMNS)?;
    let batch = convert_date_column(&batch, FECHA_DE_BENEFICIO)?;

    // 3) duplicates first, then rows with any missing field
    let deduped = drop_duplicates(&batch)?;
    let duplicates_dropped = batch.num_rows() - deduped.num_rows();
    let complete = drop_incomplete(&deduped)?;
    let incomplete_dropped = deduped.num_rows() - complete.num_rows();
    info!(duplicates_dropped, incomplete_dropped, "filtered");

    // 4) write
    fs::create_dir_all(&config.output_directory)
        .with_context(|| format!("creating output directory {:?}", config.output_directory))?;
    let output_path = config.output_path();
    write_csv(&complete, &output_path, config.delimiter)?;
    if config.parquet_copy {
        write_parquet(&complete, &config.parquet_path())?;
    }
    info!(rows = complete.num_rows(), output = %output_path.display(), "written");

    Ok(RunReport {
        rows_read,
        duplicates_dropped,
        incomplete_dropped,
        rows_written: complete.num_rows(),
        output_path,
    })
}

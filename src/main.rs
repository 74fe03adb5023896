use anyhow::{bail, Result};
use clap::Parser;
use solicitudes::{
    config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE},
    process, CleanConfig,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Clean the credit-request export. With no flags the fixed project layout is used.
#[derive(Parser, Debug)]
struct Args {
    /// Raw CSV, first column is a row index
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Directory for the cleaned file, created if absent
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Name of the cleaned CSV
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output_file: String,

    /// Field separator for input and output
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// Also write a parquet copy next to the CSV
    #[arg(long)]
    parquet: bool,
}

impl Args {
    fn into_config(self) -> Result<CleanConfig> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter {:?} is not an ASCII character", self.delimiter);
        }
        Ok(CleanConfig {
            delimiter: self.delimiter as u8,
            parquet_copy: self.parquet,
            ..CleanConfig::new(self.input, self.output_dir, self.output_file)
        })
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();

    let config = Args::parse().into_config()?;
    info!(
        input = %config.input_path.display(),
        output = %config.output_path().display(),
        "cleaning credit requests"
    );

    let report = process::run(&config)?;
    info!(
        rows_read = report.rows_read,
        duplicates_dropped = report.duplicates_dropped,
        incomplete_dropped = report.incomplete_dropped,
        rows_written = report.rows_written,
        "done"
    );
    Ok(())
}

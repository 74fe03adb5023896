use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "files/input/solicitudes_de_credito.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "files/output";
pub const DEFAULT_OUTPUT_FILE: &str = "solicitudes_de_credito.csv";

/// Where to read the raw credit requests from and where the cleaned table goes.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Raw `;`-separated export, first column is a row index
    pub input_path: PathBuf,

    /// Created on demand before writing
    pub output_directory: PathBuf,

    /// File name of the cleaned CSV inside `output_directory`
    pub output_filename: String,

    /// Field separator used for both input and output
    pub delimiter: u8,

    /// Also write `<stem>.parquet` next to the CSV
    pub parquet_copy: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_filename: DEFAULT_OUTPUT_FILE.to_string(),
            delimiter: b';',
            parquet_copy: false,
        }
    }
}

impl CleanConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
        output_filename: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_directory: output_directory.into(),
            output_filename: output_filename.into(),
            ..Self::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_directory.join(&self.output_filename)
    }

    /// `<output_directory>/<output_filename stem>.parquet`
    pub fn parquet_path(&self) -> PathBuf {
        let stem = Path::new(&self.output_filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_filename.clone());
        self.output_directory.join(format!("{}.parquet", stem))
    }
}

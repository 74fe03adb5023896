pub mod config;
pub mod process;

pub use config::CleanConfig;
pub use process::{run, RunReport};

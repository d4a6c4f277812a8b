use pelegrow::core::io::report::ReportError;
use pelegrow::core::template::error::TemplateError;
use pelegrow::workflows::grow::GrowError;
use pelegrow::workflows::transplant::PlanLoadError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Grow(#[from] GrowError),

    #[error(transparent)]
    Plan(#[from] PlanLoadError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

use mbuild::core::io::template::TemplateLoadError;
use mbuild::core::io::xyz::XyzError;
use mbuild::core::models::error::CompoundError;
use mbuild::workflows::chain::ChainError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Compound(#[from] CompoundError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("Failed to write structure: {0}")]
    Xyz(#[from] XyzError),

    #[error(transparent)]
    Template(#[from] TemplateLoadError),

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

//! Top-level error type.

use thiserror::Error;

use crate::arb::LoadError;
use crate::config::ConfigError;
use crate::filter::FilterError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

// src/web/error.rs

use thiserror::Error;
use tokio::task::JoinError;

use crate::data::LoadError;

pub const CSV_NOT_FOUND: &str = "CSV not found";
pub const INVALID_CSV_STRUCTURE: &str = "Неправильна структура CSV";
pub const UNKNOWN_REGION: &str = "Такої області немає в даних";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("region {0:?} is not present in the data")]
    UnknownRegion(String),

    #[error("rendering chart: {0:#}")]
    Render(#[from] anyhow::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] JoinError),
}

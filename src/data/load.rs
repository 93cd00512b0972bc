// src/data/load.rs

use csv::ReaderBuilder;
use std::{
    fs,
    io::{self, Cursor},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

use super::record::{Record, REGION_COLUMN};
use super::Dataset;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    #[error("malformed CSV row: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    /// True when the file was readable but its layout or contents are wrong.
    pub fn is_structural(&self) -> bool {
        matches!(self, LoadError::MissingColumns(_) | LoadError::Csv(_))
    }
}

/// Read the whole file at `path` into a [`Dataset`].
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let dataset = parse_dataset(&bytes)?;
    debug!(rows = dataset.len(), "loaded dataset");
    Ok(dataset)
}

/// Parse CSV bytes, dropping a leading UTF-8 byte-order mark.
///
/// Only the region column is mandatory here; chart paths check the rest with
/// [`Dataset::ensure_columns`]. Short rows are accepted and read their missing
/// cells as blank.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(body));

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
    if !columns.iter().any(|h| h == REGION_COLUMN) {
        return Err(LoadError::MissingColumns(vec![REGION_COLUMN]));
    }

    let records = rdr
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::new(columns, records))
}

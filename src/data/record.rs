// src/data/record.rs

use serde::Deserialize;

pub const REGION_COLUMN: &str = "Область";
pub const SUBREGION_COLUMN: &str = "Місто/Район";
pub const VALUE_COLUMN: &str = "Значення";

/// Header names a file must carry before any chart is drawn from it.
pub const REQUIRED_COLUMNS: [&str; 3] = [REGION_COLUMN, SUBREGION_COLUMN, VALUE_COLUMN];

/// One CSV row. Extra columns in the file are ignored; blank or absent
/// subregion and value cells read as `None` and drop out of the sums.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Область")]
    pub region: String,
    #[serde(rename = "Місто/Район", default)]
    pub subregion: Option<String>,
    #[serde(rename = "Значення", default)]
    pub value: Option<f64>,
}

impl Record {
    pub fn new(region: impl Into<String>, subregion: impl Into<String>, value: f64) -> Self {
        Self {
            region: region.into(),
            subregion: Some(subregion.into()),
            value: Some(value),
        }
    }
}

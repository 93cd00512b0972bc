pub mod aggregate;
pub mod load;
pub mod record;

pub use aggregate::{distinct_regions, totals_by_region, totals_by_subregion, GroupTotal};
pub use load::{load_dataset, parse_dataset, LoadError};
pub use record::{Record, REQUIRED_COLUMNS};

/// Rows of one CSV read, held only for the request that loaded them.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Header names as they appeared in the file.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Fails with [`LoadError::MissingColumns`] listing every absent header.
    pub fn ensure_columns(&self, required: &[&'static str]) -> Result<(), LoadError> {
        let missing: Vec<&'static str> = required
            .iter()
            .copied()
            .filter(|col| !self.columns.iter().any(|h| h == *col))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(LoadError::MissingColumns(missing))
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn regions(&self) -> Vec<String> {
        distinct_regions(&self.records)
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.records.iter().any(|r| r.region == region)
    }

    pub fn region_totals(&self) -> Vec<GroupTotal> {
        totals_by_region(&self.records)
    }

    pub fn subregion_totals(&self, region: &str) -> Vec<GroupTotal> {
        totals_by_subregion(&self.records, region)
    }
}

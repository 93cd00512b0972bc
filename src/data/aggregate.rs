// src/data/aggregate.rs

use std::collections::{BTreeMap, BTreeSet};

use super::record::Record;

/// Summed value for one group key; one bar on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub label: String,
    pub total: f64,
}

/// Distinct region names in ascending order.
pub fn distinct_regions(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.region.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Group `records` by `key` and sum their values. Groups come back sorted by key.
///
/// Rows without a key are dropped; blank values add nothing, so a group whose
/// values are all blank still appears with a total of zero.
pub fn sum_by<'a, I, F>(records: I, key: F) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = &'a Record>,
    F: Fn(&'a Record) -> Option<&'a str>,
{
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        let Some(label) = key(record) else { continue };
        let total = groups.entry(label).or_default();
        if let Some(value) = record.value {
            *total += value;
        }
    }
    groups
        .into_iter()
        .map(|(label, total)| GroupTotal {
            label: label.to_owned(),
            total,
        })
        .collect()
}

pub fn totals_by_region(records: &[Record]) -> Vec<GroupTotal> {
    sum_by(records, |r| Some(r.region.as_str()))
}

/// Per-subregion totals inside `region`; empty when the region has no rows.
pub fn totals_by_subregion(records: &[Record], region: &str) -> Vec<GroupTotal> {
    sum_by(
        records.iter().filter(|r| r.region == region),
        |r| r.subregion.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Record> {
        vec![
            Record::new("Київська", "Київ", 100.0),
            Record::new("Київська", "Бровари", 50.0),
            Record::new("Львівська", "Львів", 200.0),
            Record::new("Одеська", "Одеса", 150.0),
        ]
    }

    fn pairs(totals: &[GroupTotal]) -> Vec<(&str, f64)> {
        totals.iter().map(|t| (t.label.as_str(), t.total)).collect()
    }

    #[test]
    fn regions_are_sorted_and_unique() {
        let mut rows = fixture();
        rows.push(Record::new("Волинська", "Луцьк", 1.0));
        rows.push(Record::new("Київська", "Ірпінь", 1.0));
        assert_eq!(
            distinct_regions(&rows),
            vec!["Волинська", "Київська", "Львівська", "Одеська"]
        );
    }

    #[test]
    fn sums_per_region() {
        assert_eq!(
            pairs(&totals_by_region(&fixture())),
            vec![("Київська", 150.0), ("Львівська", 200.0), ("Одеська", 150.0)]
        );
    }

    #[test]
    fn sums_per_subregion_within_region() {
        let mut rows = fixture();
        rows.push(Record::new("Київська", "Київ", 25.0));
        rows.push(Record::new("Львівська", "Київ", 999.0));
        assert_eq!(
            pairs(&totals_by_subregion(&rows, "Київська")),
            vec![("Бровари", 50.0), ("Київ", 125.0)]
        );
    }

    #[test]
    fn blank_cells_are_skipped_like_missing_data() {
        let mut rows = fixture();
        rows.push(Record {
            region: "Київська".into(),
            subregion: Some("Бровари".into()),
            value: None,
        });
        rows.push(Record {
            region: "Київська".into(),
            subregion: None,
            value: Some(1000.0),
        });
        rows.push(Record {
            region: "Волинська".into(),
            subregion: Some("Луцьк".into()),
            value: None,
        });

        assert_eq!(
            pairs(&totals_by_region(&rows)),
            vec![
                ("Волинська", 0.0),
                ("Київська", 1150.0),
                ("Львівська", 200.0),
                ("Одеська", 150.0)
            ]
        );
        assert_eq!(
            pairs(&totals_by_subregion(&rows, "Київська")),
            vec![("Бровари", 50.0), ("Київ", 100.0)]
        );
    }

    #[test]
    fn unknown_region_has_no_groups() {
        assert!(totals_by_subregion(&fixture(), "Незвідана_область").is_empty());
        assert!(totals_by_region(&[]).is_empty());
        assert!(distinct_regions(&[]).is_empty());
    }
}

//! Grid-to-record transformation.
//!
//! The functions here are pure: they take a sheet already extracted as a
//! grid of cell strings and reshape it into the typed records of
//! [`crate::model`]. Malformed input never raises an error; every missing
//! or empty cell degrades to the `"N/A"` sentinel and a grid without data
//! rows simply produces no records.

use std::collections::BTreeSet;

use crate::dates;
use crate::model::{BaseRecord, BaseSheet, DateKey, NOT_AVAILABLE, WorkshopRecord};

/// Index of the first date-keyed column on a workshop sheet; columns 0 and 1
/// hold the offer element and KPI.
const FIRST_DATE_COLUMN: usize = 2;

/// Parses the base sheet: row 0 supplies the headers and every later row
/// becomes one record mapping each header to the cell at the same position.
pub fn parse_base_sheet(grid: &[Vec<String>]) -> BaseSheet {
    let Some((header_row, data_rows)) = grid.split_first() else {
        return BaseSheet::default();
    };

    let headers: Vec<String> = header_row.to_vec();
    let records = data_rows
        .iter()
        .map(|row| BaseRecord {
            values: headers
                .iter()
                .enumerate()
                .map(|(idx, header)| (header.clone(), cell_or_sentinel(row, idx)))
                .collect(),
        })
        .collect();

    BaseSheet { headers, records }
}

/// Parses one workshop sheet. Header cells from column 2 onward are date
/// keys; each data row yields a record with the offer/KPI prefix and one
/// entry per date key. The `label`, when supplied, is attached to every
/// record so aggregated collections can be filtered per workshop.
pub fn parse_workshop_sheet(grid: &[Vec<String>], label: Option<&str>) -> Vec<WorkshopRecord> {
    let Some((header_row, data_rows)) = grid.split_first() else {
        return Vec::new();
    };

    let date_keys: Vec<&String> = header_row.iter().skip(FIRST_DATE_COLUMN).collect();

    data_rows
        .iter()
        .map(|row| WorkshopRecord {
            offer_element: cell_or_sentinel(row, 0),
            kpi: cell_or_sentinel(row, 1),
            workshop_name: label.map(str::to_string),
            dates: date_keys
                .iter()
                .enumerate()
                .map(|(offset, key)| {
                    (
                        (*key).clone(),
                        cell_or_sentinel(row, FIRST_DATE_COLUMN + offset),
                    )
                })
                .collect(),
        })
        .collect()
}

/// Gathers the union of date keys across the given records, de-duplicated
/// and sorted ascending by numeric value regardless of insertion order.
pub fn collect_date_keys(records: &[WorkshopRecord]) -> Vec<DateKey> {
    let keys: BTreeSet<&DateKey> = records.iter().flat_map(|record| record.dates.keys()).collect();
    let mut keys: Vec<DateKey> = keys.into_iter().cloned().collect();
    keys.sort_by(|lhs, rhs| dates::compare_keys(lhs, rhs));
    keys
}

fn cell_or_sentinel(row: &[String], idx: usize) -> String {
    match row.get(idx) {
        Some(cell) if !cell.is_empty() => cell.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

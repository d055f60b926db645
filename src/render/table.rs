//! Terminal table rendering.
//!
//! Purely presentational: the functions here consume already-filtered
//! record sequences and never reach back into the filter state.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::dates::format_date_key;
use crate::filter::{WorkshopFilter, project};
use crate::model::{BaseSheet, DateKey, NOT_AVAILABLE, WorkshopRecord};

/// Renders the base sheet with its headers in original column order.
pub fn base_table(base: &BaseSheet) -> Table {
    let mut table = new_table();
    table.set_header(base.headers.iter().map(|header| header_cell(header)));
    for record in &base.records {
        table.add_row(base.headers.iter().map(|header| record.get(header)));
    }
    table
}

/// Renders the aggregated workshop view with the given filter applied: a
/// fixed Workshop / Offer Element / KPI prefix followed by one column per
/// retained date key, headed by its display form.
pub fn workshop_table(records: &[WorkshopRecord], filter: &WorkshopFilter) -> Table {
    let retained = filter.apply(records);
    let date_keys = filter.date_axis(records);
    let rows = project(&retained, &date_keys);

    let mut table = new_table();
    table.set_header(workshop_headers(&date_keys));
    for row in rows {
        let mut cells = vec![
            row.workshop_name.as_deref().unwrap_or(NOT_AVAILABLE).to_string(),
            row.offer_element,
            row.kpi,
        ];
        cells.extend(row.cells);
        table.add_row(cells);
    }
    table
}

fn workshop_headers(date_keys: &[DateKey]) -> Vec<Cell> {
    let mut headers = vec![
        header_cell("Workshop"),
        header_cell("Offer Element"),
        header_cell("KPI"),
    ];
    headers.extend(date_keys.iter().map(|key| header_cell(&format_date_key(key))));
    headers
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

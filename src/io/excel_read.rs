use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::layout::SheetLayout;
use crate::model::NormalizedWorkbook;
use crate::normalize::{parse_base_sheet, parse_workshop_sheet};

/// Lists the sheet names of a workbook in order, without normalizing any of
/// its contents.
pub fn read_sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook: Xlsx<_> = open_workbook(path)?;
    Ok(workbook.sheet_names().to_vec())
}

/// Reads a tracker workbook and normalizes it according to the given layout:
/// one pass over the base sheet plus one over each bound workshop sheet,
/// aggregated into a single labelled collection.
///
/// A bound index with no sheet behind it contributes zero records; the clamp
/// is deliberate so a workbook shipped with fewer workshop tabs than the
/// roster expects still loads.
#[instrument(level = "info", skip_all, fields(input = %path.display()))]
pub fn load_workbook(path: &Path, layout: &SheetLayout) -> Result<NormalizedWorkbook> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let base_grid = sheet_grid(&mut workbook, &sheet_names, layout.base_index())?;
    let base = parse_base_sheet(&base_grid);
    info!(record_count = base.records.len(), "base sheet normalized");

    let mut workshops = Vec::new();
    for binding in layout.workshop_bindings() {
        let grid = sheet_grid(&mut workbook, &sheet_names, binding.index)?;
        let records = parse_workshop_sheet(&grid, binding.label.as_deref());
        debug!(
            sheet_index = binding.index,
            label = binding.label.as_deref(),
            record_count = records.len(),
            "workshop sheet normalized"
        );
        workshops.extend(records);
    }
    info!(record_count = workshops.len(), "workshop records aggregated");

    Ok(NormalizedWorkbook { base, workshops })
}

/// Extracts the sheet at `index` as a grid of cell strings, empty string for
/// empty cells. A missing sheet yields an empty grid.
fn sheet_grid<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    sheet_names: &[String],
    index: usize,
) -> Result<Vec<Vec<String>>> {
    let Some(name) = sheet_names.get(index) else {
        warn!(sheet_index = index, "no sheet at bound index, contributing zero records");
        return Ok(Vec::new());
    };
    let Some(range_result) = workbook.worksheet_range(name) else {
        warn!(sheet = name.as_str(), "sheet vanished between listing and read");
        return Ok(Vec::new());
    };
    let range = range_result?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell_to_string(Some(cell))).collect())
        .collect())
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

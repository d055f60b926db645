use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel stored for every cell the source workbook left empty or never
/// supplied. Downstream consumers render it verbatim.
pub const NOT_AVAILABLE: &str = "N/A";

/// A date key is the string form of an Excel date serial number. It is used
/// both as a record field name and as a sortable, filterable axis; ordering
/// is always by numeric value, never lexicographic.
pub type DateKey = String;

/// One row of the base sheet: header → cell value. The header order is not
/// carried here; it lives once on the owning [`BaseSheet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRecord {
    /// Column header → cell value, `"N/A"` where the source cell was empty.
    pub values: BTreeMap<String, String>,
}

impl BaseRecord {
    /// Looks up the value recorded under the given header, degrading to the
    /// `"N/A"` sentinel for headers this record never saw.
    pub fn get(&self, header: &str) -> &str {
        self.values.get(header).map_or(NOT_AVAILABLE, String::as_str)
    }
}

/// The first sheet of the workbook, normalized into homogeneous records
/// keyed by the header set read once from row 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSheet {
    /// Column headers in the order they appear in row 1.
    pub headers: Vec<String>,
    /// One record per non-header row.
    pub records: Vec<BaseRecord>,
}

/// One row of a workshop sheet: a fixed offer/KPI prefix plus an explicit
/// map from date key to cell value covering the origin sheet's date columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopRecord {
    /// Cell value from column 1 of the origin sheet.
    pub offer_element: String,
    /// Cell value from column 2, `"N/A"` when empty.
    pub kpi: String,
    /// Label of the originating sheet, present when records from several
    /// sheets are aggregated into one collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workshop_name: Option<String>,
    /// Date key → cell value, one entry per header column from index 2
    /// onward. Records aggregated from different sheets need not share the
    /// same key set. The map iterates keys lexicographically, not in header
    /// order; display axes re-sort numerically via
    /// [`collect_date_keys`](crate::normalize::collect_date_keys).
    pub dates: BTreeMap<DateKey, String>,
}

impl WorkshopRecord {
    /// Returns the value recorded under the given date key, degrading to
    /// `"N/A"` when the origin sheet had no such column.
    pub fn date_value(&self, key: &str) -> &str {
        self.dates.get(key).map_or(NOT_AVAILABLE, String::as_str)
    }

    /// The workshop label, or `"N/A"` for records parsed without one.
    pub fn workshop(&self) -> &str {
        self.workshop_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// The full normalized output of one workbook load. A new load replaces the
/// previous collection wholesale; there is no merging across uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedWorkbook {
    /// Records from the base sheet.
    pub base: BaseSheet,
    /// Records aggregated from every bound workshop sheet, each tagged with
    /// its workshop label.
    pub workshops: Vec<WorkshopRecord>,
}

//! Pure filtering over normalized workshop records.
//!
//! Filter selections are owned by the caller and passed in explicitly; the
//! functions here never hold state and can be recomputed on every
//! view-state change. An empty categorical selection means "no restriction",
//! not "exclude all".

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::model::{DateKey, WorkshopRecord};
use crate::normalize::collect_date_keys;

/// The categorical fields a workshop record can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryField {
    OfferElement,
    Kpi,
    WorkshopName,
}

impl CategoryField {
    fn value_of<'a>(self, record: &'a WorkshopRecord) -> &'a str {
        match self {
            CategoryField::OfferElement => &record.offer_element,
            CategoryField::Kpi => &record.kpi,
            CategoryField::WorkshopName => record.workshop(),
        }
    }
}

/// Retains the records whose `field` value is a member of `selected`. An
/// empty selection is the identity.
pub fn filter_by_category<'a>(
    records: impl IntoIterator<Item = &'a WorkshopRecord>,
    field: CategoryField,
    selected: &[String],
) -> Vec<&'a WorkshopRecord> {
    records
        .into_iter()
        .filter(|record| {
            selected.is_empty() || selected.iter().any(|value| value == field.value_of(record))
        })
        .collect()
}

/// Retains the date keys whose numeric value lies in the closed interval
/// `[start, end]`. Either bound unset is the identity. Bounds are not
/// reordered: a reversed interval yields an empty result.
pub fn filter_by_date_range(
    keys: &[DateKey],
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<DateKey> {
    let (Some(start), Some(end)) = (start, end) else {
        return keys.to_vec();
    };
    let (Some(start), Some(end)) = (dates::serial_value(start), dates::serial_value(end)) else {
        return keys.to_vec();
    };

    keys.iter()
        .filter(|key| {
            dates::serial_value(key.as_str())
                .is_some_and(|serial| serial >= start && serial <= end)
        })
        .cloned()
        .collect()
}

/// Enumerates the distinct values of `field` across the records, in first
/// appearance order. Backs selection menus and their "select all" toggle.
pub fn distinct_values(records: &[WorkshopRecord], field: CategoryField) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = field.value_of(record);
        if !values.iter().any(|seen| seen == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Caller-owned filter configuration for the aggregated workshop view:
/// categorical selections plus an optional date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopFilter {
    /// Workshop labels to retain; empty means all.
    pub workshops: Vec<String>,
    /// Offer elements to retain; empty means all.
    pub offer_elements: Vec<String>,
    /// Inclusive lower date-key bound.
    pub start: Option<DateKey>,
    /// Inclusive upper date-key bound.
    pub end: Option<DateKey>,
}

impl WorkshopFilter {
    /// Applies both categorical selections, returning the surviving records
    /// in their original order.
    pub fn apply<'a>(&self, records: &'a [WorkshopRecord]) -> Vec<&'a WorkshopRecord> {
        let by_workshop =
            filter_by_category(records, CategoryField::WorkshopName, &self.workshops);
        filter_by_category(by_workshop, CategoryField::OfferElement, &self.offer_elements)
    }

    /// The date-key axis for the filtered view: the union of keys across all
    /// records, restricted to the configured range.
    pub fn date_axis(&self, records: &[WorkshopRecord]) -> Vec<DateKey> {
        let keys = collect_date_keys(records);
        filter_by_date_range(&keys, self.start.as_deref(), self.end.as_deref())
    }
}

/// One display row: a record projected onto a fixed date-key axis, with
/// `"N/A"` for every axis key the record's origin sheet never carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workshop_name: Option<String>,
    pub offer_element: String,
    pub kpi: String,
    /// Cell values aligned positionally with the axis passed to [`project`].
    pub cells: Vec<String>,
}

/// Projects the records onto the given date-key axis.
pub fn project(records: &[&WorkshopRecord], date_keys: &[DateKey]) -> Vec<ProjectedRow> {
    records
        .iter()
        .map(|record| ProjectedRow {
            workshop_name: record.workshop_name.clone(),
            offer_element: record.offer_element.clone(),
            kpi: record.kpi.clone(),
            cells: date_keys
                .iter()
                .map(|key| record.date_value(key).to_string())
                .collect(),
        })
        .collect()
}

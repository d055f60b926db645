//! Explicit sheet-role configuration.
//!
//! The tracker workbooks bind meaning to sheet *positions*: the first sheet
//! is the base sheet and every later sheet belongs to one workshop. Rather
//! than scattering that convention through the parsing logic, a
//! [`SheetLayout`] enumerates the bindings up front and the loader consumes
//! it verbatim.

use serde::{Deserialize, Serialize};

/// The twelve workshops of the standard tracker roster, matched positionally
/// to sheet indices 1 through 12.
pub const STANDARD_WORKSHOPS: [&str; 12] = [
    "Trinity Auto",
    "Lucky Hi-Tech",
    "Car Tech Services",
    "Panchang Auto",
    "EZ Drive",
    "Marvel Automobile",
    "Round the clock",
    "V Auto Care",
    "Fidato",
    "NCR Wheels",
    "RK Big Toy",
    "SNA Automobile",
];

/// Role a sheet plays in the workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetRole {
    /// The base sheet, parsed with headers taken verbatim from row 1.
    Base,
    /// A workshop sheet, parsed into offer/KPI records with date columns.
    Workshop,
}

/// Binds one sheet index to its role and, for workshop sheets, the label
/// attached to every record it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetBinding {
    /// Zero-based index into the workbook's sheet order.
    pub index: usize,
    /// Role of the sheet at that index.
    pub role: SheetRole,
    /// Workshop label; `None` for the base sheet.
    pub label: Option<String>,
}

/// The full sheet-to-role mapping for one workbook load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    bindings: Vec<SheetBinding>,
}

impl SheetLayout {
    /// Layout for the standard roster: sheet 0 as the base sheet followed by
    /// the twelve workshops of [`STANDARD_WORKSHOPS`].
    pub fn standard() -> Self {
        Self::from_labels(STANDARD_WORKSHOPS.iter().map(|label| (*label).to_string()))
    }

    /// Layout binding sheet 0 as the base sheet and sheets 1..=N to the
    /// given workshop labels in order.
    pub fn from_labels(labels: impl IntoIterator<Item = String>) -> Self {
        let mut bindings = vec![SheetBinding {
            index: 0,
            role: SheetRole::Base,
            label: None,
        }];
        for (offset, label) in labels.into_iter().enumerate() {
            bindings.push(SheetBinding {
                index: offset + 1,
                role: SheetRole::Workshop,
                label: Some(label),
            });
        }
        Self { bindings }
    }

    /// Derives a layout from the workbook's own sheet names: the first sheet
    /// becomes the base sheet and every later sheet a workshop labelled by
    /// its name. Used when no explicit roster is supplied.
    pub fn from_sheet_names(names: &[String]) -> Self {
        Self::from_labels(names.iter().skip(1).cloned())
    }

    /// Picks the layout for a workbook from its sheet names: the standard
    /// roster when the workbook actually carries it, otherwise bindings
    /// derived from the names themselves.
    pub fn detect(names: &[String]) -> Self {
        if matches_standard_roster(names) {
            Self::standard()
        } else {
            Self::from_sheet_names(names)
        }
    }

    /// All bindings in sheet order.
    pub fn bindings(&self) -> &[SheetBinding] {
        &self.bindings
    }

    /// Index of the base sheet.
    pub fn base_index(&self) -> usize {
        self.bindings
            .iter()
            .find(|binding| binding.role == SheetRole::Base)
            .map_or(0, |binding| binding.index)
    }

    /// The workshop bindings in sheet order.
    pub fn workshop_bindings(&self) -> impl Iterator<Item = &SheetBinding> {
        self.bindings
            .iter()
            .filter(|binding| binding.role == SheetRole::Workshop)
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// The roster only wins when there are enough sheets and every workshop
/// sheet name either equals its roster label or is an anonymous `SheetN`
/// default. A meaningfully named sheet that disagrees with the roster keeps
/// its own name as the label rather than being silently relabelled.
fn matches_standard_roster(names: &[String]) -> bool {
    if names.len() <= STANDARD_WORKSHOPS.len() {
        return false;
    }
    names
        .iter()
        .skip(1)
        .zip(STANDARD_WORKSHOPS)
        .all(|(name, label)| name == label || is_generic_sheet_name(name))
}

fn is_generic_sheet_name(name: &str) -> bool {
    name.strip_prefix("Sheet")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit()))
}

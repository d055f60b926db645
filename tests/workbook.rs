use std::path::Path;

use rust_xlsxwriter::Workbook;
use tempfile::tempdir;
use workshop_tracker::filter::WorkshopFilter;
use workshop_tracker::io::excel_read;
use workshop_tracker::layout::{STANDARD_WORKSHOPS, SheetLayout, SheetRole};
use workshop_tracker::normalize::collect_date_keys;

/// Builds a small tracker workbook: one base sheet plus two workshop sheets
/// whose date columns only partially overlap.
fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();

    let base = workbook.add_worksheet();
    base.set_name("Base Sheet").unwrap();
    base.write_string(0, 0, "Name").unwrap();
    base.write_string(0, 1, "Status").unwrap();
    base.write_string(1, 0, "Alpha").unwrap();
    base.write_string(1, 1, "Yes").unwrap();
    base.write_string(2, 0, "Beta").unwrap();
    base.write_string(2, 1, "").unwrap();

    let north = workbook.add_worksheet();
    north.set_name("North").unwrap();
    north.write_string(0, 0, "Offer").unwrap();
    north.write_string(0, 1, "KPI").unwrap();
    north.write_number(0, 2, 45000.0).unwrap();
    north.write_number(0, 3, 45001.0).unwrap();
    north.write_string(1, 0, "OfferA").unwrap();
    north.write_string(1, 1, "K1").unwrap();
    north.write_string(1, 2, "10").unwrap();
    north.write_string(1, 3, "11").unwrap();

    let south = workbook.add_worksheet();
    south.set_name("South").unwrap();
    south.write_string(0, 0, "Offer").unwrap();
    south.write_string(0, 1, "KPI").unwrap();
    south.write_number(0, 2, 45001.0).unwrap();
    south.write_number(0, 3, 45002.0).unwrap();
    south.write_string(1, 0, "OfferB").unwrap();
    south.write_string(1, 2, "20").unwrap();
    south.write_string(1, 3, "21").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn loads_and_normalizes_a_tracker_workbook() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.xlsx");
    write_fixture(&path);

    let layout = SheetLayout::from_labels(["North".to_string(), "South".to_string()]);
    let workbook = excel_read::load_workbook(&path, &layout).unwrap();

    assert_eq!(workbook.base.headers, vec!["Name", "Status"]);
    assert_eq!(workbook.base.records.len(), 2);
    assert_eq!(workbook.base.records[0].get("Name"), "Alpha");
    assert_eq!(workbook.base.records[1].get("Status"), "N/A");

    assert_eq!(workbook.workshops.len(), 2);
    assert_eq!(workbook.workshops[0].workshop(), "North");
    assert_eq!(workbook.workshops[0].offer_element, "OfferA");
    assert_eq!(workbook.workshops[0].date_value("45000"), "10");
    assert_eq!(workbook.workshops[1].workshop(), "South");
    // KPI cell was never written on the South sheet.
    assert_eq!(workbook.workshops[1].kpi, "N/A");

    assert_eq!(
        collect_date_keys(&workbook.workshops),
        vec!["45000", "45001", "45002"]
    );
}

#[test]
fn missing_bound_sheets_contribute_zero_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.xlsx");
    write_fixture(&path);

    // The standard roster binds twelve workshop sheets; the fixture only
    // carries two. The surplus bindings clamp to nothing instead of failing.
    let workbook = excel_read::load_workbook(&path, &SheetLayout::standard()).unwrap();
    assert_eq!(workbook.workshops.len(), 2);
    assert_eq!(
        workbook.workshops[0].workshop(),
        STANDARD_WORKSHOPS[0],
        "positional roster labels win over sheet names"
    );
}

#[test]
fn layout_derived_from_sheet_names_labels_by_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.xlsx");
    write_fixture(&path);

    let names = excel_read::read_sheet_names(&path).unwrap();
    assert_eq!(names, vec!["Base Sheet", "North", "South"]);

    let layout = SheetLayout::from_sheet_names(&names);
    assert_eq!(layout.bindings().len(), 3);
    assert_eq!(layout.bindings()[0].role, SheetRole::Base);
    assert_eq!(layout.bindings()[2].label.as_deref(), Some("South"));

    let workbook = excel_read::load_workbook(&path, &layout).unwrap();
    assert_eq!(workbook.workshops[1].workshop(), "South");
}

#[test]
fn detected_layout_prefers_the_roster_only_when_the_workbook_carries_it() {
    // Anonymous default sheet names carry no labels of their own, so the
    // positional roster applies.
    let mut generic = vec!["Base Sheet".to_string()];
    generic.extend((2..=13).map(|n| format!("Sheet{n}")));
    let layout = SheetLayout::detect(&generic);
    assert_eq!(
        layout.bindings()[1].label.as_deref(),
        Some(STANDARD_WORKSHOPS[0])
    );

    // Meaningful names that disagree with the roster keep their own labels
    // instead of being silently relabelled.
    let mut named = vec!["Base Sheet".to_string()];
    named.extend((1..=13).map(|n| format!("Garage {n}")));
    let layout = SheetLayout::detect(&named);
    assert_eq!(layout.bindings()[1].label.as_deref(), Some("Garage 1"));
    assert_eq!(layout.bindings().len(), 14);

    // Fewer sheets than the roster expects: labels come from the names.
    let short = vec!["Base Sheet".to_string(), "North".to_string()];
    let layout = SheetLayout::detect(&short);
    assert_eq!(layout.bindings()[1].label.as_deref(), Some("North"));
}

#[test]
fn filters_apply_to_loaded_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker.xlsx");
    write_fixture(&path);

    let layout = SheetLayout::from_labels(["North".to_string(), "South".to_string()]);
    let workbook = excel_read::load_workbook(&path, &layout).unwrap();

    let filter = WorkshopFilter {
        workshops: vec!["North".to_string()],
        offer_elements: Vec::new(),
        start: Some("45000".to_string()),
        end: Some("45001".to_string()),
    };
    let retained = filter.apply(&workbook.workshops);
    assert_eq!(retained.len(), 1);
    assert_eq!(retained[0].workshop(), "North");
    assert_eq!(filter.date_axis(&workbook.workshops), vec!["45000", "45001"]);
}

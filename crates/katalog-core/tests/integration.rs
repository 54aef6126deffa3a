//! Integration tests for the extract → normalize → render pipeline.
//!
//! Uses an in-memory MockGrid instead of a real workbook, so these tests
//! exercise the full pipeline without any xlsx fixture.

use katalog_core::build_catalog_from_grid;
use katalog_core::extraction::blocks::extract_blocks;
use katalog_core::extraction::SheetGrid;
use katalog_core::model::Field;
use katalog_core::render::{render_entry, render_sections, wrap_page, RenderOptions};

struct MockGrid {
    rows: Vec<Vec<&'static str>>,
}

impl SheetGrid for MockGrid {
    fn cell(&self, row: u32, col: u32) -> String {
        self.rows
            .get(row as usize - 1)
            .and_then(|r| r.get(col as usize - 1))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    fn max_row(&self) -> u32 {
        self.rows.len() as u32
    }
}

fn te01_sheet() -> MockGrid {
    // Header at row 1, description at row 2, label band, table at rows 4-5.
    MockGrid {
        rows: vec![
            vec!["TE-01"],
            vec!["Temperature sensor"],
            vec!["Модель", "Диаметр", "Класс точности"],
            vec![
                "М-1",
                "d.50",
                "к.т. 1,5",
                "IP40",
                "М20х1,5",
                "УХЛ1",
                "Виброустойчив (группа V1)1",
                "0-10 кПа;\n0-100 кПа;",
                "-40...+60 °С",
                "-50...+60 °С",
            ],
            vec![
                "М-2",
                "d.63",
                "", // inherits the accuracy class above
                "IP40",
                "М20х1,5",
                "УХЛ1",
                "Виброустойчив (группа V1)1",
                "0-10 кПа;\n0-100 кПа;",
                "-40...+60 °С",
                "-50...+60 °С",
            ],
        ],
    }
}

#[test]
fn te01_extraction_yields_one_block_with_two_rows() {
    let blocks = extract_blocks(&te01_sheet());

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].device, "TE-01");
    assert_eq!(blocks[0].description, "Temperature sensor");
    assert_eq!(blocks[0].rows.len(), 2);
    // Carry-forward: the blank accuracy cell inherited "к.т. 1,5".
    assert!(blocks[0].rows[1].contains("к.т. 1,5"));
}

#[test]
fn te01_renders_merged_accuracy_and_distinct_diameters() {
    let entries = build_catalog_from_grid(&te01_sheet()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].data.len(), 2);

    let html = render_entry(&entries[0], &RenderOptions::default());

    // One merged accuracy-class cell spanning both rows; the other shared
    // columns (pressure, thread, IP, climate, vibro) merge the same way.
    assert_eq!(html.matches("rowspan=\"2\"").count(), 6);
    assert!(html.contains("<td rowspan=\"2\">1,5</td>"));
    // Two distinct diameter cells.
    assert!(html.contains("<td>50 мм</td>"));
    assert!(html.contains("<td>63 мм</td>"));
}

#[test]
fn te01_field_normalization_end_to_end() {
    let entries = build_catalog_from_grid(&te01_sheet()).unwrap();
    let row = &entries[0].data[0];

    assert_eq!(row.model.as_deref(), Some("М-1"));
    assert_eq!(row.diameter.as_deref(), Some("50 мм"));
    assert_eq!(row.accuracy_class.as_deref(), Some("1,5"));
    assert_eq!(row.ingress_protection.as_deref(), Some("IP40"));
    assert_eq!(row.thread.as_deref(), Some("М20х1,5"));
    assert_eq!(row.climate.as_deref(), Some("УХЛ1"));
    assert_eq!(
        row.vibro_protection.as_deref(),
        Some("Виброустойчив <span class='optional'>(группа V1)¹</span>")
    );
    assert_eq!(
        row.pressure_ranges.as_deref(),
        Some(&["0-10 кПа;".to_string(), "0-100 кПа;".to_string()][..])
    );

    // Temperatures hoisted to block params, cleared from the rows.
    assert_eq!(entries[0].params.measured.as_deref(), Some("-40...+60 °С."));
    assert_eq!(entries[0].params.ambient.as_deref(), Some("-50...+60 °С."));
    assert!(row.temp_measured.is_none());
}

#[test]
fn made_to_order_blocks_never_reach_the_page() {
    let grid = MockGrid {
        rows: vec![
            vec!["МП-100 по заказу"],
            vec!["desc"],
            vec![""],
            vec![
                "М-1", "d.50", "-", "-", "-", "-", "-", "-", "-", "-",
            ],
            vec![""],
            vec![""],
            vec!["МП-200"],
            vec!["desc"],
            vec![""],
            vec![
                "М-2", "d.63", "-", "-", "-", "-", "-", "-", "-", "-",
            ],
        ],
    };

    let entries = build_catalog_from_grid(&grid).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].device, "МП-200");

    let html = render_sections(&entries, &RenderOptions::default());
    assert!(!html.contains("МП-100"));
}

#[test]
fn short_row_aborts_without_partial_catalog() {
    // The extractor always emits 10 fields, so a short row can only come in
    // through the intermediate artifact (e.g. a hand-edited block file).
    let blocks = vec![katalog_core::model::RawBlock {
        device: "МП-100".into(),
        description: "desc".into(),
        rows: vec![
            "\"М-1\"\t\"d.50\"\t\"к.т. 1,5\"\t\"IP40\"\t\"М20х1,5\"\t\"УХЛ1\"\t\"V1\"".into(),
        ],
    }];

    let err = katalog_core::parsing::build_entries(&blocks).unwrap_err();
    assert!(matches!(
        err,
        katalog_core::error::KatalogError::RowTooShort { found: 7, .. }
    ));
}

#[test]
fn inferred_columns_drop_fields_absent_everywhere() {
    let grid = MockGrid {
        rows: vec![
            vec!["МП-100"],
            vec!["desc"],
            vec![""],
            vec![
                "М-1", "нет", "-", "-", "-", "-", "-", "-", "-", "-",
            ],
        ],
    };

    let entries = build_catalog_from_grid(&grid).unwrap();
    let html = render_entry(&entries[0], &RenderOptions::default());
    assert!(html.contains("<th>Модель</th>"));
    // No diameter matched anywhere, so the column disappears.
    assert!(!html.contains(&format!("<th>{}</th>", Field::Diameter.label())));
}

#[test]
fn page_wrap_produces_full_document() {
    let entries = build_catalog_from_grid(&te01_sheet()).unwrap();
    let body = render_sections(&entries, &RenderOptions::default());
    let page = wrap_page(
        "<html><head><title>{{ title }}</title></head><body>{{ content }}</body></html>",
        "Каталог приборов",
        &body,
    );

    assert!(page.starts_with("<html>"));
    assert!(page.contains("<title>Каталог приборов</title>"));
    assert!(page.contains("<section class=\"item\">"));
}

use crate::model::{CellValue, Field, ParsedRow};

/// Keep the canonical columns that occur in at least one row, preserving
/// canonical order.
pub fn infer_columns(rows: &[ParsedRow]) -> Vec<Field> {
    Field::CANONICAL
        .iter()
        .copied()
        .filter(|f| rows.iter().any(|r| r.has(*f)))
        .collect()
}

/// Per-column rowspan lengths.
///
/// A value > 1 marks the first row of a vertically merged run, 0 marks rows
/// absorbed into the span above, 1 a standalone cell. Runs are maximal
/// sequences of adjacent rows with an identical value in this column only
/// (identical absence included); equality is exact, markup and all.
pub fn rowspans(rows: &[ParsedRow], field: Field) -> Vec<usize> {
    let n = rows.len();
    let mut spans = vec![1usize; n];

    let mut i = 0;
    while i < n {
        let head = rows[i].get(field);
        let mut j = i + 1;
        while j < n && rows[j].get(field) == head {
            spans[i] += 1;
            spans[j] = 0;
            j += 1;
        }
        i = j;
    }

    spans
}

/// Render the data table with computed cell merging.
pub fn render_table(rows: &[ParsedRow], columns: &[Field]) -> String {
    if rows.is_empty() {
        return "<!-- empty table -->".to_string();
    }

    let span_map: Vec<Vec<usize>> = columns.iter().map(|&c| rowspans(rows, c)).collect();

    let mut html = vec!["<table>".to_string(), "  <thead>".to_string()];
    let head: String = columns
        .iter()
        .map(|c| format!("<th>{}</th>", c.label()))
        .collect();
    html.push(format!("    <tr>{head}</tr>"));
    html.push("  </thead>".to_string());
    html.push("  <tbody>".to_string());

    for (row_idx, row) in rows.iter().enumerate() {
        html.push("    <tr>".to_string());
        for (col_idx, &col) in columns.iter().enumerate() {
            let span = span_map[col_idx][row_idx];
            if span == 0 {
                continue;
            }
            let span_attr = if span > 1 {
                format!(" rowspan=\"{span}\"")
            } else {
                String::new()
            };
            // Presentation hook for the print stylesheet; no merge effect.
            let class_attr = if col_idx == 0 {
                " class=\"br_column\""
            } else {
                ""
            };
            html.push(format!(
                "      <td{span_attr}{class_attr}>{}</td>",
                format_cell(row.get(col))
            ));
        }
        html.push("    </tr>".to_string());
    }

    html.push("  </tbody>".to_string());
    html.push("</table>".to_string());
    html.join("\n")
}

/// List values stack vertically; scalar values are trusted pre-formatted
/// markup and render verbatim. Missing cells render empty.
fn format_cell(value: Option<CellValue<'_>>) -> String {
    match value {
        Some(CellValue::Text(s)) => s.to_string(),
        Some(CellValue::List(items)) => {
            let inner: String = items.iter().map(|v| format!("<div>{v}</div>")).collect();
            format!("<div class=\"cell-list\">{inner}</div>")
        }
        None => String::new(),
    }
}

use crate::extraction::{SheetGrid, MAX_COLS, TABLE_OFFSET};
use crate::model::RawBlock;

/// Scan a sheet top to bottom and split it into device blocks.
///
/// A non-blank cell in column 1 opens a block: that cell is the device
/// name, the cell one row below is the description, and the table body
/// starts [`TABLE_OFFSET`] rows below the header. The body runs until the
/// first fully blank row (or the end of the sheet); any number of blank
/// separator rows may follow before the next header.
///
/// A header with no table rows underneath still yields a block with an
/// empty `rows` list.
pub fn extract_blocks(sheet: &dyn SheetGrid) -> Vec<RawBlock> {
    let mut blocks = Vec::new();
    let max_row = sheet.max_row();

    let mut r = 1u32;
    while r <= max_row {
        let device = sheet.cell(r, 1);
        if device.is_empty() {
            // Not in a table run and no header here, move on.
            r += 1;
            continue;
        }

        let description = if r + 1 <= max_row {
            sheet.cell(r + 1, 1)
        } else {
            String::new()
        };

        let mut rows = Vec::new();
        let mut cur = r + TABLE_OFFSET;
        // Last emitted values per column, for carry-forward.
        let mut prev: Vec<String> = vec![String::new(); MAX_COLS as usize];

        while cur <= max_row && !row_is_blank(sheet, cur) {
            let mut vals: Vec<String> = Vec::with_capacity(MAX_COLS as usize);
            for c in 1..=MAX_COLS {
                let own = sheet.cell(cur, c);
                let above = &prev[(c - 1) as usize];
                if own.is_empty() && !above.is_empty() {
                    vals.push(above.clone());
                } else {
                    vals.push(own);
                }
            }
            rows.push(join_row(&vals));
            // Snapshot the row as emitted, so carry-forward chains across
            // several consecutive blank cells in the same column.
            prev = vals;
            cur += 1;
        }

        blocks.push(RawBlock {
            device,
            description,
            rows,
        });

        // Separator gaps between blocks vary in width; swallow them all.
        while cur <= max_row && row_is_blank(sheet, cur) {
            cur += 1;
        }
        r = cur;
    }

    blocks
}

/// A row is blank when all of its first [`MAX_COLS`] cells are empty.
fn row_is_blank(sheet: &dyn SheetGrid, row: u32) -> bool {
    (1..=MAX_COLS).all(|c| sheet.cell(row, c).is_empty())
}

/// Encode one physical row: escape embedded quotes, wrap every cell in
/// double quotes and join with single tabs. [`crate::parsing::decode_row`]
/// is the exact inverse.
pub fn join_row(vals: &[String]) -> String {
    let quoted: Vec<String> = vals
        .iter()
        .map(|v| format!("\"{}\"", v.replace('"', "\\\"")))
        .collect();
    quoted.join("\t")
}

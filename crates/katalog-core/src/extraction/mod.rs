pub mod blocks;
pub mod xlsx;

/// Widest significant column of the source layout. Row blankness checks and
/// the raw row encoding both cover exactly this many columns.
pub const MAX_COLS: u32 = 10;

/// Table rows start this many rows below a block's header row; the two rows
/// in between are the column-label band of the source layout. This is a
/// structural assumption of the datasheet format, not something detected.
pub const TABLE_OFFSET: u32 = 3;

/// Read access to a spreadsheet as a 1-based grid of trimmed cell text.
///
/// Implemented by the calamine-backed [`xlsx::XlsxGrid`] and by in-memory
/// grids in tests.
pub trait SheetGrid {
    /// Trimmed cell text; empty string for blank or out-of-range cells.
    fn cell(&self, row: u32, col: u32) -> String;

    /// Index of the last row that may contain data.
    fn max_row(&self) -> u32;
}

pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod render;

use error::KatalogError;
use extraction::blocks::extract_blocks;
use extraction::xlsx::open_xlsx;
use extraction::SheetGrid;
use model::{CatalogEntry, RawBlock};

/// Scan a workbook into raw device blocks (extraction stage only).
pub fn extract_xlsx(bytes: &[u8], sheet: Option<&str>) -> Result<Vec<RawBlock>, KatalogError> {
    let grid = open_xlsx(bytes, sheet)?;
    Ok(extract_blocks(&grid))
}

/// Main API entry point: workbook bytes to the normalized catalog.
///
/// Runs the extractor and the field normalizer in sequence. A single
/// undecodable table row aborts the whole conversion; no partial catalog
/// is ever returned.
pub fn build_catalog(bytes: &[u8], sheet: Option<&str>) -> Result<Vec<CatalogEntry>, KatalogError> {
    let blocks = extract_xlsx(bytes, sheet)?;
    parsing::build_entries(&blocks)
}

/// Catalog from any grid backend. The xlsx path goes through
/// [`build_catalog`]; this seam exists for alternate sources and tests.
pub fn build_catalog_from_grid(grid: &dyn SheetGrid) -> Result<Vec<CatalogEntry>, KatalogError> {
    parsing::build_entries(&extract_blocks(grid))
}

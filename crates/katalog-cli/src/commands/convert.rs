use std::path::PathBuf;

use katalog_core::error::KatalogError;

use crate::commands::render::write_page;

pub fn run(
    input_file: PathBuf,
    out: PathBuf,
    sheet: Option<&str>,
    title: &str,
    image_prefix: Option<String>,
    template: Option<PathBuf>,
) -> Result<(), KatalogError> {
    let bytes = std::fs::read(&input_file)?;
    let catalog = katalog_core::build_catalog(&bytes, sheet)?;
    write_page(&catalog, &out, title, image_prefix, template)
}

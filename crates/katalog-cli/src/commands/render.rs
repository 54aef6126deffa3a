use std::path::{Path, PathBuf};

use katalog_core::error::KatalogError;
use katalog_core::model::CatalogEntry;
use katalog_core::render::{render_sections, wrap_page, RenderOptions};

/// Fallback page template shipped with the binary.
const DEFAULT_TEMPLATE: &str = include_str!("../../assets/template.html");

pub fn run(
    input_file: PathBuf,
    out: PathBuf,
    title: &str,
    image_prefix: Option<String>,
    template: Option<PathBuf>,
) -> Result<(), KatalogError> {
    let json = std::fs::read_to_string(&input_file)?;
    let catalog: Vec<CatalogEntry> = serde_json::from_str(&json)?;
    write_page(&catalog, &out, title, image_prefix, template)
}

/// Render a catalog to a wrapped HTML page on disk. Shared with `convert`.
pub fn write_page(
    catalog: &[CatalogEntry],
    out: &Path,
    title: &str,
    image_prefix: Option<String>,
    template: Option<PathBuf>,
) -> Result<(), KatalogError> {
    let mut opts = RenderOptions::default();
    if let Some(prefix) = image_prefix {
        opts.image_prefix = prefix;
    }

    let body = render_sections(catalog, &opts);
    let template_str = match template {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_TEMPLATE.to_string(),
    };
    let page = wrap_page(&template_str, title, &body);

    std::fs::write(out, page)?;
    eprintln!(
        "Rendered {} device block(s) to {}",
        catalog.len(),
        out.display()
    );
    Ok(())
}

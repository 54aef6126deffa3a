pub mod table;

use crate::model::{CatalogEntry, Field};

/// Default hosting location for device photographs; prepended to every
/// image filename from the datasheet.
pub const DEFAULT_IMAGE_PREFIX: &str =
    "https://raw.githubusercontent.com/FFF2115/ga56d7806abs7d/refs/heads/main/";

/// Rendering knobs. `Default` reproduces the print catalog.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// URL prefix for the image gallery.
    pub image_prefix: String,
    /// Explicit column order; `None` infers columns per entry.
    pub columns: Option<Vec<Field>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            columns: None,
        }
    }
}

/// Render every catalog entry as a markup fragment (header block + table),
/// concatenated in block order.
pub fn render_sections(entries: &[CatalogEntry], opts: &RenderOptions) -> String {
    if entries.is_empty() {
        return "<p>Нет данных.</p>".to_string();
    }

    let pieces: Vec<String> = entries.iter().map(|e| render_entry(e, opts)).collect();
    pieces.join("\n\n")
}

/// One catalog entry: header section plus data table, wrapped in a page
/// section the downstream paginator breaks on.
pub fn render_entry(entry: &CatalogEntry, opts: &RenderOptions) -> String {
    let columns = match &opts.columns {
        Some(cols) => cols.clone(),
        None => table::infer_columns(&entry.data),
    };

    let header = render_header(entry, &opts.image_prefix);
    let data_table = table::render_table(&entry.data, &columns);

    format!(
        "<div class=\"page-content\"><section class=\"item\">\n{header}\n\n{data_table}\n</section></div>"
    )
}

fn render_header(entry: &CatalogEntry, image_prefix: &str) -> String {
    let mut html = Vec::new();
    html.push("<div class=\"header-section\">".to_string());
    html.push("  <div class=\"header-text\">".to_string());

    html.push("    <div class=\"param-block\">".to_string());
    html.push(format!(
        "      <div class=\"header-title\">{}</div>",
        entry.device
    ));
    if !entry.description.is_empty() {
        html.push(format!("      <div>{}</div>", entry.description));
    }
    html.push("    </div>".to_string());

    let params = [
        ("Диапазон температур измеряемой среды", &entry.params.measured),
        ("Диапазон температур окружающей среды", &entry.params.ambient),
    ];
    if params.iter().any(|(_, v)| v.is_some()) {
        html.push("    <div class=\"param-block\">".to_string());
        for (key, value) in params {
            if let Some(value) = value {
                html.push(format!("      <div><span>{key}:</span> {value}</div>"));
            }
        }
        html.push("    </div>".to_string());
    }

    html.push("  </div>".to_string());

    if !entry.images.is_empty() {
        html.push("  <div class=\"header-images\">".to_string());
        html.push("    <div class=\"images-label\">образец прибора</div>".to_string());
        html.push("    <div class=\"images-wrapper\">".to_string());
        for img in &entry.images {
            html.push(format!("      <img src=\"{image_prefix}{img}\">"));
        }
        html.push("    </div>".to_string());
        html.push("  </div>".to_string());
    }

    html.push("</div>".to_string());
    html.join("\n")
}

/// Substitute the two named insertion points of a page template.
pub fn wrap_page(template: &str, title: &str, content: &str) -> String {
    template
        .replace("{{ title }}", title)
        .replace("{{ content }}", content)
}

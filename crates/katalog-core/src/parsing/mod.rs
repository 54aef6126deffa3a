pub mod fields;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::KatalogError;
use crate::extraction::MAX_COLS;
use crate::model::{CatalogEntry, ParsedRow, RawBlock, TemperatureParams};

/// Device names carrying this phrase are made-to-order sections; such
/// blocks are dropped from the catalog entirely, images included.
const MADE_TO_ORDER_MARKER: &str = "по заказу";

/// Substring of "Изображен"/"изображен" that marks a row as an image
/// listing rather than table data.
const IMAGES_ROW_MARKER: &str = "зображен";

static IMAGE_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[\w-]+\.(?:jpg|jpeg|png|gif)\b").unwrap());

/// Normalize raw blocks into catalog entries.
///
/// Every raw row either becomes a [`ParsedRow`] or, when it carries the
/// image marker, contributes filenames to the entry's image list. The two
/// temperature fields are hoisted to block-level `params` from the first
/// parsed row only; a block with zero parsed rows keeps blank params.
///
/// Any row that cannot be decoded into the minimum field count aborts the
/// whole conversion; no partial catalog is produced.
pub fn build_entries(blocks: &[RawBlock]) -> Result<Vec<CatalogEntry>, KatalogError> {
    let mut entries = Vec::new();

    for block in blocks {
        if block.device.contains(MADE_TO_ORDER_MARKER) {
            continue;
        }

        let mut data = Vec::new();
        let mut images = Vec::new();

        for raw in &block.rows {
            if raw.contains(IMAGES_ROW_MARKER) {
                images.extend(extract_image_names(raw));
            } else {
                data.push(parse_row(raw)?);
            }
        }

        let mut params = TemperatureParams::default();
        if let Some(first) = data.first_mut() {
            params.measured = first.temp_measured.take();
            params.ambient = first.temp_ambient.take();
        }
        // The transient fields never outlive normalization.
        for row in &mut data {
            row.temp_measured = None;
            row.temp_ambient = None;
        }

        entries.push(CatalogEntry {
            device: block.device.clone(),
            description: block.description.clone(),
            images,
            params,
            data,
        });
    }

    Ok(entries)
}

/// Pull image filenames out of a raw images row, in order of appearance.
pub fn extract_image_names(raw: &str) -> Vec<String> {
    IMAGE_FILE_RE
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Decode a raw row string back into its cell values; exact inverse of
/// [`crate::extraction::blocks::join_row`].
///
/// Fewer than [`MAX_COLS`] decoded segments is a structural error carrying
/// the offending raw text.
pub fn decode_row(raw: &str) -> Result<Vec<String>, KatalogError> {
    let parts: Vec<String> = raw
        .split('\t')
        .filter(|p| !p.trim().is_empty())
        .map(unquote)
        .collect();

    let required = MAX_COLS as usize;
    if parts.len() < required {
        return Err(KatalogError::RowTooShort {
            found: parts.len(),
            required,
            raw: raw.to_string(),
        });
    }

    Ok(parts)
}

fn unquote(segment: &str) -> String {
    let t = segment.trim();
    let t = t.strip_prefix('"').unwrap_or(t);
    let t = t.strip_suffix('"').unwrap_or(t);
    t.replace("\\\"", "\"")
}

/// Run every field parser over one decoded row.
pub fn parse_row(raw: &str) -> Result<ParsedRow, KatalogError> {
    let parts = decode_row(raw)?;

    Ok(ParsedRow {
        model: Some(fields::parse_model(&parts[0])),
        diameter: fields::parse_diameter(&parts[1]),
        accuracy_class: fields::parse_accuracy_class(&parts[2]),
        ingress_protection: fields::parse_ingress_protection(&parts[3]),
        thread: fields::parse_thread(&parts[4]),
        climate: fields::parse_climate(&parts[5]),
        vibro_protection: fields::parse_vibro_protection(&parts[6]),
        pressure_ranges: fields::parse_pressure_ranges(&parts[7]),
        temp_measured: Some(fields::parse_temperature(&parts[8])),
        temp_ambient: Some(fields::parse_temperature(&parts[9])),
    })
}

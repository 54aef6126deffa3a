use serde::{Deserialize, Serialize};
use std::fmt;

/// One detected device section of the sheet, before field parsing.
///
/// Each entry in `rows` is one physical table row, encoded as exactly
/// [`MAX_COLS`](crate::extraction::MAX_COLS) double-quote-wrapped,
/// tab-separated fields. Blank cells are already back-filled from the
/// nearest non-blank cell above (carry-forward), and fully blank rows
/// never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub device: String,
    pub description: String,
    pub rows: Vec<String>,
}

/// Renderable table columns, in canonical print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Model,
    Diameter,
    PressureRanges,
    Thread,
    AccuracyClass,
    IngressProtection,
    Climate,
    VibroProtection,
}

impl Field {
    /// Print order of the datasheet tables. Column inference keeps only
    /// the fields that actually occur, preserving this relative order.
    pub const CANONICAL: [Field; 8] = [
        Field::Model,
        Field::Diameter,
        Field::PressureRanges,
        Field::Thread,
        Field::AccuracyClass,
        Field::IngressProtection,
        Field::Climate,
        Field::VibroProtection,
    ];

    /// Russian column header as printed in the source datasheets.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Model => "Модель",
            Field::Diameter => "Диаметр",
            Field::PressureRanges => "Пределы давления",
            Field::Thread => "Резьба",
            Field::AccuracyClass => "Класс точности",
            Field::IngressProtection => "Степень IP",
            Field::Climate => "Климат",
            Field::VibroProtection => "Вибро защита",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Borrowed view of one table cell for rendering.
///
/// Pressure ranges are the only list-valued column; every other value is a
/// pre-formatted markup string rendered verbatim. Rowspan merging compares
/// these views exactly, markup included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

/// One table row after field normalization.
///
/// `None` means the field parser found nothing in the raw cell; such fields
/// are omitted from the JSON artifact and from column inference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRow {
    #[serde(rename = "Модель", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "Диаметр", skip_serializing_if = "Option::is_none")]
    pub diameter: Option<String>,
    #[serde(rename = "Пределы давления", skip_serializing_if = "Option::is_none")]
    pub pressure_ranges: Option<Vec<String>>,
    #[serde(rename = "Резьба", skip_serializing_if = "Option::is_none")]
    pub thread: Option<String>,
    #[serde(rename = "Класс точности", skip_serializing_if = "Option::is_none")]
    pub accuracy_class: Option<String>,
    #[serde(rename = "Степень IP", skip_serializing_if = "Option::is_none")]
    pub ingress_protection: Option<String>,
    #[serde(rename = "Климат", skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(rename = "Вибро защита", skip_serializing_if = "Option::is_none")]
    pub vibro_protection: Option<String>,

    /// Hoisted to block-level `params` from the first row only, then
    /// cleared from every row. Never serialized.
    #[serde(skip)]
    pub temp_measured: Option<String>,
    #[serde(skip)]
    pub temp_ambient: Option<String>,
}

impl ParsedRow {
    pub fn get(&self, field: Field) -> Option<CellValue<'_>> {
        match field {
            Field::Model => self.model.as_deref().map(CellValue::Text),
            Field::Diameter => self.diameter.as_deref().map(CellValue::Text),
            Field::PressureRanges => self.pressure_ranges.as_deref().map(CellValue::List),
            Field::Thread => self.thread.as_deref().map(CellValue::Text),
            Field::AccuracyClass => self.accuracy_class.as_deref().map(CellValue::Text),
            Field::IngressProtection => self.ingress_protection.as_deref().map(CellValue::Text),
            Field::Climate => self.climate.as_deref().map(CellValue::Text),
            Field::VibroProtection => self.vibro_protection.as_deref().map(CellValue::Text),
        }
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }
}

/// The two block-level temperature parameters, taken from the first parsed
/// row of a block. `None` when the block has no parsed rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureParams {
    #[serde(rename = "Диапазон температур измеряемой среды")]
    pub measured: Option<String>,
    #[serde(rename = "Диапазон температур окружающей среды")]
    pub ambient: Option<String>,
}

/// Normalized, renderable unit: one device with its images, block-level
/// parameters and parsed table rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub device: String,
    pub description: String,
    pub images: Vec<String>,
    pub params: TemperatureParams,
    pub data: Vec<ParsedRow>,
}

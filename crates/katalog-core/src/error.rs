#[derive(Debug, thiserror::Error)]
pub enum KatalogError {
    #[error("failed to read workbook: {0}")]
    Input(String),

    #[error("sheet '{name}' not found in workbook")]
    SheetNotFound { name: String },

    #[error("table row decoded into {found} fields, expected at least {required}: {raw}")]
    RowTooShort {
        found: usize,
        required: usize,
        raw: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

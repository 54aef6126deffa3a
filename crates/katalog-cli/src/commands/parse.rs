use std::path::PathBuf;

use katalog_core::error::KatalogError;

pub fn run(
    input_file: PathBuf,
    sheet: Option<&str>,
    out: Option<PathBuf>,
) -> Result<(), KatalogError> {
    let bytes = std::fs::read(&input_file)?;
    let catalog = katalog_core::build_catalog(&bytes, sheet)?;
    let json = serde_json::to_string_pretty(&catalog)?;

    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} device block(s), written to {}",
                catalog.len(),
                path.display()
            );
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "katalog",
    version,
    about = "Convert instrument datasheet workbooks into a print-ready HTML catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a datasheet workbook into the normalized catalog JSON
    Parse {
        /// Path to the xlsx workbook
        input_file: PathBuf,

        /// Worksheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Write catalog JSON to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Render a saved catalog JSON into a wrapped HTML page
    Render {
        /// Path to catalog JSON (as produced by `parse`)
        input_file: PathBuf,

        /// Output HTML file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,

        /// Page title
        #[arg(long, default_value = "Каталог приборов")]
        title: String,

        /// URL prefix for device images
        #[arg(long, value_name = "URL")]
        image_prefix: Option<String>,

        /// Custom page template with {{ title }} / {{ content }} slots
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
    },
    /// Full pipeline: workbook straight to the HTML page
    Convert {
        /// Path to the xlsx workbook
        input_file: PathBuf,

        /// Output HTML file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,

        /// Worksheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Page title
        #[arg(long, default_value = "Каталог приборов")]
        title: String,

        /// URL prefix for device images
        #[arg(long, value_name = "URL")]
        image_prefix: Option<String>,

        /// Custom page template with {{ title }} / {{ content }} slots
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            sheet,
            out,
        } => commands::parse::run(input_file, sheet.as_deref(), out),
        Commands::Render {
            input_file,
            out,
            title,
            image_prefix,
            template,
        } => commands::render::run(input_file, out, &title, image_prefix, template),
        Commands::Convert {
            input_file,
            out,
            sheet,
            title,
            image_prefix,
            template,
        } => commands::convert::run(
            input_file,
            out,
            sheet.as_deref(),
            &title,
            image_prefix,
            template,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

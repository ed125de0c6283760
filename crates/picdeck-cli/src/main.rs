use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use picdeck_export::{ExportOptions, Margins};

#[derive(Parser)]
#[command(
    name = "picdeck",
    about = "Assemble images into a paginated PDF",
    version
)]
struct Cli {
    /// Input image files, in page order
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output PDF file (defaults to the normalized document name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document name used when --output is not given
    #[arg(long, default_value = "")]
    name: String,

    /// Page size
    #[arg(long, default_value = "a4", value_enum)]
    page_size: PageSizeArg,

    /// Uniform margin in cm (overridden per side by the flags below)
    #[arg(long, default_value = "1.0")]
    margin: f32,

    /// Top margin in cm
    #[arg(long)]
    margin_top: Option<f32>,

    /// Right margin in cm
    #[arg(long)]
    margin_right: Option<f32>,

    /// Bottom margin in cm
    #[arg(long)]
    margin_bottom: Option<f32>,

    /// Left margin in cm
    #[arg(long)]
    margin_left: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
    Legal,
}

impl From<PageSizeArg> for picdeck_export::PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
            PageSizeArg::Legal => Self::Legal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let margins = Margins {
        top_cm: cli.margin_top.unwrap_or(cli.margin),
        right_cm: cli.margin_right.unwrap_or(cli.margin),
        bottom_cm: cli.margin_bottom.unwrap_or(cli.margin),
        left_cm: cli.margin_left.unwrap_or(cli.margin),
    };
    let options = ExportOptions {
        page_size: cli.page_size.into(),
        margins,
        file_name: cli.name,
    };

    let accepted = picdeck_export::filter_image_paths(&cli.images)?;
    let skipped = cli.images.len() - accepted.len();
    if skipped > 0 {
        eprintln!("Skipping {skipped} non-image file(s)");
    }

    let records = picdeck_export::load_images(&accepted).await?;

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(options.resolved_file_name()));
    let pages = picdeck_export::export_pdf(&records, &options, &output).await?;

    println!("Exported {} page(s) → {}", pages, output.display());
    Ok(())
}

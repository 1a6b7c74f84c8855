use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use imgcom_assemble::{AssemblyOptions, ImageStore};
use imgcom_compress::{CompressionOptions, format_size};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgcom", about = "Image conversion tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stitch images into a single PDF, one page per image
    Convert {
        /// Input image file(s) - page order follows argument order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long, default_value = imgcom_assemble::DEFAULT_OUTPUT_NAME)]
        output: PathBuf,

        /// Paper size for output
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,

        /// Paper orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Show statistics only, don't generate output
        #[arg(long)]
        stats_only: bool,
    },

    /// Recompress a single image as JPEG at the chosen quality
    Compress {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (default: input stem + _imgcom.jpg, next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JPEG quality, 0.1 to 0.95
        #[arg(short, long, default_value = "0.7")]
        quality: f32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for imgcom_assemble::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for imgcom_assemble::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            paper,
            orientation,
            stats_only,
        } => {
            let options = AssemblyOptions {
                paper_size: paper.into(),
                orientation: orientation.into(),
            };

            // Load inputs in argument order; order decides page order
            let files = imgcom_assemble::load_image_files(&input).await?;
            let mut store: ImageStore<()> = ImageStore::new();
            store.add_files(files);

            let stats = imgcom_assemble::calculate_statistics(&store, &options)?;
            println!("Assembly statistics:");
            println!("  Source images: {}", stats.source_images);
            println!("  Output pages: {}", stats.output_pages);
            println!(
                "  Page size: {} x {} mm",
                stats.page_width_mm, stats.page_height_mm
            );
            println!("  Total input size: {}", format_size(stats.total_input_bytes));

            if stats_only {
                return Ok(());
            }

            let document = imgcom_assemble::assemble(&store.files(), &options).await?;
            imgcom_assemble::save_pdf(document, &output).await?;

            println!("Converted {} images → {}", store.len(), output.display());
        }

        Commands::Compress {
            input,
            output,
            quality,
        } => {
            let options = CompressionOptions { quality };
            let result = imgcom_compress::compress_file(&input, &options).await?;

            let output = output.unwrap_or_else(|| input.with_file_name(&result.name));
            imgcom_compress::save_compressed(&result, &output).await?;

            println!("Original size: {}", format_size(result.original_size));
            println!("Compressed size: {}", format_size(result.compressed_size));
            println!("Reduction: {}%", result.reduction_percent());
            println!("Compressed → {}", output.display());
        }
    }

    Ok(())
}

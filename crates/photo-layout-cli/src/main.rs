mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use photo_layout::{LayoutOptions, SizeKind, SizeRegistry, SizeSpec};
use std::path::PathBuf;

use logger::StderrLogger;

#[derive(Parser)]
#[command(name = "photoprint", about = "Photo print layout CLI", version)]
struct Cli {
    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out photos on printable pages and write a PDF
    Layout(LayoutArgs),

    /// List the built-in photo and paper sizes
    Sizes,
}

#[derive(Args)]
struct LayoutArgs {
    /// Input JPEG/PNG file(s) - can specify multiple
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output PDF file (default: photo-layout.pdf or photobooth.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load settings from a JSON file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective settings to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Built-in photo size label (see `photoprint sizes`)
    #[arg(long, conflicts_with = "photo_width")]
    photo: Option<String>,

    /// Custom photo width in mm
    #[arg(long, requires = "photo_height")]
    photo_width: Option<f64>,

    /// Custom photo height in mm
    #[arg(long, requires = "photo_width")]
    photo_height: Option<f64>,

    /// Built-in paper size label (see `photoprint sizes`)
    #[arg(long, conflicts_with = "paper_width")]
    paper: Option<String>,

    /// Custom paper width in mm
    #[arg(long, requires = "paper_height")]
    paper_width: Option<f64>,

    /// Custom paper height in mm
    #[arg(long, requires = "paper_width")]
    paper_height: Option<f64>,

    /// Layout mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Photobooth template (implies photobooth mode)
    #[arg(long, value_enum)]
    template: Option<TemplateArg>,

    /// Gap between photos in mm
    #[arg(long)]
    padding: Option<f64>,

    /// Force the number of photos per row (grid mode)
    #[arg(long)]
    photos_per_row: Option<usize>,

    /// Force the number of rows (grid mode)
    #[arg(long)]
    rows: Option<usize>,

    /// Page background
    #[arg(long, value_enum)]
    background: Option<BackgroundArg>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Grid,
    Photobooth,
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    Classic,
    Strips,
    Collage,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackgroundArg {
    White,
    Black,
}

impl From<TemplateArg> for photo_layout::PhotoboothTemplate {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Classic => Self::Classic,
            TemplateArg::Strips => Self::Strips,
            TemplateArg::Collage => Self::Collage,
        }
    }
}

impl From<BackgroundArg> for photo_layout::Background {
    fn from(arg: BackgroundArg) -> Self {
        match arg {
            BackgroundArg::White => Self::White,
            BackgroundArg::Black => Self::Black,
        }
    }
}

impl LayoutArgs {
    /// Start from the config file (or defaults) and apply the flags on top
    async fn options(&self) -> Result<LayoutOptions> {
        let mut options = match &self.config {
            Some(path) => LayoutOptions::load(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => LayoutOptions::default(),
        };

        if let Some(label) = &self.photo {
            options.photo_size = SizeSpec::Named(label.clone());
        }
        if let (Some(width_mm), Some(height_mm)) = (self.photo_width, self.photo_height) {
            options.photo_size = SizeSpec::Custom {
                width_mm,
                height_mm,
            };
        }
        if let Some(label) = &self.paper {
            options.paper_size = SizeSpec::Named(label.clone());
        }
        if let (Some(width_mm), Some(height_mm)) = (self.paper_width, self.paper_height) {
            options.paper_size = SizeSpec::Custom {
                width_mm,
                height_mm,
            };
        }

        options.mode = match (self.mode, self.template) {
            (Some(ModeArg::Grid), Some(_)) => bail!("--template requires photobooth mode"),
            (Some(ModeArg::Grid), None) => photo_layout::LayoutMode::grid(),
            (Some(ModeArg::Photobooth), template) | (None, template @ Some(_)) => {
                photo_layout::LayoutMode::photobooth(template.map(Into::into).unwrap_or_default())
            }
            (None, None) => options.mode,
        };

        if self.padding.is_some() {
            options.overrides.custom_padding_mm = self.padding;
        }
        if self.photos_per_row.is_some() {
            options.overrides.custom_photos_per_row = self.photos_per_row;
        }
        if self.rows.is_some() {
            options.overrides.custom_rows = self.rows;
        }
        if let Some(background) = self.background {
            options.background = background.into();
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    StderrLogger::new(StderrLogger::level_for(cli.verbose, cli.quiet)).init()?;

    match cli.command {
        Commands::Sizes => print_sizes(),
        Commands::Layout(args) => run_layout(args).await?,
    }

    Ok(())
}

fn print_sizes() {
    for (title, kind) in [("Photo sizes", SizeKind::Photo), ("Paper sizes", SizeKind::Paper)] {
        println!("{}:", title);
        for size in SizeRegistry::with_builtins(kind).sizes() {
            println!(
                "  {:<20} {:>6.1} × {:>6.1} mm",
                size.label, size.width_mm, size.height_mm
            );
        }
    }
}

async fn run_layout(args: LayoutArgs) -> Result<()> {
    let options = args.options().await?;

    if let Some(path) = &args.save_config {
        options.save(path).await?;
        println!("Saved settings → {}", path.display());
    }

    let photo = options.photo()?;
    let paper = options.paper()?;
    let geometry = options.geometry()?;

    // Load all input images; rejected files are reported and skipped
    let mut images = Vec::new();
    let results = photo_layout::load_images(args.input.as_slice()).await;
    for (path, result) in args.input.iter().zip(results) {
        match result {
            Ok(image) => images.push(image),
            Err(e) => eprintln!("Skipping {}: {}", path.display(), e),
        }
    }

    // Calculate and show statistics
    let stats = photo_layout::calculate_statistics(images.len(), &geometry, &paper)?;
    println!("Layout Statistics:");
    println!(
        "  Photo: {} ({}×{}mm)",
        photo.label, photo.width_mm, photo.height_mm
    );
    println!(
        "  Paper: {} ({}×{}mm, {:?})",
        paper.label, paper.width_mm, paper.height_mm, stats.orientation
    );
    println!("  Images: {}", stats.image_count);
    println!(
        "  Grid: {} × {} ({} per page)",
        stats.photos_per_row, stats.rows, stats.slots_per_page
    );
    println!("  Pages: {}", stats.pages);
    println!("  Repeated slots: {}", stats.repeated_slots);

    if args.stats_only {
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(options.mode.output_file_name()));

    let Some(doc) =
        photo_layout::render(&images, &geometry, &photo, &paper, options.background).await?
    else {
        bail!("Nothing to render");
    };
    photo_layout::save_pdf(doc, &output).await?;
    println!("Laid out {} photo(s) → {}", images.len(), output.display());

    Ok(())
}

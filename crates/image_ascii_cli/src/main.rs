use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use image::GenericImageView;
use image_ascii::{
    solve_font_size, FontMetrics, GlyphRamp, GridResolution, ImageAsciiRenderer, LayoutBox,
    RenderMode, RenderOptions, RenderOutput, DEFAULT_OPACITY_THRESHOLD,
};
use log::debug;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert images to ASCII glyph grids sized for a container")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render ASCII art to stdout for a quick preview
    Preview(PreviewArgs),
    /// Convert an image to ASCII text or colored markup and write it to disk
    Convert(ConvertArgs),
    /// Solve the font size that fits a glyph grid into a container box
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image path
    input: PathBuf,
    /// Characters per line
    #[arg(long, default_value_t = 100)]
    columns: u16,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image path
    input: PathBuf,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    /// Characters per line
    #[arg(long, default_value_t = 120)]
    columns: u16,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Container width in pixels
    #[arg(long)]
    box_width: f32,
    /// Container height in pixels
    #[arg(long)]
    box_height: f32,
    /// Characters per line
    #[arg(long)]
    columns: u16,
    /// Text rows
    #[arg(long)]
    rows: u16,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Ramp preset used to map luminance to glyphs
    #[arg(long, value_enum, default_value = "detailed")]
    ramp: RampPreset,
    /// Reverse the ramp's traversal direction
    #[arg(long, default_value_t = false)]
    invert: bool,
    /// Alpha below which a pixel renders as a blank (0-255)
    #[arg(long, default_value_t = DEFAULT_OPACITY_THRESHOLD)]
    opacity_threshold: u8,
    /// Rendering mode
    #[arg(long, value_enum, default_value = "plain")]
    mode: ModeChoice,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RampPreset {
    Detailed,
    Standard,
    Blocks,
    Binary,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeChoice {
    Plain,
    Colored,
    Masked,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Convert(args) => convert(args),
        Commands::Fit(args) => fit(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let output = render(&args.input, args.columns, &args.settings)?;
    println!("{}", output.grid.to_text());
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let output = render(&args.input, args.columns, &args.settings)?;

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    match args.format {
        OutputFormat::Text => writeln!(file, "{}", output.grid.to_text())?,
        OutputFormat::Html => writeln!(file, "{}", to_html_document(&output))?,
    }
    Ok(())
}

fn fit(args: FitArgs) -> Result<()> {
    let container = LayoutBox::new(args.box_width, args.box_height);
    let sizing = solve_font_size(container, args.columns, args.rows, FontMetrics::default())
        .context("failed to solve font size")?;
    println!(
        "font-size: {:.2}px (block {:.1}x{:.1}px in {:.1}x{:.1}px box)",
        sizing.font_size_px,
        sizing.block_width_px,
        sizing.block_height_px,
        container.width,
        container.height,
    );
    Ok(())
}

fn render(input: &Path, columns: u16, settings: &RenderSettings) -> Result<RenderOutput> {
    let image = image::open(input).with_context(|| format!("failed to open {input:?}"))?;
    let (width, height) = image.dimensions();
    let resolution = GridResolution::derive(columns, width, height)
        .with_context(|| format!("image {input:?} has degenerate dimensions"))?;
    debug!(
        "rendering {input:?} ({width}x{height}) at {}x{}",
        resolution.columns, resolution.rows
    );

    let renderer = ImageAsciiRenderer;
    renderer
        .render_image(&image, resolution, &settings.to_options())
        .with_context(|| format!("failed to render {input:?}"))
}

/// Wraps the markup fragment in a `<pre>` carrying the sizing constants;
/// masked mode clips the snapshot behind the glyph shapes.
fn to_html_document(output: &RenderOutput) -> String {
    let metrics = FontMetrics::default();
    let mut style = format!(
        "letter-spacing: {}em; line-height: {}em;",
        metrics.letter_spacing_em, metrics.line_height_em
    );
    if let Some(background) = &output.background {
        style.push_str(&format!(
            " background-image: url({background}); background-size: 100% 100%;\
             -webkit-background-clip: text; background-clip: text; color: transparent;"
        ));
    }
    format!("<pre style=\"{}\">{}</pre>", style, output.grid.to_html())
}

impl RenderSettings {
    fn to_options(&self) -> RenderOptions {
        let mut ramp = self.ramp.to_ramp();
        if self.invert {
            ramp = ramp.flipped();
        }
        RenderOptions {
            ramp,
            mode: self.mode.to_mode(),
            opacity_threshold: self.opacity_threshold,
        }
    }
}

impl RampPreset {
    fn to_ramp(self) -> GlyphRamp {
        match self {
            RampPreset::Detailed => GlyphRamp::detailed(),
            RampPreset::Standard => GlyphRamp::standard(),
            RampPreset::Blocks => GlyphRamp::blocks(),
            RampPreset::Binary => GlyphRamp::binary(),
        }
    }
}

impl ModeChoice {
    fn to_mode(self) -> RenderMode {
        match self {
            ModeChoice::Plain => RenderMode::Plain,
            ModeChoice::Colored => RenderMode::Colored,
            ModeChoice::Masked => RenderMode::ImageMasked,
        }
    }
}

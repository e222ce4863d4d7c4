//! Lumen CLI
//!
//! Renders a demo panel scene with the software painter and writes it to a
//! PNG file.

mod fonts;
mod scene;

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use lumen_graphic::{Bitmap, Color, Filtering, Painter};
use owo_colors::OwoColorize;

use crate::scene::Assets;

/// Sampling used when the demo picture is resized.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Nearest pixel.
    Nearest,
    /// Bilinear interpolation.
    Linear,
}

impl From<FilterArg> for Filtering {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => Self::Nearest,
            FilterArg::Linear => Self::Linear,
        }
    }
}

/// Render a demo scene with the Lumen software painter.
#[derive(Debug, Parser)]
#[command(name = "lumen", version, about)]
struct Args {
    /// Output PNG path.
    #[arg(short, long, default_value = "lumen.png")]
    output: PathBuf,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Font file for labels. Common system fonts are searched when omitted.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Label font size in pixels.
    #[arg(long, default_value_t = 16.0)]
    size: f32,

    /// Footer message.
    #[arg(long, default_value = "Hello from Lumen")]
    text: String,

    /// Window background as #RGB, #RGBA, #RRGGBB or #RRGGBBAA.
    #[arg(long, default_value = "#282c34", value_parser = parse_color)]
    background: Color,

    /// Sampling for the resized picture.
    #[arg(long, value_enum, default_value_t = FilterArg::Nearest)]
    filtering: FilterArg,
}

fn parse_color(value: &str) -> Result<Color, String> {
    Color::from_hex(value).ok_or_else(|| format!("'{value}' is not a hex color"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        args.width > 0 && args.height > 0,
        "surface must be at least 1x1, got {}x{}",
        args.width,
        args.height
    );
    let width = i32::try_from(args.width).context("width does not fit in i32")?;
    let height = i32::try_from(args.height).context("height does not fit in i32")?;

    let font = fonts::load_atlas(args.font.as_deref(), args.size)?;
    let mut picture = scene::checkerboard(
        16,
        Color::rgb(0xe5, 0xc0, 0x7b),
        Color::rgb(0xc6, 0x78, 0xdd),
    );
    picture.set_filtering(args.filtering.into());
    let assets = Assets { font, picture };

    let root = scene::demo(width, height, &args.text, args.background);
    let mut surface = Bitmap::new(args.width, args.height);
    {
        let mut painter = Painter::new(&mut surface);
        scene::render(&mut painter, &root, &assets);
    }

    surface
        .save(&args.output)
        .with_context(|| format!("failed to save render to '{}'", args.output.display()))?;

    println!(
        "{} {}x{} scene to {}",
        "Rendered".green().bold(),
        args.width,
        args.height,
        args.output.display()
    );
    Ok(())
}

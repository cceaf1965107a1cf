use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asciify::pipeline::{self, ConversionPaths};
use asciify::RenderConfig;
use clap::{ArgAction, Parser};
use log::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert an image to ASCII art text and render it back to a PNG"
)]
struct Cli {
    /// Source image path
    source: PathBuf,
    /// Output text file name, created inside the output directory
    text_output: PathBuf,
    /// Output image file name, created inside the output directory
    image_output: PathBuf,
    /// Draw each glyph in the color of its source pixel
    #[arg(short = 'c', long = "color")]
    color: bool,
    /// Directory receiving both outputs, created if missing
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
    /// TOML file overriding cell size and colors
    #[arg(long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(&cli).map_err(|err| {
        error!("{err:#}");
        err
    })
}

fn run(cli: &Cli) -> Result<()> {
    let config = render_config(cli)?;
    let paths = output_paths(cli)?;
    debug!("converting with {:?}", config);

    let report = pipeline::convert(&paths, &config)
        .with_context(|| format!("failed to convert {:?}", paths.source))?;

    info!(
        "{}x{} cells rendered to {}x{} pixels{}",
        report.cells.0,
        report.cells.1,
        report.canvas.0,
        report.canvas.1,
        if report.colored { " in color" } else { "" }
    );
    println!("image successfully converted to ascii art");
    println!(" output text file: {}", report.text.display());
    println!(" output image file: {}", report.image.display());
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn render_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load config {:?}", path))?,
        None => RenderConfig::default(),
    };
    config.color_mode |= cli.color;
    Ok(config)
}

fn output_paths(cli: &Cli) -> Result<ConversionPaths> {
    create_out_dir(&cli.out_dir)?;
    Ok(ConversionPaths {
        source: cli.source.clone(),
        text: cli.out_dir.join(&cli.text_output),
        image: cli.out_dir.join(&cli.image_output),
    })
}

fn create_out_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {:?}", dir))
}

//! fnplot: render function plots to PNG or SVG.
//!
//! Renders a YAML scene (or the built-in demo) and writes it to a file
//! whose extension picks the format.
//!
//! Run: `fnplot -o plot.png` or `fnplot --config scene.yaml -o plot.svg`

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use fnplot::prelude::*;

/// Look presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    /// Black axes, dot curves.
    Plain,
    /// Soft background, polyline curves, labeled points.
    Pretty,
}

/// fnplot: Cartesian function plotter
#[derive(Parser, Debug)]
#[command(name = "fnplot")]
#[command(version)]
#[command(about = "Plot functions onto PNG or SVG images", long_about = None)]
struct Cli {
    /// Scene file (YAML). Without one the built-in demo is drawn.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file; `.png` or `.svg`
    #[arg(short, long, default_value = "plot.png")]
    output: PathBuf,

    /// Style preset. Picks the demo scene, or replaces a scene file's style.
    #[arg(short, long, value_enum)]
    style: Option<Style>,

    /// Surface width in pixels (scene width if unset)
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels (scene height if unset)
    #[arg(long)]
    height: Option<u32>,

    /// List catalog function names and exit
    #[arg(long)]
    list_functions: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_functions {
        for name in fnplot::catalog::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let scene = load_scene(&cli)?;
    let width = cli.width.unwrap_or(scene.width);
    let height = cli.height.unwrap_or(scene.height);

    match Format::from_path(&cli.output)? {
        Format::Png => {
            let mut fb = Framebuffer::new(width, height)?;
            fb.clear(Rgba::WHITE);
            let report = scene.render(&mut fb).context("rendering scene")?;
            log::info!("{} curves, {} points", report.curves.len(), report.points);
            PngEncoder::write_to_file(&fb, &cli.output)
                .with_context(|| format!("writing {}", cli.output.display()))?;
        }
        Format::Svg => {
            let mut svg = SvgEncoder::new(width, height);
            let report = scene.render(&mut svg).context("rendering scene")?;
            log::info!("{} curves, {} points", report.curves.len(), report.points);
            svg.write_to_file(&cli.output)
                .with_context(|| format!("writing {}", cli.output.display()))?;
        }
    }

    log::info!("wrote {} ({width}x{height})", cli.output.display());
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_scene(cli: &Cli) -> Result<Scene> {
    let Some(path) = &cli.config else {
        return Ok(match cli.style {
            Some(Style::Plain) => Scene::demo_plain(),
            Some(Style::Pretty) | None => Scene::demo(),
        });
    };

    let mut scene =
        Scene::load(path).with_context(|| format!("loading scene {}", path.display()))?;
    match cli.style {
        Some(Style::Plain) => scene.style = PlotStyle::plain(),
        Some(Style::Pretty) => scene.style = PlotStyle::pretty(),
        None => {}
    }
    Ok(scene)
}

enum Format {
    Png,
    Svg,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => bail!("unsupported output {}; use .png or .svg", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert!(matches!(Format::from_path(Path::new("a.PNG")), Ok(Format::Png)));
        assert!(matches!(Format::from_path(Path::new("out/a.svg")), Ok(Format::Svg)));
        assert!(Format::from_path(Path::new("a.jpg")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::parse_from(["fnplot", "-s", "plain", "-o", "x.svg", "-vv"]);
        assert_eq!(cli.style, Some(Style::Plain));
        assert_eq!(cli.verbose, 2);
        assert_eq!(load_scene(&cli).unwrap(), Scene::demo_plain());
    }
}

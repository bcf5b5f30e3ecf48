mod colors;
mod config;
mod settings;
mod terminal;
mod viz;

use anyhow::{Context, Result};
use clap::Parser;
use config::{DonutConfig, Overrides};
use settings::Settings;
use terminal::Terminal;
use viz::Rotation;

#[derive(Parser)]
#[command(name = "termdonut")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Rotating 3D torus rendered as ASCII art in the terminal", long_about = None)]
struct Cli {
    /// Pause between frames in milliseconds [default: 30]
    #[arg(short, long)]
    delay: Option<u64>,

    /// Stop after this many frames (default: run until killed)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    frames: Option<u64>,

    /// Print a single frame to stdout and exit
    #[arg(short, long)]
    print: bool,

    /// Initial rotation angle A in radians
    #[arg(short = 'a', long, default_value = "0.0", allow_negative_numbers = true)]
    start_a: f64,

    /// Initial rotation angle B in radians
    #[arg(short = 'b', long, default_value = "0.0", allow_negative_numbers = true)]
    start_b: f64,
}

fn main() -> Result<()> {
    // stderr only, so log lines never land inside a frame
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = Settings::load();
    let overrides = Overrides {
        delay_ms: cli.delay,
        frames: cli.frames,
        print: cli.print,
        start: Rotation::new(cli.start_a, cli.start_b),
    };
    let config = DonutConfig::resolve(&overrides, &settings);

    if config.print {
        let mut term = Terminal::new(false)?;
        viz::donut::print(&mut term, &config).context("failed to print frame")?;
    } else {
        let mut term = Terminal::new(true).context("failed to prepare terminal")?;
        viz::donut::run(&mut term, &config).context("failed to draw frames")?;
    }

    Ok(())
}

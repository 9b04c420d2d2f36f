use std::path::PathBuf;

use clap::Parser;
use horizon_watchface::{run, HourStyle, LocalClock, WatchfaceConfig};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Artificial-horizon watchface simulator.")]
pub struct Args {
    /// Window pixels per watch pixel
    #[arg(short, long, default_value_t = 3)]
    pub scale: u32,

    /// Show the hour on a 12-hour clock
    #[arg(long)]
    pub twelve_hour: bool,

    /// TrueType/OpenType font for the clock text
    #[arg(short, long)]
    pub font: Option<PathBuf>,

    /// Window title
    #[arg(short, long, default_value = "Horizon")]
    pub title: String,

    /// Log level filter
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::builder().filter(None, args.log_level).init();

    let hour_style = if args.twelve_hour {
        HourStyle::Twelve
    } else {
        HourStyle::TwentyFour
    };
    let config = WatchfaceConfig::builder()
        .title(args.title)
        .scale(args.scale)
        .hour_style(hour_style)
        .maybe_font_path(args.font)
        .build();

    run(config, LocalClock)?;
    Ok(())
}

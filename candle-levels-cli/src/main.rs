//! Candle Levels CLI — replay a candle series through the level renderer.
//!
//! Loads bars from a CSV file, applies a TOML config (with flag overrides),
//! invokes the renderer once per bar index exactly as a charting host would,
//! and prints the chart objects left on the simulated chart.

use anyhow::{bail, Context, Result};
use candle_levels_core::chart::ChartObject;
use candle_levels_core::{Candle, CandleSeries, LevelConfig, LevelRenderer, RecordingChart};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "candle-levels",
    about = "Candle Levels — replay candles through the level indicator and print the drawn chart"
)]
struct Cli {
    /// Candle CSV with columns: open_time,open,high,low,close (RFC 3339 timestamps).
    csv: PathBuf,

    /// TOML config file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the comma-separated level percentages.
    #[arg(long)]
    levels: Option<String>,

    /// Override the candle look-back.
    #[arg(long)]
    look_back: Option<usize>,

    /// Disable percentage labels.
    #[arg(long, default_value_t = false)]
    no_text: bool,

    /// Render as of this bar index. Defaults to the last bar.
    #[arg(long)]
    at: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LevelConfig::default(),
    };
    if let Some(levels) = cli.levels {
        config.custom_levels = levels;
    }
    if let Some(look_back) = cli.look_back {
        config.look_back = look_back;
    }
    if cli.no_text {
        config.show_level_text = false;
    }
    config.validate().context("invalid configuration")?;

    let series = load_candles(&cli.csv)?;
    let last = series
        .last_index()
        .context("candle CSV contains no rows")?;
    let at = cli.at.unwrap_or(last);
    if at > last {
        bail!("--at {at} is beyond the last bar index {last}");
    }

    let mut renderer = LevelRenderer::new(&config);
    let mut chart = RecordingChart::new();
    for index in 0..=at {
        renderer.calculate(&series, index, &mut chart);
    }

    print_chart(&chart);
    Ok(())
}

fn load_config(path: &Path) -> Result<LevelConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file '{}'", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config file '{}'", path.display()))
}

fn load_candles(path: &Path) -> Result<CandleSeries> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening candle CSV '{}'", path.display()))?;
    let mut candles = Vec::new();
    for (row, record) in reader.deserialize::<Candle>().enumerate() {
        // Row numbering counts the header line, matching what an editor shows.
        let candle = record.with_context(|| format!("parsing candle CSV line {}", row + 2))?;
        candles.push(candle);
    }
    Ok(CandleSeries::from_candles(candles))
}


fn print_chart(chart: &RecordingChart) {
    if chart.is_empty() {
        println!("(no chart objects)");
        return;
    }
    println!("{:<14} {:>12}  {:<10} detail", "object", "price", "color");
    for (name, object) in chart.objects() {
        match object {
            ChartObject::TrendLine {
                start,
                y0,
                end,
                color,
                thickness,
                style,
                ..
            } => {
                println!(
                    "{name:<14} {y0:>12.5}  {color:<10} {thickness}px {style:?} {start} .. {end}"
                );
            }
            ChartObject::Text { text, at, y, color } => {
                println!("{name:<14} {y:>12.5}  {color:<10} \"{text}\" @ {at}");
            }
        }
    }
}

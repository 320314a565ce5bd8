use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use nimbus_core::encode::write_gif;
use nimbus_core::pipeline::{fetch_animation, AnimationRequest};
use nimbus_core::selector::{Area, Param, Satellite};

use crate::defaults::Defaults;
use crate::progress::BarReporter;

#[derive(Args)]
pub struct AnimateArgs {
    /// Defaults file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Satellite mode: GOES, GOESIM or SATELITE
    #[arg(short, long)]
    pub satellite: Option<String>,

    /// Area code (depends on the satellite)
    #[arg(short, long)]
    pub area: Option<String>,

    /// Parameter code (depends on satellite and area; defaults per satellite)
    #[arg(short, long)]
    pub param: Option<String>,

    /// Day to fetch (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Frame delay in hundredths of a second
    #[arg(short, long)]
    pub delay: Option<u16>,

    /// Number of conversion threads
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Play the animation once instead of looping
    #[arg(long)]
    pub no_repeat: bool,

    /// Output GIF path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &AnimateArgs) -> Result<()> {
    let defaults = match args.config {
        Some(ref path) => Defaults::load(path)?,
        None => Defaults::default(),
    };

    let satellite: Satellite = args
        .satellite
        .as_deref()
        .unwrap_or(&defaults.satellite)
        .parse()?;
    let area: Area = args.area.as_deref().unwrap_or(&defaults.area).parse()?;
    let param: Param = match args.param.as_deref().or(defaults.param.as_deref()) {
        Some(code) => code.parse()?,
        None => satellite.default_param(),
    };
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let delay = args.delay.unwrap_or(defaults.delay);
    let threads = args.threads.unwrap_or(defaults.threads).max(1);
    let repeat = if args.no_repeat { false } else { defaults.repeat };
    let output = args.output.clone().unwrap_or_else(|| defaults.output.clone());

    println!("Nimbus");
    println!("  Satellite: {}", satellite);
    println!("  Area:      {}", area);
    println!("  Param:     {}", param);
    println!("  Date:      {}", date);
    println!("  Threads:   {}", threads);
    println!();

    let request = AnimationRequest {
        satellite,
        area,
        param,
        date,
        delay,
        repeat,
        workers: threads,
    };

    let reporter = BarReporter::new();
    let animation = fetch_animation(&request, &reporter)?;
    reporter.finish();

    write_gif(&animation, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "\n{} frame(s) written to {}",
        animation.frames.len(),
        output.display()
    );

    Ok(())
}

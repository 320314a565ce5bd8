use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use nimbus_core::capability::available_hours;
use nimbus_core::selector::{Area, Param, Satellite};

#[derive(Args)]
pub struct HoursArgs {
    /// Satellite mode: GOES, GOESIM or SATELITE
    #[arg(short, long, default_value = "GOES")]
    pub satellite: String,

    /// Area code
    #[arg(short, long, default_value = "BR")]
    pub area: String,

    /// Parameter code (defaults per satellite)
    #[arg(short, long)]
    pub param: Option<String>,

    /// Day to list (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn run(args: &HoursArgs) -> Result<()> {
    let satellite: Satellite = args.satellite.parse()?;
    let area: Area = args.area.parse()?;
    let param: Param = match args.param {
        Some(ref code) => code.parse()?,
        None => satellite.default_param(),
    };
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let hours = available_hours(satellite, area, param, date)?;

    println!(
        "Hours for '{}' in '{}' with '{}' on {}:",
        satellite, area, param, date
    );
    for hour in hours {
        println!("  {}", hour);
    }

    Ok(())
}

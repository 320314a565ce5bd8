use anyhow::Result;
use clap::Args;
use nimbus_core::client::fetch_listing;
use nimbus_core::endpoint::params_url;
use nimbus_core::selector::{Area, Satellite};

#[derive(Args)]
pub struct ParamsArgs {
    /// Satellite mode: GOES, GOESIM or SATELITE
    #[arg(short, long, default_value = "GOES")]
    pub satellite: String,

    /// Area code
    #[arg(short, long, default_value = "BR")]
    pub area: String,
}

pub fn run(args: &ParamsArgs) -> Result<()> {
    let satellite: Satellite = args.satellite.parse()?;
    let area: Area = args.area.parse()?;
    let listing = fetch_listing(&params_url(satellite, area))?;

    println!("Parameters for '{}' in '{}':", satellite, area);
    for entry in listing {
        println!("  {:<6} {}", entry.sigla, entry.nome);
    }

    Ok(())
}

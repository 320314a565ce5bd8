use anyhow::Result;
use clap::Args;
use nimbus_core::client::fetch_listing;
use nimbus_core::endpoint::areas_url;
use nimbus_core::selector::Satellite;

#[derive(Args)]
pub struct AreasArgs {
    /// Satellite mode: GOES, GOESIM or SATELITE
    #[arg(short, long, default_value = "GOES")]
    pub satellite: String,
}

pub fn run(args: &AreasArgs) -> Result<()> {
    let satellite: Satellite = args.satellite.parse()?;
    let listing = fetch_listing(&areas_url(satellite))?;

    println!("Areas for '{}':", satellite);
    for entry in listing {
        println!("  {:<6} {}", entry.sigla, entry.nome);
    }

    Ok(())
}

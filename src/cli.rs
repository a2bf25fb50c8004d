use crate::{
    config::{self, Config},
    gateways,
    shell::Shell,
};
use anyhow::Result;
use clap::Parser;
use shelter_application::prelude::*;
use shelter_entities::geo::MapPoint;
use std::{io, path::PathBuf};

#[derive(Debug, Parser)]
#[command(name = "hurricane-shelters", version, about = "Find hurricane shelters nearby")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Current location in decimal degrees
    #[arg(long, value_name = "LAT,LNG")]
    location: Option<MapPoint>,

    /// Radius of the nearby search in miles
    #[arg(long, value_name = "MILES")]
    radius: Option<f64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(pos) = args.location {
        cfg.location.pos = Some(pos);
    }
    if let Some(miles) = args.radius {
        cfg.shelters.nearby_radius = config::nearby_radius_from_miles(miles)?;
    }
    log::debug!("{cfg:?}");

    let session = Session::new(
        gateways::geocoding_gateway(&cfg)?,
        gateways::location_provider(&cfg),
        gateways::map_launcher(&cfg),
        SessionConfig {
            nearby_radius: cfg.shelters.nearby_radius,
        },
    );
    let stdin = io::stdin();
    let mut shell = Shell::new(session, io::stdout().lock(), args.json);
    shell.run(stdin.lock())?;
    Ok(())
}

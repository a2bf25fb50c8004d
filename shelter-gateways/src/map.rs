use shelter_core::gateways::map::MapLauncher;
use shelter_entities::geo::MapPoint;
#[cfg(not(test))]
use std::process::{Command, Stdio};
use std::{io, thread};

const DEFAULT_ZOOM: u8 = 16;

pub fn osm_url(pos: MapPoint) -> String {
    let (lat, lng) = pos.to_lat_lng_deg();
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map={DEFAULT_ZOOM}/{lat}/{lng}")
}

/// Only logs the map link.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMapLauncher;

impl MapLauncher for LogMapLauncher {
    fn open_map(&self, pos: MapPoint, label: &str) {
        log::info!("{label}: {}", osm_url(pos));
    }
}

/// Opens the map link with the default application of the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMapLauncher;

impl MapLauncher for SystemMapLauncher {
    fn open_map(&self, pos: MapPoint, label: &str) {
        let url = osm_url(pos);
        log::debug!("Opening map for '{label}': {url}");
        thread::spawn(move || {
            if let Err(err) = open_raw(&url) {
                log::warn!("Could not open map application: {err}");
            }
        });
    }
}

#[cfg(not(test))]
fn open_raw(url: &str) -> io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };
    let status = command
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("map launcher exited with {status}"),
        ))
    }
}

/// Don't actually launch any application while running the tests.
#[cfg(test)]
fn open_raw(url: &str) -> io::Result<()> {
    log::debug!("Would open map: {url}");
    Ok(())
}

use anyhow::{anyhow, Context, Result};
use shelter_entities::geo::{Distance, MapPoint};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "shelters.toml";

const ENV_NAME_GEOCODING_BASE_URL: &str = "GEOCODING_BASE_URL";
const ENV_NAME_GEOCODING_API_KEY: &str = "GEOCODING_API_KEY";
const ENV_NAME_LOCATION: &str = "SHELTERS_LOCATION";

#[derive(Debug)]
pub struct Config {
    pub shelters: Shelters,
    pub geocoding: Geocoding,
    pub location: Location,
    pub map: Map,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: PathBuf = match file_path {
            Some(p) => p.as_ref().to_path_buf(),
            None => {
                log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
                PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
            }
        };

        let raw_config = match fs::read_to_string(&file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(location) = env::var(ENV_NAME_LOCATION) {
            let pos = location
                .parse::<MapPoint>()
                .with_context(|| format!("Invalid {ENV_NAME_LOCATION}"))?;
            self.location.pos = Some(pos);
        }
        let base_url = env::var(ENV_NAME_GEOCODING_BASE_URL).ok();
        let api_key = env::var(ENV_NAME_GEOCODING_API_KEY).ok();
        match &mut self.geocoding.gateway {
            Some(GeocodingGateway::Http {
                base_url: url,
                api_key: key,
                ..
            }) => {
                if let Some(base_url) = base_url {
                    *url = base_url;
                }
                if let Some(api_key) = api_key {
                    *key = api_key;
                }
            }
            None => {
                if let (Some(base_url), Some(api_key)) = (base_url, api_key) {
                    log::info!("Use HTTP geocoding gateway from environment");
                    self.geocoding.gateway = Some(GeocodingGateway::Http {
                        base_url,
                        api_key,
                        timeout: None,
                    });
                }
            }
        }
        if self.geocoding.gateway.is_none() {
            log::warn!("No geocoding gateway configured");
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Shelters {
    pub nearby_radius: Distance,
}

#[derive(Debug, Default)]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone)]
pub enum GeocodingGateway {
    Http {
        base_url: String,
        api_key: String,
        timeout: Option<Duration>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub pos: Option<MapPoint>,
    pub permission_granted: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Map {
    pub launcher: MapLauncher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLauncher {
    Log,
    System,
}

pub fn nearby_radius_from_miles(miles: f64) -> Result<Distance> {
    let radius = Distance::from_miles(miles);
    if !miles.is_finite() || !radius.is_valid() {
        return Err(anyhow!("Invalid nearby radius: {miles}"));
    }
    Ok(radius)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            shelters,
            geocoding,
            gateway,
            location,
            map,
        } = from;

        let raw::Shelters {
            nearby_radius_miles,
        } = shelters.unwrap_or_default();
        let shelters = Shelters {
            nearby_radius: nearby_radius_from_miles(nearby_radius_miles)?,
        };

        let geocoding_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(raw::GeocodingGateway::Http) => {
                let raw::HttpGeocoding {
                    base_url,
                    api_key,
                    timeout,
                } = gateway
                    .unwrap_or_default()
                    .http_geocoding
                    .ok_or_else(|| anyhow!("Missing 'http-geocoding' gateway configuration"))?;
                log::info!("Use HTTP geocoding gateway ({base_url})");
                Some(GeocodingGateway::Http {
                    base_url,
                    api_key,
                    timeout,
                })
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geocoding_gateway,
        };

        let raw::Location {
            lat,
            lng,
            permission_granted,
        } = location.unwrap_or_default();
        let pos = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(
                MapPoint::try_from_lat_lng_deg(lat, lng)
                    .ok_or_else(|| anyhow!("Invalid location: {lat},{lng}"))?,
            ),
            (None, None) => None,
            _ => return Err(anyhow!("Location requires both 'lat' and 'lng'")),
        };
        let location = Location {
            pos,
            permission_granted: permission_granted.unwrap_or(true),
        };

        let raw::Map { launcher } = map.unwrap_or_default();
        let map = Map {
            launcher: match launcher {
                raw::MapLauncher::Log => MapLauncher::Log,
                raw::MapLauncher::System => MapLauncher::System,
            },
        };

        Ok(Self {
            shelters,
            geocoding,
            location,
            map,
        })
    }
}

use crate::config::{self, Config};
use anyhow::Result;
use shelter_core::gateways::{
    geocode::{GeoCodingGateway, GeocodeError},
    map::MapLauncher,
};
use shelter_entities::geo::MapPoint;
use shelter_gateways::{
    geocoding::{DisabledGeocoder, HttpGeocoder},
    location::StaticLocationProvider,
    map::{LogMapLauncher, SystemMapLauncher},
};

pub fn geocoding_gateway(cfg: &Config) -> Result<GeocodingGw> {
    let gw = match &cfg.geocoding.gateway {
        Some(config::GeocodingGateway::Http {
            base_url,
            api_key,
            timeout,
        }) => GeocodingGw::new(HttpGeocoder::new(base_url, api_key, *timeout)?),
        None => GeocodingGw::new(DisabledGeocoder),
    };
    Ok(gw)
}

pub fn location_provider(cfg: &Config) -> StaticLocationProvider {
    if cfg.location.permission_granted {
        if cfg.location.pos.is_none() {
            log::warn!("No location configured");
        }
        StaticLocationProvider::new(cfg.location.pos)
    } else {
        log::info!("Access to the location is not permitted");
        StaticLocationProvider::denied()
    }
}

pub fn map_launcher(cfg: &Config) -> MapGw {
    match cfg.map.launcher {
        config::MapLauncher::Log => MapGw::new(LogMapLauncher),
        config::MapLauncher::System => MapGw::new(SystemMapLauncher),
    }
}

pub struct GeocodingGw(Box<dyn GeoCodingGateway + 'static>);

impl GeocodingGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeocodingGw {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Vec<(f64, f64)>, GeocodeError> {
        self.0.resolve_address_lat_lng(address)
    }
}

pub struct MapGw(Box<dyn MapLauncher + 'static>);

impl MapGw {
    pub fn new<M>(gw: M) -> Self
    where
        M: MapLauncher + 'static,
    {
        Self(Box::new(gw))
    }
}

impl MapLauncher for MapGw {
    fn open_map(&self, pos: MapPoint, label: &str) {
        self.0.open_map(pos, label);
    }
}

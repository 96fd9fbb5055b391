//! Fixed reference table of candidate impact cities.
//!
//! Coordinates are display metadata for the map view; the engine itself only
//! reads population and GDP.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub state: String,
    pub population: u64,
    pub gdp_billions: f64,
    pub lat: f64,
    pub lng: f64,
}

pub fn all() -> Vec<City> {
    vec![
        city("New York", "NY", 8_336_817, 1731.0, 40.7128, -74.0060),
        city("Los Angeles", "CA", 3_979_576, 1048.0, 34.0522, -118.2437),
        city("Chicago", "IL", 2_693_976, 689.0, 41.8781, -87.6298),
        city("Houston", "TX", 2_320_268, 490.0, 29.7604, -95.3698),
        city("Phoenix", "AZ", 1_680_992, 243.0, 33.4484, -112.0740),
        city("Philadelphia", "PA", 1_584_064, 431.0, 39.9526, -75.1652),
        city("San Antonio", "TX", 1_547_253, 124.0, 29.4241, -98.4936),
        city("San Diego", "CA", 1_423_851, 206.0, 32.7157, -117.1611),
        city("Dallas", "TX", 1_343_573, 478.0, 32.7767, -96.7970),
        city("Jacksonville", "FL", 949_611, 89.0, 30.3322, -81.6557),
    ]
}

pub fn find(name: &str) -> Option<City> {
    all().into_iter()
        .find(|city| city.name.eq_ignore_ascii_case(name))
}

fn city(name: &str, state: &str, population: u64, gdp_billions: f64, lat: f64, lng: f64) -> City {
    City {
        name: name.to_string(),
        state: state.to_string(),
        population,
        gdp_billions,
        lat,
        lng,
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    asteroid::{Asteroid, Composition},
    cities::{self, City},
    generator::AsteroidSampler,
};

fn default_seed() -> u64 {
    42
}

/// A named strike: a city from the reference table plus either fixed
/// asteroid parameters or a sampler seed.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub asteroid: Option<AsteroidParams>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AsteroidParams {
    pub diameter_km: f64,
    pub velocity_kmh: f64,
    pub density_g_cm3: f64,
    /// Explicit mass override; derived from the sphere volume when omitted.
    #[serde(default)]
    pub mass_kg: Option<f64>,
    pub composition: Composition,
}

impl AsteroidParams {
    pub fn build(&self) -> Asteroid {
        let mut asteroid = Asteroid::from_diameter(
            self.diameter_km,
            self.velocity_kmh,
            self.density_g_cm3,
            self.composition,
        );
        if let Some(mass_kg) = self.mass_kg {
            asteroid.mass_kg = mass_kg;
        }
        asteroid
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown city '{0}'")]
    UnknownCity(String),
}

impl Scenario {
    pub fn city(&self) -> Result<City, ScenarioError> {
        cities::find(&self.city).ok_or_else(|| ScenarioError::UnknownCity(self.city.clone()))
    }

    pub fn asteroid(&self) -> Asteroid {
        match &self.asteroid {
            Some(params) => params.build(),
            None => AsteroidSampler::from_seed(self.seed).sample(),
        }
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

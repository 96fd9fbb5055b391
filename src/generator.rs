//! Demo asteroid sampling.
//!
//! Quartile-weighted draws matching the observed near-Earth-object
//! distributions: pick one of four quartile bands uniformly, then a uniform
//! value inside the band. The engine never samples; it takes whatever
//! parameters this (or any other caller) hands it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::asteroid::{Asteroid, Composition};

/// (low, high) per quartile band.
const DIAMETER_QUARTILES_KM: [(f64, f64); 4] =
    [(0.001, 0.02), (0.02, 0.03), (0.03, 0.09), (0.09, 0.97)];
const VELOCITY_QUARTILES_KMH: [(f64, f64); 4] = [
    (7_162.0, 27_000.0),
    (27_000.0, 43_660.0),
    (43_660.0, 62_400.0),
    (62_400.0, 160_285.0),
];
const DENSITY_QUARTILES_G_CM3: [(f64, f64); 4] =
    [(1.5, 2.0), (2.0, 2.95), (2.95, 3.4), (3.4, 6.3)];

pub struct AsteroidSampler {
    rng: ChaCha8Rng,
}

impl AsteroidSampler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Mass is derived from the sampled diameter and density, so the output
    /// is always internally consistent.
    pub fn sample(&mut self) -> Asteroid {
        let diameter_km = self.sample_quartiles(&DIAMETER_QUARTILES_KM);
        let velocity_kmh = self.sample_quartiles(&VELOCITY_QUARTILES_KMH);
        let density_g_cm3 = self.sample_quartiles(&DENSITY_QUARTILES_G_CM3);
        let composition = Composition::ALL[self.rng.gen_range(0..Composition::ALL.len())];
        Asteroid::from_diameter(diameter_km, velocity_kmh, density_g_cm3, composition)
    }

    fn sample_quartiles(&mut self, quartiles: &[(f64, f64); 4]) -> f64 {
        let (low, high) = quartiles[self.rng.gen_range(0..quartiles.len())];
        self.rng.gen_range(low..high)
    }
}

//! The impact assessment pipeline.
//!
//! Six pure stages composed left to right; data flows strictly forward and
//! identical inputs always produce identical output. All tunables live in
//! [`crate::constants`].

mod demographics;
mod economics;
mod environment;
mod physics;
mod timeline;
mod zones;

pub use demographics::{HumanImpact, ZoneCasualties};
pub use economics::EconomicImpact;
pub use environment::EnvironmentalEffects;
pub use physics::PhysicsSummary;
pub use timeline::{CalloutBasis, EventSpec, Severity, TimelineEvent, EVENT_SPECS};
pub use zones::{km_to_miles, DamageZones, Zone, ZoneRing};

use serde::{Deserialize, Serialize};

use crate::{asteroid::Asteroid, cities::City};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub physics: PhysicsSummary,
    pub zones: DamageZones,
    pub human: HumanImpact,
    pub economic: EconomicImpact,
    pub environmental: EnvironmentalEffects,
    pub timeline: Vec<TimelineEvent>,
}

/// Run the full pipeline. Total for any finite non-negative inputs: numeric
/// edge cases are clamped per stage, never surfaced as NaN or an error.
pub fn assess(asteroid: &Asteroid, city: &City) -> ImpactAssessment {
    let physics = physics::summarize(asteroid);
    let zones = zones::from_energy(physics.energy_megatons);
    let human = demographics::project(&zones, city.population);
    let economic = economics::project(&zones, city.gdp_billions);
    let environmental = environment::project(&physics, &zones, &human);
    let timeline = timeline::project(&human, &economic);

    ImpactAssessment {
        physics,
        zones,
        human,
        economic,
        environmental,
        timeline,
    }
}

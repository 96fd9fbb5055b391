//! Text rendering of an assessment for the CLI runner. Read-only consumer of
//! the engine's output; all number styling goes through [`crate::format`].

use std::fmt::Write as _;

use chrono::Local;

use crate::{
    asteroid::Asteroid,
    cities::City,
    engine::{km_to_miles, ImpactAssessment, Zone},
    format,
};

pub fn render(title: &str, asteroid: &Asteroid, city: &City, assessment: &ImpactAssessment) -> String {
    let mut out = String::new();
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");

    let _ = writeln!(out, "=== Impact assessment: {title} ===");
    let _ = writeln!(out, "Generated {generated}");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Impactor: {} body, {:.0} m across, {:.0} km/h, {:.1} g/cm3, {:.2e} kg",
        asteroid.composition,
        asteroid.diameter_km * 1000.0,
        asteroid.velocity_kmh,
        asteroid.density_g_cm3,
        asteroid.mass_kg
    );
    let _ = writeln!(
        out,
        "Target:   {}, {} ({} residents, GDP {})",
        city.name,
        city.state,
        format::count(city.population),
        format::dollars_billions(city.gdp_billions)
    );
    let _ = writeln!(out);

    let physics = &assessment.physics;
    let _ = writeln!(
        out,
        "Energy:    {} ({:.2e} J)",
        format::megatons(physics.energy_megatons),
        physics.energy_joules
    );
    let _ = writeln!(
        out,
        "Seismic:   magnitude {} equivalent",
        format::magnitude(physics.magnitude)
    );
    let _ = writeln!(out, "Crater:    {:.0} m across", physics.crater_diameter_m);
    let _ = writeln!(out);

    let _ = writeln!(out, "Damage zones:");
    for zone in Zone::ALL {
        let ring = assessment.zones.ring(zone);
        let casualties = &assessment.human.zones[zone.index()];
        let _ = writeln!(
            out,
            "  {:<20} {:>8} ({:>8}) area {:>12}  deaths {:>12}  injuries {:>12}",
            ring.zone.label(),
            format::km(ring.radius_km),
            format::miles(km_to_miles(ring.radius_km)),
            format::sq_km(ring.area_km2),
            format::count(casualties.deaths),
            format::count(casualties.injuries)
        );
    }
    let _ = writeln!(out);

    let human = &assessment.human;
    let _ = writeln!(out, "Casualties: {}", format::count(human.total_casualties));
    let _ = writeln!(out, "Injuries:   {}", format::count(human.total_injuries));
    let _ = writeln!(
        out,
        "Affected:   {}",
        format::count(human.affected_population)
    );
    let _ = writeln!(out);

    let economic = &assessment.economic;
    let _ = writeln!(
        out,
        "Infrastructure damage: {}",
        format::dollars_billions(economic.infrastructure_damage_billions)
    );
    let _ = writeln!(
        out,
        "GDP loss:              {}",
        format::dollars_billions(economic.gdp_loss_billions)
    );
    let _ = writeln!(
        out,
        "Total economic damage: {}",
        format::dollars_billions(economic.total_damage_billions)
    );
    let _ = writeln!(out);

    let env = &assessment.environmental;
    let _ = writeln!(out, "Environmental effects:");
    let _ = writeln!(
        out,
        "  Hazardous air across {} affecting {} people, {} delayed deaths",
        format::miles(env.hazardous_air_range_miles),
        format::count(env.respiratory_affected),
        format::count(env.respiratory_deaths)
    );
    let _ = writeln!(
        out,
        "  Wildfires across {:.0} sq mi (burn radius {}), {:.0} sq mi vegetation lost",
        env.burn_area_sq_miles,
        format::miles(env.burn_radius_miles),
        env.vegetation_loss_sq_miles
    );
    let _ = writeln!(
        out,
        "  Wildlife: {} birds and {} mammals killed; food chains disrupted across {}",
        format::count(env.birds_killed),
        format::count(env.mammals_killed),
        format::miles(env.food_chain_range_miles)
    );
    let _ = writeln!(
        out,
        "  Contamination: {} of CO2, {} t hazardous chemicals, {} people exposed",
        format::megatons(env.co2_released_megatons),
        format::count(env.hazardous_chemicals_tons),
        format::count(env.contamination_exposed)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Projected timeline:");
    for event in &assessment.timeline {
        let _ = writeln!(out, "  [{}] {} - {}", event.offset, event.title, event.description);
    }

    out
}

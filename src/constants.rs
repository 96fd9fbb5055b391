//! Central table of the engine's tunable constants.
//!
//! The four-element arrays are indexed by damage zone, innermost first:
//! total destruction, severe destruction, moderate damage, mild damage.

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Gutenberg-Richter-style offset for the seismic magnitude analog.
pub const MAGNITUDE_OFFSET: f64 = 4.8;

/// Crater scaling: `D_m = CRATER_COEFFICIENT * kilotons^CRATER_EXPONENT * 1000`.
pub const CRATER_COEFFICIENT: f64 = 1.161;
pub const CRATER_EXPONENT: f64 = 0.263;

/// Damage-zone radius in km = `megatons^ZONE_EXPONENT * coefficient`.
pub const ZONE_EXPONENT: f64 = 0.33;
pub const ZONE_RADIUS_COEFFICIENTS: [f64; 4] = [1.2, 2.0, 4.0, 8.0];

/// Share of residents killed inside each zone annulus.
pub const ZONE_FATALITY_RATES: [f64; 4] = [0.95, 0.65, 0.25, 0.05];

/// Injured-to-survivor ratio per zone.
pub const ZONE_INJURY_MULTIPLIERS: [f64; 4] = [2.5, 2.0, 1.5, 0.8];

/// Rebuild cost per km² of each zone, in millions of dollars.
pub const ZONE_COST_MILLIONS_PER_KM2: [f64; 4] = [2000.0, 1000.0, 300.0, 50.0];

/// Share of the city's annual GDP lost in the impact year.
pub const GDP_LOSS_FRACTION: f64 = 0.4;

/// Assumed urban footprint (km²) used to turn city population into a density.
/// Deliberately fixed for every city rather than using true municipal area.
pub const URBAN_AREA_KM2: f64 = 1000.0;

pub const KM_TO_MILES: f64 = 0.621371;

// Environmental secondary-effect multipliers. Heuristic flavor, not physics;
// the contract is only that each output is a pure function of its inputs.

/// Hazardous-air range in miles per mile of mild-damage radius.
pub const HAZARDOUS_AIR_RANGE_FACTOR: f64 = 100.0;
/// Residents with respiratory illness per affected resident.
pub const RESPIRATORY_AFFECTED_FACTOR: f64 = 3.0;
/// Delayed respiratory deaths as a fraction of immediate casualties.
pub const RESPIRATORY_DEATH_FRACTION: f64 = 0.15;
/// Wildfire burn radius in miles per mile of mild-damage radius.
pub const BURN_RADIUS_FACTOR: f64 = 1.5;
/// Urban vegetation lost as a fraction of the burn area.
pub const VEGETATION_LOSS_FRACTION: f64 = 0.4;
pub const BIRDS_PER_SEVERE_MILE: f64 = 50_000.0;
pub const MAMMALS_PER_SEVERE_MILE: f64 = 15_000.0;
/// Food-chain disruption range in miles per mile of mild-damage radius.
pub const FOOD_CHAIN_RANGE_FACTOR: f64 = 200.0;
/// Megatons of CO₂ released per megaton of impact energy.
pub const CO2_MEGATONS_PER_MEGATON: f64 = 800.0;
pub const CHEMICAL_TONS_PER_SEVERE_MILE: f64 = 5_000.0;
/// Residents exposed to contamination per affected resident.
pub const CONTAMINATION_EXPOSURE_FACTOR: f64 = 2.5;

pub mod asteroid;
pub mod cities;
pub mod constants;
pub mod engine;
pub mod format;
pub mod generator;
pub mod report;
pub mod scenario;
pub mod web;

pub use asteroid::{Asteroid, Composition};
pub use cities::City;
pub use engine::{assess, ImpactAssessment};

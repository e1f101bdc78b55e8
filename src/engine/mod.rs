pub mod harvester;

pub use harvester::{HarvestError, Harvester};

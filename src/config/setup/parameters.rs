pub mod physical;
pub mod simulation;

pub use self::simulation::SimulationParameters;

pub mod charge;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod io;
pub mod simulation;

pub use charge::{initialize_random_charges, Charge};
pub use config::SimConfig;
pub use error::{Result, SimError};
pub use simulation::{simulate, Simulation};

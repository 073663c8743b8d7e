// Self-adaptive evolution of piece values and piece-square tables.
//
// Each generation every individual produces one mutated child, parents and
// children play a fixed number of games against randomly drawn peers, and the
// best half survives.

mod agent;
mod bundle;
mod config;
mod genome;
mod trainer;

pub use agent::EvolvableAgent;
pub use bundle::{BundleError, BundleMetadata, ParameterBundle};
pub use config::{TrainerConfig, TrainerError};
pub use genome::{Genome, MUTABLE_PARAMS};
pub use trainer::{Individual, Trainer};

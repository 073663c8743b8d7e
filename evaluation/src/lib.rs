mod evaluator;
mod params;
pub mod pst;
pub mod scores;
pub mod values;

pub use evaluator::Evaluator;
pub use params::EvaluationParameters;
pub use values::{piece_value, KING_VALUE};

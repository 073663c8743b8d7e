mod alpha_beta;
mod config;
mod depth;
mod searcher;

/// Search depth used by table-driven agents unless configured otherwise.
pub const DEFAULT_DEPTH: u8 = 2;

/// Depth an agent switches to once it reaches the endgame from the default.
pub const ENDGAME_DEPTH: u8 = 4;

pub use alpha_beta::{alpha_beta, best_move};
pub use config::{ConfigError, SearchConfig};
pub use depth::AdaptiveDepth;
pub use searcher::Searcher;

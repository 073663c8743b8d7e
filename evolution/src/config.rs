use std::ops::{Range, RangeInclusive};

use search::{ConfigError, DEFAULT_DEPTH};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrainerError {
    #[error("population size must be at least 1")]
    EmptyPopulation,
    #[error("at least one generation is required")]
    ZeroGenerations,
    #[error("each individual must play at least one match per colour")]
    ZeroMatches,
    #[error("invalid {name} range")]
    InvalidRange { name: &'static str },
    #[error(transparent)]
    Search(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    pub population_size: usize,
    pub generations: u32,
    /// Matches played as White, and again as Black, per fitness evaluation.
    pub matches_per_color: u32,
    pub search_depth: u8,
    /// Threads used by each agent to score root moves.
    pub threads: usize,
    /// Full moves after which a match is adjudicated a draw.
    pub move_limit: Option<u32>,
    pub material_range: RangeInclusive<u32>,
    pub table_range: RangeInclusive<i32>,
    pub step_range: Range<f32>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 5,
            matches_per_color: 5,
            search_depth: DEFAULT_DEPTH,
            threads: 1,
            move_limit: None,
            material_range: 0..=1000,
            table_range: -50..=50,
            step_range: 1e-4..0.05,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<(), TrainerError> {
        if self.population_size == 0 {
            return Err(TrainerError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(TrainerError::ZeroGenerations);
        }
        if self.matches_per_color == 0 {
            return Err(TrainerError::ZeroMatches);
        }
        if self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth.into());
        }
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads.into());
        }
        if self.material_range.is_empty() {
            return Err(TrainerError::InvalidRange { name: "material" });
        }
        if self.table_range.is_empty() {
            return Err(TrainerError::InvalidRange { name: "table" });
        }
        let steps = &self.step_range;
        if steps.is_empty()
            || !steps.start.is_finite()
            || !steps.end.is_finite()
            || steps.start <= 0.0
        {
            return Err(TrainerError::InvalidRange { name: "step size" });
        }
        Ok(())
    }
}

use thiserror::Error;

use crate::DEFAULT_DEPTH;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("search needs at least one thread")]
    ZeroThreads,
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below each root move.
    pub depth: u8,
    /// Worker threads used to score root moves. 1 searches inline.
    pub threads: usize,
    /// Visit root moves in random order, so ties break randomly.
    pub shuffle: bool,
}

impl SearchConfig {
    pub fn new(depth: u8, threads: usize) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }

        Ok(Self {
            depth,
            threads,
            shuffle: false,
        })
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            threads: 1,
            shuffle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_depth() {
        assert_eq!(SearchConfig::new(0, 1), Err(ConfigError::ZeroDepth));
    }

    #[test]
    fn test_rejects_zero_threads() {
        assert_eq!(SearchConfig::new(2, 0), Err(ConfigError::ZeroThreads));
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(SearchConfig::new(2, 1).unwrap(), SearchConfig::default());
    }
}

use crate::{DEFAULT_DEPTH, ENDGAME_DEPTH};

/// Search depth that deepens once, the first time the agent sees an endgame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveDepth {
    depth: u8,
    in_endgame: bool,
}

impl AdaptiveDepth {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            in_endgame: false,
        }
    }

    #[inline]
    pub fn current(&self) -> u8 {
        self.depth
    }

    pub fn in_endgame(&self) -> bool {
        self.in_endgame
    }

    /// Records whether the current root position is an endgame and returns
    /// the depth to search it with. Only the default depth is raised.
    pub fn observe(&mut self, is_endgame: bool) -> u8 {
        if !self.in_endgame && is_endgame {
            self.in_endgame = true;
            if self.depth == DEFAULT_DEPTH {
                self.depth = ENDGAME_DEPTH;
            }
        }
        self.depth
    }
}

impl Default for AdaptiveDepth {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

mod game;
mod head_to_head;
mod summary;
mod utils;

pub use game::{Match, MatchResult};
pub use head_to_head::HeadToHead;
pub use summary::Summary;
pub use utils::get_two_mut;

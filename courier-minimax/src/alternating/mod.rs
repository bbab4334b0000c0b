//! The turn-alternating search over a shared clock.
//!
//! Courier One moves and advances the tick; courier Two moves within the same
//! tick. The tree therefore interleaves one ply per courier, and the engine
//! always scores nodes as a pair of per-courier values so any of the three
//! cooperation policies can combine them from the acting courier's
//! perspective.

mod score;
pub use score::{package_heuristic, AgentValues, Scorable};

mod outcome;
pub use outcome::SearchReturn;

mod eval;
pub use eval::{Mode, MinimaxPlanner, SearchConfig, DEFAULT_MAX_DEPTH, DEFAULT_TIME_HORIZON};

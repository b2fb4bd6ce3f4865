//! Move search: minimax with alpha-beta pruning over the window-scanning
//! position heuristic.

mod heuristic;
mod minimax;

pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{Engine, SearchResult, TraceEvent};

use crate::config::SearchConfig;
use crate::game::{Board, Player};

use super::heuristic::{Heuristic, WindowHeuristic};

/// Outcome of a search: the recommended column and its backed-up value.
/// `column` is `None` only when the position has no legal moves (or the
/// game is already decided).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i64,
}

/// Diagnostic events emitted through the optional trace hook. Purely
/// observational; the search result never depends on the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// An alpha-beta cutoff: remaining sibling columns were skipped.
    Cutoff { depth: u32, alpha: i64, beta: i64 },
    /// The move chosen at the root.
    Recommendation { column: Option<usize>, value: i64 },
}

/// Minimax engine with alpha-beta pruning over immutable board snapshots.
///
/// The engine holds no per-search state; every call to [`best_move`]
/// explores the tree rooted at the given board and returns the same
/// result for the same inputs. Ties between columns resolve to the
/// lowest column index.
///
/// [`best_move`]: Engine::best_move
pub struct Engine {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    trace: Option<Box<dyn FnMut(&TraceEvent) + Send>>,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Engine {
            config,
            heuristic: Box::new(WindowHeuristic::new(config.weights)),
            trace: None,
        }
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        Engine {
            config,
            heuristic,
            trace: None,
        }
    }

    /// Install a callback that receives [`TraceEvent`]s during search.
    pub fn set_trace(&mut self, trace: Box<dyn FnMut(&TraceEvent) + Send>) {
        self.trace = Some(trace);
    }

    /// Compute the best column for `mover` on `board`, searching
    /// `config.depth` plies ahead. Returns `(None, 0)` when the board is
    /// already full with no winner; callers must check `column` before
    /// applying the move.
    pub fn best_move(&mut self, board: &Board, mover: Player) -> SearchResult {
        let result = self.minimax(board, self.config.depth, i64::MIN, i64::MAX, mover, true);
        self.emit(TraceEvent::Recommendation {
            column: result.column,
            value: result.value,
        });
        result
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        mover: Player,
        maximizing: bool,
    ) -> SearchResult {
        // Terminal outcomes dominate the heuristic
        if board.is_terminal() {
            let value = if board.has_won(mover.to_cell()) {
                self.config.win_score
            } else if board.has_won(mover.other().to_cell()) {
                -self.config.win_score
            } else {
                0
            };
            return SearchResult {
                column: None,
                value,
            };
        }

        if depth == 0 {
            return SearchResult {
                column: None,
                value: self.heuristic.evaluate(board, mover),
            };
        }

        let legal = board.legal_moves();
        let piece = if maximizing { mover } else { mover.other() }.to_cell();

        // Deterministic fallback: the first legal column, so exact ties
        // between branches always resolve the same way.
        let mut best_column = legal.first().copied();

        if maximizing {
            let mut best_value = i64::MIN;
            for &col in &legal {
                let next = board.child(col, piece).expect("column is legal");
                let value = self
                    .minimax(&next, depth - 1, alpha, beta, mover, false)
                    .value;
                if value > best_value {
                    best_value = value;
                    best_column = Some(col);
                }
                alpha = alpha.max(best_value);
                if alpha >= beta {
                    self.emit(TraceEvent::Cutoff { depth, alpha, beta });
                    break;
                }
            }
            SearchResult {
                column: best_column,
                value: best_value,
            }
        } else {
            let mut best_value = i64::MAX;
            for &col in &legal {
                let next = board.child(col, piece).expect("column is legal");
                let value = self
                    .minimax(&next, depth - 1, alpha, beta, mover, true)
                    .value;
                if value < best_value {
                    best_value = value;
                    best_column = Some(col);
                }
                beta = beta.min(best_value);
                if alpha >= beta {
                    self.emit(TraceEvent::Cutoff { depth, alpha, beta });
                    break;
                }
            }
            SearchResult {
                column: best_column,
                value: best_value,
            }
        }
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(trace) = self.trace.as_mut() {
            trace(&event);
        }
    }
}

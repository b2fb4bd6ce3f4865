use crate::config::HeuristicWeights;
use crate::game::{Board, Cell, Player, COLS, ROWS, WINDOW_LENGTH};

/// Trait for evaluating a board position from a player's perspective.
/// Positive favors `player`, negative favors the opponent.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Default heuristic: scans every 4-cell window in all four directions and
/// scores threats, plus a bonus for occupying the center column.
pub struct WindowHeuristic {
    weights: HeuristicWeights,
}

impl WindowHeuristic {
    pub fn new(weights: HeuristicWeights) -> Self {
        WindowHeuristic { weights }
    }

    fn score_window(&self, own: usize, opp: usize, empty: usize) -> i64 {
        let w = &self.weights;
        let mut score = 0;
        if own == 4 {
            score += w.four;
        } else if own == 3 && empty == 1 {
            score += w.three;
        } else if own == 2 && empty == 2 {
            score += w.two;
        }
        // A window cannot hold three of each piece, so this never overlaps
        // the own-piece cases above.
        if opp == 3 && empty == 1 {
            score -= w.opponent_three;
        }
        score
    }

    fn count_and_score<F>(&self, own_cell: Cell, opp_cell: Cell, cell_at: F) -> i64
    where
        F: Fn(usize) -> Cell,
    {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for i in 0..WINDOW_LENGTH {
            match cell_at(i) {
                c if c == own_cell => own += 1,
                c if c == opp_cell => opp += 1,
                _ => empty += 1,
            }
        }
        self.score_window(own, opp, empty)
    }
}

impl Default for WindowHeuristic {
    fn default() -> Self {
        Self::new(HeuristicWeights::default())
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        // Center column bonus
        let center = COLS / 2;
        for row in 0..ROWS {
            if board.get(row, center) == own_cell {
                score += self.weights.center_bonus;
            }
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - WINDOW_LENGTH {
                score += self.count_and_score(own_cell, opp_cell, |i| board.get(row, col + i));
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - WINDOW_LENGTH {
                score += self.count_and_score(own_cell, opp_cell, |i| board.get(row + i, col));
            }
        }

        // Diagonal, rising left to right
        for row in 0..=ROWS - WINDOW_LENGTH {
            for col in 0..=COLS - WINDOW_LENGTH {
                score += self.count_and_score(own_cell, opp_cell, |i| board.get(row + i, col + i));
            }
        }

        // Diagonal, falling left to right
        for row in 0..=ROWS - WINDOW_LENGTH {
            for col in 0..=COLS - WINDOW_LENGTH {
                score += self.count_and_score(own_cell, opp_cell, |i| {
                    board.get(row + WINDOW_LENGTH - 1 - i, col + i)
                });
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        let h = WindowHeuristic::default();
        assert_eq!(h.evaluate(&board, Player::X), 0);
        assert_eq!(h.evaluate(&board, Player::O), 0);
    }

    #[test]
    fn center_piece_scores_the_bonus() {
        let h = WindowHeuristic::default();
        let board = Board::new().child(3, Cell::X).unwrap();
        // One center piece, no window has two or more pieces yet
        assert_eq!(h.evaluate(&board, Player::X), 3);
        // The opponent gets no center bonus for X's piece
        assert_eq!(h.evaluate(&board, Player::O), 0);
    }

    #[test]
    fn center_scores_higher_than_edge() {
        let h = WindowHeuristic::default();
        let center = Board::new().child(3, Cell::X).unwrap();
        let edge = Board::new().child(0, Cell::X).unwrap();
        assert!(h.evaluate(&center, Player::X) > h.evaluate(&edge, Player::X));
    }

    #[test]
    fn two_in_a_row_scores_per_window() {
        let h = WindowHeuristic::default();
        let mut board = Board::new();
        board.drop_piece(0, Cell::X).unwrap();
        board.drop_piece(1, Cell::X).unwrap();
        // Only the bottom-row window starting at col 0 holds both pieces
        // plus two empties; every other window sees at most one X.
        assert_eq!(h.evaluate(&board, Player::X), 2);
    }

    #[test]
    fn three_with_open_end_is_a_threat() {
        let h = WindowHeuristic::default();
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::X).unwrap();
        }
        let score = h.evaluate(&board, Player::X);
        assert!(score > 5, "open three should score at least one threat, got {score}");
        // The same position is negative from O's perspective
        assert!(h.evaluate(&board, Player::O) < 0);
    }

    #[test]
    fn opponent_threat_is_penalized() {
        let h = WindowHeuristic::default();
        let mut board = Board::new();
        for col in 1..4 {
            board.drop_piece(col, Cell::O).unwrap();
        }
        assert!(h.evaluate(&board, Player::X) < 0);
    }

    #[test]
    fn mixed_window_scores_zero() {
        let h = WindowHeuristic::default();
        // Two of each piece in one window
        assert_eq!(h.score_window(2, 2, 0), 0);
        // Lone pieces
        assert_eq!(h.score_window(1, 0, 3), 0);
        assert_eq!(h.score_window(1, 1, 2), 0);
    }

    #[test]
    fn window_scores_match_weights() {
        let h = WindowHeuristic::default();
        assert_eq!(h.score_window(4, 0, 0), 100);
        assert_eq!(h.score_window(3, 0, 1), 5);
        assert_eq!(h.score_window(2, 0, 2), 2);
        assert_eq!(h.score_window(0, 3, 1), -4);
    }

    #[test]
    fn custom_weights_are_applied() {
        let h = WindowHeuristic::new(HeuristicWeights {
            center_bonus: 7,
            ..HeuristicWeights::default()
        });
        let board = Board::new().child(3, Cell::O).unwrap();
        assert_eq!(h.evaluate(&board, Player::O), 7);
    }
}

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X, // X starts
            outcome: None,
        }
    }

    /// Replay a sequence of columns from the initial position, players
    /// alternating starting with X.
    pub fn from_moves(moves: &[usize]) -> Result<Self, MoveError> {
        let mut state = Self::initial();
        for &col in moves {
            state = state.apply_move(col)?;
        }
        Ok(state)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let new_board = self
            .board
            .child(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        // Check for win
        let outcome = if new_board.has_won(self.current_player.to_cell()) {
            Some(GameOutcome::Winner(self.current_player))
        } else if new_board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board: new_board,
            current_player: self.current_player.other(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::X);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::O);
        assert_eq!(new_state.board().get(0, 3), Cell::X);
        // Original state is unchanged
        assert_eq!(state.board().get(0, 3), Cell::Empty);
    }

    #[test]
    fn test_from_moves() {
        let state = GameState::from_moves(&[3, 3, 4]).unwrap();
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().get(0, 3), Cell::X);
        assert_eq!(state.board().get(1, 3), Cell::O);
        assert_eq!(state.board().get(0, 4), Cell::X);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // X wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // X
            if col < 3 {
                state = state.apply_move(col).unwrap(); // O (row above)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::X)));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_move_after_game_over() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // X
            if col < 3 {
                state = state.apply_move(col).unwrap(); // O
            }
        }
        assert_eq!(state.apply_move(6), Err(MoveError::GameOver));
    }

    #[test]
    fn test_invalid_moves() {
        let state = GameState::initial();
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn));

        let full_col = GameState::from_moves(&[0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(full_col.apply_move(0), Err(MoveError::ColumnFull));
    }
}

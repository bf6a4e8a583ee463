use super::board::{Board, Cell, COLS, CONNECT};
use super::{Chip, Direction};
use crate::config::StandConfig;
use crate::error::{DropError, QueryError};

/// Where a winning line lies: its lowest end and the axis it runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningPlacement {
    starting_cell: Cell,
    direction: Direction,
}

impl WinningPlacement {
    pub fn starting_cell(&self) -> Cell {
        self.starting_cell
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The four connected cells, walking from the starting cell.
    pub fn cells(&self) -> [Cell; CONNECT] {
        let (dr, dc) = self.direction.step();
        let mut cells = [self.starting_cell; CONNECT];
        for i in 1..CONNECT {
            // Placements only come from detected runs, which lie on the grid
            cells[i] = cells[i - 1].offset(dr, dc).unwrap_or(cells[i - 1]);
        }
        cells
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner {
        chip: Chip,
        placement: WinningPlacement,
    },
    Stalemate,
}

/// The Connect Four stand: a 7x6 board plus turn order and outcome.
///
/// Every drop is validated before the board is touched, so a rejected drop
/// leaves the stand exactly as it was. Once an outcome is set the stand is
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayingStand {
    board: Board,
    current_turn: Chip,
    outcome: Option<GameOutcome>,
}

impl PlayingStand {
    /// Create an empty stand with Red to move
    pub fn new() -> Self {
        Self::with_config(&StandConfig::default())
    }

    pub fn with_config(config: &StandConfig) -> Self {
        PlayingStand {
            board: Board::new(),
            current_turn: config.opening_chip,
            outcome: None,
        }
    }

    pub fn drop_red(&mut self, column: i32) -> Result<Cell, DropError> {
        self.drop_chip(Chip::Red, column)
    }

    pub fn drop_black(&mut self, column: i32) -> Result<Cell, DropError> {
        self.drop_chip(Chip::Black, column)
    }

    /// Drop `chip` into `column` and return the cell it landed in.
    ///
    /// Checks run in order: game over, column range, column capacity, turn.
    pub fn drop_chip(&mut self, chip: Chip, column: i32) -> Result<Cell, DropError> {
        if self.is_game_over() {
            return Err(DropError::GameOver);
        }

        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < COLS)
            .ok_or(DropError::InvalidColumn(column))?;

        if self.board.is_column_full(col) {
            return Err(DropError::FullColumn(col));
        }

        if chip != self.current_turn {
            return Err(DropError::OutOfTurn {
                attempted: chip,
                expected: self.current_turn,
            });
        }

        let cell = self
            .board
            .place(col, chip)
            .ok_or(DropError::FullColumn(col))?;

        if let Some(placement) = self.find_win(cell) {
            self.outcome = Some(GameOutcome::Winner { chip, placement });
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Stalemate);
        }

        self.current_turn = chip.other();

        Ok(cell)
    }

    /// First direction, in `Direction::ALL` order, with a long enough run through `cell`
    fn find_win(&self, cell: Cell) -> Option<WinningPlacement> {
        Direction::ALL.into_iter().find_map(|direction| {
            let (starting_cell, len) = self.board.connected_run(cell, direction);
            (len >= CONNECT).then_some(WinningPlacement {
                starting_cell,
                direction,
            })
        })
    }

    pub fn are_four_connected(&self) -> bool {
        matches!(self.outcome, Some(GameOutcome::Winner { .. }))
    }

    /// Check if game is over, by win or stalemate
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Chip> {
        match self.outcome {
            Some(GameOutcome::Winner { chip, .. }) => Some(chip),
            _ => None,
        }
    }

    pub fn winning_placement(&self) -> Result<WinningPlacement, QueryError> {
        match self.outcome {
            None => Err(QueryError::NotOver),
            Some(GameOutcome::Stalemate) => Err(QueryError::Stalemate),
            Some(GameOutcome::Winner { placement, .. }) => Ok(placement),
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Color whose drop is accepted next
    pub fn current_turn(&self) -> Chip {
        self.current_turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn chip_at(&self, cell: Cell) -> Option<Chip> {
        self.board.get(cell)
    }

    pub fn chip_count(&self) -> usize {
        self.board.chip_count()
    }

    /// Get list of open columns, empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }
}

impl Default for PlayingStand {
    fn default() -> Self {
        Self::new()
    }
}

use super::{Chip, Direction};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Chips in a line needed to win.
pub const CONNECT: usize = 4;

/// A grid coordinate. Row 0 is the bottom, column 0 is the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Cell { row, column }
    }

    /// Move by (row, column) delta, `None` if that leaves the grid
    pub fn offset(self, dr: i32, dc: i32) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr as isize)?;
        let column = self.column.checked_add_signed(dc as isize)?;
        if row >= ROWS || column >= COLS {
            return None;
        }
        Some(Cell::new(row, column))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    columns: [[Option<Chip>; ROWS]; COLS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: [[None; ROWS]; COLS],
            heights: [0; COLS],
        }
    }

    /// Get the chip at a cell, `None` when empty or off the grid
    pub fn get(&self, cell: Cell) -> Option<Chip> {
        if cell.row >= ROWS || cell.column >= COLS {
            return None;
        }
        self.columns[cell.column][cell.row]
    }

    /// Number of chips stacked in a column
    pub fn height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    /// Check if a column is full. Columns off the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.heights[column] == ROWS
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    pub fn chip_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Drop a chip into a column and return the cell it landed in.
    /// Returns `None` without touching the board if the column is full or off the grid.
    pub fn place(&mut self, column: usize, chip: Chip) -> Option<Cell> {
        if self.is_column_full(column) {
            return None;
        }
        let row = self.heights[column];
        self.columns[column][row] = Some(chip);
        self.heights[column] += 1;
        Some(Cell::new(row, column))
    }

    /// Find the run of same-colored chips through `cell` along `direction`.
    ///
    /// Returns the run's lowest end (see [`Direction::step`]) and its length.
    /// An empty cell yields a run of length 0 starting at itself.
    pub fn connected_run(&self, cell: Cell, direction: Direction) -> (Cell, usize) {
        let Some(chip) = self.get(cell) else {
            return (cell, 0);
        };
        let (dr, dc) = direction.step();

        let mut start = cell;
        while let Some(prev) = start.offset(-dr, -dc) {
            if self.get(prev) != Some(chip) {
                break;
            }
            start = prev;
        }

        let mut len = 1;
        let mut cur = start;
        while let Some(next) = cur.offset(dr, dc) {
            if self.get(next) != Some(chip) {
                break;
            }
            len += 1;
            cur = next;
        }

        (start, len)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for column in 0..COLS {
                assert_eq!(board.get(Cell::new(row, column)), None);
            }
        }
        assert_eq!(board.chip_count(), 0);
    }

    #[test]
    fn test_place_stacks_from_bottom() {
        let mut board = Board::new();

        assert_eq!(board.place(3, Chip::Red), Some(Cell::new(0, 3)));
        assert_eq!(board.place(3, Chip::Black), Some(Cell::new(1, 3)));
        assert_eq!(board.get(Cell::new(0, 3)), Some(Chip::Red));
        assert_eq!(board.get(Cell::new(1, 3)), Some(Chip::Black));
        assert_eq!(board.height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place(0, Chip::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.place(0, Chip::Black), None);
        assert_eq!(board.height(0), ROWS);
    }

    #[test]
    fn test_off_grid_column() {
        let mut board = Board::new();
        assert!(board.is_column_full(COLS));
        assert_eq!(board.place(COLS, Chip::Red), None);
        assert_eq!(board.height(COLS), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in 0..COLS {
            for _ in 0..ROWS {
                board.place(column, Chip::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.chip_count(), ROWS * COLS);
    }

    #[test]
    fn test_cell_offset_bounds() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Cell::new(1, 1)));
        assert_eq!(Cell::new(ROWS - 1, COLS - 1).offset(1, 0), None);
    }

    #[test]
    fn test_cell_offset_rejects_huge_coordinates() {
        assert_eq!(Cell::new(usize::MAX / 2, 0).offset(0, 0), None);
        assert_eq!(Cell::new(0, usize::MAX).offset(0, 1), None);
        assert_eq!(Cell::new(usize::MAX, 0).offset(-1, 0), None);
    }

    #[test]
    fn test_horizontal_run_starts_leftmost() {
        let mut board = Board::new();
        for column in 1..5 {
            board.place(column, Chip::Red).unwrap();
        }
        let (start, len) = board.connected_run(Cell::new(0, 3), Direction::Horizontal);
        assert_eq!(start, Cell::new(0, 1));
        assert_eq!(len, 4);
    }

    #[test]
    fn test_vertical_run_stops_at_other_color() {
        let mut board = Board::new();
        board.place(2, Chip::Black).unwrap();
        for _ in 0..3 {
            board.place(2, Chip::Red).unwrap();
        }
        let (start, len) = board.connected_run(Cell::new(3, 2), Direction::Vertical);
        assert_eq!(start, Cell::new(1, 2));
        assert_eq!(len, 3);
    }

    #[test]
    fn test_downward_diagonal_run_starts_bottom_right() {
        let mut board = Board::new();
        // Create diagonal \ pattern ending at (0, 6)
        board.place(6, Chip::Red).unwrap();

        board.place(5, Chip::Black).unwrap();
        board.place(5, Chip::Red).unwrap();

        board.place(4, Chip::Black).unwrap();
        board.place(4, Chip::Black).unwrap();
        board.place(4, Chip::Red).unwrap();

        board.place(3, Chip::Black).unwrap();
        board.place(3, Chip::Black).unwrap();
        board.place(3, Chip::Black).unwrap();
        let top = board.place(3, Chip::Red).unwrap();

        let (start, len) = board.connected_run(top, Direction::DownwardDiagonal);
        assert_eq!(start, Cell::new(0, 6));
        assert_eq!(len, 4);
    }

    #[test]
    fn test_empty_cell_has_no_run() {
        let board = Board::new();
        let cell = Cell::new(2, 2);
        assert_eq!(board.connected_run(cell, Direction::UpwardDiagonal), (cell, 0));
    }
}

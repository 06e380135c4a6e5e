use crate::error::GridError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;
/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Yellow,
    Red,
}

impl Cell {
    /// Single-character token used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Yellow => 'Y',
            Cell::Red => 'R',
        }
    }
}

/// Rectangular Connect-N grid. Row 0 is the top, `rows() - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be in `1..=MAX_DIMENSION`.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { rows, columns };
        if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&columns) {
            return Err(invalid);
        }
        let len = rows.checked_mul(columns).ok_or(invalid)?;
        Ok(Grid {
            rows,
            columns,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.columns + col]
    }

    /// Iterate over the rows from top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.columns)
    }

    /// Clear every cell, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// The grid is left untouched when an error is returned.
    pub fn drop_piece(&mut self, col: usize, piece: Cell) -> Result<usize, GridError> {
        if col >= self.columns {
            return Err(GridError::InvalidColumn {
                column: col,
                columns: self.columns,
            });
        }
        if piece == Cell::Empty {
            return Err(GridError::InvalidPiece);
        }

        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(GridError::ColumnFull(col))?;
        self.cells[row * self.columns + col] = piece;
        Ok(row)
    }

    /// Check whether any line through `(row, col)` holds `connect_n`
    /// consecutive `piece` cells.
    ///
    /// Each of the four lines (row, column, both diagonals) is scanned end to
    /// end, so a run anywhere on those lines counts even if it does not
    /// contain `(row, col)` itself.
    pub fn check_line(&self, connect_n: usize, row: usize, col: usize, piece: Cell) -> bool {
        if piece == Cell::Empty || row >= self.rows || col >= self.columns {
            return false;
        }
        let (row, col) = (row as isize, col as isize);
        let rows = 0..self.rows as isize;

        self.run_reaches(connect_n, (0..self.columns as isize).map(|c| (row, c)), piece)
            || self.run_reaches(connect_n, rows.clone().map(|r| (r, col)), piece)
            // r + c constant: runs bottom-left to top-right (/)
            || self.run_reaches(connect_n, rows.clone().map(|r| (r, row + col - r)), piece)
            // c - r constant: runs top-left to bottom-right (\)
            || self.run_reaches(connect_n, rows.map(|r| (r, col - row + r)), piece)
    }

    /// Walk `positions` counting consecutive `piece` cells; anything else,
    /// including positions off the grid, resets the count.
    fn run_reaches(
        &self,
        connect_n: usize,
        positions: impl Iterator<Item = (isize, isize)>,
        piece: Cell,
    ) -> bool {
        let mut count = 0;
        for (r, c) in positions {
            if self.cell_at(r, c) == Some(piece) {
                count += 1;
                if count >= connect_n {
                    return true;
                }
            } else {
                count = 0;
            }
        }
        false
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.columns {
            return None;
        }
        Some(self.get(row as usize, col as usize))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLUMNS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(DEFAULT_ROWS, DEFAULT_COLUMNS).unwrap()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = grid();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLUMNS {
                assert_eq!(grid.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 7),
            Err(GridError::InvalidDimensions { rows: 0, columns: 7 })
        );
        assert_eq!(
            Grid::new(6, 0),
            Err(GridError::InvalidDimensions { rows: 6, columns: 0 })
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        let rows = usize::MAX / 2 + 1;
        assert_eq!(
            Grid::new(rows, 2),
            Err(GridError::InvalidDimensions { rows, columns: 2 })
        );
        assert!(Grid::new(MAX_DIMENSION + 1, 7).is_err());
        assert!(Grid::new(6, MAX_DIMENSION + 1).is_err());

        let grid = Grid::new(MAX_DIMENSION, MAX_DIMENSION).unwrap();
        assert_eq!(grid.rows(), MAX_DIMENSION);
        assert_eq!(grid.columns(), MAX_DIMENSION);
    }

    #[test]
    fn test_drop_piece() {
        let mut grid = grid();

        let row = grid.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(grid.get(5, 3), Cell::Red);

        let row = grid.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(grid.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_lands_on_lowest_empty_row() {
        let mut grid = Grid::new(4, 3).unwrap();
        for (expected, piece) in [(3, Cell::Red), (2, Cell::Yellow), (1, Cell::Red), (0, Cell::Red)] {
            let row = grid.drop_piece(1, piece).unwrap();
            assert_eq!(row, expected);
            assert!((row + 1..4).all(|r| grid.get(r, 1) != Cell::Empty));
        }
        // Neighbouring columns are untouched
        assert!((0..4).all(|r| grid.get(r, 0) == Cell::Empty && grid.get(r, 2) == Cell::Empty));
    }

    #[test]
    fn test_column_full() {
        let mut grid = grid();

        for i in 0..DEFAULT_ROWS {
            let piece = if i % 2 == 0 { Cell::Yellow } else { Cell::Red };
            grid.drop_piece(0, piece).unwrap();
        }

        assert!(grid.is_column_full(0));
        let before = grid.clone();
        assert_eq!(grid.drop_piece(0, Cell::Yellow), Err(GridError::ColumnFull(0)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut grid = grid();
        assert_eq!(
            grid.drop_piece(7, Cell::Red),
            Err(GridError::InvalidColumn {
                column: 7,
                columns: 7
            })
        );
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn test_invalid_piece() {
        let mut grid = grid();
        assert_eq!(grid.drop_piece(2, Cell::Empty), Err(GridError::InvalidPiece));
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn test_full_grid_and_reset() {
        let mut grid = grid();
        for col in 0..DEFAULT_COLUMNS {
            for _ in 0..DEFAULT_ROWS {
                grid.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(grid.is_full());

        grid.reset();
        assert_eq!(grid, Grid::default());
        assert!(!grid.is_full());
    }

    #[test]
    fn test_horizontal_line() {
        let mut grid = grid();
        for col in 0..3 {
            grid.drop_piece(col, Cell::Yellow).unwrap();
        }
        assert!(!grid.check_line(4, 5, 2, Cell::Yellow));

        let row = grid.drop_piece(3, Cell::Yellow).unwrap();
        assert!(grid.check_line(4, row, 3, Cell::Yellow));
        assert!(!grid.check_line(4, row, 3, Cell::Red));
    }

    #[test]
    fn test_vertical_line() {
        let mut grid = grid();
        for _ in 0..3 {
            grid.drop_piece(3, Cell::Red).unwrap();
        }
        assert!(!grid.check_line(4, 3, 3, Cell::Red));

        let row = grid.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 2);
        assert!(grid.check_line(4, row, 3, Cell::Red));
    }

    #[test]
    fn test_rising_diagonal_line() {
        let mut grid = grid();
        // Create diagonal / pattern
        grid.drop_piece(0, Cell::Red).unwrap();

        grid.drop_piece(1, Cell::Yellow).unwrap();
        grid.drop_piece(1, Cell::Red).unwrap();

        grid.drop_piece(2, Cell::Yellow).unwrap();
        grid.drop_piece(2, Cell::Yellow).unwrap();
        grid.drop_piece(2, Cell::Red).unwrap();

        grid.drop_piece(3, Cell::Yellow).unwrap();
        grid.drop_piece(3, Cell::Yellow).unwrap();
        grid.drop_piece(3, Cell::Yellow).unwrap();
        assert!(!grid.check_line(4, 3, 2, Cell::Red));

        let row = grid.drop_piece(3, Cell::Red).unwrap();
        assert!(grid.check_line(4, row, 3, Cell::Red));
    }

    #[test]
    fn test_falling_diagonal_line() {
        let mut grid = grid();
        // Create diagonal \ pattern
        grid.drop_piece(6, Cell::Red).unwrap();

        grid.drop_piece(5, Cell::Yellow).unwrap();
        grid.drop_piece(5, Cell::Red).unwrap();

        grid.drop_piece(4, Cell::Yellow).unwrap();
        grid.drop_piece(4, Cell::Yellow).unwrap();
        grid.drop_piece(4, Cell::Red).unwrap();

        grid.drop_piece(3, Cell::Yellow).unwrap();
        grid.drop_piece(3, Cell::Yellow).unwrap();
        grid.drop_piece(3, Cell::Yellow).unwrap();
        assert!(!grid.check_line(4, 3, 4, Cell::Red));

        let row = grid.drop_piece(3, Cell::Red).unwrap();
        assert!(grid.check_line(4, row, 3, Cell::Red));
    }

    #[test]
    fn test_run_interrupted_by_other_piece() {
        let mut grid = grid();
        for col in [0, 1, 3, 4] {
            grid.drop_piece(col, Cell::Yellow).unwrap();
        }
        grid.drop_piece(2, Cell::Red).unwrap();
        assert!(!grid.check_line(4, 5, 4, Cell::Yellow));
    }

    #[test]
    fn test_line_detected_away_from_reference_point() {
        let mut grid = grid();
        for col in 0..4 {
            grid.drop_piece(col, Cell::Yellow).unwrap();
        }
        // (5, 6) is empty but lies on the same row as the run
        assert!(grid.check_line(4, 5, 6, Cell::Yellow));
    }

    #[test]
    fn test_connect_length_variants() {
        let mut grid = Grid::new(3, 3).unwrap();
        let row = grid.drop_piece(1, Cell::Red).unwrap();
        assert!(grid.check_line(1, row, 1, Cell::Red));
        assert!(!grid.check_line(2, row, 1, Cell::Red));

        // A run longer than the grid can never be formed
        grid.drop_piece(0, Cell::Red).unwrap();
        grid.drop_piece(2, Cell::Red).unwrap();
        assert!(grid.check_line(3, 2, 2, Cell::Red));
        assert!(!grid.check_line(4, 2, 2, Cell::Red));
    }

    #[test]
    fn test_check_line_rejects_empty_piece_and_out_of_bounds() {
        let grid = grid();
        assert!(!grid.check_line(1, 5, 0, Cell::Empty));
        assert!(!grid.check_line(1, 6, 0, Cell::Red));
        assert!(!grid.check_line(1, 0, 7, Cell::Red));
    }

    #[test]
    fn test_rows_iterator_is_top_to_bottom() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.drop_piece(1, Cell::Yellow).unwrap();
        let rows: Vec<&[Cell]> = grid.cells().collect();
        assert_eq!(rows, vec![&[Cell::Empty, Cell::Empty][..], &[Cell::Empty, Cell::Yellow][..]]);
    }
}

/// A square matrix of integers, stored flat in row-major order.
///
/// A magic square is an `n x n` matrix where every row, every column, and
/// both main diagonals share one sum (the magic constant). `Square` itself
/// does not enforce that property; it only enforces squareness. Candidates
/// are validated after construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    n: usize,
    cells: Vec<u32>,
}

impl Square {
    /// Builds a square from its rows.
    ///
    /// # Panics
    /// Panics if `rows` is empty or any row's length differs from the row
    /// count. A ragged input is a caller bug, not something to coerce.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        let n = rows.len();
        assert!(n >= 1, "square must have at least one row");
        let mut cells = Vec::with_capacity(n * n);
        for row in &rows {
            assert_eq!(row.len(), n, "every row must have length {}", n);
            cells.extend_from_slice(row);
        }
        Self { n, cells }
    }

    /// Returns the side length of the square.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the value at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * n + c`.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterates over the rows of the square.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.n)
    }

    /// Sum of the first row. For a magic square this is the magic constant,
    /// the sum shared by every row, column, and diagonal.
    pub fn magic_constant(&self) -> u32 {
        self.cells[..self.n].iter().sum()
    }
}

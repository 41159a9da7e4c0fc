use crate::Square;

/// One row, column, or diagonal extracted from a square for summation.
pub type Line = Vec<u32>;

/// Decomposes a square into the lines the magic property constrains.
pub trait Partitioner {
    /// Returns every line of `square`: all rows, all columns, the primary
    /// diagonal, and the anti-diagonal — `2n + 2` lines for an `n x n`
    /// square.
    fn split(&self, square: &Square) -> Vec<Line>;
}

/// The standard [`Partitioner`].
///
/// Output order is rows (top to bottom), columns (left to right), primary
/// diagonal, anti-diagonal. The validator does not care about order, but
/// keeping it fixed makes the output directly assertable in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePartitioner;

impl Partitioner for LinePartitioner {
    fn split(&self, square: &Square) -> Vec<Line> {
        let n = square.n();
        let mut lines = Vec::with_capacity(2 * n + 2);
        for r in 0..n {
            lines.push((0..n).map(|c| square.get(r, c)).collect());
        }
        for c in 0..n {
            lines.push((0..n).map(|r| square.get(r, c)).collect());
        }
        lines.push((0..n).map(|i| square.get(i, i)).collect());
        lines.push((0..n).map(|i| square.get(i, n - 1 - i)).collect());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_is_2n_plus_2() {
        for n in 1..=5 {
            let rows: Vec<Vec<u32>> = (0..n)
                .map(|r| (0..n).map(|c| (r * n + c) as u32).collect())
                .collect();
            let square = Square::from_rows(rows);
            assert_eq!(
                LinePartitioner.split(&square).len(),
                2 * n + 2,
                "wrong line count for n={}",
                n
            );
        }
    }

    #[test]
    fn lines_come_out_in_order() {
        let square = Square::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let lines = LinePartitioner.split(&square);
        assert_eq!(
            lines,
            vec![
                // rows
                vec![1, 2, 3],
                vec![4, 5, 6],
                vec![7, 8, 9],
                // columns
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![3, 6, 9],
                // diagonals
                vec![1, 5, 9],
                vec![3, 5, 7],
            ]
        );
    }

    #[test]
    fn column_lines_gather_fixed_column() {
        let square = Square::from_rows(vec![vec![10, 20], vec![30, 40]]);
        let lines = LinePartitioner.split(&square);
        assert_eq!(lines[2], vec![10, 30]);
        assert_eq!(lines[3], vec![20, 40]);
    }

    #[test]
    fn single_cell_square_has_four_lines() {
        let square = Square::from_rows(vec![vec![7]]);
        let lines = LinePartitioner.split(&square);
        // One row, one column, and both diagonals reduce to the same cell.
        assert_eq!(lines, vec![vec![7], vec![7], vec![7], vec![7]]);
    }
}

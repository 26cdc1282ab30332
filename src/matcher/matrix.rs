//! Row-major score arena backing the two recurrence matrices.

use crate::{Score, SCORE_MIN};

/// Contiguous n×m matrix of scores, indexed by computed offsets. One flat
/// allocation per matrix per call; rows are `cols`-strided slices of the
/// same buffer.
pub(super) struct ScoreMatrix {
    data: Vec<Score>,
    cols: usize,
}

impl ScoreMatrix {
    pub(super) fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![SCORE_MIN; rows * cols],
            cols,
        }
    }

    #[inline(always)]
    pub(super) fn get(&self, row: usize, col: usize) -> Score {
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub(super) fn set(&mut self, row: usize, col: usize, value: Score) {
        self.data[row * self.cols + col] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_start_at_score_min() {
        let mat = ScoreMatrix::new(2, 3);
        assert_eq!(mat.get(0, 0), SCORE_MIN);
        assert_eq!(mat.get(1, 2), SCORE_MIN);
    }

    #[test]
    fn set_then_get_round_trips_by_offset() {
        let mut mat = ScoreMatrix::new(3, 4);
        mat.set(2, 1, 1.5);
        mat.set(1, 3, -0.25);
        assert_eq!(mat.get(2, 1), 1.5);
        assert_eq!(mat.get(1, 3), -0.25);
        assert_eq!(mat.get(2, 3), SCORE_MIN);
    }
}

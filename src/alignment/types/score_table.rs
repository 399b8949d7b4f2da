use super::{Direction, TracebackTable};
use std::fmt;

/// A diagnostic copy of the dynamic programming matrix: the score and
/// traceback direction of every cell.
///
/// The [`Display`](fmt::Display) implementation labels the columns with the
/// reference and the rows with the query (row and column zero are labeled
/// `-`), and shows each cell as its direction glyph followed by its score:
///
/// ```text
///         -    A    C
///    -   *0   *0   *0
///    A   *0   \2   <1
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScoreTable {
    reference: Vec<u8>,
    query:     Vec<u8>,
    scores:    Vec<i32>,
    traceback: TracebackTable,
}

impl ScoreTable {
    pub(crate) fn new(reference: &[u8], query: &[u8], scores: Vec<i32>, traceback: TracebackTable) -> Self {
        ScoreTable {
            reference: reference.to_vec(),
            query: query.to_vec(),
            scores,
            traceback,
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.query.len() + 1
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.reference.len() + 1
    }

    #[inline]
    #[must_use]
    pub fn score(&self, row: usize, col: usize) -> i32 {
        self.scores[row * self.cols() + col]
    }

    #[inline]
    #[must_use]
    pub fn direction(&self, row: usize, col: usize) -> Direction {
        self.traceback.get(row, col)
    }

    /// The scores of one row of the table.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[i32] {
        let cols = self.cols();
        &self.scores[row * cols..(row + 1) * cols]
    }
}

const CELL_WIDTH: usize = 5;

impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |residues: &[u8], index: usize| if index == 0 { '-' } else { residues[index - 1] as char };

        write!(f, "    ")?;
        for col in 0..self.cols() {
            write!(f, "{:>CELL_WIDTH$}", label(&self.reference, col))?;
        }
        writeln!(f)?;

        let mut buffer = itoa::Buffer::new();
        for row in 0..self.rows() {
            write!(f, "   {}", label(&self.query, row))?;
            for (col, score) in self.row(row).iter().enumerate() {
                let score = buffer.format(*score);
                let glyph = self.direction(row, col).glyph();
                let pad = (CELL_WIDTH - 2).saturating_sub(score.len());
                write!(f, " {:pad$}{glyph}{score}", "")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

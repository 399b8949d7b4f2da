/// The move that produced the score of a cell, followed backwards during the
/// traceback.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Stop     = 0,
    Diagonal = 1,
    Up       = 2,
    Left     = 3,
}

impl Direction {
    /// The glyph used when rendering a [`ScoreTable`](super::ScoreTable).
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Direction::Stop => '*',
            Direction::Diagonal => '\\',
            Direction::Up => '^',
            Direction::Left => '<',
        }
    }
}

/// One direction per cell of the dynamic programming matrix, stored row-major.
/// Rows index the query and columns index the reference, with row and column
/// zero standing for the empty prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracebackTable {
    data: Vec<Direction>,
    cols: usize,
}

impl TracebackTable {
    /// A table of `rows` by `cols` cells, all set to [`Direction::Stop`].
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        TracebackTable {
            data: vec![Direction::Stop; rows * cols],
            cols,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, direction: Direction) {
        self.data[row * self.cols + col] = direction;
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Direction {
        self.data[row * self.cols + col]
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.len().checked_div(self.cols).unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// For the affine gap model, the length of the best horizontal and vertical
/// gap ending at each cell. A single [`Direction::Left`] or [`Direction::Up`]
/// step in the traceback consumes the whole run recorded here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GapLengthTables {
    horizontal: Vec<u32>,
    vertical:   Vec<u32>,
    cols:       usize,
}

impl GapLengthTables {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        GapLengthTables {
            horizontal: vec![0; rows * cols],
            vertical: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    pub(crate) fn set_horizontal(&mut self, row: usize, col: usize, len: u32) {
        self.horizontal[row * self.cols + col] = len;
    }

    #[inline]
    pub(crate) fn set_vertical(&mut self, row: usize, col: usize, len: u32) {
        self.vertical[row * self.cols + col] = len;
    }

    /// The length of the gap in the query (consuming reference residues)
    /// ending at the cell.
    #[inline]
    #[must_use]
    pub fn horizontal(&self, row: usize, col: usize) -> u32 {
        self.horizontal[row * self.cols + col]
    }

    /// The length of the gap in the reference (consuming query residues)
    /// ending at the cell.
    #[inline]
    #[must_use]
    pub fn vertical(&self, row: usize, col: usize) -> u32 {
        self.vertical[row * self.cols + col]
    }
}

/// A cell of the dynamic programming matrix together with its score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScoreCell {
    pub row:   usize,
    pub col:   usize,
    pub score: i32,
}

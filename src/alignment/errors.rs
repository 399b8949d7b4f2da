use std::{error::Error, fmt};

/// An enum representing the errors an aligner can return. All of them are
/// detected before any dynamic programming table is allocated, and no partial
/// results are produced.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlignmentError {
    /// One of the sequences was empty. Holds the name of the sequence
    /// (`"reference"` or `"query"`).
    InvalidInput(&'static str),
    /// A residue is not covered by the similarity matrix
    AlphabetMismatch {
        sequence: &'static str,
        position: usize,
        symbol:   u8,
    },
    /// The gap costs violate `open < 0`, `extend <= 0`, or `open <= extend`.
    /// Linear models report their single cost as both fields
    InvalidGapModel { open: i32, extend: i32 },
    /// The dynamic programming tables would exceed the configured memory
    /// budget
    SequenceTooLarge { rows: usize, cols: usize, max_bytes: usize },
}

impl fmt::Display for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentError::InvalidInput(sequence) => write!(f, "The {sequence} sequence must not be empty!"),
            AlignmentError::AlphabetMismatch {
                sequence,
                position,
                symbol,
            } => write!(
                f,
                "The {sequence} sequence contains the residue '{}' at position {position}, which the similarity matrix does not support!",
                symbol.escape_ascii()
            ),
            AlignmentError::InvalidGapModel { open, extend } => write!(
                f,
                "Invalid gap costs (open = {open}, extend = {extend}). The gap open cost must be negative, the gap extension cost must not be positive, and the open cost cannot exceed the extension cost!"
            ),
            AlignmentError::SequenceTooLarge { rows, cols, max_bytes } => write!(
                f,
                "Sequences too large for pairwise alignment. Size attempted was {rows} x {cols} but the tables may use at most {max_bytes} bytes. If your sequences are large, a seed-and-extend algorithm is likely more appropriate as it will use far less memory."
            ),
        }
    }
}

impl fmt::Debug for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for AlignmentError {}

/// An enum representing errors that can happen when rescoring an aligned
/// pair.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    /// The two aligned rows have different lengths
    LengthMismatch { first: usize, second: usize },
    /// Both rows hold a gap in the given column
    GapAgainstGap(usize),
}

impl fmt::Display for ScoringError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoringError::LengthMismatch { first, second } => {
                write!(f, "The aligned rows have different lengths ({first} and {second})!")
            }
            ScoringError::GapAgainstGap(column) => write!(f, "Both aligned rows contain a gap in column {column}!"),
        }
    }
}

impl fmt::Debug for ScoringError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ScoringError {}

//! Error types for snapshot construction and queries.

use std::io;

use thiserror::Error;

/// Which dimension of the matrix an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Document rows
    Row,
    /// Term columns
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by the matrix, the snapshot and the query engine.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Row or column index outside the matrix shape.
    #[error("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Indexed dimension.
        axis: Axis,
        /// Offending index.
        index: usize,
        /// Size of the dimension.
        len: usize,
    },

    /// Keyword search on a term the vocabulary does not contain.
    #[error("term not found in vocabulary: {0}")]
    TermNotFound(String),

    /// Profile or recommendation request naming an unknown document.
    #[error("document title not found: {0}")]
    TitleNotFound(String),

    /// Profile requested from zero documents.
    #[error("cannot build a profile from an empty document set")]
    EmptyProfileInput,

    /// Matrix shape disagrees with the vocabulary or title list.
    #[error("shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Which dimension disagreed.
        what: &'static str,
        /// Length required by the matrix.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Row-major and column-major layouts disagree on a cell.
    #[error("row and column layouts disagree at ({row}, {col})")]
    LayoutMismatch {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },

    /// Negative or non-finite weight supplied by the builder.
    #[error("invalid weight {value} at ({row}, {col})")]
    InvalidWeight {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Weight as f64.
        value: f64,
    },

    /// Vocabulary contains the same term twice.
    #[error("duplicate term in vocabulary: {0}")]
    DuplicateTerm(String),

    /// Snapshot encoding or decoding failed.
    #[error("snapshot codec error: {0}")]
    Codec(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RecommendError {
    pub(crate) fn row_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { axis: Axis::Row, index, len }
    }

    pub(crate) fn col_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { axis: Axis::Column, index, len }
    }

    /// Creates a `Codec` error from a CBOR error.
    pub(crate) fn codec(source: &serde_cbor::Error) -> Self {
        Self::Codec(source.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecommendError>;

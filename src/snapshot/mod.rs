pub mod serde;
pub mod vocab;

use tracing::{info, warn};

use crate::error::{RecommendError, Result};
use crate::matrix::{SparseMatrixView, Weight};
pub use vocab::{TitleList, Vocabulary};

/// Immutable corpus snapshot: weight matrix + vocabulary + titles.
///
/// Built once by whatever produced the TF-IDF matrix, then shared
/// (`Arc<Snapshot>`) by every query. Nothing in the crate mutates it;
/// a rebuilt corpus is a new snapshot.
///
/// Shape invariants checked at construction:
/// - `matrix.num_rows() == titles.len()`
/// - `matrix.num_cols() == vocabulary.len()`
/// - row and column layouts agree
#[derive(Debug, Clone)]
pub struct Snapshot<N = f32>
where
    N: Weight,
{
    matrix: SparseMatrixView<N>,
    vocabulary: Vocabulary,
    titles: TitleList,
}

impl<N> Snapshot<N>
where
    N: Weight,
{
    /// Assemble a snapshot from its three parts
    ///
    /// # Errors
    /// * `ShapeMismatch` - matrix shape disagrees with titles or vocabulary
    /// * `LayoutMismatch` - the matrix layouts disagree
    pub fn new(matrix: SparseMatrixView<N>, vocabulary: Vocabulary, titles: TitleList) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        if rows != titles.len() {
            return Err(RecommendError::ShapeMismatch {
                what: "document titles",
                expected: rows,
                actual: titles.len(),
            });
        }
        if cols != vocabulary.len() {
            return Err(RecommendError::ShapeMismatch {
                what: "vocabulary",
                expected: cols,
                actual: vocabulary.len(),
            });
        }
        matrix.check_layouts()?;

        if titles.duplicate_count() > 0 {
            warn!(duplicates = titles.duplicate_count(), "duplicate titles, lookup resolves to the first row");
        }
        info!(documents = rows, terms = cols, nnz = matrix.nnz(), "snapshot ready");

        Ok(Self { matrix, vocabulary, titles })
    }

    /// Build everything from plain parts
    /// `triplets` are `(row, col, weight)`, see [`SparseMatrixView::from_triplets`].
    pub fn from_parts<T, S>(titles: T, terms: S, triplets: Vec<(usize, usize, N)>) -> Result<Self>
    where
        T: IntoIterator,
        T::Item: Into<Box<str>>,
        S: IntoIterator,
        S::Item: Into<Box<str>>,
    {
        let titles = TitleList::new(titles);
        let vocabulary = Vocabulary::new(terms)?;
        let matrix = SparseMatrixView::from_triplets(titles.len(), vocabulary.len(), triplets)?;
        Self::new(matrix, vocabulary, titles)
    }

    #[inline]
    pub fn matrix(&self) -> &SparseMatrixView<N> {
        &self.matrix
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn titles(&self) -> &TitleList {
        &self.titles
    }

    #[inline]
    pub fn num_documents(&self) -> usize {
        self.matrix.num_rows()
    }

    #[inline]
    pub fn num_terms(&self) -> usize {
        self.matrix.num_cols()
    }

    /// Column of `term`
    ///
    /// # Errors
    /// * `TermNotFound`
    pub fn term_index(&self, term: &str) -> Result<usize> {
        self.vocabulary
            .index_of(term)
            .ok_or_else(|| RecommendError::TermNotFound(term.to_string()))
    }

    /// First row titled `title`
    ///
    /// # Errors
    /// * `TitleNotFound`
    pub fn row_index(&self, title: &str) -> Result<usize> {
        self.titles
            .row_of(title)
            .ok_or_else(|| RecommendError::TitleNotFound(title.to_string()))
    }

    /// Title of `row`
    ///
    /// # Errors
    /// * `IndexOutOfRange`
    pub fn title(&self, row: usize) -> Result<&str> {
        self.titles
            .title(row)
            .ok_or_else(|| RecommendError::row_out_of_range(row, self.titles.len()))
    }

    /// Term of `col`
    ///
    /// # Errors
    /// * `IndexOutOfRange`
    pub fn term(&self, col: usize) -> Result<&str> {
        self.vocabulary
            .term(col)
            .ok_or_else(|| RecommendError::col_out_of_range(col, self.vocabulary.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_builds_consistent_snapshot() {
        let snap = Snapshot::<f32>::from_parts(
            ["A", "B"],
            ["x", "y", "z"],
            vec![(0, 0, 1.0), (0, 2, 1.0), (1, 1, 1.0), (1, 2, 1.0)],
        )
        .unwrap();
        assert_eq!(snap.num_documents(), 2);
        assert_eq!(snap.num_terms(), 3);
        assert_eq!(snap.term_index("z").unwrap(), 2);
        assert_eq!(snap.row_index("B").unwrap(), 1);
        assert_eq!(snap.title(0).unwrap(), "A");
        assert_eq!(snap.term(1).unwrap(), "y");
    }

    #[test]
    fn lookups_fail_with_typed_errors() {
        let snap = Snapshot::<f32>::from_parts(["A"], ["x"], vec![(0, 0, 1.0)]).unwrap();
        assert!(matches!(snap.term_index("w"), Err(RecommendError::TermNotFound(t)) if t == "w"));
        assert!(matches!(snap.row_index("Z"), Err(RecommendError::TitleNotFound(t)) if t == "Z"));
        assert!(matches!(snap.title(1), Err(RecommendError::IndexOutOfRange { .. })));
        assert!(matches!(snap.term(1), Err(RecommendError::IndexOutOfRange { .. })));
    }

    #[test]
    fn shape_mismatch_is_fatal() {
        let matrix = SparseMatrixView::<f32>::empty(2, 2);
        let err = Snapshot::new(matrix, Vocabulary::new(["x", "y"]).unwrap(), TitleList::new(["only"])).unwrap_err();
        assert!(matches!(err, RecommendError::ShapeMismatch { what: "document titles", expected: 2, actual: 1 }));

        let matrix = SparseMatrixView::<f32>::empty(1, 2);
        let err = Snapshot::new(matrix, Vocabulary::new(["x"]).unwrap(), TitleList::new(["only"])).unwrap_err();
        assert!(matches!(err, RecommendError::ShapeMismatch { what: "vocabulary", expected: 2, actual: 1 }));
    }
}

pub mod iter;

use std::fmt::Debug;

use num::Float;
use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::utils::math::norm;
pub use iter::{ColumnEntries, RowEntries};

/// Floating point types usable as matrix weights, `f32` and `f64`.
/// Scoring always happens in f64, so the weight only needs to widen into it.
/// Summing duplicate cells saturates to infinity instead of wrapping, which
/// construction then rejects as an invalid weight.
pub trait Weight: Float + Into<f64> + Send + Sync + Debug {}

impl<T> Weight for T where T: Float + Into<f64> + Send + Sync + Debug {}

/// Immutable document-term weight matrix with both row and column access.
///
/// The values live once, in row-major (CSR) order. The column-major (CSC)
/// index does not copy them; it stores each entry's position in the row-major
/// value array, so both layouts read the same arena and cannot drift apart.
///
/// Invariants held after construction:
/// - every stored value is finite, > 0
/// - inside each row, column indices ascend; inside each column, row indices ascend
/// - `row_ptr.len() == num_rows + 1`, `col_ptr.len() == num_cols + 1`
#[derive(Debug, Clone)]
pub struct SparseMatrixView<N = f32>
where
    N: Weight,
{
    num_rows: usize,
    num_cols: usize,
    /// CSR: row r occupies `row_ptr[r]..row_ptr[r + 1]`
    row_ptr: Vec<usize>,
    col_ind: Vec<usize>,
    values: Vec<N>,
    /// CSC: column c occupies `col_ptr[c]..col_ptr[c + 1]`
    col_ptr: Vec<usize>,
    row_ind: Vec<usize>,
    /// position of the entry inside `values`
    val_pos: Vec<usize>,
    /// euclidean norm per row, cached at build
    row_norms: Vec<f64>,
}

impl<N> SparseMatrixView<N>
where
    N: Weight,
{
    /// Matrix of the given shape without any stored entry
    pub fn empty(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            row_ptr: vec![0; num_rows + 1],
            col_ind: Vec::new(),
            values: Vec::new(),
            col_ptr: vec![0; num_cols + 1],
            row_ind: Vec::new(),
            val_pos: Vec::new(),
            row_norms: vec![0.0; num_rows],
        }
    }

    /// Build from `(row, col, value)` triplets.
    ///
    /// Triplets hitting the same cell are summed, explicit zeros are dropped.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - a triplet lies outside `num_rows x num_cols`
    /// * `InvalidWeight` - a value is negative or not finite, before or after summing
    pub fn from_triplets(num_rows: usize, num_cols: usize, mut triplets: Vec<(usize, usize, N)>) -> Result<Self> {
        for &(row, col, val) in &triplets {
            if row >= num_rows {
                return Err(RecommendError::row_out_of_range(row, num_rows));
            }
            if col >= num_cols {
                return Err(RecommendError::col_out_of_range(col, num_cols));
            }
            check_weight(row, col, val)?;
        }

        // stable: duplicates are summed in input order
        triplets.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        let mut row_ptr = vec![0usize; num_rows + 1];
        let mut col_ind = Vec::with_capacity(triplets.len());
        let mut values: Vec<N> = Vec::with_capacity(triplets.len());
        let mut rows: Vec<usize> = Vec::with_capacity(triplets.len());

        for (row, col, val) in triplets {
            if let (Some(&last_row), Some(&last_col)) = (rows.last(), col_ind.last()) {
                if last_row == row && last_col == col {
                    if let Some(last_val) = values.last_mut() {
                        *last_val = *last_val + val;
                    }
                    continue;
                }
            }
            rows.push(row);
            col_ind.push(col);
            values.push(val);
        }

        // 合算後の検査とゼロ除去
        let mut kept = 0;
        for i in 0..values.len() {
            check_weight(rows[i], col_ind[i], values[i])?;
            if values[i] == N::zero() {
                continue;
            }
            rows[kept] = rows[i];
            col_ind[kept] = col_ind[i];
            values[kept] = values[i];
            kept += 1;
        }
        rows.truncate(kept);
        col_ind.truncate(kept);
        values.truncate(kept);

        for &row in &rows {
            row_ptr[row + 1] += 1;
        }
        for r in 0..num_rows {
            row_ptr[r + 1] += row_ptr[r];
        }

        let matrix = Self::with_column_index(num_rows, num_cols, row_ptr, col_ind, values);
        debug!(rows = num_rows, cols = num_cols, nnz = matrix.nnz(), "built sparse matrix");
        Ok(matrix)
    }

    /// Build from one sparse `(col, value)` list per row.
    /// Same rules as [`SparseMatrixView::from_triplets`].
    pub fn from_rows(num_cols: usize, rows: Vec<Vec<(usize, N)>>) -> Result<Self> {
        let num_rows = rows.len();
        let triplets = rows
            .into_iter()
            .enumerate()
            .flat_map(|(row, entries)| entries.into_iter().map(move |(col, val)| (row, col, val)))
            .collect();
        Self::from_triplets(num_rows, num_cols, triplets)
    }

    /// Derive the column layout and the row norms from a finished CSR layout
    fn with_column_index(
        num_rows: usize,
        num_cols: usize,
        row_ptr: Vec<usize>,
        col_ind: Vec<usize>,
        values: Vec<N>,
    ) -> Self {
        let nnz = values.len();

        let mut col_ptr = vec![0usize; num_cols + 1];
        for &col in &col_ind {
            col_ptr[col + 1] += 1;
        }
        for c in 0..num_cols {
            col_ptr[c + 1] += col_ptr[c];
        }

        // rows are visited in ascending order, so each column comes out row-sorted
        let mut cursor = col_ptr.clone();
        let mut row_ind = vec![0usize; nnz];
        let mut val_pos = vec![0usize; nnz];
        for row in 0..num_rows {
            for pos in row_ptr[row]..row_ptr[row + 1] {
                let col = col_ind[pos];
                let slot = cursor[col];
                row_ind[slot] = row;
                val_pos[slot] = pos;
                cursor[col] += 1;
            }
        }

        let row_norms = (0..num_rows)
            .map(|row| norm(values[row_ptr[row]..row_ptr[row + 1]].iter().map(|&v| v.into())))
            .collect();

        Self {
            num_rows,
            num_cols,
            row_ptr,
            col_ind,
            values,
            col_ptr,
            row_ind,
            val_pos,
            row_norms,
        }
    }

    /// (num_rows, num_cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of stored (nonzero) entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// All nonzero `(term_index, weight)` pairs of a document row
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `row >= num_rows`
    pub fn row_entries(&self, row: usize) -> Result<RowEntries<'_, N>> {
        if row >= self.num_rows {
            return Err(RecommendError::row_out_of_range(row, self.num_rows));
        }
        Ok(self.row_iter(row))
    }

    /// All nonzero `(doc_index, weight)` pairs of a term column
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `col >= num_cols`
    pub fn column_entries(&self, col: usize) -> Result<ColumnEntries<'_, N>> {
        if col >= self.num_cols {
            return Err(RecommendError::col_out_of_range(col, self.num_cols));
        }
        let range = self.col_ptr[col]..self.col_ptr[col + 1];
        Ok(ColumnEntries::new(
            &self.row_ind[range.clone()],
            &self.val_pos[range],
            &self.values,
        ))
    }

    /// Weight at `(row, col)`, zero when not stored
    pub fn get(&self, row: usize, col: usize) -> Result<N> {
        if col >= self.num_cols {
            return Err(RecommendError::col_out_of_range(col, self.num_cols));
        }
        let entries = self.row_entries(row)?;
        Ok(match entries.indices().binary_search(&col) {
            Ok(i) => entries.values()[i],
            Err(_) => N::zero(),
        })
    }

    /// Euclidean norm of a document row
    pub fn row_norm(&self, row: usize) -> Result<f64> {
        self.row_norms
            .get(row)
            .copied()
            .ok_or_else(|| RecommendError::row_out_of_range(row, self.num_rows))
    }

    /// Every stored entry as `(row, col, value)`, row-major
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, N)> + '_ {
        (0..self.num_rows).flat_map(move |row| self.row_iter(row).map(move |(col, val)| (row, col, val)))
    }

    /// Verify that the column layout reproduces the row layout exactly.
    ///
    /// # Errors
    /// * `LayoutMismatch` - some column entry points at a different cell
    pub fn check_layouts(&self) -> Result<()> {
        if self.row_ind.len() != self.nnz() || self.val_pos.len() != self.nnz() {
            return Err(RecommendError::LayoutMismatch { row: 0, col: 0 });
        }
        let mut seen = vec![false; self.nnz()];
        for col in 0..self.num_cols {
            for slot in self.col_ptr[col]..self.col_ptr[col + 1] {
                let row = self.row_ind[slot];
                let pos = self.val_pos[slot];
                let in_row = row < self.num_rows && (self.row_ptr[row]..self.row_ptr[row + 1]).contains(&pos);
                if !in_row || self.col_ind[pos] != col || seen[pos] {
                    return Err(RecommendError::LayoutMismatch { row, col });
                }
                seen[pos] = true;
            }
        }
        if let Some(pos) = seen.iter().position(|s| !s) {
            let row = self.row_ptr.partition_point(|&start| start <= pos) - 1;
            return Err(RecommendError::LayoutMismatch { row, col: self.col_ind[pos] });
        }
        Ok(())
    }

    /// Row access without the bounds check, for loops over `0..num_rows`
    #[inline]
    pub(crate) fn row_iter(&self, row: usize) -> RowEntries<'_, N> {
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        RowEntries::new(&self.col_ind[range.clone()], &self.values[range])
    }

    #[inline]
    pub(crate) fn row_norm_unchecked(&self, row: usize) -> f64 {
        self.row_norms[row]
    }
}

#[inline]
fn check_weight<N: Weight>(row: usize, col: usize, val: N) -> Result<()> {
    let value: f64 = val.into();
    if !value.is_finite() || value < 0.0 {
        return Err(RecommendError::InvalidWeight { row, col, value });
    }
    Ok(())
}

//! Per-document characteristic terms.

use tracing::debug;

use crate::error::Result;
use crate::matrix::Weight;
use crate::recommender::{hits::Hits, Recommender};
use crate::utils::sort::top_k_desc;

/// The `k` highest-weighted entries of a sparse row, descending.
/// Equal weights keep their entry order. `k == 0` or an empty row gives an
/// empty result; `k` beyond the entry count gives every entry, sorted.
#[inline]
pub fn top_k<N, I>(entries: I, k: usize) -> Vec<(usize, N)>
where
    N: Weight,
    I: IntoIterator<Item = (usize, N)>,
{
    top_k_desc(entries, k)
}

impl<N> Recommender<N>
where
    N: Weight,
{
    /// Top-k `(term_index, weight)` of document row `row`
    ///
    /// # Errors
    /// * `IndexOutOfRange`
    pub fn top_k_row(&self, row: usize, k: usize) -> Result<Vec<(usize, N)>> {
        let entries = self.snapshot.matrix().row_entries(row)?;
        Ok(top_k(entries, k))
    }

    /// Top-k of every row, in row order
    pub fn top_k_all(&self, k: usize) -> Vec<Vec<(usize, N)>> {
        let matrix = self.snapshot.matrix();
        self.map_rows(|row| top_k(matrix.row_iter(row), k))
    }

    /// Most characteristic terms of the document titled `title`
    ///
    /// # Errors
    /// * `TitleNotFound`
    pub fn top_terms(&self, title: &str, k: usize) -> Result<Hits<String>> {
        let row = self.snapshot.row_index(title)?;
        let hits = self.term_hits(&self.top_k_row(row, k)?)?;
        debug!(title, row, k, found = hits.len(), "top terms");
        Ok(hits)
    }

    /// `top_terms` with the configured k
    pub fn top_terms_default(&self, title: &str) -> Result<Hits<String>> {
        self.top_terms(title, self.config.top_terms)
    }

    /// Top terms of every document, in row order
    pub fn top_terms_all(&self, k: usize) -> Result<Vec<Hits<String>>> {
        let matrix = self.snapshot.matrix();
        self.map_rows(|row| self.term_hits(&top_k(matrix.row_iter(row), k)))
            .into_iter()
            .collect()
    }

    fn term_hits(&self, entries: &[(usize, N)]) -> Result<Hits<String>> {
        entries
            .iter()
            .map(|&(col, weight)| Ok((self.snapshot.term(col)?.to_string(), weight.into())))
            .collect::<Result<Vec<(String, f64)>>>()
            .map(Hits::from_iter)
    }
}

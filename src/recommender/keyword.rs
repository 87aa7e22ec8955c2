//! Term -> documents ranking over a single matrix column.

use tracing::debug;

use crate::error::Result;
use crate::matrix::Weight;
use crate::recommender::{hits::Hits, top_terms::top_k, Recommender};

impl<N> Recommender<N>
where
    N: Weight,
{
    /// Documents weighting `term` the most, as `(title, weight)`, descending.
    ///
    /// A known term whose column is empty gives an empty result, so callers
    /// can tell it apart from an unknown term.
    ///
    /// # Errors
    /// * `TermNotFound` - `term` is not in the vocabulary
    pub fn search(&self, term: &str, top_n: usize) -> Result<Hits<String>> {
        let col = self.snapshot.term_index(term)?;
        let entries = self.snapshot.matrix().column_entries(col)?;
        let column_nnz = entries.len();

        let hits = top_k(entries, top_n)
            .into_iter()
            .map(|(row, weight)| Ok((self.snapshot.title(row)?.to_string(), weight.into())))
            .collect::<Result<Vec<(String, f64)>>>()?;

        debug!(term, col, column_nnz, top_n, found = hits.len(), "keyword search");
        Ok(hits.into_iter().collect())
    }

    /// `search` with the configured result count
    pub fn search_default(&self, term: &str) -> Result<Hits<String>> {
        self.search(term, self.config.search_results)
    }

    /// Title of the single document weighting `term` the most,
    /// `None` when the term never got a weight.
    ///
    /// # Errors
    /// * `TermNotFound`
    pub fn best_match(&self, term: &str) -> Result<Option<String>> {
        Ok(self.search(term, 1)?.into_keys().into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::error::RecommendError;
    use crate::recommender::test_support::engines;
    use crate::recommender::Recommender;
    use crate::snapshot::Snapshot;

    fn pairs(hits: crate::recommender::hits::Hits<String>) -> Vec<(String, f64)> {
        hits.into_pairs()
    }

    #[test]
    fn search_returns_top_n_descending() {
        // column {(d0, 0.9), (d1, 0.5), (d2, 0.7)}
        let snap = Snapshot::<f64>::from_parts(
            ["d0", "d1", "d2"],
            ["term"],
            vec![(0, 0, 0.9), (1, 0, 0.5), (2, 0, 0.7)],
        )
        .unwrap();
        let engine = Recommender::new(Arc::new(snap));

        let hits = engine.search("term", 2).unwrap();
        assert_eq!(pairs(hits), vec![("d0".to_string(), 0.9), ("d2".to_string(), 0.7)]);
    }

    #[test]
    fn unknown_term_is_an_error() {
        for engine in engines() {
            assert!(matches!(
                engine.search("nonexistent-term", 5),
                Err(RecommendError::TermNotFound(t)) if t == "nonexistent-term"
            ));
            assert!(engine.best_match("nonexistent-term").is_err());
        }
    }

    #[test]
    fn zero_n_and_short_columns() {
        for engine in engines() {
            assert!(engine.search("rust", 0).unwrap().is_empty());

            // cake: only D
            let hits = engine.search("cake", 10).unwrap();
            assert_eq!(pairs(hits), vec![("D".to_string(), 0.8)]);
        }
    }

    #[test]
    fn ties_resolve_by_row_order() {
        for engine in engines() {
            // tea: A 1.0, B 1.0, C 0.4, E 1.0
            let hits = engine.search("tea", 3).unwrap();
            assert_eq!(hits.into_keys(), vec!["A", "B", "E"]);
        }
    }

    #[test]
    fn empty_column_is_not_an_error() {
        let snap = Snapshot::<f32>::from_parts(["A"], ["seen", "filtered"], vec![(0, 0, 1.0)]).unwrap();
        let engine = Recommender::new(Arc::new(snap));
        assert!(engine.search("filtered", 5).unwrap().is_empty());
        assert_eq!(engine.best_match("filtered").unwrap(), None);
        assert_eq!(engine.best_match("seen").unwrap(), Some("A".to_string()));
    }

    #[test]
    fn repeated_search_is_identical() {
        for engine in engines() {
            let first = engine.search("rust", 3).unwrap();
            let second = engine.search("rust", 3).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.into_keys(), vec!["A", "C", "E"]);
        }
    }
}

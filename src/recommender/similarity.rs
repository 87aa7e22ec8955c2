//! Cosine-similarity recommendation against a profile.

use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::matrix::Weight;
use crate::recommender::{hits::Hits, profile::Profile, Recommender};
use crate::utils::math::sparse_dense_cosine;
use crate::utils::sort::top_k_desc;

impl<N> Recommender<N>
where
    N: Weight,
{
    /// Cosine similarity of `profile` against every document, in row order.
    /// A zero profile or an empty document scores 0.
    ///
    /// # Errors
    /// * `ShapeMismatch` - profile built over a different vocabulary size
    pub fn similarities(&self, profile: &Profile) -> Result<Vec<f64>> {
        let matrix = self.snapshot.matrix();
        if profile.dim() != matrix.num_cols() {
            return Err(RecommendError::ShapeMismatch {
                what: "profile",
                expected: matrix.num_cols(),
                actual: profile.dim(),
            });
        }
        let weights = profile.weights();
        let profile_norm = profile.norm();

        Ok(self.map_rows(|row| {
            sparse_dense_cosine(matrix.row_iter(row), matrix.row_norm_unchecked(row), weights, profile_norm)
        }))
    }

    /// Documents most similar to `profile` as `(title, similarity)`.
    ///
    /// Rows in `seeds` never appear in the result. Order is similarity
    /// descending, then row ascending. Fewer than `n` hits come back when the
    /// corpus runs out of non-seed documents.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - a seed row is outside the corpus
    /// * `ShapeMismatch` - see [`Recommender::similarities`]
    pub fn recommend_scored(&self, profile: &Profile, seeds: &[usize], n: usize) -> Result<Hits<String>> {
        let num_docs = self.snapshot.num_documents();
        let mut excluded = vec![false; num_docs];
        for &seed in seeds {
            if seed >= num_docs {
                return Err(RecommendError::row_out_of_range(seed, num_docs));
            }
            excluded[seed] = true;
        }

        let scores = self.similarities(profile)?;
        // 候補は行順のまま渡すので同点は行番号の昇順
        let candidates = scores
            .into_iter()
            .enumerate()
            .filter(|&(row, _)| !excluded[row]);
        let top = top_k_desc(candidates, n);

        let hits = top
            .into_iter()
            .map(|(row, score)| Ok((self.snapshot.title(row)?.to_string(), score)))
            .collect::<Result<Vec<(String, f64)>>>()?;

        debug!(seeds = seeds.len(), n, found = hits.len(), "recommend");
        Ok(hits.into_iter().collect())
    }

    /// Titles of the documents most similar to `profile`, seeds excluded
    pub fn recommend(&self, profile: &Profile, seeds: &[usize], n: usize) -> Result<Vec<String>> {
        Ok(self.recommend_scored(profile, seeds, n)?.into_keys())
    }

    /// Build a profile from `titles` and recommend `n` other documents
    ///
    /// # Errors
    /// * `EmptyProfileInput`
    /// * `TitleNotFound`
    pub fn recommend_for<T>(&self, titles: &[T], n: usize) -> Result<Vec<String>>
    where
        T: AsRef<str>,
    {
        let profile = self.build_profile(titles)?;
        self.recommend(&profile, profile.seeds(), n)
    }

    /// `recommend_for` with the configured result count
    pub fn recommend_for_default<T>(&self, titles: &[T]) -> Result<Vec<String>>
    where
        T: AsRef<str>,
    {
        self.recommend_for(titles, self.config.recommendations)
    }
}

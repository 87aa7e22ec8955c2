//! Interest profile: the mean vector of a set of seed documents.

use tracing::{debug, warn};

use crate::error::{RecommendError, Result};
use crate::matrix::Weight;
use crate::recommender::Recommender;
use crate::utils::math::norm;

/// Dense profile vector over the whole vocabulary.
///
/// Seeds are stored sorted and distinct: naming the same document twice
/// does not weigh it twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    weights: Vec<f64>,
    seeds: Vec<usize>,
    norm: f64,
}

impl Profile {
    /// Weight per term column
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Distinct seed rows, ascending
    #[inline]
    pub fn seeds(&self) -> &[usize] {
        &self.seeds
    }

    /// Euclidean norm of the weights
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// True when no seed carried any weight
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }
}

impl<N> Recommender<N>
where
    N: Weight,
{
    /// Mean vector of the documents titled `titles`.
    ///
    /// Every title is resolved (first matching row) before anything is
    /// summed, so a bad title never yields a partial profile.
    ///
    /// # Errors
    /// * `EmptyProfileInput` - `titles` is empty
    /// * `TitleNotFound` - some title is unknown
    pub fn build_profile<T>(&self, titles: &[T]) -> Result<Profile>
    where
        T: AsRef<str>,
    {
        if titles.is_empty() {
            return Err(RecommendError::EmptyProfileInput);
        }
        let rows = titles
            .iter()
            .map(|title| self.snapshot.row_index(title.as_ref()))
            .collect::<Result<Vec<usize>>>()?;
        self.build_profile_from_rows(&rows)
    }

    /// Mean vector of the given document rows; duplicates count once.
    ///
    /// # Errors
    /// * `EmptyProfileInput` - `rows` is empty
    /// * `IndexOutOfRange` - some row is outside the corpus
    pub fn build_profile_from_rows(&self, rows: &[usize]) -> Result<Profile> {
        if rows.is_empty() {
            return Err(RecommendError::EmptyProfileInput);
        }
        let matrix = self.snapshot.matrix();

        let mut seeds = rows.to_vec();
        seeds.sort_unstable();
        seeds.dedup();

        // sum first, scale once
        let mut weights = vec![0.0f64; matrix.num_cols()];
        for &row in &seeds {
            for (col, val) in matrix.row_entries(row)? {
                let val: f64 = val.into();
                weights[col] += val;
            }
        }
        let scale = 1.0 / seeds.len() as f64;
        weights.iter_mut().for_each(|w| *w *= scale);

        let norm = norm(weights.iter().copied());
        if norm == 0.0 {
            warn!(seeds = seeds.len(), "profile has no weight, every similarity will be 0");
        }
        debug!(seeds = seeds.len(), requested = rows.len(), norm, "profile built");

        Ok(Profile { weights, seeds, norm })
    }
}

//! Vector arithmetic used by the scoring paths.
//! Everything is accumulated in f64 regardless of the stored weight type.

/// Squared euclidean norm
#[inline]
pub fn norm_sq<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().map(|v| v * v).sum()
}

/// Euclidean norm, scaled by the largest magnitude first so that squaring
/// large finite weights does not overflow to infinity.
#[inline]
pub fn norm<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let values = values.into_iter();
    let max = values.clone().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if max == 0.0 || !max.is_finite() {
        return max;
    }
    max * norm_sq(values.map(|v| v / max)).sqrt()
}

/// cosθ = A・B / (|A||B|) of a sparse vector against a dense one
///
/// Each factor is divided by its vector's norm before multiplying, so every
/// term stays within [-1, 1] and the sum cannot overflow.
/// A zero vector is similar to nothing, so either norm being 0 gives 0, as
/// does any result that is not finite. Otherwise the result is clamped to
/// [0, 1], inputs are never negative.
///
/// # Arguments
/// * `sparse` - (index, value) pairs, indices must be `< dense.len()`
/// * `sparse_norm` - euclidean norm of `sparse`
/// * `dense` - dense vector
/// * `dense_norm` - euclidean norm of `dense`
#[inline]
pub fn sparse_dense_cosine<N, I>(sparse: I, sparse_norm: f64, dense: &[f64], dense_norm: f64) -> f64
where
    N: Into<f64>,
    I: IntoIterator<Item = (usize, N)>,
{
    if sparse_norm == 0.0 || dense_norm == 0.0 {
        return 0.0;
    }
    let sim: f64 = sparse
        .into_iter()
        .map(|(idx, val)| {
            let val: f64 = val.into();
            (dense[idx] / dense_norm) * (val / sparse_norm)
        })
        .sum();
    if sim.is_finite() {
        sim.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_skips_absent_dimensions() {
        let dense = vec![0.5, 0.5, 1.0];
        let sparse = vec![(0usize, 1.0f32), (2, 1.0)];
        let expected = 1.5 / (norm(dense.iter().copied()) * 2f64.sqrt());
        let score = sparse_dense_cosine(sparse, 2f64.sqrt(), &dense, norm(dense.iter().copied()));
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn norm_sq_of_empty_is_zero() {
        assert_eq!(norm_sq(std::iter::empty()), 0.0);
        assert_eq!(norm_sq([3.0, 4.0]), 25.0);
        assert_eq!(norm(Vec::<f64>::new()), 0.0);
        assert_eq!(norm([3.0, 4.0]), 5.0);
    }

    #[test]
    fn norm_of_large_weights_is_finite() {
        let n = norm([1e200, 1e200]);
        assert!(n.is_finite());
        assert!((n / (1e200 * std::f64::consts::SQRT_2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_zero_norm_is_zero() {
        assert_eq!(sparse_dense_cosine(vec![(0usize, 1.0f64)], 0.0, &[1.0], 1.0), 0.0);
        assert_eq!(sparse_dense_cosine(vec![(0usize, 1.0f64)], 1.0, &[0.0], 0.0), 0.0);
    }

    #[test]
    fn cosine_of_large_weights_with_itself_is_one() {
        let dense = [1e200, 1e200];
        let n = norm(dense);
        let score = sparse_dense_cosine(vec![(0usize, 1e200f64), (1, 1e200)], n, &dense, n);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_non_finite_is_zero() {
        let score = sparse_dense_cosine(vec![(0usize, 1.0f64)], 1.0, &[f64::NAN], 1.0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn cosine_clamps_rounding_overshoot() {
        let a: f64 = 0.1 + 0.2;
        let score = sparse_dense_cosine(vec![(0usize, a * 1.000_000_1)], a, &[a], a);
        assert!(score <= 1.0);
        assert!((score - 1.0).abs() < 1e-6);
    }
}

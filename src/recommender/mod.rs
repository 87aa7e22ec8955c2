pub mod hits;
pub mod keyword;
pub mod profile;
pub mod similarity;
pub mod top_terms;

use std::sync::Arc;

use rayon::prelude::*;
use tracing::info;

use crate::config::RecommenderConfig;
use crate::matrix::Weight;
use crate::snapshot::Snapshot;

/// Query engine over a shared [`Snapshot`].
///
/// Every query borrows `&self` and reads the snapshot only, so one engine
/// (or many engines holding the same `Arc`) can serve concurrent callers.
/// Replacing the corpus means building a new snapshot and handing it over
/// with `set_snapshot`; callers still holding the old `Arc` keep reading
/// the old one.
#[derive(Debug, Clone)]
pub struct Recommender<N = f32>
where
    N: Weight,
{
    snapshot: Arc<Snapshot<N>>,
    config: RecommenderConfig,
}

impl<N> Recommender<N>
where
    N: Weight,
{
    /// Create an engine with the default configuration
    pub fn new(snapshot: Arc<Snapshot<N>>) -> Self {
        Self::with_config(snapshot, RecommenderConfig::default())
    }

    pub fn with_config(snapshot: Arc<Snapshot<N>>, config: RecommenderConfig) -> Self {
        Self { snapshot, config }
    }

    /// Swap in a freshly built snapshot
    pub fn set_snapshot(&mut self, snapshot: Arc<Snapshot<N>>) {
        info!(
            documents = snapshot.num_documents(),
            terms = snapshot.num_terms(),
            "snapshot replaced"
        );
        self.snapshot = snapshot;
    }

    #[inline]
    pub fn snapshot(&self) -> &Arc<Snapshot<N>> {
        &self.snapshot
    }

    #[inline]
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Run `f` once per document row and collect the results in row order.
    /// Large corpora go through rayon; every row writes only its own slot.
    pub(crate) fn map_rows<T, F>(&self, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        let rows = self.snapshot.num_documents();
        if rows >= self.config.parallel_threshold {
            (0..rows).into_par_iter().map(f).collect()
        } else {
            (0..rows).map(f).collect()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::config::RecommenderConfig;
    use crate::recommender::Recommender;
    use crate::snapshot::Snapshot;

    /// 5 docs x 4 terms
    ///
    /// |      | rust | cargo | tea | cake |
    /// |------|------|-------|-----|------|
    /// | A    | 1.0  |       | 1.0 |      |
    /// | B    |      | 1.0   | 1.0 |      |
    /// | C    | 0.9  | 0.5   | 0.4 |      |
    /// | D    | 0.5  |       |     | 0.8  |
    /// | E    | 0.7  | 0.5   | 1.0 |      |
    pub fn corpus() -> Snapshot<f64> {
        Snapshot::from_parts(
            ["A", "B", "C", "D", "E"],
            ["rust", "cargo", "tea", "cake"],
            vec![
                (0, 0, 1.0), (0, 2, 1.0),
                (1, 1, 1.0), (1, 2, 1.0),
                (2, 0, 0.9), (2, 1, 0.5), (2, 2, 0.4),
                (3, 0, 0.5), (3, 3, 0.8),
                (4, 0, 0.7), (4, 1, 0.5), (4, 2, 1.0),
            ],
        )
        .unwrap()
    }

    /// Same corpus, sequential and parallel scans
    pub fn engines() -> [Recommender<f64>; 2] {
        let snapshot = Arc::new(corpus());
        let sequential = RecommenderConfig { parallel_threshold: usize::MAX, ..Default::default() };
        let parallel = RecommenderConfig { parallel_threshold: 0, ..Default::default() };
        [
            Recommender::with_config(Arc::clone(&snapshot), sequential),
            Recommender::with_config(snapshot, parallel),
        ]
    }
}

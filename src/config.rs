use serde::{Deserialize, Serialize};
use tracing::warn;

/// Query defaults and execution knobs for [`crate::Recommender`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Terms returned per document when the caller gives no k
    pub top_terms: usize,
    /// Documents returned by keyword search when the caller gives no n
    pub search_results: usize,
    /// Documents returned by recommendation when the caller gives no n
    pub recommendations: usize,
    /// Row count from which row scans run on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_terms: 25,
            search_results: 10,
            recommendations: 10,
            parallel_threshold: 1024,
        }
    }
}

impl RecommenderConfig {
    /// Defaults overridden by `TFIDF_REC_TOP_TERMS`, `TFIDF_REC_SEARCH_RESULTS`,
    /// `TFIDF_REC_RECOMMENDATIONS` and `TFIDF_REC_PARALLEL_THRESHOLD`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    /// Unparsable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let fields: [(&str, &mut usize); 4] = [
            ("TFIDF_REC_TOP_TERMS", &mut config.top_terms),
            ("TFIDF_REC_SEARCH_RESULTS", &mut config.search_results),
            ("TFIDF_REC_RECOMMENDATIONS", &mut config.recommendations),
            ("TFIDF_REC_PARALLEL_THRESHOLD", &mut config.parallel_threshold),
        ];
        for (key, slot) in fields {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<usize>() {
                    Ok(value) => *slot = value,
                    Err(e) => warn!(key, value = %raw, error = %e, "ignoring invalid config value"),
                }
            }
        }
        config
    }
}

//! This crate is a retrieval and recommendation engine over a TF-IDF document-term matrix.
pub mod config;
pub mod error;
pub mod matrix;
pub mod recommender;
pub mod snapshot;
pub mod utils;

/// Recommender
/// The query engine of this crate. It answers three kinds of question over
/// one corpus snapshot:
/// - `top_terms`: the most characteristic terms of a document (word clouds)
/// - `search`: the documents weighting a term the most
/// - `recommend_for`: the documents most similar to a set of documents,
///   taken together as one interest profile (cosine similarity)
///
/// `Recommender<N>` is generic over the stored weight type `N`
/// (`f32` by default, also `f64`).
/// All scoring runs in f64.
///
/// The snapshot is passed as `Arc<Snapshot>` and may be shared among many
/// `Recommender` instances and threads. Queries never mutate it.
///
/// # Thread Safety
/// Queries take `&self`. Row scans above `parallel_threshold` rows run on
/// the rayon pool.
pub use recommender::Recommender;

/// Corpus Snapshot
/// The immutable input of every query:
/// - the weight matrix (documents x terms)
/// - the vocabulary (term <-> column)
/// - the document titles (row -> title, title -> first row)
///
/// Shapes are checked once at construction.
///
/// # Serialization
/// Supported, CBOR through `to_cbor` / `write_cbor`.
///
/// # Deserialization
/// Through `SnapshotData`, which rebuilds the lookup tables and the column
/// layout (`from_cbor` / `read_cbor` do this for you).
pub use snapshot::Snapshot;

/// Snapshot Data Structure for Serialization
/// Plain titles / terms / triplets without any index.
/// Convert with `into_snapshot`.
pub use snapshot::serde::SnapshotData;

/// Vocabulary and Title List
/// Ordered lookups backing a `Snapshot`.
pub use snapshot::vocab::{TitleList, Vocabulary};

/// Sparse Matrix View
/// Document-term weights stored once, readable by row (a document's terms)
/// and by column (a term's documents) in time proportional to the slice.
pub use matrix::{SparseMatrixView, Weight};

/// Profile
/// Mean vector of a set of seed documents, consumed by `recommend`.
pub use recommender::profile::Profile;

/// Search Hits and Hit Entry structures
/// - `Hits`: ranked results of one query, descending by score
/// - `HitEntry`: one result, the key (title or term) and its score
pub use recommender::hits::{HitEntry, Hits};

/// Top-k selection over sparse `(index, weight)` entries
pub use recommender::top_terms::top_k;

pub use config::RecommenderConfig;
pub use error::{RecommendError, Result};

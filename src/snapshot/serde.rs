use std::{fs, io::{BufWriter, Write}, path::Path};

use ::serde::{de::DeserializeOwned, ser::SerializeStruct, Deserialize, Serialize};
use tracing::info;

use crate::error::{RecommendError, Result};
use crate::matrix::Weight;
use crate::snapshot::Snapshot;

/// Plain, index-free form of a [`Snapshot`] for storage.
/// Holds no lookup tables and no column layout; `into_snapshot` rebuilds
/// and validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotData<N = f32> {
    /// Document titles in row order
    pub titles: Vec<String>,
    /// Vocabulary in column order
    pub terms: Vec<String>,
    /// Nonzero entries as (row, col, weight)
    pub triplets: Vec<(usize, usize, N)>,
}

impl<N> SnapshotData<N>
where
    N: Weight,
{
    /// Rebuild the indexed snapshot
    pub fn into_snapshot(self) -> Result<Snapshot<N>> {
        Snapshot::from_parts(self.titles, self.terms, self.triplets)
    }
}

impl<N> From<&Snapshot<N>> for SnapshotData<N>
where
    N: Weight,
{
    fn from(snapshot: &Snapshot<N>) -> Self {
        Self {
            titles: snapshot.titles().iter().map(str::to_string).collect(),
            terms: snapshot.vocabulary().iter().map(str::to_string).collect(),
            triplets: snapshot.matrix().triplets().collect(),
        }
    }
}

impl<N> Serialize for Snapshot<N>
where
    N: Weight + Serialize,
{
    /// Serialized with the same fields as `SnapshotData`;
    /// deserialize through `SnapshotData` and `into_snapshot`.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        let titles: Vec<&str> = self.titles().iter().collect();
        let terms: Vec<&str> = self.vocabulary().iter().collect();
        let triplets: Vec<(usize, usize, N)> = self.matrix().triplets().collect();

        let mut state = serializer.serialize_struct("SnapshotData", 3)?;
        state.serialize_field("titles", &titles)?;
        state.serialize_field("terms", &terms)?;
        state.serialize_field("triplets", &triplets)?;
        state.end()
    }
}

impl<N> Snapshot<N>
where
    N: Weight + Serialize + DeserializeOwned,
{
    /// Encode as CBOR
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        serde_cbor::to_vec(self).map_err(|e| RecommendError::codec(&e))
    }

    /// Decode CBOR written by [`Snapshot::to_cbor`] and rebuild the indexes
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        let data: SnapshotData<N> = serde_cbor::from_slice(bytes).map_err(|e| RecommendError::codec(&e))?;
        data.into_snapshot()
    }

    /// Write the snapshot to `path` as CBOR
    pub fn write_cbor<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_cbor::to_writer(&mut writer, self).map_err(|e| RecommendError::codec(&e))?;
        writer.flush()?;
        info!(path = %path.as_ref().display(), "snapshot written");
        Ok(())
    }

    /// Read a CBOR snapshot from `path`
    pub fn read_cbor<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        info!(path = %path.as_ref().display(), bytes = bytes.len(), "loading snapshot");
        Self::from_cbor(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot<f32> {
        Snapshot::from_parts(
            ["A", "B", "C"],
            ["x", "y", "z"],
            vec![(0, 0, 1.0), (0, 2, 1.0), (1, 1, 1.0), (1, 2, 1.0), (2, 0, 0.25)],
        )
        .unwrap()
    }

    #[test]
    fn cbor_roundtrip_preserves_entries() {
        let snap = sample();
        let bytes = snap.to_cbor().unwrap();
        let back = Snapshot::<f32>::from_cbor(&bytes).unwrap();

        assert_eq!(back.titles().iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(back.vocabulary().iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(
            back.matrix().triplets().collect::<Vec<_>>(),
            snap.matrix().triplets().collect::<Vec<_>>()
        );
    }

    #[test]
    fn data_form_matches_serialized_snapshot() {
        let snap = sample();
        let data = SnapshotData::from(&snap);
        assert_eq!(serde_cbor::to_vec(&data).unwrap(), snap.to_cbor().unwrap());
    }

    #[test]
    fn invalid_data_is_rejected_on_rebuild() {
        let data = SnapshotData::<f32> {
            titles: vec!["A".into()],
            terms: vec!["x".into(), "x".into()],
            triplets: vec![],
        };
        assert!(matches!(data.into_snapshot(), Err(RecommendError::DuplicateTerm(_))));

        assert!(matches!(
            Snapshot::<f32>::from_cbor(b"not cbor"),
            Err(RecommendError::Codec(_))
        ));
    }

    #[test]
    fn file_roundtrip() {
        let path = std::env::temp_dir().join(format!("tfidf-recommender-{}.cbor", std::process::id()));
        let snap = sample();
        snap.write_cbor(&path).unwrap();
        let back = Snapshot::<f32>::read_cbor(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(back.num_documents(), 3);
        assert_eq!(back.matrix().nnz(), snap.matrix().nnz());
    }
}

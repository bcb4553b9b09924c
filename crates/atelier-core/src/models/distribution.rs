//! Q-sort score-bucket distributions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ItemId;

/// Score label → items placed in that bucket.
///
/// Labels arrive as strings (JSON object keys) and are parsed during
/// vectorization; a label that is not an integer invalidates only its
/// own bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    pub buckets: BTreeMap<String, Vec<ItemId>>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `items` in the bucket labelled `score`.
    pub fn with_bucket(mut self, score: impl ToString, items: Vec<ItemId>) -> Self {
        self.buckets.insert(score.to_string(), items);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }
}

/// One participant's submitted Q-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSort {
    pub participant_id: String,
    pub participant_label: String,
    pub distribution: Distribution,
}

impl ParticipantSort {
    pub fn new(
        participant_id: impl Into<String>,
        participant_label: impl Into<String>,
        distribution: Distribution,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            participant_label: participant_label.into(),
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_plain_object() {
        let d: Distribution = serde_json::from_str(r#"{"-1": [1, 2], "2": [3]}"#).unwrap();
        assert_eq!(d.buckets["-1"], vec![ItemId(1), ItemId(2)]);
        assert_eq!(d.buckets["2"], vec![ItemId(3)]);
    }

    #[test]
    fn empty_buckets_count_as_empty() {
        assert!(Distribution::new().with_bucket(0, vec![]).is_empty());
        assert!(!Distribution::new().with_bucket(0, vec![ItemId(1)]).is_empty());
    }
}

//! Keyframe data model.
//!
//! A `Keyframe` pins six transform values (position x/y/z, rotation x/y/z)
//! at a progress fraction. A `KeyframeTable` is the validated, key-sorted
//! collection that scroll progress is sampled against.
//!
//! JSON shapes accepted for a table (`KeyframeSpec`):
//! - an object keyed by progress: `{ "0": [0,-2,0,0,0,0], "1": { "values": [...], "easing": "easeOut" } }`
//! - a list: `[{ "key": 0, "values": [...], "easing": "easeIn" }, ...]`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::KeyframeError;
use crate::interp::Easing;
use crate::sampling::sample_sorted;
use crate::Result;

/// Number of channels carried by every keyframe.
pub const CHANNELS: usize = 6;

/// Position x/y/z followed by rotation x/y/z (radians).
pub type TransformValues = [f32; CHANNELS];

/// A single checkpoint of transform values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Progress fraction this keyframe is pinned to.
    pub key: f32,
    pub values: TransformValues,
    /// Curve applied to the segment that starts at this keyframe.
    #[serde(default)]
    pub easing: Easing,
}

impl Keyframe {
    /// Linear keyframe at `key`.
    pub fn new(key: f32, values: TransformValues) -> Self {
        Self {
            key,
            values,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    pub fn position(&self) -> [f32; 3] {
        [self.values[0], self.values[1], self.values[2]]
    }

    #[inline]
    pub fn rotation(&self) -> [f32; 3] {
        [self.values[3], self.values[4], self.values[5]]
    }
}

/// Validated keyframe table: at least two entries, finite and unique keys,
/// sorted ascending. Read-only once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KeyframeSpec", into = "KeyframeSpec")]
pub struct KeyframeTable {
    frames: Vec<Keyframe>,
}

impl KeyframeTable {
    /// Validate and sort `frames`.
    pub fn new(mut frames: Vec<Keyframe>) -> Result<Self> {
        if frames.len() < 2 {
            return Err(KeyframeError::invalid(format!(
                "keyframe table needs at least 2 entries, got {}",
                frames.len()
            )));
        }
        for frame in &frames {
            if !frame.key.is_finite() {
                return Err(KeyframeError::invalid(format!(
                    "keyframe key must be finite, got {}",
                    frame.key
                )));
            }
            if frame.values.iter().any(|v| !v.is_finite()) {
                return Err(KeyframeError::invalid(format!(
                    "keyframe at {} has non-finite values",
                    frame.key
                )));
            }
        }
        frames.sort_by(|a, b| a.key.total_cmp(&b.key));
        if let Some(pair) = frames.windows(2).find(|w| w[0].key == w[1].key) {
            return Err(KeyframeError::invalid(format!(
                "duplicate keyframe key {}",
                pair[0].key
            )));
        }
        Ok(Self { frames })
    }

    /// Build a linear table from `(key, values)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f32, TransformValues)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(key, values)| Keyframe::new(key, values))
                .collect(),
        )
    }

    /// Sample the table at `progress`, clamping to the boundary keyframes.
    #[inline]
    pub fn sample(&self, progress: f32) -> TransformValues {
        sample_sorted(&self.frames, progress)
    }

    pub fn keys(&self) -> impl Iterator<Item = f32> + '_ {
        self.frames.iter().map(|f| f.key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.frames.iter()
    }

    pub fn as_slice(&self) -> &[Keyframe] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn first(&self) -> &Keyframe {
        &self.frames[0]
    }

    pub fn last(&self) -> &Keyframe {
        &self.frames[self.frames.len() - 1]
    }
}

/// Value side of the keyed-object table form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawKeyframe {
    Values(TransformValues),
    Full {
        values: TransformValues,
        #[serde(default)]
        easing: Easing,
    },
}

/// Unvalidated table as authored in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyframeSpec {
    Keyed(BTreeMap<String, RawKeyframe>),
    List(Vec<Keyframe>),
}

impl KeyframeSpec {
    /// Flatten into keyframes without validating ordering or count.
    pub fn to_keyframes(&self) -> Result<Vec<Keyframe>> {
        match self {
            Self::List(frames) => Ok(frames.clone()),
            Self::Keyed(map) => {
                let mut frames = Vec::with_capacity(map.len());
                for (key, raw) in map {
                    let key: f32 = key.trim().parse().map_err(|_| {
                        KeyframeError::invalid(format!("keyframe key '{key}' is not a number"))
                    })?;
                    frames.push(match raw {
                        RawKeyframe::Values(values) => Keyframe::new(key, *values),
                        RawKeyframe::Full { values, easing } => {
                            Keyframe::new(key, *values).with_easing(*easing)
                        }
                    });
                }
                Ok(frames)
            }
        }
    }
}

impl TryFrom<KeyframeSpec> for KeyframeTable {
    type Error = KeyframeError;

    fn try_from(spec: KeyframeSpec) -> Result<Self> {
        Self::new(spec.to_keyframes()?)
    }
}

impl From<KeyframeTable> for KeyframeSpec {
    fn from(table: KeyframeTable) -> Self {
        KeyframeSpec::List(table.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_tables_with_fewer_than_two_entries() {
        let err = KeyframeTable::new(vec![Keyframe::new(0.0, [0.0; 6])]).unwrap_err();
        assert!(err.is_configuration());
        assert!(KeyframeTable::new(Vec::new()).is_err());
    }

    #[test]
    fn sorts_keys_ascending() {
        let table = KeyframeTable::from_pairs([(1.0, [1.0; 6]), (0.0, [0.0; 6]), (0.5, [0.5; 6])])
            .unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
        assert_eq!(table.first().values, [0.0; 6]);
        assert_eq!(table.last().values, [1.0; 6]);
    }

    #[test]
    fn rejects_duplicate_and_non_finite_keys() {
        assert!(KeyframeTable::from_pairs([(0.5, [0.0; 6]), (0.5, [1.0; 6])]).is_err());
        assert!(KeyframeTable::from_pairs([(f32::NAN, [0.0; 6]), (1.0, [1.0; 6])]).is_err());
        let mut bad = [0.0; 6];
        bad[4] = f32::INFINITY;
        assert!(KeyframeTable::from_pairs([(0.0, bad), (1.0, [1.0; 6])]).is_err());
    }

    #[test]
    fn parses_keyed_object_form() {
        let json = r#"{
            "0":   [0, -2, 0, 0, 0, 0],
            "0.5": { "values": [1, 1, 1, 1, 1, 1], "easing": "easeOut" },
            "1":   { "values": [0, 10, 0, 0, 0, 0] }
        }"#;
        let table: KeyframeTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.as_slice()[1].easing, Easing::EaseOut);
        assert_eq!(table.as_slice()[2].easing, Easing::Linear);
        assert_eq!(table.last().position(), [0.0, 10.0, 0.0]);
    }

    #[test]
    fn parses_list_form_and_serializes_back() {
        let json = r#"[
            { "key": 1, "values": [0, 10, 0, 0, 0, 0] },
            { "key": 0, "values": [0, -2, 0, 0.5, 0, 0], "easing": "easeIn" }
        ]"#;
        let table: KeyframeTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.first().key, 0.0);
        assert_eq!(table.first().rotation(), [0.5, 0.0, 0.0]);

        let text = serde_json::to_string(&table).unwrap();
        let again: KeyframeTable = serde_json::from_str(&text).unwrap();
        assert_eq!(again, table);
    }

    #[test]
    fn invalid_tables_fail_to_deserialize() {
        let single = r#"{ "0": [0, 0, 0, 0, 0, 0] }"#;
        assert!(serde_json::from_str::<KeyframeTable>(single).is_err());
        let bad_key = r#"{ "start": [0, 0, 0, 0, 0, 0], "1": [1, 1, 1, 1, 1, 1] }"#;
        assert!(serde_json::from_str::<KeyframeTable>(bad_key).is_err());
    }
}

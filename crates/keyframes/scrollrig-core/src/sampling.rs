//! Progress -> value sampling over sorted keyframes and ramp stops.
//!
//! Model:
//! - Keys are sorted ascending with at least two entries.
//! - Progress outside [first, last] clamps to the boundary entry.
//! - Progress landing exactly on a key returns that entry untouched.
//! - Otherwise the segment-local fraction is eased with the curve of the
//!   segment's starting entry and each component is blended linearly.

use crate::data::{Keyframe, KeyframeTable, TransformValues};
use crate::interp::lerp_array;
use crate::Result;

/// Where a progress value falls within a sorted key list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Segment {
    /// Exactly on (or clamped onto) entry `i`.
    Exact(usize),
    /// Strictly between `left` and `left + 1`, at local fraction `t` in (0,1).
    Between { left: usize, t: f32 },
}

/// Locate `progress` among `items` sorted ascending by `key`.
/// NaN progress is treated as below the first key.
pub(crate) fn locate_by<T>(items: &[T], key: impl Fn(&T) -> f32, progress: f32) -> Segment {
    let n = items.len();
    debug_assert!(n >= 2, "segment lookup needs at least two entries");
    if n < 2 || progress.is_nan() || progress <= key(&items[0]) {
        return Segment::Exact(0);
    }
    if progress >= key(&items[n - 1]) {
        return Segment::Exact(n - 1);
    }
    // First entry whose key is strictly greater than progress; always in 1..n here.
    let right = items.partition_point(|it| key(it) <= progress);
    let left = right - 1;
    let k0 = key(&items[left]);
    if progress == k0 {
        return Segment::Exact(left);
    }
    let k1 = key(&items[right]);
    let t = ((progress - k0) / (k1 - k0)).clamp(0.0, 1.0);
    Segment::Between { left, t }
}

/// Sample keyframes already sorted by key (see `KeyframeTable`).
pub(crate) fn sample_sorted(frames: &[Keyframe], progress: f32) -> TransformValues {
    match locate_by(frames, |f| f.key, progress) {
        Segment::Exact(i) => frames[i].values,
        Segment::Between { left, t } => {
            let start = &frames[left];
            let end = &frames[left + 1];
            lerp_array(&start.values, &end.values, start.easing.apply(t))
        }
    }
}

/// Interpolate a 6-channel transform from an unsorted keyframe list.
///
/// Fails with `KeyframeError::InvalidConfiguration` when fewer than two
/// keyframes are supplied (or keys repeat / are non-finite). Progress is
/// never an error: values outside the key range clamp to the nearest
/// boundary keyframe.
pub fn interpolate(progress: f32, keyframes: &[Keyframe]) -> Result<TransformValues> {
    let table = KeyframeTable::new(keyframes.to_vec())?;
    Ok(table.sample(progress))
}

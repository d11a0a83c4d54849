//! Per-property tracks.
//!
//! Each property of a request is resolved once, at submission, into a
//! [`PropertyTrack`]: either a plain start → end interpolation or a keyframe
//! sequence split into equal segments. Frames only ever sample tracks.

use serde::{Deserialize, Serialize};

use super::value::{Interpolate, TweenValue};

/// What a property animates towards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndValue {
    /// Interpolate from the captured start value to this value.
    To(TweenValue),
    /// Traverse these values in order, one equal-length segment per pair.
    Keyframes(Vec<TweenValue>),
}

impl From<f64> for EndValue {
    fn from(value: f64) -> Self {
        Self::To(TweenValue::Scalar(value))
    }
}

impl From<TweenValue> for EndValue {
    fn from(value: TweenValue) -> Self {
        Self::To(value)
    }
}

/// A resolved, ready-to-sample property animation.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyTrack {
    To { start: TweenValue, end: TweenValue },
    Keyframes(Vec<TweenValue>),
}

impl PropertyTrack {
    /// Resolve an end value against the property's starting value.
    ///
    /// Returns `None` for an empty keyframe list, which cannot produce a value.
    pub fn resolve(start: &TweenValue, end: &EndValue) -> Option<Self> {
        match end {
            EndValue::To(end) => {
                if !start.same_kind(end) {
                    log::debug!(
                        "start value {start:?} and end value {end:?} differ in kind; property will hold its start value"
                    );
                }
                Some(Self::To {
                    start: start.clone(),
                    end: end.clone(),
                })
            }
            EndValue::Keyframes(values) if values.is_empty() => None,
            EndValue::Keyframes(values) => Some(Self::Keyframes(values.clone())),
        }
    }

    /// Sample the track at an eased progress value.
    pub fn sample(&self, eased: f64) -> TweenValue {
        match self {
            Self::To { start, end } => start.interpolate(end, eased),
            Self::Keyframes(values) => {
                let segments = values.len() - 1;
                if segments == 0 {
                    return values[0].clone();
                }
                let (index, local) = resolve_segment(eased, segments);
                // Segments are linear; the outer easing already shaped `eased`.
                values[index].interpolate(&values[index + 1], local)
            }
        }
    }

    /// Number of keyframe segments (0 for a plain interpolation).
    pub fn segment_count(&self) -> usize {
        match self {
            Self::To { .. } => 0,
            Self::Keyframes(values) => values.len().saturating_sub(1),
        }
    }
}

/// Map eased progress onto `segments` equal segments.
///
/// Returns the segment index, clamped to `[0, segments - 1]`, and the
/// progress within that segment. The local progress is not clamped, so
/// eased values outside `[0, 1]` extrapolate the first or last segment.
pub fn resolve_segment(eased: f64, segments: usize) -> (usize, f64) {
    debug_assert!(segments > 0);
    let scaled = eased * segments as f64;
    let last = segments.saturating_sub(1);
    let index = if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        (scaled.floor() as usize).min(last)
    };
    (index, scaled - index as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn keyframes(values: &[f64]) -> PropertyTrack {
        PropertyTrack::Keyframes(values.iter().copied().map(TweenValue::Scalar).collect())
    }

    fn scalar(value: TweenValue) -> f64 {
        value.as_scalar().unwrap()
    }

    #[test]
    fn test_segment_selection_middle() {
        let (index, local) = resolve_segment(0.5, 3);
        assert_eq!(index, 1);
        assert!((local - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_segment_clamped_at_end() {
        let (index, local) = resolve_segment(1.0, 3);
        assert_eq!(index, 2);
        assert!((local - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_segment_overshoot_extrapolates_last() {
        let (index, local) = resolve_segment(1.1, 2);
        assert_eq!(index, 1);
        assert!((local - 1.2).abs() < EPSILON);
    }

    #[test]
    fn test_segment_undershoot_uses_first() {
        let (index, local) = resolve_segment(-0.1, 4);
        assert_eq!(index, 0);
        assert!((local + 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_keyframe_sample() {
        let track = keyframes(&[0.0, 10.0, -10.0, 0.0]);
        assert!(scalar(track.sample(0.5)).abs() < EPSILON);
        assert!((scalar(track.sample(1.0 / 6.0)) - 5.0).abs() < EPSILON);
        assert!(scalar(track.sample(1.0)).abs() < EPSILON);
        assert_eq!(track.segment_count(), 3);
    }

    #[test]
    fn test_single_keyframe_is_constant() {
        let track = keyframes(&[4.0]);
        assert_eq!(scalar(track.sample(0.0)), 4.0);
        assert_eq!(scalar(track.sample(0.7)), 4.0);
    }

    #[test]
    fn test_empty_keyframes_rejected() {
        let start = TweenValue::Scalar(0.0);
        assert!(PropertyTrack::resolve(&start, &EndValue::Keyframes(Vec::new())).is_none());
    }

    #[test]
    fn test_to_track_uses_start() {
        let track =
            PropertyTrack::resolve(&TweenValue::Scalar(2.0), &EndValue::from(4.0)).unwrap();
        assert!((scalar(track.sample(0.5)) - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_array_keyframes() {
        let track = PropertyTrack::Keyframes(vec![
            TweenValue::from([0.0, 0.0]),
            TweenValue::from([2.0, 4.0]),
        ]);
        assert_eq!(track.sample(0.5), TweenValue::Array(vec![1.0, 2.0]));
    }
}

//! Animatable values and their interpolation.
//!
//! A property is either a single number or a numeric array (a position, a
//! color, a path). Interpolation is always linear here; easing is applied to
//! the progress value before it reaches this module.

use serde::{Deserialize, Serialize};

/// Trait for types that can be interpolated between two values.
///
/// When `t = 0.0` the result is `self`, when `t = 1.0` it is `to`. Values of
/// `t` outside `[0, 1]` extrapolate, which overshooting easings rely on.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        lerp(*self, *to, t)
    }
}

impl Interpolate for Vec<f64> {
    /// Element-wise over the common prefix of both arrays.
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self.iter()
            .zip(to.iter())
            .map(|(from, to)| lerp(*from, *to, t))
            .collect()
    }
}

/// A numeric property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TweenValue {
    Scalar(f64),
    Array(Vec<f64>),
}

impl TweenValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(values) => Some(values),
        }
    }

    /// True if both values are the same variant.
    pub fn same_kind(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Scalar(_), Self::Scalar(_)) | (Self::Array(_), Self::Array(_))
        )
    }

    /// True if any component is NaN.
    pub fn is_nan(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_nan(),
            Self::Array(values) => values.iter().any(|v| v.is_nan()),
        }
    }
}

impl Default for TweenValue {
    fn default() -> Self {
        Self::Scalar(0.0)
    }
}

impl From<f64> for TweenValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for TweenValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(values)
    }
}

impl<const N: usize> From<[f64; N]> for TweenValue {
    fn from(values: [f64; N]) -> Self {
        Self::Array(values.to_vec())
    }
}

impl Interpolate for TweenValue {
    /// Both values must be of the same variant. On a mismatch the start value
    /// is returned unchanged.
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        match (self, to) {
            (Self::Scalar(from), Self::Scalar(to)) => Self::Scalar(from.interpolate(to, t)),
            (Self::Array(from), Self::Array(to)) => Self::Array(from.interpolate(to, t)),
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lerp() {
        let v = TweenValue::Scalar(0.0).interpolate(&TweenValue::Scalar(10.0), 0.25);
        assert_eq!(v, TweenValue::Scalar(2.5));
    }

    #[test]
    fn scalar_extrapolates_past_one() {
        let v = 0.0_f64.interpolate(&10.0, 1.2);
        assert!((v - 12.0).abs() < 1e-12);
    }

    #[test]
    fn array_uses_common_prefix() {
        let from = TweenValue::from(vec![0.0, 0.0, 0.0]);
        let to = TweenValue::from(vec![2.0, 4.0]);
        assert_eq!(from.interpolate(&to, 0.5), TweenValue::Array(vec![1.0, 2.0]));
    }

    #[test]
    fn kind_mismatch_keeps_start() {
        let from = TweenValue::Scalar(3.0);
        let to = TweenValue::from([1.0, 2.0]);
        assert_eq!(from.interpolate(&to, 0.5), TweenValue::Scalar(3.0));
        assert!(!from.same_kind(&to));
    }

    #[test]
    fn untagged_serde() {
        let scalar: TweenValue = serde_json::from_str("1.5").unwrap();
        assert_eq!(scalar, TweenValue::Scalar(1.5));
        let array: TweenValue = serde_json::from_str("[1.0, 2.0]").unwrap();
        assert_eq!(array.as_array(), Some(&[1.0, 2.0][..]));
    }
}

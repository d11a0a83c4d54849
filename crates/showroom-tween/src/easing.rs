//! Easing functions for tween timing.
//!
//! The named set follows the classic Penner-style polynomial, sine and
//! elastic curves. Names are the camelCase identifiers used in configuration
//! files (`easeInOutQuad`, `easeOutElastic`, ...).
//!
//! # Usage
//!
//! ```
//! use showroom_tween::easing::{Easing, EasingFunction};
//!
//! let ease = EasingFunction::EaseInOutQuad;
//! assert_eq!(ease.evaluate(0.5), 0.5);
//!
//! // Unknown names fall back to linear.
//! let fallback = Easing::named("bogus");
//! assert_eq!(fallback.evaluate(0.25), 0.25);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Period of the elastic oscillation.
const ELASTIC_PERIOD: f64 = 0.3;

/// A named easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingFunction {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    /// Overshoots past 1.0 before settling.
    EaseOutElastic,
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::EaseOutElastic
    }
}

impl EasingFunction {
    /// Every named curve, in declaration order.
    pub const ALL: [EasingFunction; 17] = [
        Self::Linear,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
        Self::EaseInSine,
        Self::EaseOutSine,
        Self::EaseInOutSine,
        Self::EaseOutElastic,
    ];

    /// Evaluate the curve at progress `t`.
    ///
    /// The input is clamped to `[0, 1]`; the output is not, so elastic easing
    /// can briefly exceed 1.0.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        // `u` is the shifted progress used by the "out" halves.
        let u = t - 1.0;

        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => u * u * u + 1.0,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Self::EaseInQuart => t * t * t * t,
            Self::EaseOutQuart => 1.0 - u * u * u * u,
            Self::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - 8.0 * u * u * u * u
                }
            }
            Self::EaseInQuint => t * t * t * t * t,
            Self::EaseOutQuint => 1.0 + u * u * u * u * u,
            Self::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    1.0 + 16.0 * u * u * u * u * u
                }
            }
            Self::EaseInSine => 1.0 - (t * PI / 2.0).cos(),
            Self::EaseOutSine => (t * PI / 2.0).sin(),
            Self::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::EaseOutElastic => {
                let p = ELASTIC_PERIOD;
                2.0_f64.powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * PI) / p).sin() + 1.0
            }
        }
    }

    /// The camelCase name of this curve.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInOutQuart => "easeInOutQuart",
            Self::EaseInQuint => "easeInQuint",
            Self::EaseOutQuint => "easeOutQuint",
            Self::EaseInOutQuint => "easeInOutQuint",
            Self::EaseInSine => "easeInSine",
            Self::EaseOutSine => "easeOutSine",
            Self::EaseInOutSine => "easeInOutSine",
            Self::EaseOutElastic => "easeOutElastic",
        }
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a known easing curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEasing(pub String);

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing function `{}`", self.0)
    }
}

impl std::error::Error for UnknownEasing {}

impl FromStr for EasingFunction {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == s)
            .ok_or_else(|| UnknownEasing(s.to_string()))
    }
}

/// Signature of a caller-supplied easing curve.
pub type CustomEasingFn = dyn Fn(f64) -> f64 + Send + Sync;

/// Easing configuration for a tween: a named curve or a custom function.
#[derive(Clone)]
pub enum Easing {
    Named(EasingFunction),
    Custom(Arc<CustomEasingFn>),
}

impl Easing {
    /// Resolve an easing by name. Unknown names fall back to `linear`.
    pub fn named(name: &str) -> Self {
        match name.parse::<EasingFunction>() {
            Ok(easing) => Self::Named(easing),
            Err(err) => {
                log::debug!("{err}, falling back to linear");
                Self::Named(EasingFunction::Linear)
            }
        }
    }

    /// Wrap a custom curve `progress -> eased progress`.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Evaluate at progress `t`, clamping the input to `[0, 1]`.
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            Self::Named(easing) => easing.evaluate(t),
            Self::Custom(f) => f(t.clamp(0.0, 1.0)),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::Named(EasingFunction::default())
    }
}

impl From<EasingFunction> for Easing {
    fn from(easing: EasingFunction) -> Self {
        Self::Named(easing)
    }
}

impl From<&str> for Easing {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(easing) => write!(f, "Named({easing})"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

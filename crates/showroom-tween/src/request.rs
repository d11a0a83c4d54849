//! Tween requests and the property store they animate.
//!
//! # Example
//!
//! ```
//! use showroom_tween::{EasingFunction, Targets, TweenRequest};
//!
//! let request = TweenRequest::new(
//!     Targets::new().with("rotationY", 0.0).with("positionY", 0.4),
//! )
//! .to("rotationY", std::f64::consts::TAU)
//! .keyframes("positionY", [0.4, 0.45, 0.4])
//! .duration_ms(5000.0)
//! .easing(EasingFunction::EaseInOutQuad)
//! .looping(true);
//! assert_eq!(request.duration(), 5000.0);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::track::EndValue;
use super::value::TweenValue;

/// Duration used when a request does not set one.
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

/// Callback invoked once per animated frame with the refreshed values.
pub type UpdateCallback = Box<dyn FnMut(&Targets) + Send>;

/// Named property values, the live "current value" store of a tween.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Targets {
    values: BTreeMap<String, TweenValue>,
}

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TweenValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TweenValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&TweenValue> {
        self.values.get(key)
    }

    /// Scalar value of a property, if present and scalar.
    pub fn scalar(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(TweenValue::as_scalar)
    }

    /// Array value of a property, if present and an array.
    pub fn array(&self, key: &str) -> Option<&[f64]> {
        self.get(key).and_then(TweenValue::as_array)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TweenValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<TweenValue>> FromIterator<(K, V)> for Targets {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut targets = Self::new();
        for (key, value) in iter {
            targets.insert(key, value);
        }
        targets
    }
}

/// Everything needed to start a tween.
///
/// Built with chained setters and handed to
/// [`TweenEngine::submit`](crate::TweenEngine::submit), which validates it.
pub struct TweenRequest {
    pub(crate) targets: Targets,
    pub(crate) end_values: BTreeMap<String, EndValue>,
    pub(crate) duration_ms: f64,
    pub(crate) delay_ms: f64,
    pub(crate) easing: Easing,
    pub(crate) looping: bool,
    pub(crate) on_update: Option<UpdateCallback>,
    pub(crate) label: Option<String>,
}

impl TweenRequest {
    /// Start a request animating the given properties.
    pub fn new(targets: Targets) -> Self {
        Self {
            targets,
            end_values: BTreeMap::new(),
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0.0,
            easing: Easing::default(),
            looping: false,
            on_update: None,
            label: None,
        }
    }

    /// Animate `key` towards a single end value.
    pub fn to(mut self, key: impl Into<String>, value: impl Into<TweenValue>) -> Self {
        self.end_values
            .insert(key.into(), EndValue::To(value.into()));
        self
    }

    /// Animate `key` through a keyframe sequence.
    pub fn keyframes<V, I>(mut self, key: impl Into<String>, values: I) -> Self
    where
        V: Into<TweenValue>,
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.end_values
            .insert(key.into(), EndValue::Keyframes(values));
        self
    }

    /// Set an explicit end value for `key`.
    pub fn end_value(mut self, key: impl Into<String>, end: EndValue) -> Self {
        self.end_values.insert(key.into(), end);
        self
    }

    pub fn duration_ms(mut self, duration: f64) -> Self {
        self.duration_ms = duration;
        self
    }

    pub fn delay_ms(mut self, delay: f64) -> Self {
        self.delay_ms = delay;
        self
    }

    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = easing.into();
        self
    }

    /// Set the easing by name; unknown names fall back to linear.
    pub fn easing_named(self, name: &str) -> Self {
        self.easing(Easing::named(name))
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn on_update<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Targets) + Send + 'static,
    {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Name used in logs and events.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn duration(&self) -> f64 {
        self.duration_ms
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn end_values(&self) -> impl Iterator<Item = (&str, &EndValue)> {
        self.end_values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for TweenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenRequest")
            .field("label", &self.label)
            .field("targets", &self.targets)
            .field("end_values", &self.end_values)
            .field("duration_ms", &self.duration_ms)
            .field("delay_ms", &self.delay_ms)
            .field("easing", &self.easing)
            .field("looping", &self.looping)
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

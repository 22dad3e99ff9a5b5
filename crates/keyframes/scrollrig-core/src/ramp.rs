//! Scalar ramps: map scroll progress through a list of stops onto a single
//! style value (opacity, blur radius, mask scale, ...).

use serde::{Deserialize, Serialize};

use crate::error::KeyframeError;
use crate::interp::{lerp_f32, Easing};
use crate::sampling::{locate_by, Segment};
use crate::Result;

/// Ramp as authored in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RampConfig {
    /// Progress stops, strictly ascending.
    pub stops: Vec<f32>,
    /// Output value at each stop.
    pub outputs: Vec<f32>,
    /// Curve applied inside every segment.
    #[serde(default)]
    pub easing: Easing,
}

/// Validated scalar ramp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RampConfig", into = "RampConfig")]
pub struct ScalarRamp {
    stops: Vec<f32>,
    outputs: Vec<f32>,
    easing: Easing,
}

impl ScalarRamp {
    pub fn new(stops: Vec<f32>, outputs: Vec<f32>, easing: Easing) -> Result<Self> {
        if stops.len() != outputs.len() {
            return Err(KeyframeError::invalid(format!(
                "ramp has {} stops but {} outputs",
                stops.len(),
                outputs.len()
            )));
        }
        if stops.len() < 2 {
            return Err(KeyframeError::invalid(format!(
                "ramp needs at least 2 stops, got {}",
                stops.len()
            )));
        }
        if stops.iter().chain(outputs.iter()).any(|v| !v.is_finite()) {
            return Err(KeyframeError::invalid("ramp stops and outputs must be finite"));
        }
        if let Some(pair) = stops.windows(2).find(|w| w[0] >= w[1]) {
            return Err(KeyframeError::invalid(format!(
                "ramp stops must be strictly ascending ({} then {})",
                pair[0], pair[1]
            )));
        }
        Ok(Self {
            stops,
            outputs,
            easing,
        })
    }

    /// Two-stop ramp from `from` to `to` over `[start, end]`.
    pub fn span(start: f32, end: f32, from: f32, to: f32, easing: Easing) -> Result<Self> {
        Self::new(vec![start, end], vec![from, to], easing)
    }

    pub fn sample(&self, progress: f32) -> f32 {
        match locate_by(&self.stops, |stop| *stop, progress) {
            Segment::Exact(i) => self.outputs[i],
            Segment::Between { left, t } => lerp_f32(
                self.outputs[left],
                self.outputs[left + 1],
                self.easing.apply(t),
            ),
        }
    }

    pub fn stops(&self) -> &[f32] {
        &self.stops
    }

    pub fn outputs(&self) -> &[f32] {
        &self.outputs
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl TryFrom<RampConfig> for ScalarRamp {
    type Error = KeyframeError;

    fn try_from(cfg: RampConfig) -> Result<Self> {
        Self::new(cfg.stops, cfg.outputs, cfg.easing)
    }
}

impl From<ScalarRamp> for RampConfig {
    fn from(ramp: ScalarRamp) -> Self {
        RampConfig {
            stops: ramp.stops,
            outputs: ramp.outputs,
            easing: ramp.easing,
        }
    }
}

//! Scroll progress: raw page metrics -> normalized progress, and the
//! smoothing controller that eases the progress signal between frames.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::KeyframeError;
use crate::interp::damp;
use crate::Result;

/// Reference frame rate the `lerp` factor is expressed against.
const REFERENCE_FPS: f32 = 60.0;

/// Scroll container measurements, all in the same unit (pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub offset: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    /// Progress from the container's top touching the viewport top (0) to
    /// its bottom touching the viewport bottom (1). Non-scrollable content
    /// reports 0.
    pub fn progress(&self) -> f32 {
        let range = self.content_height - self.viewport_height;
        if !range.is_finite() || range <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }
}

/// Smoothing parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmoothingConfig {
    pub enabled: bool,
    /// Fraction of the remaining distance covered per 60 Hz frame, in (0, 1].
    pub lerp: f32,
    /// Distance below which the smoothed value snaps onto the target.
    pub snap_epsilon: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lerp: 0.1,
            snap_epsilon: 1e-4,
        }
    }
}

impl SmoothingConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.lerp > 0.0 && self.lerp <= 1.0) {
            return Err(KeyframeError::invalid(format!(
                "smoothing lerp must be in (0, 1], got {}",
                self.lerp
            )));
        }
        if !self.snap_epsilon.is_finite() || self.snap_epsilon < 0.0 {
            return Err(KeyframeError::invalid(format!(
                "smoothing snap epsilon must be finite and >= 0, got {}",
                self.snap_epsilon
            )));
        }
        Ok(())
    }
}

/// Eases a progress signal toward its latest target.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSmoother {
    lambda: f32,
    snap_epsilon: f32,
    current: f32,
    target: f32,
}

impl Default for ScrollSmoother {
    fn default() -> Self {
        let cfg = SmoothingConfig::default();
        Self {
            lambda: cfg.lerp * REFERENCE_FPS,
            snap_epsilon: cfg.snap_epsilon,
            current: 0.0,
            target: 0.0,
        }
    }
}

impl ScrollSmoother {
    pub fn new(config: &SmoothingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            lambda: config.lerp * REFERENCE_FPS,
            snap_epsilon: config.snap_epsilon,
            ..Self::default()
        })
    }

    /// Set the value to approach. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        } else {
            warn!("scroll smoother: ignoring non-finite target {target}");
        }
    }

    /// Move both current and target to `value` immediately.
    pub fn jump_to(&mut self, value: f32) {
        if value.is_finite() {
            self.current = value;
            self.target = value;
        }
    }

    /// Advance by `dt` seconds and return the smoothed value.
    pub fn update(&mut self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            self.current = damp(self.current, self.target, self.lambda, dt);
        }
        if (self.target - self.current).abs() <= self.snap_epsilon {
            self.current = self.target;
        }
        self.current
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

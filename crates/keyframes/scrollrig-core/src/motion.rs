//! Model motion: a time-driven intro that hands over to scroll-following.
//!
//! `ModelMotion` is a two-state machine:
//! - `OpeningAnimation`: advanced by elapsed seconds, scroll progress ignored.
//!   The model scales up from `start_scale` while spinning about z.
//! - `ScrollFollow`: driven only by scroll progress through the keyframe table.
//!
//! The only transition is OpeningAnimation -> ScrollFollow, taken on the
//! tick where intro progress reaches 1. That tick still reports the final
//! intro pose; the next tick follows scroll.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::data::KeyframeTable;
use crate::error::KeyframeError;
use crate::interp::{lerp_f32, Easing};
use crate::Result;

/// Added to the table's rotation channels while following scroll, so tables
/// can be authored relative to an upright model.
pub const DEFAULT_ROTATION_OFFSET: [f32; 3] = [-FRAC_PI_2, 0.0, 0.0];

/// Intro animation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntroConfig {
    /// Length of the intro in seconds (90 frames at 60 Hz by default).
    pub duration_secs: f32,
    pub start_scale: f32,
    pub target_scale: f32,
    /// Total spin about z over the intro, in radians.
    pub spin: f32,
    pub easing: Easing,
    pub base_position: [f32; 3],
    pub base_rotation: [f32; 3],
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.5,
            start_scale: 0.01,
            target_scale: 3.0,
            spin: TAU,
            easing: Easing::EaseOut,
            base_position: [0.0, -2.0, 0.0],
            base_rotation: [-FRAC_PI_2 + 0.3, 0.0, PI * 0.75],
        }
    }
}

impl IntroConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(KeyframeError::invalid(format!(
                "intro duration must be finite and >= 0, got {}",
                self.duration_secs
            )));
        }
        let scalars = [self.start_scale, self.target_scale, self.spin];
        if scalars
            .iter()
            .chain(self.base_position.iter())
            .chain(self.base_rotation.iter())
            .any(|v| !v.is_finite())
        {
            return Err(KeyframeError::invalid("intro values must be finite"));
        }
        Ok(())
    }
}

/// Current state of a `ModelMotion`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "phase")]
pub enum MotionPhase {
    OpeningAnimation { elapsed: f32 },
    ScrollFollow,
}

impl MotionPhase {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpeningAnimation { .. } => "openingAnimation",
            Self::ScrollFollow => "scrollFollow",
        }
    }

    #[inline]
    pub fn is_following(&self) -> bool {
        matches!(self, Self::ScrollFollow)
    }
}

/// Position, XYZ Euler rotation (radians) and uniform scale for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPose {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: f32,
}

impl ModelPose {
    /// Flattened as x, y, z, rx, ry, rz, scale.
    pub fn to_array(&self) -> [f32; 7] {
        let [x, y, z] = self.position;
        let [rx, ry, rz] = self.rotation;
        [x, y, z, rx, ry, rz, self.scale]
    }
}

#[derive(Clone, Debug)]
pub struct ModelMotion {
    intro: IntroConfig,
    table: KeyframeTable,
    rotation_offset: [f32; 3],
    phase: MotionPhase,
}

impl ModelMotion {
    pub fn new(intro: IntroConfig, table: KeyframeTable) -> Result<Self> {
        intro.validate()?;
        Ok(Self {
            intro,
            table,
            rotation_offset: DEFAULT_ROTATION_OFFSET,
            phase: MotionPhase::OpeningAnimation { elapsed: 0.0 },
        })
    }

    pub fn with_rotation_offset(mut self, offset: [f32; 3]) -> Self {
        self.rotation_offset = offset;
        self
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn is_following(&self) -> bool {
        self.phase.is_following()
    }

    pub fn intro(&self) -> &IntroConfig {
        &self.intro
    }

    pub fn table(&self) -> &KeyframeTable {
        &self.table
    }

    /// Intro completion in [0,1]; 1 once scroll-following.
    pub fn intro_progress(&self) -> f32 {
        match self.phase {
            MotionPhase::OpeningAnimation { elapsed } => self.intro_fraction(elapsed),
            MotionPhase::ScrollFollow => 1.0,
        }
    }

    /// Jump straight to scroll-following.
    pub fn skip_intro(&mut self) {
        if !self.phase.is_following() {
            debug!("model motion: intro skipped");
            self.phase = MotionPhase::ScrollFollow;
        }
    }

    /// Advance by `dt` seconds and produce this frame's pose.
    pub fn tick(&mut self, dt: f32, progress: f32) -> ModelPose {
        match self.phase {
            MotionPhase::OpeningAnimation { elapsed } => {
                let dt = if dt.is_finite() {
                    dt.max(0.0)
                } else {
                    warn!("model motion: ignoring non-finite dt {dt}");
                    0.0
                };
                let elapsed = elapsed + dt;
                let fraction = self.intro_fraction(elapsed);
                let pose = self.intro_pose(fraction);
                self.phase = if fraction >= 1.0 {
                    debug!("model motion: intro finished after {elapsed:.3}s, following scroll");
                    MotionPhase::ScrollFollow
                } else {
                    MotionPhase::OpeningAnimation { elapsed }
                };
                pose
            }
            MotionPhase::ScrollFollow => self.follow_pose(progress),
        }
    }

    /// Pose for `progress` while scroll-following (independent of phase).
    pub fn follow_pose(&self, progress: f32) -> ModelPose {
        let values = self.table.sample(progress);
        let offset = self.rotation_offset;
        ModelPose {
            position: [values[0], values[1], values[2]],
            rotation: [
                offset[0] + values[3],
                offset[1] + values[4],
                offset[2] + values[5],
            ],
            scale: self.intro.target_scale,
        }
    }

    fn intro_fraction(&self, elapsed: f32) -> f32 {
        if self.intro.duration_secs <= 0.0 {
            1.0
        } else {
            (elapsed / self.intro.duration_secs).min(1.0)
        }
    }

    fn intro_pose(&self, fraction: f32) -> ModelPose {
        let eased = self.intro.easing.apply(fraction);
        let [rx, ry, rz] = self.intro.base_rotation;
        ModelPose {
            position: self.intro.base_position,
            rotation: [rx, ry, rz + self.intro.spin * eased],
            scale: lerp_f32(self.intro.start_scale, self.intro.target_scale, eased),
        }
    }
}

//! Scene: owns the runtime objects built from a `SceneConfig` and evaluates
//! them once per frame.
//!
//! update(dt, progress):
//! 1. progress -> smoother target (or used directly when smoothing is off)
//! 2. model motion tick (intro or scroll-follow)
//! 3. every ramp sampled at the effective progress

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::SceneConfig;
use crate::motion::{ModelMotion, ModelPose, MotionPhase};
use crate::ramp::ScalarRamp;
use crate::scroll::ScrollSmoother;
use crate::Result;

/// Values computed for one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneFrame {
    /// Effective (smoothed) progress the frame was evaluated at.
    pub progress: f32,
    pub model: Option<ModelPose>,
    pub phase: Option<MotionPhase>,
    pub channels: BTreeMap<String, f32>,
}

#[derive(Debug)]
pub struct Scene {
    model: Option<ModelMotion>,
    ramps: BTreeMap<String, ScalarRamp>,
    smoother: Option<ScrollSmoother>,
    raw_progress: f32,
    frame: SceneFrame,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self> {
        let model = config.model.as_ref().map(|m| m.build()).transpose()?;
        let ramps = config
            .ramps
            .into_iter()
            .map(|(name, ramp)| ScalarRamp::try_from(ramp).map(|ramp| (name, ramp)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        let smoother = if config.smoothing.enabled {
            Some(ScrollSmoother::new(&config.smoothing)?)
        } else {
            config.smoothing.validate()?;
            None
        };
        debug!(
            "scene: built with model={} ramps={} smoothing={}",
            model.is_some(),
            ramps.len(),
            smoother.is_some()
        );
        Ok(Self {
            model,
            ramps,
            smoother,
            raw_progress: 0.0,
            frame: SceneFrame::default(),
        })
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Self::new(SceneConfig::from_json(s)?)
    }

    /// Advance by `dt` seconds with the latest raw scroll progress.
    pub fn update(&mut self, dt: f32, progress: f32) -> &SceneFrame {
        if progress.is_finite() {
            self.raw_progress = progress;
        } else {
            warn!("scene: ignoring non-finite progress {progress}");
        }
        let effective = match self.smoother.as_mut() {
            Some(smoother) => {
                smoother.set_target(self.raw_progress);
                smoother.update(dt)
            }
            None => self.raw_progress,
        };

        self.frame.progress = effective;
        self.frame.model = self.model.as_mut().map(|m| m.tick(dt, effective));
        self.frame.phase = self.model.as_ref().map(|m| m.phase());
        for (name, ramp) in &self.ramps {
            self.frame.channels.insert(name.clone(), ramp.sample(effective));
        }
        &self.frame
    }

    /// Most recent frame (default until the first update).
    pub fn frame(&self) -> &SceneFrame {
        &self.frame
    }

    pub fn channel(&self, name: &str) -> Option<f32> {
        self.frame.channels.get(name).copied()
    }

    pub fn model(&self) -> Option<&ModelMotion> {
        self.model.as_ref()
    }

    pub fn skip_intro(&mut self) {
        if let Some(model) = self.model.as_mut() {
            model.skip_intro();
        }
    }

    /// Snap the smoothed progress onto `progress` (e.g. after a jump link).
    pub fn jump_to(&mut self, progress: f32) {
        if progress.is_finite() {
            self.raw_progress = progress;
        }
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.jump_to(progress);
        }
    }

    pub fn ramp_names(&self) -> impl Iterator<Item = &str> {
        self.ramps.keys().map(String::as_str)
    }
}

//! Scene configuration: everything a page wires to scroll progress.
//!
//! Loaded from camelCase JSON; every block has defaults so a partial
//! document (or `{}`) is valid. Parsing only checks shape; `validate`
//! (and `Scene::new`) check values.

use std::collections::BTreeMap;
use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::data::{Keyframe, KeyframeSpec, KeyframeTable};
use crate::interp::Easing;
use crate::motion::{IntroConfig, ModelMotion, DEFAULT_ROTATION_OFFSET};
use crate::ramp::{RampConfig, ScalarRamp};
use crate::scroll::SmoothingConfig;
use crate::Result;

fn default_rotation_offset() -> [f32; 3] {
    DEFAULT_ROTATION_OFFSET
}

/// Keyframe-driven model block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub keyframes: KeyframeSpec,
    #[serde(default)]
    pub intro: IntroConfig,
    #[serde(default = "default_rotation_offset")]
    pub rotation_offset: [f32; 3],
}

impl ModelConfig {
    pub fn build(&self) -> Result<ModelMotion> {
        let table = KeyframeTable::try_from(self.keyframes.clone())?;
        Ok(ModelMotion::new(self.intro.clone(), table)?.with_rotation_offset(self.rotation_offset))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    pub model: Option<ModelConfig>,
    /// Named scalar channels.
    pub ramps: BTreeMap<String, RampConfig>,
    pub smoothing: SmoothingConfig,
}

impl SceneConfig {
    /// Parse and validate a JSON scene.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: SceneConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(model) = &self.model {
            model.build()?;
        }
        for ramp in self.ramps.values() {
            ScalarRamp::try_from(ramp.clone())?;
        }
        self.smoothing.validate()
    }

    /// The landing page: hero mask zoom, video fade and blur, section
    /// reveals, and the robot model rising through the page.
    pub fn landing_page() -> Self {
        fn ramp(stops: &[f32], outputs: &[f32], easing: Easing) -> RampConfig {
            RampConfig {
                stops: stops.to_vec(),
                outputs: outputs.to_vec(),
                easing,
            }
        }

        let mut ramps = BTreeMap::new();
        ramps.insert(
            "maskScale".to_string(),
            ramp(
                &[0.0, 0.015, 0.03, 0.045, 0.06, 0.08, 0.1],
                &[20.0, 12.0, 7.0, 3.5, 2.0, 1.0, 0.32],
                Easing::EaseOut,
            ),
        );
        ramps.insert(
            "videoOpacity".to_string(),
            ramp(&[0.1, 0.101], &[1.0, 0.0], Easing::Linear),
        );
        ramps.insert(
            "logoOpacity".to_string(),
            ramp(&[0.15, 0.2], &[1.0, 0.0], Easing::Linear),
        );
        ramps.insert(
            "videoBlur".to_string(),
            ramp(&[0.0, 0.2], &[4.0, 50.0], Easing::EaseIn),
        );
        ramps.insert(
            "subtitleOpacity".to_string(),
            ramp(&[0.1, 0.3], &[0.0, 1.0], Easing::Linear),
        );
        ramps.insert(
            "modelOpacity".to_string(),
            ramp(&[0.4, 0.6], &[0.0, 1.0], Easing::Linear),
        );
        ramps.insert(
            "featureOpacity".to_string(),
            ramp(&[0.7, 0.9], &[0.0, 1.0], Easing::Linear),
        );
        ramps.insert(
            "modelSpin".to_string(),
            ramp(&[0.0, 1.0], &[0.0, TAU], Easing::Linear),
        );

        let keyframes = KeyframeSpec::List(vec![
            Keyframe::new(0.0, [0.0, -2.0, 0.0, 0.3, 0.0, PI * 0.75]).with_easing(Easing::EaseInOut),
            Keyframe::new(0.5, [1.5, 2.0, 0.0, 0.0, 0.8, PI]).with_easing(Easing::EaseOut),
            Keyframe::new(1.0, [0.0, 10.0, 0.0, 0.0, 0.0, 0.0]),
        ]);

        Self {
            model: Some(ModelConfig {
                keyframes,
                intro: IntroConfig::default(),
                rotation_offset: DEFAULT_ROTATION_OFFSET,
            }),
            ramps,
            smoothing: SmoothingConfig::default(),
        }
    }
}

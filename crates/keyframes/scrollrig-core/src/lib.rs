//! scrollrig core (engine-agnostic)
//!
//! Drives presentation values from normalized scroll progress:
//! keyframe tables for a model's position/rotation, scalar ramps for style
//! channels, a time-driven intro that hands over to scroll-following, and
//! a smoothing controller for the progress signal. Adapters (wasm, Bevy)
//! apply the computed values to their host objects.

pub mod config;
pub mod data;
pub mod error;
pub mod interp;
pub mod motion;
pub mod ramp;
pub mod sampling;
pub mod scene;
pub mod scroll;

// Re-exports for consumers (adapters)
pub use config::{ModelConfig, SceneConfig};
pub use data::{Keyframe, KeyframeSpec, KeyframeTable, RawKeyframe, TransformValues, CHANNELS};
pub use error::KeyframeError;
pub use interp::Easing;
pub use motion::{IntroConfig, ModelMotion, ModelPose, MotionPhase, DEFAULT_ROTATION_OFFSET};
pub use ramp::{RampConfig, ScalarRamp};
pub use sampling::interpolate;
pub use scene::{Scene, SceneFrame};
pub use scroll::{ScrollMetrics, ScrollSmoother, SmoothingConfig};

/// scrollrig result type
pub type Result<T> = core::result::Result<T, KeyframeError>;

//! Interpolation primitives: easing curves and component-wise blends.

pub mod easing;
pub mod functions;

pub use easing::Easing;
pub use functions::{damp, lerp_array, lerp_f32, lerp_vec3};

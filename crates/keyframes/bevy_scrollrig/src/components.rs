use bevy::prelude::*;
use scrollrig_core::ModelMotion;

/// Entity whose `Transform` follows a `ModelMotion` (intro, then scroll).
#[derive(Component, Debug, Clone)]
pub struct ScrollDrivenModel {
    pub motion: ModelMotion,
}

impl ScrollDrivenModel {
    pub fn new(motion: ModelMotion) -> Self {
        Self { motion }
    }
}

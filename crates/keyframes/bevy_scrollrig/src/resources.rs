use bevy::prelude::*;
use scrollrig_core::ScrollSmoother;

/// Scroll progress for the frame. Hosts write `raw` in [0,1]; the plugin
/// fills `smoothed`, which is what models sample.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollProgress {
    pub raw: f32,
    pub smoothed: f32,
}

/// Smoothing state for `ScrollProgress`. When disabled `smoothed` mirrors `raw`.
#[derive(Resource, Debug, Default)]
pub struct ScrollSmoothing {
    pub enabled: bool,
    pub smoother: ScrollSmoother,
}

/// Fired once per entity when its intro hands over to scroll-following.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroFinished {
    pub entity: Entity,
}

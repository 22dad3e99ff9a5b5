use bevy::prelude::*;
use scrollrig_core::{ScrollSmoother, SmoothingConfig};

pub mod components;
pub mod resources;
pub mod systems;

pub use components::ScrollDrivenModel;
pub use resources::{IntroFinished, ScrollProgress, ScrollSmoothing};
pub use systems::{apply_pose, drive_models_system, smooth_progress_system};

/// Ordering for scrollrig's Update systems: smooth -> drive.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollRigSet {
    Smooth,
    Drive,
}

#[derive(Default)]
pub struct ScrollRigPlugin {
    pub smoothing: SmoothingConfig,
}

impl Plugin for ScrollRigPlugin {
    fn build(&self, app: &mut App) {
        let smoother = match ScrollSmoother::new(&self.smoothing) {
            Ok(smoother) => smoother,
            Err(err) => {
                warn!("scrollrig: {err}; falling back to default smoothing");
                ScrollSmoother::default()
            }
        };
        app.init_resource::<ScrollProgress>()
            .insert_resource(ScrollSmoothing {
                enabled: self.smoothing.enabled,
                smoother,
            })
            .add_event::<IntroFinished>()
            .configure_sets(Update, (ScrollRigSet::Smooth, ScrollRigSet::Drive).chain())
            .add_systems(
                Update,
                (
                    smooth_progress_system.in_set(ScrollRigSet::Smooth),
                    drive_models_system.in_set(ScrollRigSet::Drive),
                ),
            );
    }
}

use bevy::prelude::*;
use scrollrig_core::ModelPose;

use crate::components::ScrollDrivenModel;
use crate::resources::{IntroFinished, ScrollProgress, ScrollSmoothing};

/// Write a pose into a transform: translation, XYZ Euler rotation, uniform scale.
pub fn apply_pose(pose: &ModelPose, transform: &mut Transform) {
    let [rx, ry, rz] = pose.rotation;
    transform.translation = Vec3::from_array(pose.position);
    transform.rotation = Quat::from_euler(EulerRot::XYZ, rx, ry, rz);
    transform.scale = Vec3::splat(pose.scale);
}

/// Ease `ScrollProgress::raw` into `ScrollProgress::smoothed`.
pub fn smooth_progress_system(
    time: Res<Time>,
    mut progress: ResMut<ScrollProgress>,
    mut smoothing: ResMut<ScrollSmoothing>,
) {
    if !smoothing.enabled {
        progress.smoothed = progress.raw;
        return;
    }
    let raw = progress.raw;
    smoothing.smoother.set_target(raw);
    progress.smoothed = smoothing.smoother.update(time.delta_seconds());
}

/// Tick every scroll-driven model and apply its pose.
pub fn drive_models_system(
    time: Res<Time>,
    progress: Res<ScrollProgress>,
    mut models: Query<(Entity, &mut ScrollDrivenModel, &mut Transform)>,
    mut finished: EventWriter<IntroFinished>,
) {
    let dt = time.delta_seconds();
    for (entity, mut model, mut transform) in models.iter_mut() {
        let was_following = model.motion.is_following();
        let pose = model.motion.tick(dt, progress.smoothed);
        apply_pose(&pose, &mut transform);
        if !was_following && model.motion.is_following() {
            debug!("scrollrig: {:?} finished its intro", entity);
            finished.send(IntroFinished { entity });
        }
    }
}

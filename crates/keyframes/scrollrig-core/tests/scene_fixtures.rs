use approx::assert_abs_diff_eq;
use scrollrig_core::{
    Easing, KeyframeTable, MotionPhase, ScalarRamp, Scene, SceneConfig, SmoothingConfig,
};
use scrollrig_test_fixtures::{scenes, tables};

#[test]
fn two_key_fixture_matches_documented_examples() {
    let table: KeyframeTable = tables::load("two-key-linear").expect("fixture");
    assert_eq!(table.sample(0.5), [0.0, 4.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(table.sample(-0.3), [0.0, -2.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(table.sample(1.7), [0.0, 10.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn keyed_and_list_fixtures_describe_the_same_table() {
    let list: KeyframeTable = tables::load("eased-three-key").expect("fixture");
    let scene = SceneConfig::from_json(&scenes::json("landing-page").unwrap()).unwrap();
    let keyed = scene.model.expect("model block").build().unwrap();
    assert_eq!(keyed.table(), &list);
    assert_eq!(list.as_slice()[0].easing, Easing::EaseInOut);
}

#[test]
fn single_key_fixture_is_rejected() {
    let text = tables::json("single-key").unwrap();
    assert!(serde_json::from_str::<KeyframeTable>(&text).is_err());
}

#[test]
fn landing_page_fixture_produces_all_channels() {
    let mut scene = Scene::from_json(&scenes::json("landing-page").unwrap()).unwrap();
    let names: Vec<&str> = scene.ramp_names().collect();
    assert!(names.contains(&"maskScale"));
    assert!(names.contains(&"featureOpacity"));

    scene.jump_to(0.0);
    let frame = scene.update(1.0 / 60.0, 0.0);
    assert_eq!(frame.channels["maskScale"], 20.0);
    assert_eq!(frame.channels["videoOpacity"], 1.0);
    assert_eq!(frame.channels["videoBlur"], 4.0);
    assert_eq!(frame.channels["modelOpacity"], 0.0);
    assert!(matches!(
        frame.phase,
        Some(MotionPhase::OpeningAnimation { .. })
    ));
}

#[test]
fn smoothing_lags_behind_raw_progress() {
    let mut scene = Scene::from_json(&scenes::json("landing-page").unwrap()).unwrap();
    let first = scene.update(1.0 / 60.0, 1.0).progress;
    assert!(first > 0.0 && first < 0.2, "first={first}");
    for _ in 0..600 {
        scene.update(1.0 / 60.0, 1.0);
    }
    let frame = scene.frame();
    assert_eq!(frame.progress, 1.0);
    assert_eq!(frame.channels["featureOpacity"], 1.0);
    assert_eq!(frame.phase, Some(MotionPhase::ScrollFollow));
    let pose = frame.model.expect("model pose");
    assert_eq!(pose.position, [0.0, 10.0, 0.0]);
    assert_eq!(pose.scale, 3.0);
}

#[test]
fn unsmoothed_scene_samples_raw_progress() {
    let mut scene = Scene::from_json(&scenes::json("ramps-only").unwrap()).unwrap();
    assert!(scene.model().is_none());
    let frame = scene.update(0.0, 0.5);
    assert_eq!(frame.progress, 0.5);
    assert!(frame.model.is_none());
    assert_abs_diff_eq!(frame.channels["fadeIn"], 0.5, epsilon = 1e-6);
    assert_eq!(scene.channel("fadeIn"), Some(scene.frame().channels["fadeIn"]));
    assert_eq!(scene.channel("missing"), None);

    // Non-finite progress keeps the previous value.
    let frame = scene.update(0.0, f32::NAN);
    assert_eq!(frame.progress, 0.5);
}

#[test]
fn skip_intro_switches_scene_model_to_scroll_follow() {
    let mut cfg = SceneConfig::landing_page();
    cfg.smoothing = SmoothingConfig {
        enabled: false,
        ..SmoothingConfig::default()
    };
    let mut scene = Scene::new(cfg).unwrap();
    scene.skip_intro();
    let frame = scene.update(0.016, 0.5);
    assert_eq!(frame.phase, Some(MotionPhase::ScrollFollow));
    assert_eq!(frame.model.unwrap().position, [1.5, 2.0, 0.0]);
}

#[test]
fn mask_scale_ramp_eases_each_segment() {
    let cfg = SceneConfig::landing_page();
    let ramp = ScalarRamp::try_from(cfg.ramps["maskScale"].clone()).unwrap();
    assert_eq!(ramp.sample(0.015), 12.0);
    assert_eq!(ramp.sample(0.5), 0.32);
    // Halfway through [0, 0.015] with easeOut covers 87.5% of 20 -> 12.
    assert_abs_diff_eq!(ramp.sample(0.0075), 20.0 - 8.0 * 0.875, epsilon = 1e-3);
}

#[test]
fn ramp_validation() {
    assert!(ScalarRamp::new(vec![0.0], vec![1.0], Easing::Linear).is_err());
    assert!(ScalarRamp::new(vec![0.0, 1.0], vec![1.0], Easing::Linear).is_err());
    assert!(ScalarRamp::new(vec![0.0, 0.0], vec![1.0, 2.0], Easing::Linear).is_err());
    let ramp = ScalarRamp::span(0.4, 0.6, 0.0, 1.0, Easing::Linear).unwrap();
    assert_eq!(ramp.sample(0.0), 0.0);
    assert_eq!(ramp.sample(0.6), 1.0);
    assert_eq!(ramp.stops(), &[0.4, 0.6]);
}

use js_sys::Float32Array;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use scrollrig_core::{Easing, KeyframeError, KeyframeSpec, Scene, SceneConfig};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js_error(context: &str, err: KeyframeError) -> JsError {
    JsError::new(&format!("{context}: {err}"))
}

/// Serialize maps as plain JS objects rather than `Map`.
fn to_plain_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("serialize error: {e}")))
}

#[wasm_bindgen]
pub struct ScrollRig {
    scene: Scene,
}

#[wasm_bindgen]
impl ScrollRig {
    /// Build from a scene config object, or undefined/null for the landing page preset.
    /// Example:
    ///   new ScrollRig({ ramps: { fade: { stops: [0, 1], outputs: [0, 1] } } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ScrollRig, JsError> {
        console_error_panic_hook::set_once();

        let cfg: SceneConfig = if jsvalue_is_undefined_or_null(&config) {
            SceneConfig::landing_page()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let scene = Scene::new(cfg).map_err(|e| to_js_error("config error", e))?;
        Ok(ScrollRig { scene })
    }

    /// Step by dt (seconds) with raw scroll progress. Returns the frame as a plain object:
    /// `{ progress, model?: { position, rotation, scale }, phase?, channels }`.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32, progress: f32) -> Result<JsValue, JsError> {
        let frame = self.scene.update(dt, progress);
        to_plain_js(frame)
    }

    /// Latest value of a named ramp channel.
    #[wasm_bindgen]
    pub fn channel(&self, name: &str) -> Option<f32> {
        self.scene.channel(name)
    }

    /// Latest model pose as [x, y, z, rx, ry, rz, scale].
    #[wasm_bindgen(js_name = model_pose)]
    pub fn model_pose(&self) -> Option<Float32Array> {
        self.scene
            .frame()
            .model
            .map(|pose| Float32Array::from(&pose.to_array()[..]))
    }

    /// "openingAnimation" | "scrollFollow", or undefined without a model.
    #[wasm_bindgen]
    pub fn phase(&self) -> Option<String> {
        self.scene.model().map(|m| m.phase().name().to_string())
    }

    #[wasm_bindgen(js_name = skip_intro)]
    pub fn skip_intro(&mut self) {
        self.scene.skip_intro();
    }

    #[wasm_bindgen(js_name = jump_to)]
    pub fn jump_to(&mut self, progress: f32) {
        self.scene.jump_to(progress);
    }
}

/// Interpolate a keyframe table (keyed object or list) at `progress`.
/// Returns the six transform values.
#[wasm_bindgen]
pub fn interpolate(progress: f32, keyframes: JsValue) -> Result<Float32Array, JsError> {
    if jsvalue_is_undefined_or_null(&keyframes) {
        return Err(JsError::new("interpolate: keyframes is null/undefined"));
    }
    let spec: KeyframeSpec = swb::from_value(keyframes)
        .map_err(|e| JsError::new(&format!("interpolate parse error: {e}")))?;
    let frames = spec
        .to_keyframes()
        .map_err(|e| to_js_error("interpolate", e))?;
    let values =
        scrollrig_core::interpolate(progress, &frames).map_err(|e| to_js_error("interpolate", e))?;
    Ok(Float32Array::from(&values[..]))
}

/// Apply a named easing curve to `t`.
#[wasm_bindgen]
pub fn ease(name: &str, t: f32) -> Result<f32, JsError> {
    let easing: Easing = name.parse().map_err(|e| to_js_error("ease", e))?;
    Ok(easing.apply(t))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

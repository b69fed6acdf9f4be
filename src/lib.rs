use wasm_bindgen::prelude::*;

pub mod animation;
pub mod data;
pub mod error;
pub mod layout;
pub mod math;
pub mod render;

pub use error::ConfigError;

use animation::{AnimationParams, DisplayState, SceneAnimator, StateToggle};
use layout::{LayoutConfig, LayoutGenerator};
use render::{InstanceBuffer, INSTANCE_STRIDE};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Info).ok();
}

/// Scene state exposed to JavaScript
///
/// The host calls `render(dt)` once per animation frame, then reads
/// `instance_data()` and draws each item with its own renderer.
#[wasm_bindgen]
pub struct HolidayTree {
    generator: LayoutGenerator,
    scene: SceneAnimator,
    toggle: StateToggle,
    instances: InstanceBuffer,
}

#[wasm_bindgen]
impl HolidayTree {
    /// Create the default scene; a seed makes the layout reproducible
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>) -> Result<HolidayTree, JsValue> {
        Self::build(LayoutConfig::default(), seed).map_err(to_js)
    }

    /// Create a scene from a YAML layout preset
    #[wasm_bindgen]
    pub fn from_preset(yaml: &str, seed: Option<u32>) -> Result<HolidayTree, JsValue> {
        let config = LayoutConfig::from_yaml(yaml).map_err(to_js)?;
        Self::build(config, seed).map_err(to_js)
    }

    /// Advance every item by one frame
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f32) {
        self.scene.advance(self.toggle.get(), dt);
    }

    /// Flip between assembled and scattered; returns true if now assembled
    #[wasm_bindgen]
    pub fn toggle(&mut self) -> bool {
        self.toggle.flip().is_assembled()
    }

    #[wasm_bindgen]
    pub fn is_assembled(&self) -> bool {
        self.toggle.get().is_assembled()
    }

    /// Caption for the toggle control
    #[wasm_bindgen]
    pub fn action_label(&self) -> String {
        self.toggle.get().action_label().to_string()
    }

    /// Re-run placement with a new layout, keeping the current display state
    #[wasm_bindgen]
    pub fn regenerate(&mut self, seed: Option<u32>) {
        let layout = self.generator.generate(seed.map(u64::from));
        self.scene.replace_layout(layout);
    }

    /// Packed per-item floats, `instance_stride()` per item
    #[wasm_bindgen]
    pub fn instance_data(&mut self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.instances.pack(&self.scene))
    }

    #[wasm_bindgen]
    pub fn instance_stride(&self) -> usize {
        INSTANCE_STRIDE
    }

    #[wasm_bindgen]
    pub fn item_count(&self) -> usize {
        self.scene.len()
    }

    /// Seconds of animation since the layout was generated
    #[wasm_bindgen]
    pub fn elapsed(&self) -> f32 {
        self.scene.elapsed()
    }
}

impl HolidayTree {
    fn build(config: LayoutConfig, seed: Option<u32>) -> Result<Self, ConfigError> {
        let generator = LayoutGenerator::new(config)?;
        let layout = generator.generate(seed.map(u64::from));
        let scene = SceneAnimator::new(layout, AnimationParams::default())?;

        Ok(Self {
            generator,
            scene,
            toggle: StateToggle::new(DisplayState::Assembled),
            instances: InstanceBuffer::new(),
        })
    }

    pub fn scene(&self) -> &SceneAnimator {
        &self.scene
    }

    pub fn state(&self) -> DisplayState {
        self.toggle.get()
    }
}

fn to_js(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_scene() {
        let tree = HolidayTree::build(LayoutConfig::default(), Some(7)).unwrap();
        assert_eq!(tree.item_count(), 511);
        assert!(tree.is_assembled());
        assert_eq!(tree.action_label(), "SCATTER GIFTS");
    }

    #[test]
    fn test_toggle_and_render() {
        let mut tree = HolidayTree::build(LayoutConfig::with_counts(10, 2, 1), Some(3)).unwrap();
        assert!(!tree.toggle());
        assert_eq!(tree.state(), DisplayState::Scattered);
        tree.render(1.0 / 60.0);
        assert!(tree.elapsed() > 0.0);
        assert!(tree.toggle());
    }

    #[test]
    fn test_regenerate_keeps_state_and_count() {
        let mut tree = HolidayTree::build(LayoutConfig::with_counts(10, 2, 1), Some(3)).unwrap();
        tree.toggle();
        let before = tree.scene().records().to_vec();
        tree.regenerate(Some(4));

        assert_eq!(tree.item_count(), 14);
        assert_eq!(tree.state(), DisplayState::Scattered);
        assert_ne!(tree.scene().records(), before.as_slice());
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let config = LayoutConfig::with_counts(0, 1, 1);
        assert!(HolidayTree::build(config, None).is_err());
    }
}

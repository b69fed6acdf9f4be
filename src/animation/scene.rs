use crate::data::ItemRecord;
use crate::error::ConfigError;
use crate::layout::Layout;
use super::item_animator::{FrameContext, ItemAnimator, LiveTransform};
use super::params::AnimationParams;
use super::state::DisplayState;

/// Owns every item record and its live transform, index-aligned
///
/// Records are read-only after construction; transforms are rewritten
/// once per frame. All items in a frame see the same state, delta and
/// elapsed time.
#[derive(Debug, Clone)]
pub struct SceneAnimator {
    records: Vec<ItemRecord>,
    transforms: Vec<LiveTransform>,
    animator: ItemAnimator,
    elapsed: f32,
}

impl SceneAnimator {
    pub fn new(layout: Layout, params: AnimationParams) -> Result<Self, ConfigError> {
        let animator = ItemAnimator::new(params)?;
        Ok(Self::with_animator(layout.into_items(), animator))
    }

    fn with_animator(records: Vec<ItemRecord>, animator: ItemAnimator) -> Self {
        let transforms = records
            .iter()
            .map(|record| LiveTransform::spawn(record, animator.params()))
            .collect();

        Self {
            records,
            transforms,
            animator,
            elapsed: 0.0,
        }
    }

    /// Swap in a freshly generated layout; live transforms and the clock restart
    pub fn replace_layout(&mut self, layout: Layout) {
        *self = Self::with_animator(layout.into_items(), self.animator);
        log::debug!("layout replaced with {} items", self.records.len());
    }

    /// Advance the session clock by `delta` and update every item
    pub fn advance(&mut self, state: DisplayState, delta: f32) {
        let clamped = FrameContext::clamp_delta(delta);
        if delta.is_nan() || clamped != delta {
            log::warn!("ignoring invalid frame delta {}", delta);
        }
        let delta = clamped;
        self.elapsed += delta;
        let frame = FrameContext::new(state, delta, self.elapsed);
        self.update_frame(&frame);
    }

    /// Update every item against an explicit frame
    pub fn update_frame(&mut self, frame: &FrameContext) {
        for (record, live) in self.records.iter().zip(self.transforms.iter_mut()) {
            self.animator.update(record, live, frame);
        }
    }

    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    pub fn transforms(&self) -> &[LiveTransform] {
        &self.transforms
    }

    /// Record and live transform for an item id
    pub fn get(&self, id: u32) -> Option<(&ItemRecord, &LiveTransform)> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some((&self.records[index], &self.transforms[index]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemRecord, &LiveTransform)> {
        self.records.iter().zip(self.transforms.iter())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn params(&self) -> &AnimationParams {
        self.animator.params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::state::StateToggle;
    use crate::data::ItemKind;
    use crate::layout::{LayoutConfig, LayoutGenerator};

    const FRAME: f32 = 1.0 / 60.0;

    fn scene(seed: u64) -> SceneAnimator {
        let generator = LayoutGenerator::new(LayoutConfig::with_counts(10, 2, 1)).unwrap();
        SceneAnimator::new(generator.generate(Some(seed)), AnimationParams::default()).unwrap()
    }

    #[test]
    fn test_scene_aligns_records_and_transforms() {
        let scene = scene(1);
        assert_eq!(scene.len(), 14);
        assert_eq!(scene.transforms().len(), scene.records().len());
        for (record, live) in scene.iter() {
            assert_eq!(live.position, record.scattered_position);
        }
    }

    #[test]
    fn test_scene_assembles() {
        let mut scene = scene(2);
        let toggle = StateToggle::default();
        for _ in 0..1200 {
            scene.advance(toggle.get(), FRAME);
        }
        for (record, live) in scene.iter() {
            assert!(
                live.position.distance(&record.assembled_position) < 0.01,
                "item {} still {} away",
                record.id,
                live.position.distance(&record.assembled_position)
            );
        }
        assert!((scene.elapsed() - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_toggle_drives_every_item() {
        let mut scene = scene(3);
        let mut toggle = StateToggle::default();
        for _ in 0..600 {
            scene.advance(toggle.get(), FRAME);
        }
        toggle.flip();
        for _ in 0..1500 {
            scene.advance(toggle.get(), FRAME);
        }
        for (record, live) in scene.iter() {
            assert!(live.anchor.distance(&record.scattered_position) < 0.05);
        }
    }

    #[test]
    fn test_invalid_delta_does_not_move_items() {
        let mut scene = scene(4);
        scene.advance(DisplayState::Assembled, FRAME);
        let before: Vec<_> = scene.transforms().iter().map(|live| live.anchor).collect();

        scene.advance(DisplayState::Assembled, f32::NAN);
        scene.advance(DisplayState::Assembled, -1.0);
        scene.advance(DisplayState::Assembled, f32::INFINITY);

        let after: Vec<_> = scene.transforms().iter().map(|live| live.anchor).collect();
        assert_eq!(before, after);
        assert!((scene.elapsed() - FRAME).abs() < 1e-6);
    }

    #[test]
    fn test_get_by_id() {
        let scene = scene(5);
        let (record, _) = scene.get(13).unwrap();
        assert_eq!(record.kind, ItemKind::Star);
        assert!(scene.get(14).is_none());
    }

    #[test]
    fn test_replace_layout_resets_clock() {
        let mut scene = scene(6);
        scene.advance(DisplayState::Scattered, 1.0);
        let generator = LayoutGenerator::default();
        scene.replace_layout(generator.generate(Some(7)));

        assert_eq!(scene.len(), 511);
        assert_eq!(scene.elapsed(), 0.0);
        for (record, live) in scene.iter() {
            assert_eq!(live.position, record.scattered_position);
        }
    }

    #[test]
    fn test_invalid_params_rejected() {
        let layout = LayoutGenerator::default().generate(Some(1));
        let params = AnimationParams {
            scatter_time_constant: -3.0,
            ..Default::default()
        };
        assert!(SceneAnimator::new(layout, params).is_err());
    }
}

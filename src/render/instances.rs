use crate::animation::SceneAnimator;

/// Floats written per item
///
/// Format: position(3) + rotation(3) + scale(1) + color(3) + metalness(1)
/// + roughness(1) + emissive(1) + env_map_intensity(1) + kind(1)
pub const INSTANCE_STRIDE: usize = 15;

/// Flat per-instance data for an external renderer, in item order
#[derive(Debug, Clone, Default)]
pub struct InstanceBuffer {
    data: Vec<f32>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite the buffer from the scene's current transforms
    ///
    /// Reuses the existing allocation between frames.
    pub fn pack(&mut self, scene: &SceneAnimator) -> &[f32] {
        self.data.clear();
        self.data.reserve(scene.len() * INSTANCE_STRIDE);

        for (record, live) in scene.iter() {
            self.data.extend_from_slice(&live.position.to_array());
            self.data.extend_from_slice(&live.rotation.to_array());
            self.data.push(record.scale);
            self.data.extend_from_slice(&record.color.to_array());
            self.data.push(record.metalness);
            self.data.push(record.roughness);
            self.data.push(live.emissive_intensity);
            self.data.push(record.kind.env_map_intensity());
            self.data.push(record.kind.code() as f32);
        }

        &self.data
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn instance_count(&self) -> usize {
        self.data.len() / INSTANCE_STRIDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationParams, DisplayState};
    use crate::data::ItemKind;
    use crate::layout::{LayoutConfig, LayoutGenerator};

    fn scene() -> SceneAnimator {
        let generator = LayoutGenerator::new(LayoutConfig::with_counts(10, 2, 1)).unwrap();
        SceneAnimator::new(generator.generate(Some(31)), AnimationParams::default()).unwrap()
    }

    #[test]
    fn test_buffer_layout() {
        let mut scene = scene();
        scene.advance(DisplayState::Assembled, 0.5);

        let mut buffer = InstanceBuffer::new();
        let data = buffer.pack(&scene).to_vec();
        assert_eq!(data.len(), 14 * INSTANCE_STRIDE);
        assert_eq!(buffer.instance_count(), 14);

        for (i, (record, live)) in scene.iter().enumerate() {
            let chunk = &data[i * INSTANCE_STRIDE..(i + 1) * INSTANCE_STRIDE];
            assert_eq!(&chunk[0..3], &live.position.to_array());
            assert_eq!(&chunk[3..6], &live.rotation.to_array());
            assert_eq!(chunk[6], record.scale);
            assert_eq!(&chunk[7..10], &record.color.to_array());
            assert_eq!(chunk[10], record.metalness);
            assert_eq!(chunk[11], record.roughness);
            assert_eq!(chunk[12], live.emissive_intensity);
            assert_eq!(chunk[14], record.kind.code() as f32);
        }
    }

    #[test]
    fn test_star_is_last_and_glows() {
        let mut scene = scene();
        scene.advance(DisplayState::Assembled, 0.1);

        let mut buffer = InstanceBuffer::new();
        let data = buffer.pack(&scene);
        let star = &data[data.len() - INSTANCE_STRIDE..];
        assert_eq!(star[14], ItemKind::Star.code() as f32);
        assert!(star[12] >= 1.0 && star[12] <= 3.0);
    }

    #[test]
    fn test_repack_does_not_grow() {
        let scene = scene();
        let mut buffer = InstanceBuffer::new();
        buffer.pack(&scene);
        buffer.pack(&scene);
        assert_eq!(buffer.data().len(), 14 * INSTANCE_STRIDE);
    }
}

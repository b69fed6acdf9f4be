use fastrand::Rng;
use crate::data::{ItemKind, ItemRecord};
use crate::error::ConfigError;
use crate::math::Vec3;
use super::config::{LayoutConfig, REST_ANGLE};
use super::sampling::{
    cone_radius_at, drift, jitter, sample_annulus, sample_box, sample_cone_shell,
    sample_cone_volume, uniform,
};

/// Generated item records, in id order
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    items: Vec<ItemRecord>,
}

impl Layout {
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    /// Hand the records off to their owner
    pub fn into_items(self) -> Vec<ItemRecord> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemRecord> {
        self.items.iter()
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}

/// Procedural placement of foliage, ornaments, gifts and the star
///
/// Each item gets a target on the tree silhouette and an independent
/// target in that kind's scatter volume.
pub struct LayoutGenerator {
    config: LayoutConfig,
}

impl Default for LayoutGenerator {
    fn default() -> Self {
        Self { config: LayoutConfig::default() }
    }
}

impl LayoutGenerator {
    /// Validates the configuration up front
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Generate a layout
    ///
    /// With a seed the layout is reproducible bit for bit; without one each
    /// call draws a fresh, independently valid layout.
    pub fn generate(&self, seed: Option<u64>) -> Layout {
        let mut rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };

        let mut items = Vec::with_capacity(self.config.total_count());
        self.push_foliage(&mut rng, &mut items);
        self.push_ornaments(&mut rng, &mut items);
        self.push_gifts(&mut rng, &mut items);
        self.push_star(&mut rng, &mut items);

        log::info!(
            "generated layout: {} foliage, {} ornaments, {} gifts, {} star (seed {:?})",
            self.config.foliage.count,
            self.config.ornaments.count,
            self.config.gifts.count,
            self.config.star.count,
            seed,
        );

        Layout { items }
    }

    fn push_foliage(&self, rng: &mut Rng, items: &mut Vec<ItemRecord>) {
        let p = &self.config.foliage;

        for i in 0..p.count {
            // Jitter keeps the needles off an idealized surface
            let assembled = sample_cone_volume(rng, p.height, p.base_radius, p.height_exponent)
                + jitter(rng, p.jitter);
            let scattered = sample_box(rng, &p.scatter);
            let rest_rotation = Vec3::new(
                uniform(rng, REST_ANGLE),
                uniform(rng, REST_ANGLE),
                uniform(rng, REST_ANGLE),
            );

            items.push(ItemRecord {
                id: items.len() as u32,
                kind: ItemKind::Foliage,
                assembled_position: assembled,
                scattered_position: scattered,
                rest_rotation,
                scale: uniform(rng, p.scale),
                color: if i % p.accent_every == 0 { p.accent_color } else { p.color },
                metalness: p.metalness,
                roughness: p.roughness,
                drift_speed: drift(rng, p.max_drift),
                time_offset: rng.f32() * self.config.max_time_offset,
            });
        }
    }

    fn push_ornaments(&self, rng: &mut Rng, items: &mut Vec<ItemRecord>) {
        let p = &self.config.ornaments;

        for _ in 0..p.count {
            let assembled = sample_cone_shell(rng, p.height, p.base_radius);
            let scattered = sample_box(rng, &p.scatter);
            let color = if rng.f32() < p.primary_probability {
                p.color
            } else {
                p.secondary_color
            };

            items.push(ItemRecord {
                id: items.len() as u32,
                kind: ItemKind::OrnamentSphere,
                assembled_position: assembled,
                scattered_position: scattered,
                rest_rotation: Vec3::ZERO,
                scale: uniform(rng, p.scale),
                color,
                metalness: p.metalness,
                roughness: p.roughness,
                drift_speed: drift(rng, p.max_drift),
                time_offset: rng.f32() * self.config.max_time_offset,
            });
        }
    }

    fn push_gifts(&self, rng: &mut Rng, items: &mut Vec<ItemRecord>) {
        let p = &self.config.gifts;

        for i in 0..p.count {
            let hanging = i >= p.grounded_count;

            let (assembled, scale) = if hanging {
                let y = uniform(rng, p.hanging_height);
                let r = cone_radius_at(y, p.profile_height, p.profile_radius) + p.hanging_offset;
                let theta = rng.f32() * std::f32::consts::TAU;
                (Vec3::from_polar(r, theta, y), uniform(rng, p.hanging_scale))
            } else {
                let position = sample_annulus(rng, p.ground_radius, p.ground_height);
                (position, uniform(rng, p.grounded_scale))
            };

            let scattered = sample_box(rng, &p.scatter);
            let rest_rotation = Vec3::new(0.0, uniform(rng, REST_ANGLE), 0.0);
            let color = if rng.f32() < p.primary_probability {
                p.color
            } else {
                p.secondary_color
            };

            items.push(ItemRecord {
                id: items.len() as u32,
                kind: ItemKind::GiftBox,
                assembled_position: assembled,
                scattered_position: scattered,
                rest_rotation,
                scale,
                color,
                metalness: p.metalness,
                roughness: p.roughness,
                drift_speed: drift(rng, p.max_drift),
                time_offset: rng.f32() * self.config.max_time_offset,
            });
        }
    }

    fn push_star(&self, rng: &mut Rng, items: &mut Vec<ItemRecord>) {
        let p = &self.config.star;

        items.push(ItemRecord {
            id: items.len() as u32,
            kind: ItemKind::Star,
            assembled_position: p.assembled_position,
            scattered_position: p.scattered_position,
            rest_rotation: Vec3::ZERO,
            scale: p.scale,
            color: p.color,
            metalness: p.metalness,
            roughness: p.roughness,
            drift_speed: p.drift_speed,
            time_offset: rng.f32() * self.config.max_time_offset,
        });
    }
}

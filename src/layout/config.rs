//! Layout parameters
//!
//! Defaults reproduce the signature scene: a cone 8 units tall with a 3.5
//! base radius, 400 foliage needles, 80 ornaments, 30 gifts and one star.
//! Presets may override any field from YAML; omitted fields keep their
//! defaults.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use crate::data::color::{palette, Color};
use crate::data::ItemKind;
use crate::error::{ensure_positive, ensure_range, ensure_unit, ConfigError};
use crate::math::Vec3;

/// Closed interval sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        ensure_range(field, self.min, self.max)
    }
}

/// Axis-aligned volume the scattered targets are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl ScatterBox {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x
            && p.y >= self.min.y && p.y <= self.max.y
            && p.z >= self.min.z && p.z <= self.max.z
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        ensure_range(field, self.min.x, self.max.x)?;
        ensure_range(field, self.min.y, self.max.y)?;
        ensure_range(field, self.min.z, self.max.z)
    }
}

/// Needles filling the cone volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoliageParams {
    pub count: usize,
    /// Cone height
    pub height: f32,
    /// Cone radius at y = 0
    pub base_radius: f32,
    /// Normalized height is `u^height_exponent`
    pub height_exponent: f32,
    /// Max per-axis offset added after placement
    pub jitter: f32,
    pub scale: Span,
    pub color: Color,
    /// Every `accent_every`-th needle (by generation order) takes this shade
    pub accent_color: Color,
    pub accent_every: usize,
    pub metalness: f32,
    pub roughness: f32,
    /// Upper bound of each drift axis, drawn from [0, max]
    pub max_drift: Vec3,
    pub scatter: ScatterBox,
}

impl Default for FoliageParams {
    fn default() -> Self {
        Self {
            count: 400,
            height: 8.0,
            base_radius: 3.5,
            height_exponent: 0.8,
            jitter: 0.2,
            scale: Span::new(0.2, 0.5),
            color: palette::EMERALD,
            accent_color: palette::DEEP_EMERALD,
            accent_every: 5,
            metalness: 0.3,
            roughness: 0.4,
            max_drift: Vec3::new(0.02, 0.02, 0.02),
            scatter: ScatterBox::new(Vec3::new(-8.0, 2.0, -8.0), Vec3::new(8.0, 12.0, 8.0)),
        }
    }
}

/// Spheres on the outside of the cone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrnamentParams {
    pub count: usize,
    pub height: f32,
    /// Slightly wider than the foliage cone so spheres sit on the outside
    pub base_radius: f32,
    pub scale: Span,
    pub color: Color,
    pub secondary_color: Color,
    /// Chance of the primary (brighter) shade
    pub primary_probability: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub max_drift: Vec3,
    pub scatter: ScatterBox,
}

impl Default for OrnamentParams {
    fn default() -> Self {
        Self {
            count: 80,
            height: 7.5,
            base_radius: 3.6,
            scale: Span::new(0.15, 0.3),
            color: palette::GOLD,
            secondary_color: palette::ANTIQUE_GOLD,
            primary_probability: 0.7,
            metalness: 1.0,
            roughness: 0.1,
            max_drift: Vec3::new(0.01, 0.01, 0.0),
            scatter: ScatterBox::new(Vec3::new(-10.0, 0.0, -10.0), Vec3::new(10.0, 15.0, 10.0)),
        }
    }
}

/// Boxes stacked under the tree or hanging on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftParams {
    pub count: usize,
    /// Gifts with index below this sit on the floor, the rest hang
    pub grounded_count: usize,
    /// Floor annulus radii
    pub ground_radius: Span,
    pub ground_height: f32,
    pub grounded_scale: Span,
    /// Height band of hanging gifts
    pub hanging_height: Span,
    /// Cone profile used for hanging gifts
    pub profile_height: f32,
    pub profile_radius: f32,
    /// Extra outward offset so hanging boxes clear the needles
    pub hanging_offset: f32,
    pub hanging_scale: Span,
    pub color: Color,
    pub secondary_color: Color,
    pub primary_probability: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub max_drift: Vec3,
    pub scatter: ScatterBox,
}

impl Default for GiftParams {
    fn default() -> Self {
        Self {
            count: 30,
            grounded_count: 11,
            ground_radius: Span::new(1.0, 4.0),
            ground_height: 0.3,
            grounded_scale: Span::new(0.4, 0.7),
            hanging_height: Span::new(1.0, 7.0),
            profile_height: 8.0,
            profile_radius: 3.2,
            hanging_offset: 0.2,
            hanging_scale: Span::new(0.2, 0.35),
            color: palette::WHITE,
            secondary_color: palette::GIFT_EMERALD,
            primary_probability: 0.5,
            metalness: 0.1,
            roughness: 0.5,
            max_drift: Vec3::new(0.01, 0.03, 0.01),
            scatter: ScatterBox::new(Vec3::new(-6.0, 5.0, -6.0), Vec3::new(6.0, 12.0, 6.0)),
        }
    }
}

/// The single star at the apex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarParams {
    pub count: usize,
    pub assembled_position: Vec3,
    pub scattered_position: Vec3,
    pub scale: f32,
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,
    pub drift_speed: Vec3,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            count: 1,
            assembled_position: Vec3::new(0.0, 8.2, 0.0),
            scattered_position: Vec3::new(0.0, 15.0, 0.0),
            scale: 1.0,
            color: palette::STAR_GOLD,
            metalness: 1.0,
            roughness: 0.0,
            drift_speed: Vec3::new(0.0, 0.05, 0.0),
        }
    }
}

/// Full layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub foliage: FoliageParams,
    pub ornaments: OrnamentParams,
    pub gifts: GiftParams,
    pub star: StarParams,
    /// Per-item phase offsets are drawn from [0, max_time_offset)
    pub max_time_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            foliage: FoliageParams::default(),
            ornaments: OrnamentParams::default(),
            gifts: GiftParams::default(),
            star: StarParams::default(),
            max_time_offset: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Default configuration with the given per-kind counts
    pub fn with_counts(foliage: usize, ornaments: usize, gifts: usize) -> Self {
        let mut config = Self::default();
        config.foliage.count = foliage;
        config.ornaments.count = ornaments;
        config.gifts.count = gifts;
        config
    }

    /// Parse and validate a preset
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Total number of items a generator will produce
    ///
    /// Saturates rather than overflowing, so an oversized config still
    /// reaches `validate` and fails there.
    pub fn total_count(&self) -> usize {
        self.foliage
            .count
            .saturating_add(self.ornaments.count)
            .saturating_add(self.gifts.count)
            .saturating_add(self.star.count)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.foliage;
        ensure_count(ItemKind::Foliage.label(), f.count)?;
        ensure_positive("foliage.height", f.height)?;
        ensure_positive("foliage.base_radius", f.base_radius)?;
        ensure_positive("foliage.height_exponent", f.height_exponent)?;
        ensure_range("foliage.jitter", 0.0, f.jitter)?;
        f.scale.validate("foliage.scale")?;
        ensure_positive("foliage.scale", f.scale.min)?;
        ensure_count("foliage accent cadence", f.accent_every)?;
        ensure_unit("foliage.metalness", f.metalness)?;
        ensure_unit("foliage.roughness", f.roughness)?;
        ensure_drift("foliage.max_drift", f.max_drift)?;
        f.scatter.validate("foliage.scatter")?;

        let o = &self.ornaments;
        ensure_count(ItemKind::OrnamentSphere.label(), o.count)?;
        ensure_positive("ornaments.height", o.height)?;
        ensure_positive("ornaments.base_radius", o.base_radius)?;
        o.scale.validate("ornaments.scale")?;
        ensure_positive("ornaments.scale", o.scale.min)?;
        ensure_unit("ornaments.primary_probability", o.primary_probability)?;
        ensure_unit("ornaments.metalness", o.metalness)?;
        ensure_unit("ornaments.roughness", o.roughness)?;
        ensure_drift("ornaments.max_drift", o.max_drift)?;
        o.scatter.validate("ornaments.scatter")?;

        let g = &self.gifts;
        ensure_count(ItemKind::GiftBox.label(), g.count)?;
        g.ground_radius.validate("gifts.ground_radius")?;
        ensure_range("gifts.ground_radius", 0.0, g.ground_radius.min)?;
        g.grounded_scale.validate("gifts.grounded_scale")?;
        ensure_positive("gifts.grounded_scale", g.grounded_scale.min)?;
        ensure_range("gifts.ground_height", g.ground_height, g.ground_height)?;
        g.hanging_height.validate("gifts.hanging_height")?;
        ensure_positive("gifts.profile_height", g.profile_height)?;
        ensure_positive("gifts.profile_radius", g.profile_radius)?;
        ensure_range("gifts.hanging_offset", 0.0, g.hanging_offset)?;
        g.hanging_scale.validate("gifts.hanging_scale")?;
        ensure_positive("gifts.hanging_scale", g.hanging_scale.min)?;
        ensure_unit("gifts.primary_probability", g.primary_probability)?;
        ensure_unit("gifts.metalness", g.metalness)?;
        ensure_unit("gifts.roughness", g.roughness)?;
        ensure_drift("gifts.max_drift", g.max_drift)?;
        g.scatter.validate("gifts.scatter")?;

        let s = &self.star;
        if s.count != 1 {
            return Err(ConfigError::StarCount(s.count));
        }
        ensure_positive("star.scale", s.scale)?;
        ensure_unit("star.metalness", s.metalness)?;
        ensure_unit("star.roughness", s.roughness)?;
        for (field, p) in [
            ("star.assembled_position", s.assembled_position),
            ("star.scattered_position", s.scattered_position),
        ] {
            for c in p.to_array() {
                ensure_range(field, c, c)?;
            }
        }
        ensure_drift("star.drift_speed", s.drift_speed)?;

        let total = self.total_count();
        if total > MAX_ITEMS {
            return Err(ConfigError::TooManyItems { count: total, max: MAX_ITEMS });
        }

        ensure_range("max_time_offset", 0.0, self.max_time_offset)
    }
}

/// Upper bound on items per layout; keeps every id within u32
pub const MAX_ITEMS: usize = 1_000_000;

/// Angles a rest rotation may take per axis for randomly oriented kinds
pub const REST_ANGLE: Span = Span::new(0.0, PI);

fn ensure_count(kind: &'static str, count: usize) -> Result<(), ConfigError> {
    if count == 0 {
        Err(ConfigError::ZeroCount { kind })
    } else {
        Ok(())
    }
}

fn ensure_drift(field: &'static str, drift: Vec3) -> Result<(), ConfigError> {
    ensure_range(field, 0.0, drift.x)?;
    ensure_range(field, 0.0, drift.y)?;
    ensure_range(field, 0.0, drift.z)
}

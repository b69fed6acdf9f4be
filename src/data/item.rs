use serde::{Deserialize, Serialize};
use crate::math::Vec3;
use super::color::Color;

/// Kind of decoration; drives geometry, material defaults and animation special cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Foliage,
    OrnamentSphere,
    GiftBox,
    Star,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Foliage,
        ItemKind::OrnamentSphere,
        ItemKind::GiftBox,
        ItemKind::Star,
    ];

    /// Stable numeric code written into instance buffers
    pub fn code(self) -> u32 {
        match self {
            ItemKind::Foliage => 0,
            ItemKind::OrnamentSphere => 1,
            ItemKind::GiftBox => 2,
            ItemKind::Star => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Foliage => "foliage",
            ItemKind::OrnamentSphere => "ornament",
            ItemKind::GiftBox => "gift",
            ItemKind::Star => "star",
        }
    }

    /// Environment reflection multiplier hint for the renderer
    pub fn env_map_intensity(self) -> f32 {
        match self {
            ItemKind::OrnamentSphere => 2.0,
            ItemKind::GiftBox => 1.5,
            ItemKind::Foliage | ItemKind::Star => 1.0,
        }
    }
}

/// Immutable generation-time facts about one decoration
///
/// Both targets are fixed once generated; only the live transform owned
/// by the animator changes per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique within a layout, used as the render key
    pub id: u32,
    pub kind: ItemKind,
    /// Target while assembled into the tree silhouette
    pub assembled_position: Vec3,
    /// Target while scattered into the cloud
    pub scattered_position: Vec3,
    /// Euler orientation (radians) the item settles to when assembled
    pub rest_rotation: Vec3,
    pub scale: f32,
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,
    /// Per-axis angular velocity, applied only while scattered
    pub drift_speed: Vec3,
    /// Fixed phase offset (seconds) so items do not bob, sway or pulse in unison
    pub time_offset: f32,
}

impl ItemRecord {
    pub fn target(&self, assembled: bool) -> Vec3 {
        if assembled {
            self.assembled_position
        } else {
            self.scattered_position
        }
    }
}

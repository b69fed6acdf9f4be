//! Procedural layout of the tree decorations
//!
//! Produces one `ItemRecord` per decoration with a tree-silhouette target,
//! a scattered target, and the static material and motion parameters the
//! animator needs.

pub mod config;
pub mod generator;
pub mod sampling;

pub use config::{
    FoliageParams, GiftParams, LayoutConfig, OrnamentParams, ScatterBox, Span, StarParams,
};
pub use generator::{Layout, LayoutGenerator};

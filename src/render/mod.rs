//! Hand-off to an external renderer
//!
//! The crate does not draw; it packs per-item transforms and material
//! parameters into a flat float buffer each frame.

pub mod instances;

pub use instances::{InstanceBuffer, INSTANCE_STRIDE};

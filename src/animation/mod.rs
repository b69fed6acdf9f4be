//! Animation of decorations between the assembled tree and the scattered cloud
//!
//! Motion is continuous convergence rather than discrete phases: each item
//! damps toward whichever target the current display state selects.

mod damping;
mod item_animator;
mod params;
mod scene;
mod state;

pub use damping::{damp, damp_angle, damp_euler, damp_factor, damp_vec3, wrap_angle};
pub use item_animator::{FrameContext, ItemAnimator, LiveTransform};
pub use params::{AnimationParams, DriftIntegration};
pub use scene::SceneAnimator;
pub use state::{DisplayState, StateToggle};

//! Per-item motion between the assembled and scattered arrangements
//!
//! Each frame an item:
//! - damps its anchor toward the current state's target
//! - bobs around the anchor, weighted by how far it has drifted into the cloud
//! - spins by its drift speed while scattered, or settles to its rest
//!   orientation while assembled (foliage also sways)
//! - pulses its emissive intensity if it is the star

use crate::data::{ItemKind, ItemRecord};
use crate::error::ConfigError;
use crate::math::Vec3;
use super::damping::{damp, damp_euler, damp_vec3, wrap_angle};
use super::params::{AnimationParams, DriftIntegration};
use super::state::DisplayState;

/// Inputs shared by every item within one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub state: DisplayState,
    /// Seconds since the previous frame, never negative
    pub delta: f32,
    /// Seconds since the session started
    pub elapsed: f32,
}

impl FrameContext {
    /// Invalid deltas are clamped with `clamp_delta`; non-finite elapsed time becomes zero
    pub fn new(state: DisplayState, delta: f32, elapsed: f32) -> Self {
        Self {
            state,
            delta: Self::clamp_delta(delta),
            elapsed: if elapsed.is_finite() { elapsed } else { 0.0 },
        }
    }

    /// Non-finite or negative deltas become zero
    pub fn clamp_delta(delta: f32) -> f32 {
        if delta.is_finite() && delta > 0.0 {
            delta
        } else {
            0.0
        }
    }
}

/// Mutable per-frame transform of one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveTransform {
    /// Damped point the item is travelling along
    pub anchor: Vec3,
    /// Anchor plus bob offset; what the renderer draws
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    /// 0 = at rest on the tree, 1 = fully floating
    pub float_weight: f32,
    /// Only non-zero for the star
    pub emissive_intensity: f32,
}

impl LiveTransform {
    /// Items enter at their scattered target and fly in
    pub fn spawn(record: &ItemRecord, params: &AnimationParams) -> Self {
        Self {
            anchor: record.scattered_position,
            position: record.scattered_position,
            rotation: Vec3::ZERO,
            float_weight: 0.0,
            emissive_intensity: if record.kind == ItemKind::Star {
                params.pulse_base
            } else {
                0.0
            },
        }
    }
}

/// Stateless stepper applying `AnimationParams` to one item at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemAnimator {
    params: AnimationParams,
}

impl ItemAnimator {
    pub fn new(params: AnimationParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    /// Advance one item by one frame
    pub fn update(&self, record: &ItemRecord, live: &mut LiveTransform, frame: &FrameContext) {
        let p = &self.params;
        let assembled = frame.state.is_assembled();
        let dt = frame.delta;
        let t = frame.elapsed + record.time_offset;

        // Continues from wherever the anchor is; a flip only swaps target and time constant
        let time_constant = p.position_time_constant(assembled);
        live.anchor = damp_vec3(live.anchor, record.target(assembled), time_constant, dt);

        let float_target = if assembled { 0.0 } else { 1.0 };
        live.float_weight = damp(live.float_weight, float_target, time_constant, dt);
        live.position = live.anchor + self.bob_offset(t).scale(live.float_weight);

        if assembled {
            live.rotation = damp_euler(live.rotation, record.rest_rotation, p.rotation_time_constant, dt);
            if record.kind == ItemKind::Foliage {
                // Recomputed each frame, not damped
                live.rotation.z = record.rest_rotation.z + p.sway_amplitude * (p.sway_frequency * t).sin();
            }
        } else {
            let step = match p.drift_integration {
                DriftIntegration::PerFrame => 1.0,
                DriftIntegration::TimeScaled => dt * p.reference_frame_rate,
            };
            let spun = live.rotation + record.drift_speed.scale(step);
            live.rotation = Vec3::new(wrap_angle(spun.x), wrap_angle(spun.y), wrap_angle(spun.z));
        }

        if record.kind == ItemKind::Star {
            live.emissive_intensity = p.pulse_base + p.pulse_amplitude * (p.pulse_frequency * t).sin();
        }
    }

    fn bob_offset(&self, t: f32) -> Vec3 {
        let p = &self.params;
        Vec3::new(
            p.bob_horizontal_amplitude * (p.bob_horizontal_frequency * t).cos(),
            p.bob_vertical_amplitude * (p.bob_vertical_frequency * t).sin(),
            0.0,
        )
    }
}

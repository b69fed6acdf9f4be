//! Frame-rate independent exponential damping
//!
//! Each step closes `1 - exp(-delta / time_constant)` of the remaining gap,
//! so two half-length steps land where one full-length step would. The
//! target is approached asymptotically and never overshot.

use std::f32::consts::{PI, TAU};
use crate::math::Vec3;

/// Fraction of the remaining distance covered in `delta`
pub fn damp_factor(time_constant: f32, delta: f32) -> f32 {
    if delta <= 0.0 {
        return 0.0;
    }
    1.0 - (-delta / time_constant).exp()
}

/// Damp a scalar toward `target`
pub fn damp(current: f32, target: f32, time_constant: f32, delta: f32) -> f32 {
    current + (target - current) * damp_factor(time_constant, delta)
}

/// Damp each component of a point toward `target`
pub fn damp_vec3(current: Vec3, target: Vec3, time_constant: f32, delta: f32) -> Vec3 {
    current.lerp(&target, damp_factor(time_constant, delta))
}

/// Wrap an angle into [-PI, PI); angles already in range are returned untouched
pub fn wrap_angle(angle: f32) -> f32 {
    if (-PI..PI).contains(&angle) {
        angle
    } else {
        (angle + PI).rem_euclid(TAU) - PI
    }
}

/// Damp an angle toward `target` along the shortest arc
pub fn damp_angle(current: f32, target: f32, time_constant: f32, delta: f32) -> f32 {
    let gap = wrap_angle(target - current);
    current + gap * damp_factor(time_constant, delta)
}

/// Damp an Euler triple toward `target`, axis by axis
pub fn damp_euler(current: Vec3, target: Vec3, time_constant: f32, delta: f32) -> Vec3 {
    Vec3::new(
        damp_angle(current.x, target.x, time_constant, delta),
        damp_angle(current.y, target.y, time_constant, delta),
        damp_angle(current.z, target.z, time_constant, delta),
    )
}

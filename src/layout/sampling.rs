//! Sampling primitives for procedural placement
//!
//! All shapes are centred on the vertical axis with their base on y = 0.

use std::f32::consts::TAU;
use fastrand::Rng;
use crate::math::Vec3;
use super::config::{ScatterBox, Span};

/// Uniform value in `span`
pub fn uniform(rng: &mut Rng, span: Span) -> f32 {
    span.lerp(rng.f32())
}

/// Radius of a cone with the given profile at height `y`, zero at and above the apex
pub fn cone_radius_at(y: f32, height: f32, base_radius: f32) -> f32 {
    (base_radius * (1.0 - y / height)).max(0.0)
}

/// Point inside a solid cone
///
/// Normalized height is `u^height_exponent`. Within the cross-section the
/// radius is `sqrt(u)` scaled, which keeps density uniform per unit area;
/// a linear radius would crowd points toward the axis.
pub fn sample_cone_volume(rng: &mut Rng, height: f32, base_radius: f32, height_exponent: f32) -> Vec3 {
    let y_norm = rng.f32().powf(height_exponent);
    let y = y_norm * height;
    let radius = (1.0 - y_norm) * base_radius;

    let theta = rng.f32() * TAU;
    let r = rng.f32().sqrt() * radius;

    Vec3::from_polar(r, theta, y)
}

/// Point on the lateral surface of a cone, uniform in height
pub fn sample_cone_shell(rng: &mut Rng, height: f32, base_radius: f32) -> Vec3 {
    let y_norm = rng.f32();
    let y = y_norm * height;
    let radius = (1.0 - y_norm) * base_radius;
    let theta = rng.f32() * TAU;

    Vec3::from_polar(radius, theta, y)
}

/// Point on a horizontal ring at height `y` with radius drawn from `radius`
pub fn sample_annulus(rng: &mut Rng, radius: Span, y: f32) -> Vec3 {
    let theta = rng.f32() * TAU;
    let r = uniform(rng, radius);

    Vec3::from_polar(r, theta, y)
}

/// Uniform point in an axis-aligned box
pub fn sample_box(rng: &mut Rng, bounds: &ScatterBox) -> Vec3 {
    Vec3::new(
        uniform(rng, Span::new(bounds.min.x, bounds.max.x)),
        uniform(rng, Span::new(bounds.min.y, bounds.max.y)),
        uniform(rng, Span::new(bounds.min.z, bounds.max.z)),
    )
}

/// Independent offset in [-amount, amount] on each axis
pub fn jitter(rng: &mut Rng, amount: f32) -> Vec3 {
    let span = Span::new(-amount, amount);
    Vec3::new(uniform(rng, span), uniform(rng, span), uniform(rng, span))
}

/// Per-axis value in [0, max]
pub fn drift(rng: &mut Rng, max: Vec3) -> Vec3 {
    Vec3::new(rng.f32() * max.x, rng.f32() * max.y, rng.f32() * max.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BINS: usize = 10;

    fn histogram(values: impl Iterator<Item = f32>) -> [f32; BINS] {
        let mut counts = [0usize; BINS];
        let mut total = 0usize;
        for v in values {
            let bin = ((v * BINS as f32) as usize).min(BINS - 1);
            counts[bin] += 1;
            total += 1;
        }
        let mut fractions = [0.0f32; BINS];
        for (f, c) in fractions.iter_mut().zip(counts) {
            *f = c as f32 / total as f32;
        }
        fractions
    }

    #[test]
    fn test_cone_radius_profile() {
        assert!((cone_radius_at(0.0, 8.0, 3.5) - 3.5).abs() < 1e-6);
        assert!((cone_radius_at(4.0, 8.0, 3.5) - 1.75).abs() < 1e-6);
        assert_eq!(cone_radius_at(8.0, 8.0, 3.5), 0.0);
        assert_eq!(cone_radius_at(9.0, 8.0, 3.5), 0.0);
    }

    #[test]
    fn test_cone_volume_stays_inside() {
        let mut rng = Rng::with_seed(1);
        for _ in 0..5000 {
            let p = sample_cone_volume(&mut rng, 8.0, 3.5, 0.8);
            assert!(p.y >= 0.0 && p.y <= 8.0);
            assert!(p.radial() <= cone_radius_at(p.y, 8.0, 3.5) + 1e-4);
        }
    }

    #[test]
    fn test_cone_volume_areal_uniformity() {
        // Within a height band the squared normalized radius is uniform
        let mut rng = Rng::with_seed(7);
        let mut squared = Vec::new();
        let mut linear = Vec::new();
        while squared.len() < 20_000 {
            let p = sample_cone_volume(&mut rng, 8.0, 3.5, 0.8);
            let band = p.y / 8.0;
            if !(0.1..0.5).contains(&band) {
                continue;
            }
            let rel = p.radial() / cone_radius_at(p.y, 8.0, 3.5);
            squared.push(rel * rel);
            linear.push(rel);
        }

        let area_hist = histogram(squared.into_iter());
        for (i, f) in area_hist.iter().enumerate() {
            assert!((f - 0.1).abs() < 0.015, "r^2 bin {} has fraction {}", i, f);
        }

        // Radius itself is not uniform: the inner tenth holds ~1% of the points
        let radius_hist = histogram(linear.into_iter());
        assert!(radius_hist[0] < 0.03);
        assert!(radius_hist[BINS - 1] > 0.15);
    }

    #[test]
    fn test_height_exponent_shapes_median() {
        let mut rng = Rng::with_seed(11);
        let median = |rng: &mut Rng, exponent: f32| {
            let mut ys: Vec<f32> = (0..10_001)
                .map(|_| sample_cone_volume(rng, 8.0, 3.5, exponent).y / 8.0)
                .collect();
            ys.sort_by(|a, b| a.total_cmp(b));
            ys[ys.len() / 2]
        };

        // Median of u^k is 0.5^k
        let m = median(&mut rng, 0.8);
        assert!((m - 0.5f32.powf(0.8)).abs() < 0.02, "median {}", m);

        // An exponent above one pulls mass toward the base
        let m = median(&mut rng, 1.25);
        assert!(m < 0.5, "median {}", m);
    }

    #[test]
    fn test_cone_shell_on_surface() {
        let mut rng = Rng::with_seed(3);
        for _ in 0..1000 {
            let p = sample_cone_shell(&mut rng, 7.5, 3.6);
            assert!(p.y >= 0.0 && p.y <= 7.5);
            assert!((p.radial() - cone_radius_at(p.y, 7.5, 3.6)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_annulus_bounds() {
        let mut rng = Rng::with_seed(5);
        for _ in 0..1000 {
            let p = sample_annulus(&mut rng, Span::new(1.0, 4.0), 0.3);
            assert_eq!(p.y, 0.3);
            let r = p.radial();
            assert!(r >= 1.0 - 1e-4 && r <= 4.0 + 1e-4);
        }
    }

    #[test]
    fn test_box_and_jitter_bounds() {
        let mut rng = Rng::with_seed(9);
        let bounds = ScatterBox::new(Vec3::new(-8.0, 2.0, -8.0), Vec3::new(8.0, 12.0, 8.0));
        for _ in 0..1000 {
            assert!(bounds.contains(sample_box(&mut rng, &bounds)));

            let j = jitter(&mut rng, 0.2);
            assert!(j.x.abs() <= 0.2 && j.y.abs() <= 0.2 && j.z.abs() <= 0.2);

            let d = drift(&mut rng, Vec3::new(0.01, 0.03, 0.0));
            assert!(d.x >= 0.0 && d.x <= 0.01);
            assert!(d.y >= 0.0 && d.y <= 0.03);
            assert_eq!(d.z, 0.0);
        }
    }
}

//! Vector helpers for collision resolution.

use glam::Vec2;

/// Mirror `d` across the surface with unit normal `n`: `d - 2(d·n)n`.
pub fn reflect(d: Vec2, n: Vec2) -> Vec2 {
    d - 2.0 * d.dot(n) * n
}

/// Keep the vertical component of a direction at or above `min` in magnitude.
///
/// A direction with `|y| < min` comes back with `y = ±min` (a zero `y` goes
/// positive) and `x` rescaled so the result is unit length. Anything else is
/// returned normalized and otherwise untouched.
pub fn clamp_vertical(direction: Vec2, min: f32) -> Vec2 {
    let d = direction.normalize_or_zero();
    if d.y.abs() >= min {
        return d;
    }
    let y = if d.y < 0.0 { -min } else { min };
    let x = (1.0 - min * min).max(0.0).sqrt();
    // signum(0.0) is 1.0, so a zero vector heads right
    Vec2::new(x * d.x.signum(), y)
}

/// Normalized offset of the impact point along the other body's height.
///
/// Roughly `[-0.5, 0.5]` across a paddle face; larger at the corners. Returns
/// 0 when the height is not a positive finite number.
pub fn hit_factor(ball_y: f32, other_y: f32, other_height: f32) -> f32 {
    if !(other_height.is_finite() && other_height > 0.0) {
        return 0.0;
    }
    let factor = (ball_y - other_y) / other_height;
    if factor.is_finite() {
        factor
    } else {
        0.0
    }
}

/// Add paddle spin to a direction. The result is not normalized.
pub fn spin(direction: Vec2, hit_factor: f32, scale: f32) -> Vec2 {
    Vec2::new(direction.x, direction.y + hit_factor * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_reflect_off_floor() {
        let d = Vec2::new(1.0, -1.0).normalize();
        let r = reflect(d, Vec2::Y);
        let expected = Vec2::new(1.0, 1.0).normalize();
        assert!((r - expected).length() < EPS, "got {r:?}");
    }

    #[test]
    fn test_reflect_off_vertical_wall() {
        let r = reflect(Vec2::new(-0.6, 0.8), Vec2::X);
        assert!((r - Vec2::new(0.6, 0.8)).length() < EPS);
    }

    #[test]
    fn test_reflect_parallel_to_surface_is_unchanged() {
        let r = reflect(Vec2::X, Vec2::Y);
        assert!((r - Vec2::X).length() < EPS);
    }

    #[test]
    fn test_clamp_vertical_lifts_shallow_direction() {
        let d = clamp_vertical(Vec2::new(1.0, 0.1), 0.2);
        assert!((d.y - 0.2).abs() < EPS);
        assert!(d.x > 0.0);
        assert!((d.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_clamp_vertical_preserves_negative_sign() {
        let d = clamp_vertical(Vec2::new(-1.0, -0.05), 0.2);
        assert!((d.y + 0.2).abs() < EPS);
        assert!(d.x < 0.0);
        assert!((d.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_clamp_vertical_zero_y_goes_positive() {
        let d = clamp_vertical(Vec2::new(-1.0, 0.0), 0.2);
        assert!((d.y - 0.2).abs() < EPS);
        assert!(d.x < 0.0);
    }

    #[test]
    fn test_clamp_vertical_leaves_steep_direction() {
        let input = Vec2::new(0.6, -0.8);
        let d = clamp_vertical(input, 0.2);
        assert!((d - input).length() < EPS);
    }

    #[test]
    fn test_clamp_vertical_zero_vector_is_unit() {
        let d = clamp_vertical(Vec2::ZERO, 0.2);
        assert!((d.length() - 1.0).abs() < EPS);
        assert!((d.y - 0.2).abs() < EPS);
    }

    #[test]
    fn test_hit_factor_center_and_edges() {
        assert_eq!(hit_factor(3.0, 3.0, 4.0), 0.0);
        assert!((hit_factor(5.0, 3.0, 4.0) - 0.5).abs() < EPS);
        assert!((hit_factor(1.0, 3.0, 4.0) + 0.5).abs() < EPS);
    }

    #[test]
    fn test_hit_factor_guards_degenerate_height() {
        assert_eq!(hit_factor(5.0, 3.0, 0.0), 0.0);
        assert_eq!(hit_factor(5.0, 3.0, -1.0), 0.0);
        assert_eq!(hit_factor(5.0, 3.0, f32::NAN), 0.0);
        assert_eq!(hit_factor(5.0, 3.0, f32::INFINITY), 0.0);
    }

    #[test]
    fn test_spin_center_hit_is_noop() {
        let d = Vec2::new(0.8, 0.6);
        assert_eq!(spin(d, 0.0, 0.5), d);
    }

    #[test]
    fn test_spin_top_edge_adds_quarter() {
        let d = Vec2::new(0.8, 0.6);
        let s = spin(d, 0.5, 0.5);
        assert!((s.y - 0.85).abs() < EPS);
        assert_eq!(s.x, d.x);
    }
}

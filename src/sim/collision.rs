//! Circle-circle collision detection and response
//!
//! Detection is a strict overlap test; response is one-sided elastic
//! reflection followed by a symmetric positional de-overlap, so the pair
//! never renders intersecting on the next frame.

use glam::Vec2;

use super::state::Disc;

/// True when two discs overlap. Tangency does not count.
#[inline]
pub fn circles_overlap(a: &Disc, b: &Disc) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// Standard elastic reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflect `moving` off `stationary`, then separate the pair.
///
/// One-sided response: only the moving disc's velocity changes; the other
/// disc keeps whatever velocity it had, whether or not it was actually
/// stationary. Coincident centers have no usable normal, so that case
/// leaves both discs untouched.
pub fn resolve_collision(moving: &mut Disc, stationary: &mut Disc) {
    let delta = moving.pos - stationary.pos;
    let distance = delta.length();
    if distance == 0.0 {
        return;
    }
    let normal = delta / distance;
    moving.vel = reflect_velocity(moving.vel, normal);
    correct_overlap(moving, stationary);
}

/// Push overlapping discs apart along the line of centers, half the
/// overlap each, so the pair ends exactly tangent. Same zero-distance
/// guard as `resolve_collision`.
pub fn correct_overlap(a: &mut Disc, b: &mut Disc) {
    let delta = a.pos - b.pos;
    let distance = delta.length();
    if distance == 0.0 {
        return;
    }
    let overlap = a.radius + b.radius - distance;
    if overlap > 0.0 {
        let push = delta / distance * (overlap / 2.0);
        a.pos += push;
        b.pos -= push;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::DiscKind;

    fn disc(x: f32, y: f32, radius: f32) -> Disc {
        Disc {
            id: 0,
            kind: DiscKind::Patrol,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[test]
    fn overlap_boundary_is_exclusive() {
        let a = disc(0.0, 0.0, 8.0);
        // Exactly tangent: not a collision
        assert!(!circles_overlap(&a, &disc(13.0, 0.0, 5.0)));
        assert!(circles_overlap(&a, &disc(12.9, 0.0, 5.0)));
        assert!(!circles_overlap(&a, &disc(13.1, 0.0, 5.0)));
    }

    #[test]
    fn reflect_off_vertical_wall() {
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn coincident_centers_are_a_no_op() {
        let mut a = disc(50.0, 50.0, 8.0);
        a.vel = Vec2::new(3.0, -2.0);
        let mut b = disc(50.0, 50.0, 5.0);
        let (a0, b0) = (a, b);

        resolve_collision(&mut a, &mut b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);

        correct_overlap(&mut a, &mut b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn overlap_correction_restores_tangency() {
        // Centers 10 apart, radii 8 + 5: overlap 3, each disc moves 1.5
        let mut a = disc(0.0, 0.0, 8.0);
        let mut b = disc(10.0, 0.0, 5.0);
        correct_overlap(&mut a, &mut b);
        assert!((a.pos.x - (-1.5)).abs() < 1e-4);
        assert!((b.pos.x - 11.5).abs() < 1e-4);
        assert!((a.pos.distance(b.pos) - 13.0).abs() < 1e-4);
    }

    #[test]
    fn separated_pair_is_untouched() {
        let mut a = disc(0.0, 0.0, 8.0);
        let mut b = disc(20.0, 0.0, 5.0);
        let (a0, b0) = (a, b);
        correct_overlap(&mut a, &mut b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn resolution_reflects_only_the_moving_disc() {
        let mut moving = disc(0.0, 0.0, 8.0);
        moving.vel = Vec2::new(2.0, 0.0);
        let mut other = disc(1.0, 0.0, 5.0);
        other.vel = Vec2::new(0.0, 5.0);

        resolve_collision(&mut moving, &mut other);
        // Normal points from other toward moving, i.e. (-1, 0)
        assert_eq!(moving.vel, Vec2::new(-2.0, 0.0));
        assert_eq!(other.vel, Vec2::new(0.0, 5.0));
        // De-overlap ran as part of the resolution
        assert!((moving.pos.distance(other.pos) - 13.0).abs() < 1e-4);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::sim::state::DiscKind;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    fn disc_at(pos: Vec2, radius: f32) -> Disc {
        Disc {
            id: 0,
            kind: DiscKind::Patrol,
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    proptest! {
        #[test]
        fn reflect_is_an_involution(
            vx in -400.0f32..400.0,
            vy in -400.0f32..400.0,
            theta in 0.0f32..TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(theta.cos(), theta.sin());
            let back = reflect_velocity(reflect_velocity(v, n), n);
            prop_assert!((back - v).length() <= 1e-3 * (1.0 + v.length()));
        }

        #[test]
        fn reflect_preserves_speed(
            vx in -400.0f32..400.0,
            vy in -400.0f32..400.0,
            theta in 0.0f32..TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(theta.cos(), theta.sin());
            let speed = reflect_velocity(v, n).length();
            prop_assert!((speed - v.length()).abs() <= 1e-3 * (1.0 + v.length()));
        }

        #[test]
        fn correction_separates_to_exact_tangency(
            ax in -500.0f32..500.0,
            ay in -500.0f32..500.0,
            angle in 0.0f32..TAU,
            ra in 2.0f32..50.0,
            rb in 2.0f32..50.0,
            frac in 0.05f32..0.95,
        ) {
            let sum = ra + rb;
            let a_pos = Vec2::new(ax, ay);
            let b_pos = a_pos + Vec2::new(angle.cos(), angle.sin()) * (sum * frac);
            let mut a = disc_at(a_pos, ra);
            let mut b = disc_at(b_pos, rb);
            let overlap = sum - a.pos.distance(b.pos);

            correct_overlap(&mut a, &mut b);

            // Pair ends exactly tangent, each disc pushed half the overlap
            prop_assert!((a.pos.distance(b.pos) - sum).abs() <= 1e-2 * sum);
            prop_assert!((a.pos.distance(a_pos) - overlap / 2.0).abs() <= 1e-2 * sum);
            prop_assert!((b.pos.distance(b_pos) - overlap / 2.0).abs() <= 1e-2 * sum);
        }
    }
}

//! Ball-to-hole collision
//!
//! A ball drops into a hole when enough of its diameter hangs over the hole.
//! Coverage is measured along the line between the two centers: how much of
//! the ball's diameter lies inside the hole's rim.

use glam::Vec2;

use super::holes::Hole;

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Fraction (0-1) of the ball's diameter that covers `hole`
pub fn coverage(ball_center: Vec2, ball_radius: f32, hole: &Hole) -> f32 {
    let d = distance(ball_center, hole.center);

    if d >= hole.radius + ball_radius {
        0.0
    } else if d <= hole.radius - ball_radius {
        1.0
    } else {
        // Linear in d. Only reachable below 1 when the ball is wider than the hole.
        (1.0 - (d + ball_radius - hole.radius) / (2.0 * ball_radius)).clamp(0.0, 1.0)
    }
}

/// Find the first hole (in iteration order) the ball drops into
///
/// Returns the index into `holes`. The scan stops at the first hole whose
/// coverage reaches `threshold`, even if a later hole is closer.
pub fn check_collision(
    ball_center: Vec2,
    ball_radius: f32,
    holes: &[Hole],
    threshold: f32,
) -> Option<usize> {
    holes
        .iter()
        .position(|hole| coverage(ball_center, ball_radius, hole) >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const THRESHOLD: f32 = 0.8;

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_coverage_partial_overlap() {
        // 1 - (5 + 8 - 11) / 16 = 0.875
        let hole = Hole::new(100.0, 100.0, 11.0);
        let c = coverage(Vec2::new(105.0, 100.0), 8.0, &hole);
        assert!((c - 0.875).abs() < 1e-6);
        assert_eq!(check_collision(Vec2::new(105.0, 100.0), 8.0, &[hole], THRESHOLD), Some(0));
    }

    #[test]
    fn test_coverage_bounds() {
        let hole = Hole::new(0.0, 0.0, 11.0);
        assert_eq!(coverage(Vec2::new(0.0, 0.0), 8.0, &hole), 1.0);
        assert_eq!(coverage(Vec2::new(3.0, 0.0), 8.0, &hole), 1.0);
        assert_eq!(coverage(Vec2::new(19.0, 0.0), 8.0, &hole), 0.0);
        assert_eq!(coverage(Vec2::new(50.0, 0.0), 8.0, &hole), 0.0);
    }

    #[test]
    fn test_goal_sized_hole_threshold() {
        // Ball and hole the same size: drops in within 3.2 px of center
        let hole = Hole::new(0.0, 0.0, 8.0);
        assert!(check_collision(Vec2::new(3.0, 0.0), 8.0, &[hole], THRESHOLD).is_some());
        assert!(check_collision(Vec2::new(4.0, 0.0), 8.0, &[hole], THRESHOLD).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        // Both holes qualify; the second is closer but the first is listed first
        let far = Hole::new(104.0, 100.0, 13.0);
        let near = Hole::new(100.0, 100.0, 11.0);
        let ball = Vec2::new(100.0, 100.0);
        assert_eq!(check_collision(ball, 8.0, &[far, near], THRESHOLD), Some(0));
        assert_eq!(check_collision(ball, 8.0, &[near, far], THRESHOLD), Some(0));
    }

    #[test]
    fn test_no_collision() {
        let holes = [Hole::new(200.0, 200.0, 11.0), Hole::new(300.0, 300.0, 12.0)];
        assert_eq!(check_collision(Vec2::new(250.0, 250.0), 8.0, &holes, THRESHOLD), None);
    }

    proptest! {
        #[test]
        fn coverage_is_non_increasing(
            hole_radius in 8.0f32..14.0,
            ball_radius in 4.0f32..8.0,
            d1 in 0.0f32..40.0,
            delta in 0.0f32..10.0,
        ) {
            let hole = Hole::new(0.0, 0.0, hole_radius);
            let near = coverage(Vec2::new(d1, 0.0), ball_radius, &hole);
            let far = coverage(Vec2::new(d1 + delta, 0.0), ball_radius, &hole);
            prop_assert!(far <= near + 1e-6);
            prop_assert!((0.0..=1.0).contains(&near));
        }

        #[test]
        fn coverage_saturates(
            hole_radius in 8.0f32..14.0,
            ball_radius in 4.0f32..8.0,
            t in 0.0f32..1.0,
        ) {
            let hole = Hole::new(0.0, 0.0, hole_radius);
            let inside = (hole_radius - ball_radius) * t;
            prop_assert_eq!(coverage(Vec2::new(inside, 0.0), ball_radius, &hole), 1.0);
            let outside = (hole_radius + ball_radius) * (1.0 + t);
            prop_assert_eq!(coverage(Vec2::new(outside, 0.0), ball_radius, &hole), 0.0);
        }
    }
}

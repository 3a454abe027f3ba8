//! Collision tests for axis-aligned geometry
//!
//! The ball is a circle, bricks and the paddle are axis-aligned rectangles,
//! and the play field is the canvas rectangle. All tests are inclusive at
//! the boundary: touching counts.

use glam::Vec2;

/// Circle-vs-rectangle overlap
///
/// Finds the point of the rectangle nearest to the circle centre and
/// compares its distance with the radius. A circle exactly tangent to an
/// edge (distance == radius) collides.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_min: Vec2, rect_size: Vec2) -> bool {
    let nearest = center.clamp(rect_min, rect_min + rect_size);
    center.distance_squared(nearest) <= radius * radius
}

/// True when the projected x leaves `[radius, width - radius]`
#[inline]
pub fn exits_horizontally(next_x: f32, radius: f32, width: f32) -> bool {
    next_x > width - radius || next_x < radius
}

/// True when the projected y rises above the ceiling margin
#[inline]
pub fn hits_ceiling(next_y: f32, radius: f32) -> bool {
    next_y < radius
}

/// True when `x` lies within `[start, start + width]`
#[inline]
pub fn within_span(x: f32, start: f32, width: f32) -> bool {
    x >= start && x <= start + width
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BRICK_MIN: Vec2 = Vec2::new(100.0, 50.0);
    const BRICK_SIZE: Vec2 = Vec2::new(78.0, 24.0);

    #[test]
    fn test_overlap_inside() {
        assert!(circle_rect_overlap(Vec2::new(130.0, 60.0), 10.0, BRICK_MIN, BRICK_SIZE));
    }

    #[test]
    fn test_tangent_edges_collide() {
        // Below the bottom edge (y = 74)
        assert!(circle_rect_overlap(Vec2::new(130.0, 84.0), 10.0, BRICK_MIN, BRICK_SIZE));
        // Left of the left edge (x = 100)
        assert!(circle_rect_overlap(Vec2::new(90.0, 60.0), 10.0, BRICK_MIN, BRICK_SIZE));
        // Right of the right edge (x = 178)
        assert!(circle_rect_overlap(Vec2::new(188.0, 60.0), 10.0, BRICK_MIN, BRICK_SIZE));
    }

    #[test]
    fn test_just_outside_misses() {
        assert!(!circle_rect_overlap(Vec2::new(130.0, 84.5), 10.0, BRICK_MIN, BRICK_SIZE));
        assert!(!circle_rect_overlap(Vec2::new(89.5, 60.0), 10.0, BRICK_MIN, BRICK_SIZE));
    }

    #[test]
    fn test_corner_uses_euclidean_distance() {
        // 6-8-10 triangle off the bottom-right corner (178, 74): exactly tangent
        assert!(circle_rect_overlap(Vec2::new(184.0, 82.0), 10.0, BRICK_MIN, BRICK_SIZE));
        // Within both axis bands but beyond the corner radius
        assert!(!circle_rect_overlap(Vec2::new(186.0, 82.0), 10.0, BRICK_MIN, BRICK_SIZE));
    }

    #[test]
    fn test_exits_horizontally() {
        assert!(exits_horizontally(471.5, 10.0, 480.0));
        assert!(!exits_horizontally(470.0, 10.0, 480.0));
        assert!(exits_horizontally(9.0, 10.0, 480.0));
        assert!(!exits_horizontally(10.0, 10.0, 480.0));
    }

    #[test]
    fn test_hits_ceiling() {
        assert!(hits_ceiling(9.9, 10.0));
        assert!(!hits_ceiling(10.0, 10.0));
    }

    #[test]
    fn test_within_span_inclusive() {
        assert!(within_span(205.0, 205.0, 90.0));
        assert!(within_span(295.0, 205.0, 90.0));
        assert!(!within_span(295.1, 205.0, 90.0));
        assert!(!within_span(100.0, 205.0, 90.0));
    }

    proptest! {
        #[test]
        fn prop_tangent_below_any_brick_collides(
            x in 0u16..400,
            y in 0u16..300,
            along in 0.0f32..1.0,
            radius in 1u16..20,
        ) {
            // Whole numbers keep the tangent distance exact in f32
            let (x, y, radius) = (x as f32, y as f32, radius as f32);
            let min = Vec2::new(x, y);
            let size = Vec2::new(64.0, 16.0);
            let center = Vec2::new(x + size.x * along, y + size.y + radius);
            prop_assert!(circle_rect_overlap(center, radius, min, size));
        }

        #[test]
        fn prop_far_away_never_collides(
            cx in -1000.0f32..1000.0,
            cy in 200.0f32..1000.0,
        ) {
            prop_assert!(!circle_rect_overlap(Vec2::new(cx, cy), 10.0, BRICK_MIN, BRICK_SIZE));
        }
    }
}

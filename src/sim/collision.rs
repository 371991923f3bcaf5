//! Circle-based collision detection
//!
//! Sprites collide as circles inset from their frame rectangle: the inset
//! shrinks the circle so the transparent padding around the artwork does not
//! count as a hit. The radius comes from the frame width only (enemy frames
//! are wider than they are tall).

use glam::Vec2;

/// A sprite's collision circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitCircle {
    pub center: Vec2,
    pub radius: f32,
}

impl HitCircle {
    /// Build the hit circle for a sprite drawn at `pos` (top-left corner)
    /// with the given frame size and inset.
    pub fn from_sprite(pos: Vec2, frame_size: Vec2, inset: f32) -> Self {
        Self {
            center: pos + frame_size / 2.0 - Vec2::splat(inset),
            radius: frame_size.x / 2.0 - inset,
        }
    }

    /// True when the two circles overlap (strict: touching circles miss).
    pub fn overlaps(&self, other: &HitCircle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_sprite_geometry() {
        // 200x200 frame at origin with a 25px inset
        let circle = HitCircle::from_sprite(Vec2::ZERO, Vec2::new(200.0, 200.0), 25.0);
        assert_eq!(circle.center, Vec2::new(75.0, 75.0));
        assert_eq!(circle.radius, 75.0);

        // Radius derives from width; height only shifts the center
        let circle = HitCircle::from_sprite(Vec2::new(10.0, 20.0), Vec2::new(160.0, 119.0), 25.0);
        assert_eq!(circle.center, Vec2::new(10.0 + 55.0, 20.0 + 34.5));
        assert_eq!(circle.radius, 55.0);
    }

    #[test]
    fn test_overlap_strict_inequality() {
        let a = HitCircle {
            center: Vec2::ZERO,
            radius: 10.0,
        };
        // Exactly touching: not a hit
        let touching = HitCircle {
            center: Vec2::new(20.0, 0.0),
            radius: 10.0,
        };
        assert!(!a.overlaps(&touching));

        let inside = HitCircle {
            center: Vec2::new(19.9, 0.0),
            radius: 10.0,
        };
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_contained_circle_overlaps() {
        let big = HitCircle {
            center: Vec2::ZERO,
            radius: 100.0,
        };
        let small = HitCircle {
            center: Vec2::new(5.0, 5.0),
            radius: 1.0,
        };
        assert!(big.overlaps(&small));
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            ar in 0.1f32..200.0, br in 0.1f32..200.0,
        ) {
            let a = HitCircle { center: Vec2::new(ax, ay), radius: ar };
            let b = HitCircle { center: Vec2::new(bx, by), radius: br };
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_coincident_centers_always_overlap(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            ar in 0.1f32..200.0, br in 0.1f32..200.0,
        ) {
            let a = HitCircle { center: Vec2::new(x, y), radius: ar };
            let b = HitCircle { center: Vec2::new(x, y), radius: br };
            prop_assert!(a.overlaps(&b));
        }
    }
}

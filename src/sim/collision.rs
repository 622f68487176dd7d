//! Axis-aligned rectangle overlap and response vectors
//!
//! The ball and both paddles are axis-aligned rectangles, so the general
//! separating-axis test collapses to interval overlap on x and y. The
//! minimum translation vector points along the axis of least overlap and
//! resolves interpenetration deterministically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, positioned by its top-left corner (y-down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height, both positive
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test; rectangles that merely touch do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.mtv(other).is_some()
    }

    /// Minimum translation vector separating `self` from `other`
    ///
    /// Returns the smallest displacement to add to `self.pos` so the two
    /// rectangles no longer overlap, or `None` when they are already apart.
    /// Ties between the axes resolve to x, so a corner-exact hit still gets
    /// the horizontal response a paddle exchange expects.
    pub fn mtv(&self, other: &Aabb) -> Option<Vec2> {
        let overlap_x = self.max().x.min(other.max().x) - self.pos.x.max(other.pos.x);
        let overlap_y = self.max().y.min(other.max().y) - self.pos.y.max(other.pos.y);

        if overlap_x <= 0.0 || overlap_y <= 0.0 {
            return None;
        }

        if overlap_x <= overlap_y {
            let sign = if self.center().x < other.center().x {
                -1.0
            } else {
                1.0
            };
            Some(Vec2::new(sign * overlap_x, 0.0))
        } else {
            let sign = if self.center().y < other.center().y {
                -1.0
            } else {
                1.0
            };
            Some(Vec2::new(0.0, sign * overlap_y))
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n. Wall bounces lose no energy.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

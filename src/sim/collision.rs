//! Axis-aligned collision detection
//!
//! Player and obstacles are plain boxes, so a hit is a strict overlap on both
//! axes. Boxes that only share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: positive extent shared on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Count how many boxes in `others` overlap `subject`
pub fn count_overlaps(subject: &Rect, others: impl IntoIterator<Item = Rect>) -> usize {
    others.into_iter().filter(|r| subject.overlaps(r)).count()
}

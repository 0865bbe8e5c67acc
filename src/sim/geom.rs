//! Axis-aligned rectangle geometry

use glam::Vec2;

/// Center-form axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    pub const fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    pub fn from_center(cx: f32, cy: f32, half_width: f32, half_height: f32) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            half: Vec2::new(half_width, half_height),
        }
    }

    /// Bottom-left corner
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Top-right corner
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }
}

/// Strict-inequality AABB overlap test.
///
/// Rects that merely touch along an edge do not overlap. Degenerate
/// zero-size rects are fine; they just never overlap anything.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.center.x + a.half.x > b.center.x - b.half.x
        && a.center.x - a.half.x < b.center.x + b.half.x
        && a.center.y + a.half.y > b.center.y - b.half.y
        && a.center.y - a.half.y < b.center.y + b.half.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(cx: f32, cy: f32, hw: f32, hh: f32) -> Rect {
        Rect::from_center(cx, cy, hw, hh)
    }

    #[test]
    fn overlapping_rects() {
        let a = rect(0.0, 0.0, 0.5, 0.5);
        let b = rect(0.4, 0.4, 0.5, 0.5);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn separated_rects() {
        let a = rect(0.0, 0.0, 0.1, 0.1);
        let b = rect(0.5, 0.0, 0.1, 0.1);
        assert!(!overlaps(&a, &b));
        let c = rect(0.0, 0.5, 0.1, 0.1);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn edge_contact_is_a_miss() {
        // Strict comparisons: exactly touching edges do not count
        let a = rect(0.0, 0.0, 0.1, 0.1);
        let b = rect(0.2, 0.0, 0.1, 0.1);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn containment_overlaps() {
        let outer = rect(0.0, 0.0, 1.0, 1.0);
        let inner = rect(0.1, -0.1, 0.05, 0.05);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn zero_size_rect_never_overlaps_itself() {
        let p = rect(0.3, 0.3, 0.0, 0.0);
        assert!(!overlaps(&p, &p));
    }

    #[test]
    fn zero_size_rect_inside_a_real_rect() {
        let point = rect(0.0, 0.0, 0.0, 0.0);
        let body = rect(0.0, 0.0, 0.5, 0.5);
        assert!(overlaps(&point, &body));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -1.0f32..1.0, ay in -1.0f32..1.0,
            ahw in 0.0f32..0.5, ahh in 0.0f32..0.5,
            bx in -1.0f32..1.0, by in -1.0f32..1.0,
            bhw in 0.0f32..0.5, bhh in 0.0f32..0.5,
        ) {
            let a = rect(ax, ay, ahw, ahh);
            let b = rect(bx, by, bhw, bhh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn rect_overlaps_its_own_copy(
            cx in -1.0f32..1.0, cy in -1.0f32..1.0,
            hw in 0.01f32..0.5, hh in 0.01f32..0.5,
        ) {
            let a = rect(cx, cy, hw, hh);
            prop_assert!(overlaps(&a, &a));
        }
    }
}

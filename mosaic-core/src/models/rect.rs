use serde::{Deserialize, Serialize};

/// A rectangle in desktop coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Geometry of a client the environment could not describe.
    pub const SENTINEL: Self = Self::new(-1, -1, 1, 1);

    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    /// Strict interior test, points on an edge belong to no rectangle.
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x > self.x && x < self.right() && y > self.y && y < self.bottom()
    }

    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Removes the reserved margins from each edge.
    #[must_use]
    pub const fn shrink(&self, strut: &Strut) -> Self {
        Self::new(
            self.x + strut.left,
            self.y + strut.top,
            self.w - (strut.left + strut.right),
            self.h - (strut.top + strut.bottom),
        )
    }

    /// Keeps the size, moves the rectangle so both centers line up.
    #[must_use]
    pub const fn center_over(&self, outer: &Self) -> Self {
        Self::new(
            outer.x + outer.w / 2 - self.w / 2,
            outer.y + outer.h / 2 - self.h / 2,
            self.w,
            self.h,
        )
    }

    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    #[must_use]
    pub const fn encloses(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Margins a client reserves along the edges of its monitor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Strut {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Strut {
    #[must_use]
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Widest margin of both, edge by edge.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            top: self.top.max(other.top),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
            right: self.right.max(other.right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_should_trim_every_edge() {
        let rect = Rect::new(0, 0, 1200, 800);
        let strut = Strut::new(24, 10, 5, 15);
        assert_eq!(rect.shrink(&strut), Rect::new(5, 24, 1180, 766));
    }

    #[test]
    fn shrink_with_empty_strut_is_identity() {
        let rect = Rect::new(100, 50, 640, 480);
        assert_eq!(rect.shrink(&Strut::default()), rect);
    }

    #[test]
    fn center_over_should_keep_size() {
        let dialog = Rect::new(-1, -1, 200, 100);
        let parent = Rect::new(100, 100, 600, 400);
        assert_eq!(dialog.center_over(&parent), Rect::new(300, 250, 200, 100));
    }

    #[test]
    fn points_on_the_edge_are_outside() {
        let rect = Rect::new(0, 0, 100, 100);
        assert!(rect.contains_point(50, 50));
        assert!(!rect.contains_point(0, 50));
        assert!(!rect.contains_point(100, 50));
        assert!(!rect.contains_point(50, 100));
    }

    #[test]
    fn adjacent_rects_do_not_overlap() {
        let a = Rect::new(0, 0, 720, 800);
        let b = Rect::new(720, 0, 480, 400);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(719, 0, 10, 10)));
    }

    #[test]
    fn merge_keeps_the_widest_margins() {
        let dock = Strut::new(24, 0, 0, 0);
        let panel = Strut::new(0, 30, 0, 12);
        assert_eq!(dock.merge(panel), Strut::new(24, 30, 0, 12));
    }
}

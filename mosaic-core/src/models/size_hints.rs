use super::Rect;
use serde::{Deserialize, Serialize};

/// Sizing policy of a client with every default filled in.
///
/// A maximum of `0` is unbounded and an aspect ratio of `0.0` is
/// unconstrained.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SizeHints {
    pub base_w: i32,
    pub base_h: i32,
    pub min_w: i32,
    pub min_h: i32,
    pub max_w: i32,
    pub max_h: i32,
    pub inc_w: i32,
    pub inc_h: i32,
    pub min_aspect: f64,
    pub max_aspect: f64,
}

impl Default for SizeHints {
    fn default() -> Self {
        Self {
            base_w: 0,
            base_h: 0,
            min_w: 0,
            min_h: 0,
            max_w: 0,
            max_h: 0,
            inc_w: 1,
            inc_h: 1,
            min_aspect: 0.0,
            max_aspect: 0.0,
        }
    }
}

/// Size hints as the environment reported them, any field may be missing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct RawSizeHints {
    pub base: Option<(i32, i32)>,
    pub min: Option<(i32, i32)>,
    pub max: Option<(i32, i32)>,
    pub increment: Option<(i32, i32)>,
    /// Minimum and maximum width/height ratios.
    pub aspect: Option<(f64, f64)>,
}

impl From<RawSizeHints> for SizeHints {
    fn from(raw: RawSizeHints) -> Self {
        let (base_w, base_h) = raw.base.unwrap_or((0, 0));
        let (min_w, min_h) = raw.min.unwrap_or((base_w, base_h));
        let (max_w, max_h) = raw.max.unwrap_or((0, 0));
        let (inc_w, inc_h) = raw.increment.unwrap_or((1, 1));
        let (min_aspect, max_aspect) = raw.aspect.unwrap_or((0.0, 0.0));
        Self {
            base_w,
            base_h,
            min_w,
            min_h,
            max_w,
            max_h,
            inc_w,
            inc_h,
            min_aspect,
            max_aspect,
        }
    }
}

impl SizeHints {
    /// A client that can only ever have one size.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.max_w > 0 && self.max_h > 0 && self.max_w == self.min_w && self.max_h == self.min_h
    }

    /// Corrects the size of `rect`, leaving its position alone.
    ///
    /// Aspect ratio comes first, then the min/max bounds, then the size is
    /// snapped down onto the increment grid anchored at the base size.
    #[must_use]
    pub fn apply(&self, rect: Rect) -> Rect {
        let (mut w, mut h) = (rect.w, rect.h);

        if self.min_aspect > 0.0 && self.max_aspect > 0.0 {
            let dx = f64::from(w - self.base_w);
            let dy = f64::from(h - self.base_h);
            let ratio = dx / dy;
            if ratio.is_finite() && ratio > 0.0 {
                if ratio < self.min_aspect {
                    h = (dx / self.min_aspect + 0.5 + f64::from(self.base_h)) as i32;
                } else if ratio > self.max_aspect {
                    w = (dy * self.max_aspect + 0.5 + f64::from(self.base_w)) as i32;
                }
            }
        }

        w = bound(w, self.min_w, self.max_w);
        h = bound(h, self.min_h, self.max_h);

        w = snap(w, self.base_w, self.inc_w, (self.min_w, self.max_w));
        h = snap(h, self.base_h, self.inc_h, (self.min_h, self.max_h));

        Rect::new(rect.x, rect.y, w, h)
    }
}

fn bound(size: i32, min: i32, max: i32) -> i32 {
    let size = size.max(min);
    if max > 0 {
        size.min(max)
    } else {
        size
    }
}

// Snapping down may cross the minimum, one step back up keeps it honoured.
// When no grid step fits between min and max the bounded size stays.
fn snap(size: i32, base: i32, increment: i32, (min, max): (i32, i32)) -> i32 {
    if increment <= 0 {
        return size;
    }
    let snapped = size - (size - base).max(0) % increment;
    if snapped >= min {
        return snapped;
    }
    let bumped = snapped + increment;
    if max > 0 && bumped > max {
        size
    } else {
        bumped
    }
}

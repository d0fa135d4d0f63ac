use super::{ClientKey, Rect, Tagset, TAG_COUNT};
use crate::layouts::Layout;
use slotmap::new_key_type;

new_key_type! {
    /// Stable index of a monitor inside the state arena.
    pub struct MonitorKey;
}

pub const MAIN_SPLIT_MIN: f64 = 0.2;
pub const MAIN_SPLIT_MAX: f64 = 0.8;
pub const MAIN_SPLIT_INC: f64 = 0.05;

/// Whether a render may follow a change of monitor geometry. Sticky clients
/// are only placed again when it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryStatus {
    Changed,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Monitor {
    pub name: String,
    pub geometry: Rect,
    pub layout: Layout,
    /// Share of the usable area given to the main zone.
    pub split: f64,
    pub mains: usize,
    /// How many attached clients claim each tag.
    pub tags: [u32; TAG_COUNT],
    pub tagset: Tagset,
    pub(crate) head: Option<ClientKey>,
    pub(crate) tail: Option<ClientKey>,
    pub(crate) prev: Option<MonitorKey>,
    pub(crate) next: Option<MonitorKey>,
}

impl Monitor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        geometry: Rect,
        layout: Layout,
        split: f64,
        mains: usize,
    ) -> Self {
        Self {
            name: name.into(),
            geometry,
            layout,
            split: split.clamp(MAIN_SPLIT_MIN, MAIN_SPLIT_MAX),
            mains: mains.max(1),
            tags: [0; TAG_COUNT],
            tagset: Tagset::from_bits(1),
            head: None,
            tail: None,
            prev: None,
            next: None,
        }
    }

    #[must_use]
    pub const fn head(&self) -> Option<ClientKey> {
        self.head
    }

    #[must_use]
    pub const fn tail(&self) -> Option<ClientKey> {
        self.tail
    }

    #[must_use]
    pub const fn next(&self) -> Option<MonitorKey> {
        self.next
    }

    #[must_use]
    pub const fn prev(&self) -> Option<MonitorKey> {
        self.prev
    }

    /// Number of attached clients claiming `tag`, numbered from 1.
    #[must_use]
    pub fn tag_count(&self, tag: usize) -> u32 {
        tag.checked_sub(1)
            .and_then(|index| self.tags.get(index))
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn count_tags(&mut self, tagset: Tagset) {
        for index in tagset.indices() {
            self.tags[index] += 1;
        }
    }

    pub(crate) fn uncount_tags(&mut self, tagset: Tagset) {
        for index in tagset.indices() {
            self.tags[index] = self.tags[index].saturating_sub(1);
        }
    }

    pub fn change_split(&mut self, delta: f64) {
        self.split = (self.split + delta).clamp(MAIN_SPLIT_MIN, MAIN_SPLIT_MAX);
    }

    /// Grows or shrinks the main zone by `by` slots. Growing stops at the
    /// number of tilable clients, shrinking stops at one.
    pub fn update_mains(&mut self, by: i32, tilable: usize) {
        let by_abs = by.unsigned_abs() as usize;
        let mains = if by <= 0 {
            self.mains.saturating_sub(by_abs)
        } else if tilable >= self.mains + by_abs {
            self.mains + by_abs
        } else {
            tilable
        };
        self.mains = mains.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> Monitor {
        Monitor::new("HDMI-1", Rect::new(0, 0, 1920, 1080), Layout::Right, 0.6, 1)
    }

    #[test]
    fn new_monitor_shows_the_first_tag() {
        let monitor = monitor();
        assert_eq!(monitor.tagset, Tagset::from_bits(1));
        assert_eq!(monitor.tags, [0; TAG_COUNT]);
        assert!(monitor.head().is_none());
    }

    #[test]
    fn split_should_stay_within_bounds() {
        let mut monitor = monitor();
        monitor.change_split(0.5);
        assert!((monitor.split - MAIN_SPLIT_MAX).abs() < f64::EPSILON);
        monitor.change_split(-2.0);
        assert!((monitor.split - MAIN_SPLIT_MIN).abs() < f64::EPSILON);
    }

    #[test]
    fn mains_grow_up_to_the_tilable_count() {
        let mut monitor = monitor();
        monitor.update_mains(1, 3);
        assert_eq!(monitor.mains, 2);
        monitor.update_mains(5, 3);
        assert_eq!(monitor.mains, 3);
        monitor.update_mains(1, 0);
        assert_eq!(monitor.mains, 1, "never below one");
    }

    #[test]
    fn mains_shrink_down_to_one() {
        let mut monitor = monitor();
        monitor.mains = 3;
        monitor.update_mains(-1, 5);
        assert_eq!(monitor.mains, 2);
        monitor.update_mains(-10, 5);
        assert_eq!(monitor.mains, 1);
    }

    #[test]
    fn tag_counters_follow_the_tagsets() {
        let mut monitor = monitor();
        monitor.count_tags(Tagset::from_bits(0b11));
        monitor.count_tags(Tagset::from_bits(0b10));
        assert_eq!(monitor.tag_count(1), 1);
        assert_eq!(monitor.tag_count(2), 2);
        monitor.uncount_tags(Tagset::from_bits(0b10));
        assert_eq!(monitor.tag_count(2), 1);
        assert_eq!(monitor.tag_count(0), 0);
        assert_eq!(monitor.tag_count(99), 0);
    }
}

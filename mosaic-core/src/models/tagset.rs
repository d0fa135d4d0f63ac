use serde::{Deserialize, Serialize};

/// Number of tags a tagset can address.
pub const TAG_COUNT: usize = 32;

/// Bitmask over the tags, numbered from 1. A client with an empty tagset is
/// visible whatever tags its monitor shows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct Tagset(u32);

impl Tagset {
    pub const EVERYWHERE: Self = Self(0);

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The tagset holding only `tag`, or `None` outside `1..=TAG_COUNT`.
    #[must_use]
    pub fn single(tag: usize) -> Option<Self> {
        Self::bit(tag).map(Self)
    }

    #[must_use]
    pub const fn is_everywhere(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub fn contains(self, tag: usize) -> bool {
        Self::bit(tag).is_some_and(|bit| self.0 & bit != 0)
    }

    #[must_use]
    pub fn toggled(self, tag: usize) -> Self {
        Self::bit(tag).map_or(self, |bit| Self(self.0 ^ bit))
    }

    #[must_use]
    pub fn without(self, tag: usize) -> Self {
        Self::bit(tag).map_or(self, |bit| Self(self.0 & !bit))
    }

    /// Zero based positions of the set bits, suitable for indexing tag counters.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..TAG_COUNT).filter(move |i| self.0 & (1 << i) != 0)
    }

    fn bit(tag: usize) -> Option<u32> {
        (1..=TAG_COUNT).contains(&tag).then(|| 1 << (tag - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tags_are_numbered_from_one() {
        assert_eq!(Tagset::single(1), Some(Tagset::from_bits(1)));
        assert_eq!(Tagset::single(32), Some(Tagset::from_bits(1 << 31)));
        assert_eq!(Tagset::single(0), None);
        assert_eq!(Tagset::single(33), None);
    }

    #[test]
    fn toggling_twice_restores_the_tagset() {
        let tagset = Tagset::from_bits(0b101);
        assert_eq!(tagset.toggled(2), Tagset::from_bits(0b111));
        assert_eq!(tagset.toggled(2).toggled(2), tagset);
        assert_eq!(tagset.toggled(40), tagset);
    }

    #[test]
    fn indices_should_list_set_bits() {
        let tagset = Tagset::from_bits(0b1001_0010);
        assert_eq!(tagset.indices().collect::<Vec<_>>(), vec![1, 4, 7]);
        assert!(tagset.contains(2));
        assert!(!tagset.contains(3));
        assert_eq!(tagset.without(5), Tagset::from_bits(0b1000_0010));
    }
}

//! Tiling layouts. Each one turns the usable area of a monitor into one
//! rectangle per tilable client, in list order.
mod columns;
mod rows;

use crate::models::Rect;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Every tiled client gets the whole usable area.
    None,
    /// Main zone at the bottom, stack above it.
    Top,
    /// Main zone on the right, stack on its left.
    Left,
    /// Main zone at the top, stack below it.
    Bottom,
    /// Main zone on the left, stack on its right.
    #[default]
    Right,
}

/// How many tilable clients go to the main zone and how many to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub mains: usize,
    pub stacked: usize,
}

impl Partition {
    #[must_use]
    pub fn new(wanted_mains: usize, tilable: usize) -> Self {
        let mains = wanted_mains.max(1).min(tilable);
        Self {
            mains,
            stacked: tilable - mains,
        }
    }

    #[must_use]
    pub const fn tilable(&self) -> usize {
        self.mains + self.stacked
    }
}

impl Layout {
    /// Splits `area` for the clients counted in `partition`. The rectangles
    /// of the main zone come first.
    #[must_use]
    pub fn apply(self, area: Rect, split: f64, partition: Partition) -> Vec<Rect> {
        if partition.tilable() == 0 {
            return vec![];
        }
        match self {
            Self::None => vec![area; partition.tilable()],
            Self::Right => columns::right(area, split, partition),
            Self::Left => columns::left(area, split, partition),
            Self::Bottom => rows::bottom(area, split, partition),
            Self::Top => rows::top(area, split, partition),
        }
    }
}

/// Lengths of both zones, measured along the axis they are split on
/// (`along`), and of the stack slots measured across it.
#[derive(Debug, Clone, Copy)]
struct Zones {
    main_slot: i32,
    main_len: i32,
    stack_len: i32,
    stack_slot: i32,
    stack_extra: i32,
}

impl Zones {
    fn new(along: i32, across: i32, split: f64, partition: Partition) -> Self {
        let mains = partition.mains as i32;
        let stacked = partition.stacked as i32;
        if stacked == 0 {
            return Self {
                main_slot: along / mains,
                main_len: along,
                stack_len: 0,
                stack_slot: 0,
                stack_extra: 0,
            };
        }
        let main_slot = (f64::from(along) * split / f64::from(mains)) as i32;
        let main_len = main_slot * mains;
        let stack_slot = across / stacked;
        Self {
            main_slot,
            main_len,
            stack_len: along - main_len,
            stack_slot,
            stack_extra: across - stack_slot * stacked,
        }
    }

    /// Lengths of the main slots, the first one taking what division left.
    fn main_slots(&self, mains: usize) -> impl Iterator<Item = i32> {
        let extra = self.main_len - self.main_slot * mains as i32;
        let slot = self.main_slot;
        (0..mains).map(move |i| if i == 0 { slot + extra } else { slot })
    }

    /// Lengths of the stack slots, the first one taking what division left.
    fn stack_slots(&self, stacked: usize) -> impl Iterator<Item = i32> {
        let (slot, extra) = (self.stack_slot, self.stack_extra);
        (0..stacked).map(move |i| if i == 0 { slot + extra } else { slot })
    }
}

use super::{Partition, Zones};
use crate::models::Rect;

pub fn right(area: Rect, split: f64, partition: Partition) -> Vec<Rect> {
    let zones = Zones::new(area.w, area.h, split, partition);
    tile(area, &zones, partition, area.x, area.x + zones.main_len)
}

pub fn left(area: Rect, split: f64, partition: Partition) -> Vec<Rect> {
    let zones = Zones::new(area.w, area.h, split, partition);
    tile(area, &zones, partition, area.x + zones.stack_len, area.x)
}

// Mains side by side, the stack piled up in one column.
fn tile(area: Rect, zones: &Zones, partition: Partition, main_x: i32, stack_x: i32) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(partition.tilable());
    let mut x = main_x;
    for w in zones.main_slots(partition.mains) {
        rects.push(Rect::new(x, area.y, w, area.h));
        x += w;
    }
    let mut y = area.y;
    for h in zones.stack_slots(partition.stacked) {
        rects.push(Rect::new(stack_x, y, zones.stack_len, h));
        y += h;
    }
    rects
}

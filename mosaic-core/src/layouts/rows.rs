use super::{Partition, Zones};
use crate::models::Rect;

pub fn bottom(area: Rect, split: f64, partition: Partition) -> Vec<Rect> {
    let zones = Zones::new(area.h, area.w, split, partition);
    tile(area, &zones, partition, area.y, area.y + zones.main_len)
}

pub fn top(area: Rect, split: f64, partition: Partition) -> Vec<Rect> {
    let zones = Zones::new(area.h, area.w, split, partition);
    tile(area, &zones, partition, area.y + zones.stack_len, area.y)
}

// Mains stacked on top of each other, the stack laid out in one row.
fn tile(area: Rect, zones: &Zones, partition: Partition, main_y: i32, stack_y: i32) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(partition.tilable());
    let mut y = main_y;
    for h in zones.main_slots(partition.mains) {
        rects.push(Rect::new(area.x, y, area.w, h));
        y += h;
    }
    let mut x = area.x;
    for w in zones.stack_slots(partition.stacked) {
        rects.push(Rect::new(x, stack_y, w, zones.stack_len));
        x += w;
    }
    rects
}

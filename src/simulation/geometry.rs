//! Axis-aligned regions used for collision tests and drawing.
//!
//! Screen convention: y grows downward, so a region's `min().y` is its top edge.

use geo::{Intersects, Rect, coord};

/// Builds a region from its top-left corner and size.
pub fn rect_from_top_left(x: f32, y: f32, width: f32, height: f32) -> Rect<f32> {
    Rect::new(coord! { x: x, y: y }, coord! { x: x + width, y: y + height })
}

/// Builds a region centered on `(cx, cy)`.
pub fn rect_from_center(cx: f32, cy: f32, width: f32, height: f32) -> Rect<f32> {
    rect_from_top_left(cx - width / 2.0, cy - height / 2.0, width, height)
}

/// True when two regions overlap; shared edges count as contact.
pub fn overlaps(a: &Rect<f32>, b: &Rect<f32>) -> bool {
    a.intersects(b)
}

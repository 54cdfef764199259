//! Placement of a floating panel next to the pointer, kept inside a bounding rectangle.

use crate::config::OverlayConfig;
use crate::model::{Point, Rect, Size};

pub const POINTER_OFFSET: f32 = 20.0;

/// Which rectangle a placement was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Container,
    Viewport,
}

/// Host-side lookups, queried fresh on every show.
pub trait Surface {
    fn container_rect(&self) -> Option<Rect>;
    fn viewport_size(&self) -> Size;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left of the panel relative to `bounds`.
    pub origin: Point,
    pub bounds: Rect,
    pub anchor: Anchor,
}

impl Placement {
    /// Top-left in the pointer's (viewport) coordinate space.
    pub fn absolute_origin(&self) -> Point {
        Point::new(
            self.bounds.left + self.origin.x,
            self.bounds.top + self.origin.y,
        )
    }
}

/// `pointer` is in the same space as `container`; the result is relative to the container.
pub fn place(container: Rect, pointer: Point, panel: Size, margin: f32) -> Point {
    place_with_offset(container, pointer, panel, margin, POINTER_OFFSET)
}

pub fn place_with_offset(
    container: Rect,
    pointer: Point,
    panel: Size,
    margin: f32,
    offset: f32,
) -> Point {
    let rel_x = pointer.x - container.left;
    let rel_y = pointer.y - container.top;

    let mut left = rel_x + offset;
    let top = rel_y + offset;

    // would overflow the right edge: put the panel on the pointer's left instead
    if rel_x + offset + panel.width > container.width - margin {
        left = rel_x - offset - panel.width;
    }

    Point::new(
        clamp_axis(left, margin, container.width - panel.width - margin),
        clamp_axis(top, margin, container.height - panel.height - margin),
    )
}

// lower bound wins when the panel is larger than the space
fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// Resolves the bounding rectangle (container, or viewport as fallback) and places `panel`.
pub fn place_on_surface(
    surface: &dyn Surface,
    pointer: Point,
    panel: Size,
    cfg: &OverlayConfig,
) -> Placement {
    let (bounds, margin, anchor) = match surface.container_rect() {
        Some(rect) => (rect, cfg.container_margin, Anchor::Container),
        None => {
            tracing::warn!("overlay container not found; placing against the viewport");
            (
                Rect::from_size(surface.viewport_size()),
                cfg.viewport_margin,
                Anchor::Viewport,
            )
        }
    };
    Placement {
        origin: place_with_offset(bounds, pointer, panel, margin, cfg.pointer_offset),
        bounds,
        anchor,
    }
}

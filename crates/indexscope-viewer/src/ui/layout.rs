use bevy::prelude::Resource;
use bevy_egui::egui;
use indexscope_core::{Rect, Size, Surface};

/// Rectangles of the current frame; the plot area is the overlay container.
#[derive(Resource, Clone, Copy)]
pub struct UiLayout {
    pub content_rect: egui::Rect,
    pub screen_rect: egui::Rect,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            content_rect: egui::Rect::NOTHING,
            screen_rect: egui::Rect::NOTHING,
        }
    }
}

pub fn to_core_rect(r: egui::Rect) -> Rect {
    Rect::new(r.min.x, r.min.y, r.width(), r.height())
}

impl Surface for UiLayout {
    fn container_rect(&self) -> Option<Rect> {
        if self.content_rect == egui::Rect::NOTHING || !self.content_rect.is_positive() {
            return None;
        }
        Some(to_core_rect(self.content_rect))
    }

    fn viewport_size(&self) -> Size {
        if self.screen_rect == egui::Rect::NOTHING {
            return Size::default();
        }
        Size::new(self.screen_rect.width(), self.screen_rect.height())
    }
}

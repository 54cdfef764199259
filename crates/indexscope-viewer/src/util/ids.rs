use bevy_egui::egui;
use indexscope_core::Rgb;
use std::hash::{Hash, Hasher};

pub fn stable_u32(s: &str) -> u32 {
    let mut h = std::collections::hash_map::DefaultHasher::new();
    s.hash(&mut h);
    (h.finish() & 0xFFFF_FFFF) as u32
}

// tableau10
const PALETTE: [Rgb; 10] = [
    [78, 121, 167],
    [242, 142, 43],
    [225, 87, 89],
    [118, 183, 178],
    [89, 161, 79],
    [237, 201, 72],
    [176, 122, 161],
    [255, 157, 167],
    [156, 117, 95],
    [186, 176, 172],
];

/// Color of the i-th dimension; wraps after ten.
pub fn dimension_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// Trend line color, fixed per entity name.
pub fn entity_color(name: &str) -> Rgb {
    PALETTE[stable_u32(name) as usize % PALETTE.len()]
}

pub fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_colors_follow_order_and_wrap() {
        assert_eq!(dimension_color(0), PALETTE[0]);
        assert_eq!(dimension_color(3), PALETTE[3]);
        assert_eq!(dimension_color(12), PALETTE[2]);
    }

    #[test]
    fn entity_color_is_stable() {
        assert_eq!(entity_color("North"), entity_color("North"));
    }
}

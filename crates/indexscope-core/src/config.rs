use serde::{Deserialize, Serialize};

use crate::labels::Locale;
use crate::model::Size;
use crate::placement::POINTER_OFFSET;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub pointer_offset: f32,
    pub container_margin: f32,
    pub viewport_margin: f32,
    pub detail_size: Size,
    pub ranking_size: Size,
    /// Pixel width of a full (10/10) detail bar.
    pub bar_track_width: f32,
    pub locale: Locale,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            pointer_offset: POINTER_OFFSET,
            container_margin: 12.0,
            viewport_margin: 20.0,
            detail_size: Size::new(360.0, 320.0),
            ranking_size: Size::new(380.0, 440.0),
            bar_track_width: 120.0,
            locale: Locale::En,
        }
    }
}

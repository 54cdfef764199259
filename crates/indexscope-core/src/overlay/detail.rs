use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::format::fixed;
use crate::model::{DimensionDef, Entity, Point};
use crate::overlay::panel::Panel;
use crate::placement::{place_on_surface, Surface};

pub type Rgb = [u8; 3];

pub const SCALE_TICKS: [u8; 6] = [0, 2, 4, 6, 8, 10];

#[derive(Debug, Clone, PartialEq)]
pub struct DetailBar {
    pub label: String,
    pub dimension_index: usize,
    pub color: Rgb,
    pub value: f64,
    pub width: f32,
    pub value_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub title: String,
    pub scale: [u8; 6],
    pub bars: Vec<DetailBar>,
}

/// Builds one bar per dimension with a numeric raw score, in `dims` order.
pub fn build_bars(
    entity: &Entity,
    dims: &[DimensionDef],
    colors: &dyn Fn(usize) -> Rgb,
    track_width: f32,
) -> Vec<DetailBar> {
    let mut bars = Vec::with_capacity(dims.len());
    for (i, dim) in dims.iter().enumerate() {
        let Some(value) = entity.dim(&dim.key) else {
            tracing::debug!(entity = %entity.name, dim = %dim.key, "no numeric score, bar skipped");
            continue;
        };
        let width = ((value / 10.0) as f32 * track_width).clamp(0.0, track_width.max(0.0));
        bars.push(DetailBar {
            label: dim.label.clone(),
            dimension_index: i,
            color: colors(i),
            value,
            width,
            value_text: fixed(value, 1),
        });
    }
    bars
}

#[derive(Debug, Clone, Default)]
pub struct DetailCardController {
    panel: Panel<DetailCard>,
    cfg: OverlayConfig,
}

impl DetailCardController {
    pub fn new(cfg: OverlayConfig) -> Self {
        Self {
            panel: Panel::default(),
            cfg,
        }
    }

    pub fn panel(&self) -> &Panel<DetailCard> {
        &self.panel
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.cfg
    }

    pub(crate) fn attach(&mut self) -> bool {
        self.panel.attach()
    }

    /// Shows the card; malformed input is logged and leaves the panel untouched.
    pub fn show(
        &mut self,
        surface: &dyn Surface,
        entity: &Entity,
        pointer: Point,
        dims: &[DimensionDef],
        colors: &dyn Fn(usize) -> Rgb,
    ) {
        if let Err(err) = self.try_show(surface, entity, pointer, dims, colors) {
            tracing::error!(%err, "detail card not shown");
        }
    }

    pub fn try_show(
        &mut self,
        surface: &dyn Surface,
        entity: &Entity,
        pointer: Point,
        dims: &[DimensionDef],
        colors: &dyn Fn(usize) -> Rgb,
    ) -> Result<(), OverlayError> {
        if !entity.has_dims() {
            return Err(OverlayError::MissingDimensions {
                name: entity.name.clone(),
            });
        }

        let card = DetailCard {
            title: entity.name.clone(),
            scale: SCALE_TICKS,
            bars: build_bars(entity, dims, colors, self.cfg.bar_track_width),
        };
        let placement = place_on_surface(surface, pointer, self.cfg.detail_size, &self.cfg);
        self.panel.present(card, placement);
        Ok(())
    }

    pub fn hide(&mut self) {
        self.panel.hide();
    }
}

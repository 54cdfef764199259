pub mod detail;
pub mod panel;
pub mod ranking;

pub use detail::{DetailBar, DetailCard, DetailCardController, Rgb};
pub use panel::{Panel, Visibility};
pub use ranking::{RankingCard, RankingCardController, YearSelection};

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::model::YearData;
use crate::placement::Surface;
use crate::score::ScoreModel;

/// Host-provided collaborators of a ranking show.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub surface: &'a dyn Surface,
    pub data: &'a dyn YearData,
    pub score: &'a dyn ScoreModel,
}

/// Owns both overlay cards and the host's initialization phase.
///
/// `attach` is called once the container exists, `mark_trend_ready` once the trend view can
/// deliver point clicks. Shows work before `attach` (they fall back to the viewport); trend
/// clicks before `mark_trend_ready` are dropped.
#[derive(Debug, Clone, Default)]
pub struct OverlayHost {
    pub detail: DetailCardController,
    pub ranking: RankingCardController,
    trend_ready: bool,
}

impl OverlayHost {
    pub fn new(cfg: OverlayConfig) -> Self {
        Self {
            detail: DetailCardController::new(cfg.clone()),
            ranking: RankingCardController::new(cfg),
            trend_ready: false,
        }
    }

    pub fn attach(&mut self, surface: &dyn Surface) -> Result<(), OverlayError> {
        let Some(rect) = surface.container_rect() else {
            return Err(OverlayError::ContainerMissing);
        };
        if self.detail.attach() {
            tracing::info!(?rect, "detail card attached to container");
        }
        if self.ranking.attach() {
            tracing::info!(?rect, "ranking card attached to container");
        }
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.detail.panel().is_attached() && self.ranking.panel().is_attached()
    }

    pub fn mark_trend_ready(&mut self) {
        if !self.trend_ready {
            tracing::info!("trend view ready; point clicks open the ranking card");
        }
        self.trend_ready = true;
    }

    pub fn is_trend_ready(&self) -> bool {
        self.trend_ready
    }

    /// A trend point was clicked. Returns whether the click was handled.
    pub fn on_trend_point_clicked(&mut self, cx: &Collaborators<'_>, sel: &YearSelection) -> bool {
        if !self.trend_ready {
            tracing::debug!(year = sel.year, "trend click before ready, ignored");
            return false;
        }
        self.ranking.show(cx, sel);
        true
    }

    pub fn hide_all(&mut self) {
        self.detail.hide();
        self.ranking.hide();
    }
}

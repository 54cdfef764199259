//! Overlay cards for a per-year index visualization: pointer-anchored placement inside a
//! container, year rankings with year-over-year deltas, and the detail/ranking card
//! controllers that tie them together.

pub mod config;
pub mod error;
pub mod format;
pub mod highlight;
pub mod labels;
pub mod model;
pub mod overlay;
pub mod placement;
pub mod ranking;
pub mod score;

pub use config::OverlayConfig;
pub use error::OverlayError;
pub use highlight::CrossViewHighlighter;
pub use labels::{Locale, RankingLabels};
pub use model::{
    Datasets, DimensionDef, Entity, Grouping, Point, Rect, Size, YearData, YearDataset,
};
pub use overlay::{
    Collaborators, DetailBar, DetailCard, DetailCardController, OverlayHost, RankingCard,
    RankingCardController, Rgb, Visibility, YearSelection,
};
pub use placement::{place, Anchor, Placement, Surface};
pub use ranking::{rank, DeltaTrend, RankingRow};
pub use score::{ScoreModel, WeightedScore};

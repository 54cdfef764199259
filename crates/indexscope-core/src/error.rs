use thiserror::Error;

use crate::model::Grouping;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    #[error("entity {name:?} has no dimension scores")]
    MissingDimensions { name: String },
    #[error("no {grouping} data for year {year}")]
    EmptyYear { grouping: Grouping, year: i32 },
    #[error("overlay container is not available")]
    ContainerMissing,
}

pub mod highlight;
pub mod model;
pub mod state;

pub use highlight::{pump_highlights, ChannelHighlighter};
pub use state::ViewerState;

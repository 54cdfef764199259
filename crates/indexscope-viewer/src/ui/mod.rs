pub mod cards;
pub mod layout;
pub mod panel;
pub mod shortcuts;

pub use cards::{detail_card_overlay, ranking_card_overlay};
pub use layout::UiLayout;
pub use panel::ui_panel;
pub use shortcuts::handle_shortcuts;

pub const PANEL_W: f32 = 220.0;

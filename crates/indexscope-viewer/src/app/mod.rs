use bevy::prelude::*;
use std::path::Path;

use crate::app::resources::HighlightRx;
use crate::trend::{ChannelHighlighter, ViewerState};
use crate::ui::UiLayout;
use crate::util::config::ViewerConfig;
use crate::util::data;

pub mod resources;

pub struct IndexScopeViewerPlugin {
    pub cfg: ViewerConfig,
}

impl Plugin for IndexScopeViewerPlugin {
    fn build(&self, app: &mut App) {
        let datasets = data::load_or_demo(self.cfg.data_path.as_deref().map(Path::new));
        let (highlighter, rx) = ChannelHighlighter::channel();
        let st = ViewerState::new(&self.cfg, datasets, highlighter);
        tracing::info!(grouping = %st.ui.grouping, lines = st.trend.series.len(), "viewer state ready");

        app.insert_resource(st)
            .insert_resource(UiLayout::default())
            .insert_resource(HighlightRx(rx))
            .add_systems(Startup, crate::render::setup_scene)
            .add_systems(
                Update,
                (
                    crate::trend::pump_highlights,
                    crate::ui::handle_shortcuts,
                    crate::ui::ui_panel,
                    crate::render::trend_view,
                    crate::ui::detail_card_overlay,
                    crate::ui::ranking_card_overlay,
                )
                    .chain(),
            );
    }
}

use bevy::prelude::Resource;
use indexscope_core::{Datasets, DimensionDef, Grouping, OverlayHost, WeightedScore};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::trend::highlight::ChannelHighlighter;
use crate::trend::model::{build_series, TrendPoint, TrendSeries};
use crate::util::config::ViewerConfig;

#[derive(Default)]
pub struct TrendState {
    pub series: Vec<TrendSeries>,
    pub glow: HashMap<String, Instant>,
    pub hovered: Option<TrendPoint>,
}

pub struct UiState {
    pub grouping: Grouping,
    pub hovered_row: Option<usize>,
}

pub struct CfgState {
    pub highlight: Duration,
}

#[derive(Resource)]
pub struct ViewerState {
    pub data: Datasets,
    pub score: WeightedScore,
    pub overlays: OverlayHost,
    pub highlighter: ChannelHighlighter,
    pub trend: TrendState,
    pub ui: UiState,
    pub cfg: CfgState,
    // entity names of the current grouping, for highlight lookups
    pub(crate) known_names: Vec<String>,
}

impl ViewerState {
    pub fn new(cfg: &ViewerConfig, data: Datasets, highlighter: ChannelHighlighter) -> Self {
        let mut score = WeightedScore::equal(&data.dimensions);
        for (key, weight) in &cfg.dimension_weights {
            score = score.with_weight(key.clone(), *weight);
        }

        let available = data.available_groupings();
        let grouping = if available.contains(&cfg.default_grouping) {
            cfg.default_grouping.clone()
        } else {
            available.first().cloned().unwrap_or_default()
        };

        let mut st = Self {
            data,
            score,
            overlays: OverlayHost::new(cfg.overlay.clone()),
            highlighter,
            trend: TrendState::default(),
            ui: UiState {
                grouping: Grouping::default(),
                hovered_row: None,
            },
            cfg: CfgState {
                highlight: Duration::from_millis(cfg.highlight_ms),
            },
            known_names: Vec::new(),
        };
        st.set_grouping(grouping);
        st
    }

    pub fn dimensions(&self) -> &[DimensionDef] {
        &self.data.dimensions
    }

    /// Switches the plotted grouping; the detail card belongs to the old plot and is hidden.
    pub fn set_grouping(&mut self, grouping: Grouping) {
        self.trend.series = build_series(&self.data, &grouping, &self.score);
        self.known_names = self.data.entity_names(&grouping);
        self.trend.glow.clear();
        self.trend.hovered = None;
        self.overlays.detail.hide();
        self.ui.grouping = grouping;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::data::demo_datasets;

    #[test]
    fn unavailable_default_grouping_falls_back_to_first_loaded() {
        let mut data = Datasets::default();
        data.insert(Grouping::Gender, 2020, Vec::new());
        let (hl, _rx) = ChannelHighlighter::channel();
        let st = ViewerState::new(&ViewerConfig::default(), data, hl);
        assert_eq!(st.ui.grouping, Grouping::Gender);
    }

    #[test]
    fn switching_grouping_rebuilds_series_and_hides_detail() {
        let (hl, _rx) = ChannelHighlighter::channel();
        let mut st = ViewerState::new(&ViewerConfig::default(), demo_datasets(), hl);
        assert_eq!(st.trend.series.len(), 5);

        st.set_grouping(Grouping::Gender);
        assert_eq!(st.trend.series.len(), 2);
        assert!(!st.overlays.detail.panel().is_visible());
        assert!(st.known_names.iter().any(|n| n == "Female"));
    }

    #[test]
    fn configured_weights_reach_the_score_model() {
        let mut cfg = ViewerConfig::default();
        cfg.dimension_weights.insert("income".to_string(), 4.0);
        let (hl, _rx) = ChannelHighlighter::channel();
        let st = ViewerState::new(&cfg, demo_datasets(), hl);
        assert_eq!(st.score.weight("income"), Some(4.0));
        assert_eq!(st.score.weight("life"), Some(1.0));
    }
}

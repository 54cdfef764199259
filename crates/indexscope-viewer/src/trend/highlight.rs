use bevy::prelude::{Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use indexscope_core::CrossViewHighlighter;
use std::time::Instant;

use crate::app::resources::HighlightRx;
use crate::trend::state::ViewerState;

/// Ranking-row hover sink: queues the name for the trend view.
#[derive(Clone)]
pub struct ChannelHighlighter {
    tx: Sender<String>,
}

impl ChannelHighlighter {
    pub fn channel() -> (Self, Receiver<String>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl CrossViewHighlighter for ChannelHighlighter {
    fn highlight(&self, entity_name: &str) {
        // receiver gone means the trend view is shutting down
        let _ = self.tx.send(entity_name.to_string());
    }
}

pub fn pump_highlights(mut st: ResMut<ViewerState>, rx: Res<HighlightRx>) {
    let now = Instant::now();
    for name in rx.0.try_iter().take(1_000) {
        st.apply_highlight(&name, now);
    }
    st.tick_glow(now);
}

impl ViewerState {
    pub fn apply_highlight(&mut self, name: &str, now: Instant) {
        if !self.known_names.iter().any(|n| n == name) {
            tracing::debug!(name, "highlight for unknown trend line ignored");
            return;
        }
        self.trend
            .glow
            .insert(name.to_string(), now + self.cfg.highlight);
    }

    pub fn tick_glow(&mut self, now: Instant) {
        self.trend.glow.retain(|_, until| *until > now);
    }

    pub fn is_highlighted(&self, name: &str) -> bool {
        self.trend.glow.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::config::ViewerConfig;
    use crate::util::data::demo_datasets;
    use std::time::Duration;

    #[test]
    fn channel_delivers_names_in_order() {
        let (hl, rx) = ChannelHighlighter::channel();
        hl.highlight("North");
        hl.highlight("South");
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["North", "South"]);
    }

    #[test]
    fn highlight_glows_then_expires() {
        let (hl, _rx) = ChannelHighlighter::channel();
        let mut st = ViewerState::new(&ViewerConfig::default(), demo_datasets(), hl);
        let now = Instant::now();

        st.apply_highlight("North", now);
        st.apply_highlight("Atlantis", now);
        assert!(st.is_highlighted("North"));
        assert!(!st.is_highlighted("Atlantis"));

        st.tick_glow(now + st.cfg.highlight + Duration::from_millis(1));
        assert!(!st.is_highlighted("North"));
    }
}

use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::trend::ViewerState;

pub fn handle_shortcuts(mut contexts: EguiContexts, mut st: ResMut<ViewerState>) {
    let ctx = contexts.ctx_mut();
    if ctx.wants_keyboard_input() {
        return;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        st.overlays.hide_all();
        st.trend.hovered = None;
        st.ui.hovered_row = None;
    }
}

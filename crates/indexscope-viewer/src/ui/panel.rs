use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use indexscope_core::YearData;

use crate::trend::ViewerState;
use crate::ui::PANEL_W;
use crate::util::ids::{dimension_color, to_color32};

pub fn ui_panel(mut contexts: EguiContexts, mut st: ResMut<ViewerState>) {
    egui::SidePanel::left("left")
        .exact_width(PANEL_W)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("IndexScope");
            let locale = st.overlays.ranking.config().locale;
            let years = st.data.years(&st.ui.grouping);
            ui.label(format!("entities: {}", st.trend.series.len()));
            if let (Some(first), Some(last)) = (years.first(), years.last()) {
                ui.label(format!("years: {first}–{last}"));
            }
            ui.separator();

            ui.label("Grouping:");
            let mut picked = None;
            for g in st.data.available_groupings() {
                let selected = g == st.ui.grouping;
                if ui.selectable_label(selected, g.label(locale)).clicked() && !selected {
                    picked = Some(g);
                }
            }
            if let Some(g) = picked {
                st.set_grouping(g);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.heading("Dimensions");
            for (i, dim) in st.dimensions().iter().enumerate() {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(rect, 2.0, to_color32(dimension_color(i)));
                    ui.label(&dim.label);
                });
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label("Hover a point for its breakdown.");
            ui.label("Click a point to rank its year.");
            if !st.overlays.is_trend_ready() {
                ui.label("Waiting for the trend view…");
            }
            if ui.button("Hide cards (Esc)").clicked() {
                st.overlays.hide_all();
                st.ui.hovered_row = None;
            }
        });
}

use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use indexscope_core::{Collaborators, Point, YearData, YearSelection};

use crate::trend::model::{hit_test, PlotFrame};
use crate::trend::ViewerState;
use crate::ui::layout::{to_core_rect, UiLayout};
use crate::util::ids::{dimension_color, entity_color, to_color32};

const DOT_RADIUS: f32 = 4.0;
const HIT_RADIUS: f32 = 8.0;

fn pos(p: Point) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

pub fn trend_view(
    mut contexts: EguiContexts,
    st: ResMut<ViewerState>,
    mut layout: ResMut<UiLayout>,
) {
    let ctx = contexts.ctx_mut();
    let st = st.into_inner();
    layout.screen_rect = ctx.screen_rect();

    egui::CentralPanel::default().show(ctx, |ui| {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
        layout.content_rect = rect;
        let painter = ui.painter_at(rect);

        let years = st.data.years(&st.ui.grouping);
        let Some(frame) = PlotFrame::new(to_core_rect(rect), &years) else {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("No data for {}", st.ui.grouping),
                egui::FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
            return;
        };

        draw_axes(&painter, &frame, &years, ui.visuals());
        draw_series(&painter, &frame, st);

        let surface: &UiLayout = &layout;
        if !st.overlays.is_attached() {
            if let Err(err) = st.overlays.attach(surface) {
                tracing::warn!(%err, "overlay attach deferred");
            }
        }
        // dots exist from here on
        st.overlays.mark_trend_ready();

        let pointer = response.hover_pos().map(|p| Point::new(p.x, p.y));
        let hit = pointer.and_then(|p| hit_test(&st.trend.series, &frame, p, HIT_RADIUS));

        match (&hit, pointer) {
            (Some(point), Some(p)) => {
                if st.trend.hovered.as_ref() != Some(point) {
                    let entity = st
                        .data
                        .year_data(&st.ui.grouping, point.year)
                        .and_then(|rows| rows.iter().find(|e| e.name == point.name));
                    if let Some(entity) = entity {
                        st.overlays.detail.show(
                            surface,
                            entity,
                            p,
                            &st.data.dimensions,
                            &dimension_color,
                        );
                    }
                    st.trend.hovered = Some(point.clone());
                }
            }
            _ => {
                if st.trend.hovered.take().is_some() {
                    st.overlays.detail.hide();
                }
            }
        }

        if response.clicked() {
            if let (Some(point), Some(p)) = (&hit, pointer) {
                let sel = YearSelection {
                    year: point.year,
                    pointer: p,
                    grouping: st.ui.grouping.clone(),
                };
                let cx = Collaborators {
                    surface,
                    data: &st.data,
                    score: &st.score,
                };
                st.overlays.on_trend_point_clicked(&cx, &sel);
            }
        }
    });
}

fn draw_axes(painter: &egui::Painter, frame: &PlotFrame, years: &[i32], visuals: &egui::Visuals) {
    let grid = egui::Stroke::new(1.0, visuals.weak_text_color().gamma_multiply(0.3));
    let text = visuals.weak_text_color();
    let font = egui::FontId::proportional(11.0);
    let left = frame.year_x(frame.first_year);
    let right = frame.year_x(frame.last_year);

    for tick in (0..=10).step_by(2) {
        let y = frame.score_y(f64::from(tick));
        painter.line_segment([egui::pos2(left, y), egui::pos2(right, y)], grid);
        painter.text(
            egui::pos2(left - 8.0, y),
            egui::Align2::RIGHT_CENTER,
            tick.to_string(),
            font.clone(),
            text,
        );
    }
    let base = frame.score_y(0.0);
    for year in years {
        painter.text(
            egui::pos2(frame.year_x(*year), base + 14.0),
            egui::Align2::CENTER_CENTER,
            year.to_string(),
            font.clone(),
            text,
        );
    }
}

fn draw_series(painter: &egui::Painter, frame: &PlotFrame, st: &ViewerState) {
    let any_glow = !st.trend.glow.is_empty();
    for s in &st.trend.series {
        let glowing = st.is_highlighted(&s.name);
        let mut color = to_color32(entity_color(&s.name));
        if any_glow && !glowing {
            color = color.gamma_multiply(0.35);
        }
        let width = if glowing { 3.5 } else { 1.5 };

        let pts: Vec<egui::Pos2> = s
            .points
            .iter()
            .map(|(year, score)| pos(frame.to_screen(*year, *score)))
            .collect();
        for pair in pts.windows(2) {
            painter.line_segment([pair[0], pair[1]], egui::Stroke::new(width, color));
        }
        for (i, p) in pts.iter().enumerate() {
            let hovered = st
                .trend
                .hovered
                .as_ref()
                .map(|h| h.name == s.name && h.year == s.points[i].0)
                .unwrap_or(false);
            let r = if hovered { DOT_RADIUS + 2.0 } else { DOT_RADIUS };
            painter.circle_filled(*p, r, color);
        }
        if let Some(last) = pts.last() {
            painter.text(
                *last + egui::vec2(8.0, 0.0),
                egui::Align2::LEFT_CENTER,
                &s.name,
                egui::FontId::proportional(11.0),
                color,
            );
        }
    }
}

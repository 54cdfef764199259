use bevy::prelude::{Res, ResMut};
use bevy_egui::{egui, EguiContexts};
use indexscope_core::{Collaborators, DeltaTrend, DetailCard, Placement, RankingCard, Size};

use crate::trend::ViewerState;
use crate::ui::layout::UiLayout;
use crate::util::ids::to_color32;

const CARD_PADDING: f32 = 10.0;
const BAR_LABEL_W: f32 = 150.0;
const BAR_H: f32 = 10.0;

fn card_frame(style: &egui::Style) -> egui::Frame {
    egui::Frame::popup(style).inner_margin(egui::Margin::same(CARD_PADDING))
}

fn inner_size(size: Size) -> egui::Vec2 {
    egui::vec2(
        (size.width - 2.0 * CARD_PADDING).max(0.0),
        (size.height - 2.0 * CARD_PADDING).max(0.0),
    )
}

fn area_pos(placed: &Placement) -> egui::Pos2 {
    let o = placed.absolute_origin();
    egui::pos2(o.x, o.y)
}

pub fn detail_card_overlay(mut contexts: EguiContexts, st: Res<ViewerState>) {
    let ctx = contexts.ctx_mut();
    let Some((card, placed)) = st.overlays.detail.panel().shown() else {
        return;
    };
    let cfg = st.overlays.detail.config();
    let inner = inner_size(cfg.detail_size);
    let track = cfg.bar_track_width;

    egui::Area::new(egui::Id::new("detail_card"))
        .order(egui::Order::Foreground)
        .fixed_pos(area_pos(placed))
        .interactable(false)
        .show(ctx, |ui| {
            card_frame(ui.style()).show(ui, |ui| {
                ui.set_width(inner.x);
                ui.set_min_height(inner.y);
                detail_contents(ui, card, track);
            });
        });
}

fn detail_contents(ui: &mut egui::Ui, card: &DetailCard, track: f32) {
    ui.heading(&card.title);
    ui.add_space(6.0);

    // 0 2 4 6 8 10 above the tracks
    ui.horizontal(|ui| {
        ui.add_space(BAR_LABEL_W + ui.spacing().item_spacing.x);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(track, 14.0), egui::Sense::hover());
        for tick in card.scale {
            let x = rect.left() + f32::from(tick) / 10.0 * track;
            ui.painter().text(
                egui::pos2(x, rect.center().y),
                egui::Align2::CENTER_CENTER,
                tick.to_string(),
                egui::FontId::proportional(10.0),
                ui.visuals().weak_text_color(),
            );
        }
    });

    for bar in &card.bars {
        ui.horizontal(|ui| {
            ui.add_sized([BAR_LABEL_W, 18.0], egui::Label::new(&bar.label));
            let (rect, _) = ui.allocate_exact_size(egui::vec2(track, BAR_H), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);
            let fill = egui::Rect::from_min_size(rect.min, egui::vec2(bar.width, BAR_H));
            ui.painter().rect_filled(fill, 2.0, to_color32(bar.color));
            ui.label(&bar.value_text);
        });
    }
}

fn trend_color(trend: DeltaTrend, visuals: &egui::Visuals) -> egui::Color32 {
    match trend {
        DeltaTrend::Up => egui::Color32::from_rgb(46, 160, 67),
        DeltaTrend::Down => egui::Color32::from_rgb(215, 58, 73),
        DeltaTrend::Flat | DeltaTrend::NoData => visuals.weak_text_color(),
    }
}

#[derive(Default)]
struct RankingActions {
    close: bool,
    year: Option<i32>,
    hovered_row: Option<usize>,
}

pub fn ranking_card_overlay(
    mut contexts: EguiContexts,
    st: ResMut<ViewerState>,
    layout: Res<UiLayout>,
) {
    let ctx = contexts.ctx_mut();
    let st = st.into_inner();

    let Some((card, placed)) = st.overlays.ranking.panel().shown() else {
        st.ui.hovered_row = None;
        return;
    };
    let inner = inner_size(st.overlays.ranking.config().ranking_size);
    let mut actions = RankingActions::default();

    egui::Area::new(egui::Id::new("ranking_card"))
        .order(egui::Order::Foreground)
        .fixed_pos(area_pos(placed))
        .show(ctx, |ui| {
            card_frame(ui.style()).show(ui, |ui| {
                ui.set_width(inner.x);
                ui.set_max_height(inner.y);
                ranking_contents(ui, card, &mut actions);
            });
        });

    if actions.close {
        st.overlays.ranking.hide();
        st.ui.hovered_row = None;
        return;
    }
    if let Some(year) = actions.year {
        let cx = Collaborators {
            surface: &*layout,
            data: &st.data,
            score: &st.score,
        };
        st.overlays.ranking.select_year(&cx, year);
        st.ui.hovered_row = None;
        return;
    }
    // fires on row enter only
    if actions.hovered_row != st.ui.hovered_row {
        if let Some(i) = actions.hovered_row {
            st.overlays.ranking.hover_row(i, &st.highlighter);
        }
        st.ui.hovered_row = actions.hovered_row;
    }
}

fn ranking_contents(ui: &mut egui::Ui, card: &RankingCard, actions: &mut RankingActions) {
    ui.horizontal(|ui| {
        ui.strong(card.labels.title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").clicked() {
                actions.close = true;
            }
        });
    });

    let mut year = card.year;
    egui::ComboBox::from_id_source("ranking_year")
        .selected_text(year.to_string())
        .show_ui(ui, |ui| {
            for y in &card.years {
                ui.selectable_value(&mut year, *y, y.to_string());
            }
        });
    if year != card.year {
        actions.year = Some(year);
    }
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("ranking_rows")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                ui.strong(card.labels.position);
                ui.strong(card.name_header);
                ui.strong(card.labels.score);
                ui.strong(card.labels.change);
                ui.end_row();

                for (i, row) in card.rows.iter().enumerate() {
                    let first = ui.label(row.position.to_string());
                    ui.label(&row.entity.name);
                    ui.label(row.score_text());
                    let last = ui.colored_label(
                        trend_color(row.trend(), ui.visuals()),
                        row.change_text(card.labels.no_data),
                    );
                    if ui.rect_contains_pointer(first.rect.union(last.rect)) {
                        actions.hovered_row = Some(i);
                    }
                    ui.end_row();
                }
            });
    });
}

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::highlight::CrossViewHighlighter;
use crate::labels::RankingLabels;
use crate::model::{Grouping, Point};
use crate::overlay::panel::Panel;
use crate::overlay::Collaborators;
use crate::placement::place_on_surface;
use crate::ranking::{rank, RankingRow};

#[derive(Debug, Clone, PartialEq)]
pub struct RankingCard {
    pub year: i32,
    pub grouping: Grouping,
    /// Column header naming the ranked entities ("Region", "Age group", ...).
    pub name_header: &'static str,
    pub labels: RankingLabels,
    /// Years offered by the year selector, ascending.
    pub years: Vec<i32>,
    pub rows: Vec<RankingRow>,
}

/// A year picked somewhere in the UI, carrying the grouping it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSelection {
    pub year: i32,
    pub pointer: Point,
    pub grouping: Grouping,
}

#[derive(Debug, Clone, Default)]
pub struct RankingCardController {
    panel: Panel<RankingCard>,
    cfg: OverlayConfig,
}

impl RankingCardController {
    pub fn new(cfg: OverlayConfig) -> Self {
        Self {
            panel: Panel::default(),
            cfg,
        }
    }

    pub fn panel(&self) -> &Panel<RankingCard> {
        &self.panel
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.cfg
    }

    pub(crate) fn attach(&mut self) -> bool {
        self.panel.attach()
    }

    pub fn show(&mut self, cx: &Collaborators<'_>, sel: &YearSelection) {
        if let Err(err) = self.try_show(cx, sel) {
            tracing::error!(%err, "ranking card not shown");
        }
    }

    pub fn try_show(
        &mut self,
        cx: &Collaborators<'_>,
        sel: &YearSelection,
    ) -> Result<(), OverlayError> {
        let current = match cx.data.year_data(&sel.grouping, sel.year) {
            Some(rows) if !rows.is_empty() => rows,
            _ => {
                return Err(OverlayError::EmptyYear {
                    grouping: sel.grouping.clone(),
                    year: sel.year,
                })
            }
        };
        let previous = sel
            .year
            .checked_sub(1)
            .and_then(|y| cx.data.year_data(&sel.grouping, y));

        let card = RankingCard {
            year: sel.year,
            grouping: sel.grouping.clone(),
            name_header: sel.grouping.label(self.cfg.locale),
            labels: RankingLabels::for_locale(self.cfg.locale),
            years: cx.data.years(&sel.grouping),
            rows: rank(current, previous, cx.score),
        };
        let placement =
            place_on_surface(cx.surface, sel.pointer, self.cfg.ranking_size, &self.cfg);
        self.panel.present(card, placement);
        Ok(())
    }

    /// Year selector changed: re-show for `year`, anchored at the card's current top-left.
    pub fn select_year(&mut self, cx: &Collaborators<'_>, year: i32) {
        let Some((card, placed)) = self.panel.shown() else {
            tracing::debug!(year, "year selected while ranking card hidden");
            return;
        };
        let sel = YearSelection {
            year,
            pointer: placed.absolute_origin(),
            grouping: card.grouping.clone(),
        };
        self.show(cx, &sel);
    }

    /// Pointer entered row `index` of the visible card.
    pub fn hover_row(&self, index: usize, highlighter: &dyn CrossViewHighlighter) {
        if let Some(row) = self
            .panel
            .shown()
            .and_then(|(card, _)| card.rows.get(index))
        {
            highlighter.highlight(&row.entity.name);
        }
    }

    pub fn hide(&mut self) {
        self.panel.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Datasets, Entity, Rect, Size};
    use crate::placement::{Anchor, Surface};
    use crate::ranking::DeltaTrend;
    use crate::score::ScoreModel;
    use std::cell::{Cell, RefCell};

    struct Area;

    impl Surface for Area {
        fn container_rect(&self) -> Option<Rect> {
            Some(Rect::new(0.0, 0.0, 800.0, 600.0))
        }
        fn viewport_size(&self) -> Size {
            Size::new(800.0, 600.0)
        }
    }

    fn overall(e: &Entity) -> f64 {
        e.overall_score.unwrap_or_default()
    }

    fn data() -> Datasets {
        let mut d = Datasets::default();
        d.insert(
            Grouping::Region,
            2023,
            vec![
                Entity::new("B").with_overall(6.0),
                Entity::new("A").with_overall(8.0),
            ],
        );
        d.insert(
            Grouping::Region,
            2022,
            vec![Entity::new("A").with_overall(7.5)],
        );
        d.insert(
            Grouping::Gender,
            2023,
            vec![Entity::new("female").with_overall(7.0)],
        );
        d.insert(Grouping::Gender, 2021, Vec::new());
        d
    }

    fn cx<'a>(data: &'a Datasets, score: &'a dyn ScoreModel) -> Collaborators<'a> {
        Collaborators {
            surface: &Area,
            data,
            score,
        }
    }

    fn sel(year: i32, grouping: Grouping, x: f32, y: f32) -> YearSelection {
        YearSelection {
            year,
            pointer: Point::new(x, y),
            grouping,
        }
    }

    #[test]
    fn shows_ranked_rows_with_deltas() {
        let d = data();
        let mut ctl = RankingCardController::new(OverlayConfig::default());
        ctl.show(&cx(&d, &overall), &sel(2023, Grouping::Region, 100.0, 100.0));

        let (card, placed) = ctl.panel().shown().expect("visible");
        assert_eq!(card.name_header, "Region");
        assert_eq!(card.years, vec![2022, 2023]);
        assert_eq!(card.rows[0].entity.name, "A");
        assert_eq!(card.rows[0].delta, Some(0.5));
        assert_eq!(card.rows[1].trend(), DeltaTrend::NoData);
        assert_eq!(placed.origin, Point::new(120.0, 120.0));
    }

    #[test]
    fn empty_or_absent_year_is_rejected_without_touching_state() {
        let d = data();
        let score = overall;
        let c = cx(&d, &score);
        let mut ctl = RankingCardController::new(OverlayConfig::default());
        ctl.show(&c, &sel(2023, Grouping::Region, 100.0, 100.0));

        assert_eq!(
            ctl.try_show(&c, &sel(2021, Grouping::Gender, 0.0, 0.0)),
            Err(OverlayError::EmptyYear {
                grouping: Grouping::Gender,
                year: 2021
            })
        );
        ctl.show(&c, &sel(1999, Grouping::Region, 0.0, 0.0));

        let (card, _) = ctl.panel().shown().expect("still visible");
        assert_eq!(card.year, 2023);
        assert_eq!(card.grouping, Grouping::Region);
    }

    #[test]
    fn grouping_comes_from_the_selection() {
        let d = data();
        let mut ctl = RankingCardController::new(OverlayConfig::default());
        ctl.show(&cx(&d, &overall), &sel(2023, Grouping::Gender, 50.0, 50.0));
        let (card, _) = ctl.panel().shown().expect("visible");
        assert_eq!(card.rows.len(), 1);
        assert_eq!(card.rows[0].entity.name, "female");
        // 2022 has no Gender data at all
        assert_eq!(card.rows[0].delta, None);
    }

    #[test]
    fn select_year_keeps_grouping_and_anchors_at_card() {
        let d = data();
        let c = cx(&d, &overall);
        let mut ctl = RankingCardController::new(OverlayConfig::default());
        ctl.show(&c, &sel(2023, Grouping::Region, 40.0, 40.0));
        ctl.select_year(&c, 2022);

        let (card, placed) = ctl.panel().shown().expect("visible");
        assert_eq!(card.year, 2022);
        assert_eq!(card.grouping, Grouping::Region);
        assert_eq!(card.rows.len(), 1);
        // previous top-left (60, 60) + offset
        assert_eq!(placed.origin, Point::new(80.0, 80.0));
    }

    #[test]
    fn select_year_while_hidden_is_ignored() {
        let d = data();
        let mut ctl = RankingCardController::new(OverlayConfig::default());
        ctl.select_year(&cx(&d, &overall), 2023);
        assert!(ctl.panel().content().is_none());
    }

    #[test]
    fn hovering_a_row_highlights_its_entity() {
        let d = data();
        let mut ctl = RankingCardController::new(OverlayConfig::default());
        ctl.show(&cx(&d, &overall), &sel(2023, Grouping::Region, 10.0, 10.0));

        let seen = RefCell::new(Vec::new());
        let sink = |name: &str| seen.borrow_mut().push(name.to_string());
        ctl.hover_row(1, &sink);
        ctl.hover_row(7, &sink);
        ctl.hide();
        ctl.hover_row(0, &sink);

        assert_eq!(*seen.borrow(), vec!["B"]);
    }

    #[test]
    fn reshow_leaves_single_panel_with_latest_state() {
        let d = data();
        let c = cx(&d, &overall);
        let mut ctl = RankingCardController::new(OverlayConfig::default());
        ctl.show(&c, &sel(2023, Grouping::Region, 10.0, 10.0));
        ctl.show(&c, &sel(2022, Grouping::Region, 200.0, 100.0));

        let (card, placed) = ctl.panel().shown().expect("visible");
        assert_eq!(card.year, 2022);
        assert_eq!(placed.origin, Point::new(220.0, 120.0));

        ctl.hide();
        ctl.hide();
        assert!(!ctl.panel().is_visible());
    }

    struct Detachable(Cell<Option<Rect>>);

    impl Surface for Detachable {
        fn container_rect(&self) -> Option<Rect> {
            self.0.get()
        }
        fn viewport_size(&self) -> Size {
            Size::new(1280.0, 800.0)
        }
    }

    #[test]
    fn container_loss_between_shows_falls_back_to_viewport() {
        let d = data();
        let surface = Detachable(Cell::new(Some(Rect::new(0.0, 0.0, 800.0, 600.0))));
        let c = Collaborators {
            surface: &surface,
            data: &d,
            score: &overall,
        };
        let mut ctl = RankingCardController::new(OverlayConfig::default());

        ctl.show(&c, &sel(2023, Grouping::Region, 100.0, 100.0));
        let placed = *ctl.panel().placement().expect("placed");
        assert_eq!(placed.anchor, Anchor::Container);

        surface.0.set(None);
        ctl.show(&c, &sel(2023, Grouping::Region, 100.0, 100.0));
        let placed = *ctl.panel().placement().expect("placed");
        assert_eq!(placed.anchor, Anchor::Viewport);
        assert_eq!(placed.bounds, Rect::new(0.0, 0.0, 1280.0, 800.0));
        assert_eq!(placed.origin, Point::new(120.0, 120.0));
    }

    #[test]
    fn earliest_representable_year_has_no_previous() {
        let mut d = Datasets::default();
        d.insert(
            Grouping::Region,
            i32::MIN,
            vec![Entity::new("A").with_overall(3.0)],
        );
        let mut ctl = RankingCardController::new(OverlayConfig::default());
        ctl.show(&cx(&d, &overall), &sel(i32::MIN, Grouping::Region, 0.0, 0.0));

        let (card, _) = ctl.panel().shown().expect("visible");
        assert_eq!(card.rows.len(), 1);
        assert_eq!(card.rows[0].delta, None);
    }
}

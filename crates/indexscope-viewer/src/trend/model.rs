use indexscope_core::{Datasets, Grouping, Point, Rect, ScoreModel, YearData};

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub name: String,
    /// (year, overall score), ascending by year; years without data are gaps.
    pub points: Vec<(i32, f64)>,
}

/// A single dot of the trend plot.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub name: String,
    pub year: i32,
}

pub fn build_series(data: &Datasets, grouping: &Grouping, score: &dyn ScoreModel) -> Vec<TrendSeries> {
    let years = data.years(grouping);
    data.entity_names(grouping)
        .into_iter()
        .map(|name| {
            let points = years
                .iter()
                .filter_map(|year| {
                    let entities = data.year_data(grouping, *year)?;
                    let e = entities.iter().find(|e| e.name == name)?;
                    Some((*year, score.overall(e)))
                })
                .collect();
            TrendSeries { name, points }
        })
        .collect()
}

/// Maps (year, 0..10 score) into a plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub rect: Rect,
    pub first_year: i32,
    pub last_year: i32,
    pub padding: f32,
}

impl PlotFrame {
    pub fn new(rect: Rect, years: &[i32]) -> Option<Self> {
        let first_year = *years.iter().min()?;
        let last_year = *years.iter().max()?;
        Some(Self {
            rect,
            first_year,
            last_year,
            padding: 40.0,
        })
    }

    pub fn year_x(&self, year: i32) -> f32 {
        let inner = (self.rect.width - 2.0 * self.padding).max(1.0);
        let span = (self.last_year - self.first_year).max(1) as f32;
        let t = if self.first_year == self.last_year {
            0.5
        } else {
            (year - self.first_year) as f32 / span
        };
        self.rect.left + self.padding + t * inner
    }

    pub fn score_y(&self, score: f64) -> f32 {
        let inner = (self.rect.height - 2.0 * self.padding).max(1.0);
        let t = (score / 10.0).clamp(0.0, 1.0) as f32;
        self.rect.bottom() - self.padding - t * inner
    }

    pub fn to_screen(&self, year: i32, score: f64) -> Point {
        Point::new(self.year_x(year), self.score_y(score))
    }
}

/// Closest dot within `radius` of `pointer`.
pub fn hit_test(
    series: &[TrendSeries],
    frame: &PlotFrame,
    pointer: Point,
    radius: f32,
) -> Option<TrendPoint> {
    let mut best: Option<(f32, TrendPoint)> = None;
    for s in series {
        for (year, score) in &s.points {
            let p = frame.to_screen(*year, *score);
            let d2 = (p.x - pointer.x).powi(2) + (p.y - pointer.y).powi(2);
            if d2 > radius * radius {
                continue;
            }
            if best.as_ref().map(|(b, _)| d2 < *b).unwrap_or(true) {
                best = Some((
                    d2,
                    TrendPoint {
                        name: s.name.clone(),
                        year: *year,
                    },
                ));
            }
        }
    }
    best.map(|(_, p)| p)
}

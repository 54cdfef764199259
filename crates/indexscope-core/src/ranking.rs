use std::cmp::Ordering;

use crate::format::fixed;
use crate::model::Entity;
use crate::score::ScoreModel;

#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub entity: Entity,
    /// 1-based.
    pub position: usize,
    pub score: f64,
    /// `None` when the previous year has no entity with the same name.
    pub delta: Option<f64>,
}

impl RankingRow {
    pub fn trend(&self) -> DeltaTrend {
        DeltaTrend::from_delta(self.delta)
    }

    pub fn score_text(&self) -> String {
        fixed(self.score, 2)
    }

    pub fn change_text(&self, no_data: &str) -> String {
        match self.delta {
            Some(d) => format!("{}{}", self.trend().arrow(), fixed(d.abs(), 2)),
            None => no_data.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTrend {
    Up,
    Down,
    Flat,
    NoData,
}

impl DeltaTrend {
    pub fn from_delta(delta: Option<f64>) -> Self {
        match delta {
            Some(d) if d > 0.0 => Self::Up,
            Some(d) if d < 0.0 => Self::Down,
            Some(_) => Self::Flat,
            None => Self::NoData,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
            Self::Flat => "→",
            Self::NoData => "",
        }
    }
}

/// Orders `current` by descending overall score (stable on ties) and attaches the change
/// against the same-named entity of `previous`. Duplicate names in `previous` resolve to the
/// first occurrence.
pub fn rank(
    current: &[Entity],
    previous: Option<&[Entity]>,
    score: &dyn ScoreModel,
) -> Vec<RankingRow> {
    let mut scored: Vec<(&Entity, f64)> = current.iter().map(|e| (e, score.overall(e))).collect();
    scored.sort_by(|a, b| descending(a.1, b.1));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (entity, s))| {
            let delta = previous
                .and_then(|prev| prev.iter().find(|p| p.name == entity.name))
                .map(|p| s - score.overall(p));
            RankingRow {
                entity: entity.clone(),
                position: i + 1,
                score: s,
                delta,
            }
        })
        .collect()
}

// NaN sorts after every number
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::labels::Locale;

/// One scored row of a year dataset (a region, an age group, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    // raw 0..10 scores; non-numeric values are kept so they can be skipped, not zeroed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dims: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<f64>,
    #[serde(
        default,
        rename = "overallScore",
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_score: Option<f64>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dims: Some(BTreeMap::new()),
            satisfaction: None,
            overall_score: None,
        }
    }

    pub fn with_dim(mut self, key: impl Into<String>, value: f64) -> Self {
        self.dims
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), serde_json::Value::from(value));
        self
    }

    pub fn with_overall(mut self, score: f64) -> Self {
        self.overall_score = Some(score);
        self
    }

    pub fn has_dims(&self) -> bool {
        self.dims.is_some()
    }

    /// Numeric value of one dimension. `None` for missing or non-numeric entries.
    pub fn dim(&self, key: &str) -> Option<f64> {
        self.dims.as_ref()?.get(key)?.as_f64()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDef {
    pub key: String,
    pub label: String,
}

impl DimensionDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Axis along which entities are segmented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grouping {
    Region,
    AgeGroup,
    Gender,
    SettlementType,
    Other(String),
}

impl Grouping {
    pub const KNOWN: [Grouping; 4] = [
        Grouping::Region,
        Grouping::AgeGroup,
        Grouping::Gender,
        Grouping::SettlementType,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Region => "Region",
            Self::AgeGroup => "AgeGroup",
            Self::Gender => "Gender",
            Self::SettlementType => "SettlementType",
            Self::Other(id) => id,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        crate::labels::grouping_label(self, locale)
    }
}

impl Default for Grouping {
    fn default() -> Self {
        Self::Region
    }
}

impl From<&str> for Grouping {
    fn from(id: &str) -> Self {
        match id {
            "Region" => Self::Region,
            "AgeGroup" => Self::AgeGroup,
            "Gender" => Self::Gender,
            "SettlementType" => Self::SettlementType,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Grouping {
    fn from(id: String) -> Self {
        Grouping::from(id.as_str())
    }
}

impl From<Grouping> for String {
    fn from(g: Grouping) -> Self {
        g.as_str().to_string()
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type YearDataset = BTreeMap<i32, Vec<Entity>>;

/// Dataset accessor consumed by the ranking card.
pub trait YearData {
    fn year_data(&self, grouping: &Grouping, year: i32) -> Option<&[Entity]>;

    fn years(&self, grouping: &Grouping) -> Vec<i32>;
}

/// Every loaded dataset, keyed by grouping and then by year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datasets {
    #[serde(default)]
    pub dimensions: Vec<DimensionDef>,
    #[serde(default)]
    pub groupings: HashMap<Grouping, YearDataset>,
}

impl Datasets {
    pub fn insert(&mut self, grouping: Grouping, year: i32, entities: Vec<Entity>) {
        self.groupings
            .entry(grouping)
            .or_default()
            .insert(year, entities);
    }

    pub fn available_groupings(&self) -> Vec<Grouping> {
        let mut out: Vec<Grouping> = self.groupings.keys().cloned().collect();
        out.sort();
        out
    }

    /// Names present in any year of the grouping, in first-seen order.
    pub fn entity_names(&self, grouping: &Grouping) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let Some(by_year) = self.groupings.get(grouping) else {
            return names;
        };
        for entities in by_year.values() {
            for e in entities {
                if !names.iter().any(|n| n == &e.name) {
                    names.push(e.name.clone());
                }
            }
        }
        names
    }
}

impl YearData for Datasets {
    fn year_data(&self, grouping: &Grouping, year: i32) -> Option<&[Entity]> {
        self.groupings
            .get(grouping)?
            .get(&year)
            .map(|v| v.as_slice())
    }

    fn years(&self, grouping: &Grouping) -> Vec<i32> {
        self.groupings
            .get(grouping)
            .map(|by_year| by_year.keys().copied().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

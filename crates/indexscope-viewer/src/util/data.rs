use anyhow::Context;
use indexscope_core::{Datasets, DimensionDef, Entity, Grouping};
use std::fs;
use std::path::Path;

use crate::util::ids::stable_u32;

pub const DEMO_YEARS: std::ops::RangeInclusive<i32> = 2020..=2024;

pub fn load_datasets(path: &Path) -> anyhow::Result<Datasets> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let data: Datasets = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;
    if data.dimensions.is_empty() {
        anyhow::bail!("dataset {} declares no dimensions", path.display());
    }
    Ok(data)
}

/// Configured file, or the demo dataset when none is set or it fails to load.
pub fn load_or_demo(path: Option<&Path>) -> Datasets {
    let Some(path) = path else {
        tracing::info!("no dataset configured, using demo data");
        return demo_datasets();
    };
    match load_datasets(path) {
        Ok(data) => {
            tracing::info!(
                path = %path.display(),
                groupings = data.groupings.len(),
                "dataset loaded"
            );
            data
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "dataset unavailable, using demo data");
            demo_datasets()
        }
    }
}

fn demo_dimensions() -> Vec<DimensionDef> {
    vec![
        DimensionDef::new("life", "Life satisfaction"),
        DimensionDef::new("income", "Income"),
        DimensionDef::new("jobs", "Jobs"),
        DimensionDef::new("health", "Health"),
        DimensionDef::new("education", "Education"),
        DimensionDef::new("safety", "Safety"),
    ]
}

fn demo_members(grouping: &Grouping) -> &'static [&'static str] {
    match grouping {
        Grouping::Region => &["North", "South", "East", "West", "Capital"],
        Grouping::AgeGroup => &["18-29", "30-44", "45-59", "60+"],
        Grouping::Gender => &["Female", "Male"],
        Grouping::SettlementType => &["Urban", "Rural"],
        Grouping::Other(_) => &[],
    }
}

// 1.0..=9.9 with a small per-year drift
fn demo_score(name: &str, dim: &str, year: i32) -> f64 {
    let base = 2.0 + f64::from(stable_u32(&format!("{name}/{dim}")) % 60) / 10.0;
    let step = f64::from(stable_u32(&format!("{name}/{dim}/{year}")) % 7) / 10.0 - 0.3;
    let drift = f64::from(year - *DEMO_YEARS.start()) * step;
    ((base + drift) * 10.0).round().clamp(10.0, 99.0) / 10.0
}

pub fn demo_datasets() -> Datasets {
    let dims = demo_dimensions();
    let mut data = Datasets {
        dimensions: dims.clone(),
        ..Datasets::default()
    };
    for grouping in Grouping::KNOWN {
        for year in DEMO_YEARS {
            let entities = demo_members(&grouping)
                .iter()
                // the capital joined the survey one year late
                .filter(|name| !(**name == "Capital" && year == *DEMO_YEARS.start()))
                .map(|name| {
                    dims.iter().fold(Entity::new(*name), |e, d| {
                        e.with_dim(d.key.clone(), demo_score(name, &d.key, year))
                    })
                })
                .collect();
            data.insert(grouping.clone(), year, entities);
        }
    }
    data
}

use std::collections::HashMap;

use crate::model::{DimensionDef, Entity};

/// Composite ("overall") score of an entity.
pub trait ScoreModel {
    fn overall(&self, entity: &Entity) -> f64;
}

impl<F> ScoreModel for F
where
    F: Fn(&Entity) -> f64,
{
    fn overall(&self, entity: &Entity) -> f64 {
        self(entity)
    }
}

/// Uses the precomputed `overallScore` when the dataset carries one, otherwise a weighted
/// mean over the numeric dimensions. Entities with no usable dimension score 0.
#[derive(Debug, Clone, Default)]
pub struct WeightedScore {
    weights: HashMap<String, f64>,
}

impl WeightedScore {
    pub fn equal(dims: &[DimensionDef]) -> Self {
        Self {
            weights: dims.iter().map(|d| (d.key.clone(), 1.0)).collect(),
        }
    }

    pub fn with_weight(mut self, key: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(key.into(), weight.max(0.0));
        self
    }

    pub fn weight(&self, key: &str) -> Option<f64> {
        self.weights.get(key).copied()
    }
}

impl ScoreModel for WeightedScore {
    fn overall(&self, entity: &Entity) -> f64 {
        if let Some(score) = entity.overall_score {
            return score;
        }
        let mut total = 0.0;
        let mut weight_sum = 0.0;
        for (key, weight) in &self.weights {
            if let Some(v) = entity.dim(key) {
                total += v * weight;
                weight_sum += weight;
            }
        }
        if weight_sum > 0.0 {
            total / weight_sum
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> Vec<DimensionDef> {
        vec![
            DimensionDef::new("life", "Life"),
            DimensionDef::new("income", "Income"),
        ]
    }

    #[test]
    fn precomputed_overall_wins() {
        let model = WeightedScore::equal(&dims());
        let e = Entity::new("A").with_dim("life", 2.0).with_overall(9.1);
        assert_eq!(model.overall(&e), 9.1);
    }

    #[test]
    fn weighted_mean_skips_missing_dimensions() {
        let model = WeightedScore::equal(&dims()).with_weight("life", 3.0);
        let e = Entity::new("A").with_dim("life", 8.0).with_dim("income", 4.0);
        assert_eq!(model.overall(&e), 7.0);

        let only_income = Entity::new("B").with_dim("income", 4.0);
        assert_eq!(model.overall(&only_income), 4.0);
        assert_eq!(model.overall(&Entity::new("C")), 0.0);
    }

    #[test]
    fn closures_are_score_models() {
        let by_satisfaction = |e: &Entity| e.satisfaction.unwrap_or_default();
        let mut e = Entity::new("A");
        e.satisfaction = Some(6.5);
        assert_eq!(by_satisfaction.overall(&e), 6.5);
    }
}

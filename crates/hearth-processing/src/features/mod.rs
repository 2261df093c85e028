//! Feature engineering.
//!
//! Each strategy is constructed with an explicit list of target column
//! names and transforms only those columns; everything else passes
//! through untouched. The [`FeatureEngineer`] context holds the selected
//! strategy.

mod log;
mod one_hot;
mod scaling;

pub use log::LogTransformation;
pub use one_hot::OneHotEncoding;
pub use scaling::{MinMaxScaling, StandardScaling};

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// A pluggable feature transformation confined to named target columns.
pub trait FeatureEngineeringStrategy: Send + Sync + std::fmt::Debug {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame>;
}

/// Context holding the currently selected feature-engineering strategy.
pub struct FeatureEngineer {
    strategy: Box<dyn FeatureEngineeringStrategy>,
}

static_assertions::assert_impl_all!(FeatureEngineer: Send);

impl FeatureEngineer {
    /// Create an engineer with an initial strategy.
    pub fn new(strategy: Box<dyn FeatureEngineeringStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the held strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn FeatureEngineeringStrategy>) {
        debug!("Switching feature engineering strategy");
        self.strategy = strategy;
    }

    /// Apply the current strategy to the dataset.
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        debug!("Applying feature engineering strategy");
        self.strategy.apply(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_delegates() {
        let df = df!["area" => [0.0, (1.0f64).exp() - 1.0]].unwrap();
        let engineer =
            FeatureEngineer::new(Box::new(LogTransformation::new(vec!["area".into()])));

        let out = engineer.apply(&df).unwrap();
        let area = out.column("area").unwrap().as_materialized_series().clone();
        assert!((area.f64().unwrap().get(1).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_strategy_switches_transform() {
        let df = df!["area" => [0.0, 10.0]].unwrap();
        let mut engineer =
            FeatureEngineer::new(Box::new(LogTransformation::new(vec!["area".into()])));
        engineer.set_strategy(Box::new(MinMaxScaling::new(vec!["area".into()])));

        let out = engineer.apply(&df).unwrap();
        let area = out.column("area").unwrap().as_materialized_series().clone();
        assert_eq!(area.f64().unwrap().get(0), Some(0.0));
        assert_eq!(area.f64().unwrap().get(1), Some(1.0));
    }
}

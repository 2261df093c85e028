//! String-keyed strategy selection for the model stages.

use crate::builder::{LinearRegressionStrategy, ModelBuildingStrategy};
use crate::error::{LearningError, Result};
use crate::evaluator::{ModelEvaluationStrategy, RegressionEvaluation};

/// Select a model-building strategy by name.
///
/// Recognized: `"linear_regression"`.
pub fn model_building_strategy(name: &str) -> Result<Box<dyn ModelBuildingStrategy>> {
    match name {
        "linear_regression" => Ok(Box::new(LinearRegressionStrategy)),
        _ => Err(LearningError::unsupported("model building", name)),
    }
}

/// Select a model-evaluation strategy by name.
///
/// Recognized: `"regression"`.
pub fn model_evaluation_strategy(name: &str) -> Result<Box<dyn ModelEvaluationStrategy>> {
    match name {
        "regression" => Ok(Box::new(RegressionEvaluation)),
        _ => Err(LearningError::unsupported("model evaluation", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_selectors_resolve() {
        assert!(model_building_strategy("linear_regression").is_ok());
        assert!(model_evaluation_strategy("regression").is_ok());
    }

    #[test]
    fn test_unknown_selectors_fail() {
        assert!(matches!(
            model_building_strategy("gradient_boosting").unwrap_err(),
            LearningError::UnsupportedStrategy { stage: "model building", .. }
        ));
        assert!(model_evaluation_strategy("classification").is_err());
    }
}

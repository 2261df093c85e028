//! Model evaluation.
//!
//! A [`ModelEvaluationStrategy`] scores a fitted [`ModelPipeline`]
//! against held-out data and reports a name-to-value metrics mapping;
//! the [`ModelEvaluator`] context holds the currently selected strategy.

use std::collections::BTreeMap;

use polars::prelude::*;
use tracing::{debug, info};

use crate::data::series_vector;
use crate::error::{LearningError, Result};
use crate::metrics::{MSE_KEY, R2_KEY, mean_squared_error, r2_score};
use crate::pipeline::ModelPipeline;

/// Evaluation metrics: metric name mapped to its value.
pub type Metrics = BTreeMap<String, f64>;

/// A pluggable policy for scoring a fitted pipeline on held-out data.
pub trait ModelEvaluationStrategy: Send + Sync {
    fn evaluate(
        &self,
        pipeline: &ModelPipeline,
        x_test: &DataFrame,
        y_test: &Series,
    ) -> Result<Metrics>;
}

/// Scores a regression pipeline with mean squared error and R².
///
/// The pipeline's fitted preprocessing stage is re-applied to the test
/// features exactly as captured at training time; nothing is refit on
/// the test partition.
#[derive(Debug, Clone, Default)]
pub struct RegressionEvaluation;

impl ModelEvaluationStrategy for RegressionEvaluation {
    fn evaluate(
        &self,
        pipeline: &ModelPipeline,
        x_test: &DataFrame,
        y_test: &Series,
    ) -> Result<Metrics> {
        if x_test.height() == 0 {
            return Err(LearningError::EmptyDataset);
        }
        if y_test.len() != x_test.height() {
            return Err(LearningError::shape(
                format!("target of length {}", x_test.height()),
                format!("length {}", y_test.len()),
            ));
        }

        info!("Applying the trained preprocessing to the test data");
        let scaled = pipeline.preprocessor().transform(x_test)?;
        let predictions = pipeline.regressor().predict(&scaled)?;
        let truth = series_vector(y_test)?;

        let mse = mean_squared_error(&truth, &predictions);
        let r2 = r2_score(&truth, &predictions);
        debug!(mse, r2, "Metrics computed");

        let mut metrics = Metrics::new();
        for (name, value) in [(MSE_KEY, mse), (R2_KEY, r2)] {
            if !value.is_finite() {
                return Err(LearningError::ContractViolation(format!(
                    "metric '{name}' is not representable as a finite value"
                )));
            }
            metrics.insert(name.to_string(), value);
        }

        info!("Model evaluation completed");
        Ok(metrics)
    }
}

/// Context holding the currently selected evaluation strategy.
pub struct ModelEvaluator {
    strategy: Box<dyn ModelEvaluationStrategy>,
}

static_assertions::assert_impl_all!(ModelEvaluator: Send);

impl ModelEvaluator {
    /// Create an evaluator with an initial strategy.
    pub fn new(strategy: Box<dyn ModelEvaluationStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the held strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn ModelEvaluationStrategy>) {
        debug!("Switching model evaluation strategy");
        self.strategy = strategy;
    }

    /// Evaluate a fitted pipeline using the current strategy.
    pub fn evaluate(
        &self,
        pipeline: &ModelPipeline,
        x_test: &DataFrame,
        y_test: &Series,
    ) -> Result<Metrics> {
        debug!("Evaluating the model using the selected strategy");
        self.strategy.evaluate(pipeline, x_test, y_test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{LinearRegressionStrategy, ModelBuildingStrategy};

    fn fitted_pipeline() -> ModelPipeline {
        let x = df!["size" => [50.0, 60.0, 70.0, 80.0, 90.0]].unwrap();
        let y = Series::new(
            "price".into(),
            &[100.0f64, 120.0, 140.0, 160.0, 180.0],
        );
        LinearRegressionStrategy.build(&x, &y).unwrap()
    }

    #[test]
    fn test_evaluate_reports_both_metrics() {
        let pipeline = fitted_pipeline();
        let x_test = df!["size" => [55.0, 65.0]].unwrap();
        let y_test = Series::new("price".into(), &[110.0f64, 130.0]);

        let evaluator = ModelEvaluator::new(Box::new(RegressionEvaluation));
        let metrics = evaluator.evaluate(&pipeline, &x_test, &y_test).unwrap();

        assert!(metrics.contains_key(MSE_KEY));
        assert!(metrics.contains_key(R2_KEY));
        // Perfect line, perfect holdout: zero error.
        assert!(metrics[MSE_KEY] < 1e-12);
    }

    #[test]
    fn test_evaluate_never_refits_the_preprocessor() {
        let pipeline = fitted_pipeline();

        // A shifted test distribution; if the scaler refit on it, the
        // scaled values would center around zero and predictions would
        // collapse toward the training mean instead of extrapolating.
        let x_test = df!["size" => [200.0]].unwrap();
        let y_test = Series::new("price".into(), &[400.0f64]);

        let err = RegressionEvaluation
            .evaluate(&pipeline, &x_test, &y_test)
            .unwrap_err();
        // Single-point holdout has zero target variance: R2 undefined.
        assert!(matches!(err, LearningError::ContractViolation(_)));

        // The prediction itself extrapolates correctly.
        let predictions = pipeline.predict(&x_test).unwrap();
        assert!((predictions[0] - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_rejects_length_mismatch() {
        let pipeline = fitted_pipeline();
        let x_test = df!["size" => [55.0, 65.0]].unwrap();
        let y_test = Series::new("price".into(), &[110.0f64]);

        let err = RegressionEvaluation
            .evaluate(&pipeline, &x_test, &y_test)
            .unwrap_err();
        assert!(matches!(err, LearningError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_evaluate_rejects_missing_feature_column() {
        let pipeline = fitted_pipeline();
        let x_test = df!["area" => [55.0]].unwrap();
        let y_test = Series::new("price".into(), &[110.0f64]);

        let err = RegressionEvaluation
            .evaluate(&pipeline, &x_test, &y_test)
            .unwrap_err();
        assert!(matches!(err, LearningError::ColumnNotFound(_)));
    }

    #[test]
    fn test_evaluate_empty_test_set_fails() {
        let pipeline = fitted_pipeline();
        let x_test = DataFrame::empty();
        let y_test = Series::new("price".into(), Vec::<f64>::new());

        let err = RegressionEvaluation
            .evaluate(&pipeline, &x_test, &y_test)
            .unwrap_err();
        assert!(matches!(err, LearningError::EmptyDataset));
    }
}

//! Model building.
//!
//! A [`ModelBuildingStrategy`] fits a two-stage [`ModelPipeline`] from a
//! training feature frame and target series; the [`ModelBuilder`]
//! context holds the currently selected strategy.

use polars::prelude::*;
use tracing::{debug, info};

use crate::data::series_vector;
use crate::error::{LearningError, Result};
use crate::pipeline::ModelPipeline;
use crate::regression::LinearRegression;
use crate::scaler::StandardScaler;

/// A pluggable policy for fitting a model pipeline.
///
/// Every strategy produces the same two-stage shape (fitted
/// preprocessing, then a fitted regressor) so evaluators can address the
/// sub-stages by role.
pub trait ModelBuildingStrategy: Send + Sync + std::fmt::Debug {
    fn build(&self, x_train: &DataFrame, y_train: &Series) -> Result<ModelPipeline>;
}

/// Standardize the features, then fit an ordinary least squares
/// regressor on the scaled matrix.
#[derive(Debug, Clone, Default)]
pub struct LinearRegressionStrategy;

impl ModelBuildingStrategy for LinearRegressionStrategy {
    fn build(&self, x_train: &DataFrame, y_train: &Series) -> Result<ModelPipeline> {
        if x_train.height() == 0 || x_train.width() == 0 {
            return Err(LearningError::EmptyDataset);
        }
        if y_train.len() != x_train.height() {
            return Err(LearningError::shape(
                format!("target of length {}", x_train.height()),
                format!("length {}", y_train.len()),
            ));
        }

        info!("Initializing linear regression model with scaling");
        let scaler = StandardScaler::fit(x_train)?;
        let scaled = scaler.transform(x_train)?;
        let target = series_vector(y_train)?;

        let regressor = LinearRegression::fit(&scaled, &target)?;
        info!("Model training completed");
        Ok(ModelPipeline::new(scaler, regressor))
    }
}

/// Context holding the currently selected model-building strategy.
pub struct ModelBuilder {
    strategy: Box<dyn ModelBuildingStrategy>,
}

static_assertions::assert_impl_all!(ModelBuilder: Send);

impl ModelBuilder {
    /// Create a builder with an initial strategy.
    pub fn new(strategy: Box<dyn ModelBuildingStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the held strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn ModelBuildingStrategy>) {
        debug!("Switching model building strategy");
        self.strategy = strategy;
    }

    /// Build and train a pipeline using the current strategy.
    pub fn build(&self, x_train: &DataFrame, y_train: &Series) -> Result<ModelPipeline> {
        debug!("Building and training the model using the selected strategy");
        self.strategy.build(x_train, y_train)
    }
}

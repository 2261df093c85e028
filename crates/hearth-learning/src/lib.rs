//! Model building and evaluation strategies.
//!
//! The learning half of the hearth house-price workflow: pluggable
//! strategies that fit and score regression pipelines over polars
//! frames, with the numeric work done on ndarray.
//!
//! - **Building**: [`ModelBuildingStrategy`] fits a two-stage
//!   [`ModelPipeline`] (standard scaler, then ordinary least squares);
//!   the [`ModelBuilder`] context selects the strategy.
//! - **Evaluation**: [`ModelEvaluationStrategy`] re-applies the fitted
//!   preprocessing to held-out features and reports
//!   `"Mean Squared Error"` and `"R2 Score"` in a name-to-value
//!   [`Metrics`] map.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hearth_learning::{selector, ModelBuilder, ModelEvaluator, metrics::MSE_KEY};
//!
//! let builder = ModelBuilder::new(selector::model_building_strategy("linear_regression")?);
//! let pipeline = builder.build(&split.x_train, &split.y_train)?;
//!
//! let evaluator = ModelEvaluator::new(selector::model_evaluation_strategy("regression")?);
//! let metrics = evaluator.evaluate(&pipeline, &split.x_test, &split.y_test)?;
//! let mse = metrics.get(MSE_KEY).copied();
//! ```

pub mod builder;
pub mod data;
pub mod error;
pub mod evaluator;
pub mod metrics;
pub mod pipeline;
pub mod regression;
pub mod scaler;
pub mod selector;

// Re-exports for convenient access
pub use builder::{LinearRegressionStrategy, ModelBuilder, ModelBuildingStrategy};
pub use error::{LearningError, Result as LearningResult};
pub use evaluator::{Metrics, ModelEvaluationStrategy, ModelEvaluator, RegressionEvaluation};
pub use pipeline::ModelPipeline;
pub use regression::LinearRegression;
pub use scaler::StandardScaler;

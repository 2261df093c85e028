//! Missing-value handling.
//!
//! A [`MissingValueStrategy`] turns a dataset with null cells into a
//! dataset without them (or with fewer of them); the
//! [`MissingValueHandler`] context holds the currently selected strategy
//! and delegates to it.

mod drop;
mod fill;

pub use drop::DropMissingValues;
pub use fill::{FillMissingValues, FillValue};

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// A pluggable policy for handling null cells in a dataset.
///
/// Implementations never mutate the input frame; they produce a new one.
pub trait MissingValueStrategy: Send + Sync {
    fn handle(&self, df: &DataFrame) -> Result<DataFrame>;
}

/// Context holding the currently selected missing-value strategy.
pub struct MissingValueHandler {
    strategy: Box<dyn MissingValueStrategy>,
}

static_assertions::assert_impl_all!(MissingValueHandler: Send);

impl MissingValueHandler {
    /// Create a handler with an initial strategy.
    pub fn new(strategy: Box<dyn MissingValueStrategy>) -> Self {
        Self { strategy }
    }

    /// Replace the held strategy.
    ///
    /// Has no effect on results already produced by the previous strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn MissingValueStrategy>) {
        debug!("Switching missing-value strategy");
        self.strategy = strategy;
    }

    /// Apply the current strategy to the dataset.
    pub fn handle(&self, df: &DataFrame) -> Result<DataFrame> {
        debug!("Applying missing-value strategy");
        self.strategy.handle(df)
    }
}

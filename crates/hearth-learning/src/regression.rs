//! Ordinary least squares linear regression.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LearningError, Result};

/// Solve the symmetric positive-definite system `Ax = b` via Cholesky
/// decomposition. `None` when the matrix is not positive definite.
fn cholesky_solve(a: &Array2<f64>, b: &Array1<f64>) -> Option<Array1<f64>> {
    let n = a.nrows();
    if n != a.ncols() || n != b.len() {
        return None;
    }

    // A = L * L^T
    let mut l = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[[i, k]] * l[[j, k]];
            }
            if i == j {
                let diag = a[[i, i]] - sum;
                if diag <= 0.0 {
                    return None;
                }
                l[[i, j]] = diag.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    // Forward substitution: L * y = b
    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        y[i] = (b[i] - sum) / l[[i, i]];
    }

    // Backward substitution: L^T * x = y
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += l[[j, i]] * x[j];
        }
        x[i] = (y[i] - sum) / l[[i, i]];
    }

    Some(x)
}

/// Gauss-Jordan solve with partial pivoting, the fallback for systems
/// Cholesky rejects.
fn gauss_jordan_solve(a: &Array2<f64>, b: &Array1<f64>) -> Option<Array1<f64>> {
    let n = a.nrows();
    if n != a.ncols() || n != b.len() {
        return None;
    }

    // Augmented matrix [A | b]
    let mut aug = Array2::zeros((n, n + 1));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = a[[i, j]];
        }
        aug[[i, n]] = b[i];
    }

    for col in 0..n {
        let mut max_row = col;
        for row in col + 1..n {
            if aug[[row, col]].abs() > aug[[max_row, col]].abs() {
                max_row = row;
            }
        }
        if max_row != col {
            for j in 0..=n {
                let tmp = aug[[col, j]];
                aug[[col, j]] = aug[[max_row, j]];
                aug[[max_row, j]] = tmp;
            }
        }

        if aug[[col, col]].abs() < 1e-10 {
            return None;
        }

        let pivot = aug[[col, col]];
        for j in 0..=n {
            aug[[col, j]] /= pivot;
        }
        for row in 0..n {
            if row != col {
                let factor = aug[[row, col]];
                for j in 0..=n {
                    aug[[row, j]] -= factor * aug[[col, j]];
                }
            }
        }
    }

    let mut x = Array1::zeros(n);
    for i in 0..n {
        x[i] = aug[[i, n]];
    }
    Some(x)
}

/// Least squares via normal equations: `(X^T X) w = X^T y`.
fn solve_least_squares(x: &Array2<f64>, y: &Array1<f64>) -> Option<Array1<f64>> {
    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);
    cholesky_solve(&xtx, &xty).or_else(|| gauss_jordan_solve(&xtx, &xty))
}

/// A fitted ordinary least squares model: `y = X w + b`.
///
/// Constructed through [`LinearRegression::fit`]; there is no unfitted
/// state to misuse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearRegression {
    /// Fit on a feature matrix and target vector.
    ///
    /// Data is centered so the intercept absorbs the means, then the
    /// normal equations are solved for the coefficient vector.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<LinearRegression> {
        let n_samples = x.nrows();
        let n_features = x.ncols();
        if n_samples == 0 || n_features == 0 {
            return Err(LearningError::EmptyDataset);
        }
        if n_samples != y.len() {
            return Err(LearningError::shape(
                format!("target of length {n_samples}"),
                format!("length {}", y.len()),
            ));
        }

        info!(n_samples, n_features, "Training linear regression model");

        let x_mean = x
            .mean_axis(Axis(0))
            .ok_or_else(|| LearningError::TrainingFailed("mean of empty matrix".to_string()))?;
        let y_mean = y.sum() / n_samples as f64;

        let x_centered = x - &x_mean.clone().insert_axis(Axis(0));
        let y_centered = y - y_mean;

        let weights = solve_least_squares(&x_centered, &y_centered).ok_or_else(|| {
            LearningError::TrainingFailed("normal equations could not be solved".to_string())
        })?;
        let intercept = y_mean - weights.dot(&x_mean);

        debug!(intercept, "Model training completed");
        Ok(LinearRegression {
            coefficients: weights.to_vec(),
            intercept,
        })
    }

    /// Predict targets for a feature matrix.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(LearningError::shape(
                format!("{} feature columns", self.coefficients.len()),
                format!("{} feature columns", x.ncols()),
            ));
        }
        let weights = Array1::from_vec(self.coefficients.clone());
        Ok(x.dot(&weights) + self.intercept)
    }

    /// Fitted coefficient per feature, in feature order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_exact_line() {
        // y = 2x + 1, no noise: coefficients recovered exactly.
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![3.0, 5.0, 7.0, 9.0];

        let model = LinearRegression::fit(&x, &y).unwrap();
        assert!((model.coefficients()[0] - 2.0).abs() < 1e-9);
        assert!((model.intercept() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_two_features() {
        // y = 3a - 2b + 5
        let x = array![
            [1.0, 1.0],
            [2.0, 1.0],
            [3.0, 2.0],
            [4.0, 3.0],
            [5.0, 5.0],
        ];
        let y = x.column(0).mapv(|a| 3.0 * a) - x.column(1).mapv(|b| 2.0 * b) + 5.0;

        let model = LinearRegression::fit(&x, &y).unwrap();
        assert!((model.coefficients()[0] - 3.0).abs() < 1e-9);
        assert!((model.coefficients()[1] + 2.0).abs() < 1e-9);
        assert!((model.intercept() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_shape_check() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0];
        let model = LinearRegression::fit(&x, &y).unwrap();

        let wrong = array![[1.0, 2.0]];
        let err = model.predict(&wrong).unwrap_err();
        assert!(matches!(err, LearningError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_fit_length_mismatch_fails() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];
        let err = LinearRegression::fit(&x, &y).unwrap_err();
        assert!(matches!(err, LearningError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_cholesky_solve_identity() {
        let a = array![[4.0, 0.0], [0.0, 9.0]];
        let b = array![8.0, 27.0];
        let x = cholesky_solve(&a, &b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_gauss_jordan_fallback() {
        // Indefinite but invertible: Cholesky refuses, Gauss-Jordan
        // handles it.
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let b = array![2.0, 3.0];
        assert!(cholesky_solve(&a, &b).is_none());
        let x = gauss_jordan_solve(&a, &b).unwrap();
        assert!((x[0] - 3.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_feature_surfaces_training_failure() {
        // A constant column centers to zero; the singular system falls
        // through both solvers and surfaces as a training failure rather
        // than a panic.
        let x = array![[1.0, 5.0], [2.0, 5.0], [3.0, 5.0]];
        let y = array![2.0, 4.0, 6.0];
        let result = LinearRegression::fit(&x, &y);
        assert!(matches!(result, Err(LearningError::TrainingFailed(_))));
    }
}

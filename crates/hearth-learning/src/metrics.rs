//! Regression metrics.

use ndarray::Array1;

/// Metric key for the mean squared error entry.
pub const MSE_KEY: &str = "Mean Squared Error";

/// Metric key for the coefficient-of-determination entry.
pub const R2_KEY: &str = "R2 Score";

/// Mean squared error between ground truth and predictions.
pub fn mean_squared_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    debug_assert_eq!(y_true.len(), y_pred.len());
    if y_true.is_empty() {
        return f64::NAN;
    }
    y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>()
        / y_true.len() as f64
}

/// Coefficient of determination `1 - ss_res / ss_tot`.
///
/// NaN when the ground truth has no variance; the score is undefined
/// there.
pub fn r2_score(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    debug_assert_eq!(y_true.len(), y_pred.len());
    if y_true.is_empty() {
        return f64::NAN;
    }
    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_tot: f64 = y_true.iter().map(|t| (t - y_mean).powi(2)).sum();
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mse_perfect_prediction() {
        let y = array![1.0, 2.0, 3.0];
        assert_eq!(mean_squared_error(&y, &y), 0.0);
    }

    #[test]
    fn test_mse_known_value() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![2.0, 4.0];
        // ((1)^2 + (2)^2) / 2 = 2.5
        assert_eq!(mean_squared_error(&y_true, &y_pred), 2.5);
    }

    #[test]
    fn test_r2_perfect_prediction() {
        let y = array![1.0, 2.0, 3.0];
        assert_eq!(r2_score(&y, &y), 1.0);
    }

    #[test]
    fn test_r2_mean_prediction_is_zero() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![2.0, 2.0, 2.0];
        assert!(r2_score(&y_true, &y_pred).abs() < 1e-12);
    }

    #[test]
    fn test_r2_constant_truth_is_undefined() {
        let y_true = array![2.0, 2.0, 2.0];
        let y_pred = array![1.0, 2.0, 3.0];
        assert!(r2_score(&y_true, &y_pred).is_nan());
    }
}

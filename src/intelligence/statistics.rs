// ABOUTME: Column statistics and z-score standardization over a full record set
// ABOUTME: Population mean and standard deviation with zero-variance columns mapped to zero
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// Mean and population standard deviation of one column
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (divides by n)
    pub std_dev: f64,
}

impl ColumnStats {
    /// Compute statistics for a column. An empty column yields zeros.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum::<f64>()
            / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// True when the column is constant up to rounding noise
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.std_dev <= 10.0 * f64::EPSILON * self.mean.abs().max(1.0)
    }

    /// Z-score of one value; 0 for a constant column
    #[must_use]
    pub fn z_score(&self, value: f64) -> f64 {
        if self.is_constant() {
            0.0
        } else {
            (value - self.mean) / self.std_dev
        }
    }
}

/// Rescale a column to zero mean and unit variance
#[must_use]
pub fn standardize(values: &[f64]) -> Vec<f64> {
    let stats = ColumnStats::from_values(values);
    values.iter().map(|value| stats.z_score(*value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardized_column_has_zero_mean_unit_variance() {
        let z = standardize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let stats = ColumnStats::from_values(&z);

        assert!(stats.mean.abs() < 1e-12);
        assert!((stats.std_dev - 1.0).abs() < 1e-12);
        // population std of the input is exactly 2
        assert!((z[0] - -1.5).abs() < 1e-12);
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        assert_eq!(standardize(&[0.1, 0.1, 0.1]), vec![0.0, 0.0, 0.0]);
        assert_eq!(standardize(&[1500.0; 4]), vec![0.0; 4]);
    }

    #[test]
    fn test_empty_column() {
        assert!(standardize(&[]).is_empty());
    }
}

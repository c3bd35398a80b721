//! Statistics Calculator Module
//! Descriptive statistics, quartiles and standardized moments over plain slices.

use serde::Serialize;
use statrs::statistics::Statistics;

/// Summary statistics for a single numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub q50: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            column: String::new(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            q50: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl Summary {
    /// Row labels in display order, paired with their values.
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.q50),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Stateless numeric routines shared by the analyzer and chart code.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// `std` is the sample standard deviation (`n - 1`), NaN below two values.
    pub fn compute_descriptive_stats(values: &[f64]) -> Summary {
        let n = values.len();
        if n == 0 {
            return Summary::default();
        }

        let sorted = Self::sorted(values);

        Summary {
            column: String::new(),
            count: n,
            mean: values.mean(),
            std: values.std_dev(),
            min: Statistics::min(values),
            q25: Self::percentile(&sorted, 25.0),
            q50: Self::percentile(&sorted, 50.0),
            q75: Self::percentile(&sorted, 75.0),
            max: Statistics::max(values),
        }
    }

    /// Copy and sort ascending; NaN compares equal.
    pub fn sorted(values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Central moments m2, m3, m4 (sums divided by n).
    fn central_moments(values: &[f64]) -> (f64, f64, f64) {
        let n = values.len() as f64;
        let mean = values.mean();
        let (s2, s3, s4) = values.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), x| {
            let d = x - mean;
            let d2 = d * d;
            (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
        });
        (s2 / n, s3 / n, s4 / n)
    }

    /// Adjusted Fisher-Pearson skewness `G1`.
    ///
    /// NaN below three values, 0 for a constant sample.
    pub fn skewness(values: &[f64]) -> f64 {
        let n = values.len();
        if n < 3 {
            return f64::NAN;
        }
        let (m2, m3, _) = Self::central_moments(values);
        if m2 == 0.0 {
            return 0.0;
        }
        let n = n as f64;
        let g1 = m3 / m2.powf(1.5);
        (n * (n - 1.0)).sqrt() / (n - 2.0) * g1
    }

    /// Bias-corrected excess kurtosis `G2` (normal distribution = 0).
    ///
    /// NaN below four values, 0 for a constant sample.
    pub fn kurtosis(values: &[f64]) -> f64 {
        let n = values.len();
        if n < 4 {
            return f64::NAN;
        }
        let (m2, _, m4) = Self::central_moments(values);
        if m2 == 0.0 {
            return 0.0;
        }
        let n = n as f64;
        let g2 = m4 / (m2 * m2) - 3.0;
        ((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0))
    }
}

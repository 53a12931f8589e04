use std::fmt;

use super::StatsError;
use super::descriptive::{mean, variance};

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Sums of squared deviations and cross-products shared by correlation and
/// regression.
struct Moments {
    sxx: f64,
    syy: f64,
    sxy: f64,
    mean_x: f64,
    mean_y: f64,
}

fn moments(xs: &[f64], ys: &[f64]) -> Result<Moments, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(StatsError::TooFewValues {
            required: 2,
            actual: xs.len(),
        });
    }
    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;
    let (sxx, syy, sxy) = xs.iter().zip(ys).fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    });
    Ok(Moments {
        sxx,
        syy,
        sxy,
        mean_x,
        mean_y,
    })
}

/// Pearson product-moment correlation. Returns `0.0` when either series is
/// constant.
pub fn pearson_r(xs: &[f64], ys: &[f64]) -> Result<f64, StatsError> {
    let m = moments(xs, ys)?;
    let denom = (m.sxx * m.syy).sqrt();
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok((m.sxy / denom).clamp(-1.0, 1.0))
}

/// Verbal reading of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    None,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl CorrelationStrength {
    pub fn classify(r: f64) -> Self {
        match r.abs() {
            a if a == 0.0 => Self::None,
            a if a < 0.2 => Self::VeryWeak,
            a if a < 0.4 => Self::Weak,
            a if a < 0.6 => Self::Moderate,
            a if a < 0.8 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "nula",
            Self::VeryWeak => "muy débil",
            Self::Weak => "débil",
            Self::Moderate => "moderada",
            Self::Strong => "fuerte",
            Self::VeryStrong => "muy fuerte",
        }
    }
}

/// e.g. "correlación positiva fuerte".
pub fn describe_correlation(r: f64) -> String {
    let strength = CorrelationStrength::classify(r);
    if strength == CorrelationStrength::None {
        return "sin correlación lineal".to_string();
    }
    let direction = if r > 0.0 { "positiva" } else { "negativa" };
    format!("correlación {direction} {}", strength.label())
}

// ---------------------------------------------------------------------------
// Simple linear regression
// ---------------------------------------------------------------------------

/// Least-squares line `y = intercept + slope · x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl Regression {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

impl fmt::Display for Regression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.slope < 0.0 { '-' } else { '+' };
        write!(
            f,
            "y = {:.3} {sign} {:.3}x  (R² = {:.3})",
            self.intercept,
            self.slope.abs(),
            self.r_squared
        )
    }
}

/// Ordinary least squares fit. Fails when every `x` is identical.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Result<Regression, StatsError> {
    let m = moments(xs, ys)?;
    if m.sxx == 0.0 {
        return Err(StatsError::ZeroDenominator("la variación de X"));
    }
    let slope = m.sxy / m.sxx;
    let intercept = m.mean_y - slope * m.mean_x;
    let r_squared = if m.syy == 0.0 {
        // horizontal data is fit exactly by the horizontal line
        1.0
    } else {
        (m.sxy * m.sxy) / (m.sxx * m.syy)
    };
    Ok(Regression {
        slope,
        intercept,
        r_squared,
    })
}

// ---------------------------------------------------------------------------
// Effect size
// ---------------------------------------------------------------------------

/// Pooled standard deviation of two samples, weighting each variance by
/// `n - 1`.
pub fn pooled_std_dev(a: &[f64], b: &[f64]) -> Result<f64, StatsError> {
    let va = variance(a)?;
    let vb = variance(b)?;
    let na = a.len() as f64;
    let nb = b.len() as f64;
    Ok((((na - 1.0) * va + (nb - 1.0) * vb) / (na + nb - 2.0)).sqrt())
}

/// Standardized mean difference.
pub fn cohens_d(mean1: f64, mean2: f64, pooled_std: f64) -> Result<f64, StatsError> {
    if pooled_std == 0.0 {
        return Err(StatsError::ZeroDenominator("la desviación estándar combinada"));
    }
    Ok((mean1 - mean2) / pooled_std)
}

pub fn cohens_d_from_samples(a: &[f64], b: &[f64]) -> Result<f64, StatsError> {
    cohens_d(mean(a)?, mean(b)?, pooled_std_dev(a, b)?)
}

/// Cohen's conventional thresholds (0.2 / 0.5 / 0.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSize {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectSize {
    pub fn classify(d: f64) -> Self {
        match d.abs() {
            a if a < 0.2 => Self::Negligible,
            a if a < 0.5 => Self::Small,
            a if a < 0.8 => Self::Medium,
            _ => Self::Large,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Negligible => "despreciable",
            Self::Small => "pequeño",
            Self::Medium => "mediano",
            Self::Large => "grande",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGES: [f64; 6] = [25.0, 32.0, 41.0, 50.0, 58.0, 67.0];
    const SYSTOLIC: [f64; 6] = [112.0, 118.0, 121.0, 130.0, 135.0, 144.0];

    #[test]
    fn test_pearson_self_is_one() {
        let r = pearson_r(&AGES, &AGES).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_symmetric() {
        let a = pearson_r(&AGES, &SYSTOLIC).unwrap();
        let b = pearson_r(&SYSTOLIC, &AGES).unwrap();
        assert!((a - b).abs() < 1e-12);
        assert!(a > 0.9);
    }

    #[test]
    fn test_pearson_constant_series_is_zero() {
        assert_eq!(pearson_r(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), Ok(0.0));
    }

    #[test]
    fn test_pearson_length_checks() {
        assert_eq!(
            pearson_r(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { left: 2, right: 1 })
        );
        assert!(matches!(
            pearson_r(&[1.0], &[1.0]),
            Err(StatsError::TooFewValues { .. })
        ));
    }

    #[test]
    fn test_regression_exact_line() {
        let fit = linear_regression(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!(fit.intercept.abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_regression_vertical_data_fails() {
        assert!(matches!(
            linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(StatsError::ZeroDenominator(_))
        ));
    }

    #[test]
    fn test_r_squared_matches_pearson() {
        let fit = linear_regression(&AGES, &SYSTOLIC).unwrap();
        let r = pearson_r(&AGES, &SYSTOLIC).unwrap();
        assert!((fit.r_squared - r * r).abs() < 1e-12);
    }

    #[test]
    fn test_cohens_d() {
        let a = [5.0, 6.0, 7.0];
        let b = [3.0, 4.0, 5.0];
        assert!((pooled_std_dev(&a, &b).unwrap() - 1.0).abs() < 1e-12);
        assert!((cohens_d_from_samples(&a, &b).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(EffectSize::classify(2.0), EffectSize::Large);
        assert!(cohens_d(1.0, 2.0, 0.0).is_err());
    }

    #[test]
    fn test_describe_correlation() {
        assert_eq!(describe_correlation(-0.85), "correlación negativa muy fuerte");
        assert_eq!(describe_correlation(0.0), "sin correlación lineal");
        assert_eq!(describe_correlation(0.5), "correlación positiva moderada");
    }
}

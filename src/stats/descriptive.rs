use std::fmt;

use super::StatsError;

// ---------------------------------------------------------------------------
// Central tendency
// ---------------------------------------------------------------------------

/// Arithmetic mean.
pub fn mean(xs: &[f64]) -> Result<f64, StatsError> {
    if xs.is_empty() {
        return Err(StatsError::Empty);
    }
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Middle value of the sorted data; the average of the two middle values
/// when the length is even.
pub fn median(xs: &[f64]) -> Result<f64, StatsError> {
    if xs.is_empty() {
        return Err(StatsError::Empty);
    }
    let sorted = sorted_copy(xs);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Result of a mode computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Every distinct value appears equally often.
    None,
    Single(f64),
    /// Several values tie for the highest frequency, in ascending order.
    Multiple(Vec<f64>),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::None => write!(f, "sin moda"),
            Mode::Single(v) => write!(f, "{}", format_value(*v)),
            Mode::Multiple(vs) => {
                let parts: Vec<String> = vs.iter().map(|v| format_value(*v)).collect();
                write!(f, "{} (multimodal)", parts.join(", "))
            }
        }
    }
}

/// Most frequent value(s).
///
/// When all distinct values share the same frequency there is no mode,
/// which also covers a single observation and all-distinct data.
pub fn mode(xs: &[f64]) -> Result<Mode, StatsError> {
    if xs.is_empty() {
        return Err(StatsError::Empty);
    }
    let counts = value_counts(xs);
    let max = counts.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let min = counts.iter().map(|&(_, c)| c).min().unwrap_or(0);
    if max == min {
        return Ok(Mode::None);
    }
    let mut modes: Vec<f64> = counts
        .into_iter()
        .filter(|&(_, c)| c == max)
        .map(|(v, _)| v)
        .collect();
    if modes.len() == 1 {
        Ok(Mode::Single(modes.remove(0)))
    } else {
        Ok(Mode::Multiple(modes))
    }
}

// ---------------------------------------------------------------------------
// Dispersion
// ---------------------------------------------------------------------------

/// Sample variance (`n - 1` denominator).
pub fn variance(xs: &[f64]) -> Result<f64, StatsError> {
    if xs.len() < 2 {
        return Err(StatsError::TooFewValues {
            required: 2,
            actual: xs.len(),
        });
    }
    let m = mean(xs)?;
    let ss: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    Ok(ss / (xs.len() - 1) as f64)
}

/// Sample standard deviation.
pub fn std_dev(xs: &[f64]) -> Result<f64, StatsError> {
    variance(xs).map(f64::sqrt)
}

/// `std_dev / mean × 100`.
pub fn coefficient_of_variation(xs: &[f64]) -> Result<f64, StatsError> {
    let m = mean(xs)?;
    let sd = std_dev(xs)?;
    if m == 0.0 {
        return Err(StatsError::ZeroDenominator("la media"));
    }
    Ok(sd / m.abs() * 100.0)
}

/// `max - min`.
pub fn range(xs: &[f64]) -> Result<f64, StatsError> {
    let (min, max) = min_max(xs)?;
    Ok(max - min)
}

fn min_max(xs: &[f64]) -> Result<(f64, f64), StatsError> {
    if xs.is_empty() {
        return Err(StatsError::Empty);
    }
    Ok(xs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        }))
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Everything the central-tendency and dispersion screens display at once.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// `None` with fewer than two observations.
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    /// `None` when the standard deviation is unavailable or the mean is 0.
    pub cv: Option<f64>,
}

impl DescriptiveStats {
    /// Computes the summary for a non-empty dataset.
    ///
    /// ```
    /// # use ova_bioestadistica::stats::descriptive::DescriptiveStats;
    /// let s = DescriptiveStats::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(s.mean, 5.0);
    /// assert_eq!(s.median, 4.5);
    /// ```
    pub fn new(xs: &[f64]) -> Result<Self, StatsError> {
        let (min, max) = min_max(xs)?;
        let variance = variance(xs).ok();
        Ok(Self {
            count: xs.len(),
            min,
            max,
            mean: mean(xs)?,
            median: median(xs)?,
            mode: mode(xs)?,
            variance,
            std_dev: variance.map(f64::sqrt),
            cv: coefficient_of_variation(xs).ok(),
        })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

// ---------------------------------------------------------------------------
// Frequency table
// ---------------------------------------------------------------------------

/// One class interval `[lower, upper)`; the last class also includes `upper`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyClass {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl FrequencyClass {
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn label(&self) -> String {
        format!("{}–{}", format_value(self.lower), format_value(self.upper))
    }
}

/// Splits `[min, max]` into `bins` equal-width classes and counts the values
/// in each. Constant data yields a single class of width 1 centered on it.
pub fn frequency_table(xs: &[f64], bins: usize) -> Result<Vec<FrequencyClass>, StatsError> {
    let (min, max) = min_max(xs)?;
    if bins == 0 {
        return Err(StatsError::TooFewValues {
            required: 1,
            actual: 0,
        });
    }
    if max == min {
        return Ok(vec![FrequencyClass {
            lower: min - 0.5,
            upper: max + 0.5,
            count: xs.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut classes: Vec<FrequencyClass> = (0..bins)
        .map(|i| FrequencyClass {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();
    for &x in xs {
        let idx = (((x - min) / width) as usize).min(bins - 1);
        classes[idx].count += 1;
    }
    Ok(classes)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sorted_copy(xs: &[f64]) -> Vec<f64> {
    let mut v = xs.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// Distinct values with their frequencies, ascending by value.
pub fn value_counts(xs: &[f64]) -> Vec<(f64, usize)> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for x in sorted_copy(xs) {
        match counts.last_mut() {
            Some((v, c)) if *v == x => *c += 1,
            _ => counts.push((x, 1)),
        }
    }
    counts
}

/// Integers without decimals, everything else with two.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e12 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_mean_empty_is_error() {
        assert_eq!(mean(&[]), Err(StatsError::Empty));
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[42.5]), Ok(42.5));
    }

    #[test]
    fn test_reference_sample() {
        assert!((mean(&SAMPLE).unwrap() - 5.0).abs() < 1e-12);
        assert!((variance(&SAMPLE).unwrap() - 32.0 / 7.0).abs() < 1e-12);
        assert!((std_dev(&SAMPLE).unwrap() - 2.138).abs() < 1e-3);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
        assert_eq!(median(&[]), Err(StatsError::Empty));
    }

    #[test]
    fn test_mode_variants() {
        assert_eq!(mode(&SAMPLE), Ok(Mode::Single(4.0)));
        assert_eq!(
            mode(&[1.0, 1.0, 2.0, 2.0, 3.0]),
            Ok(Mode::Multiple(vec![1.0, 2.0]))
        );
        assert_eq!(mode(&[1.0, 2.0, 3.0]), Ok(Mode::None));
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), Ok(Mode::None));
        assert_eq!(mode(&[7.0]), Ok(Mode::None));
    }

    #[test]
    fn test_variance_needs_two_values() {
        assert_eq!(
            variance(&[1.0]),
            Err(StatsError::TooFewValues {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_std_dev_non_negative() {
        for data in [&[1.0, 1.0][..], &[-5.0, 3.0, 10.0], &[0.1, 0.2, 0.3, 100.0]] {
            assert!(std_dev(data).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_cv_zero_mean() {
        assert!(matches!(
            coefficient_of_variation(&[-1.0, 1.0]),
            Err(StatsError::ZeroDenominator(_))
        ));
        let cv = coefficient_of_variation(&SAMPLE).unwrap();
        assert!((cv - 42.76).abs() < 0.01);
    }

    #[test]
    fn test_summary_single_value() {
        let s = DescriptiveStats::new(&[3.0]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.variance, None);
        assert_eq!(s.cv, None);
        assert_eq!(s.range(), 0.0);
    }

    #[test]
    fn test_frequency_table_counts_all_values() {
        let classes = frequency_table(&SAMPLE, 3).unwrap();
        assert_eq!(classes.len(), 3);
        assert_eq!(classes.iter().map(|c| c.count).sum::<usize>(), SAMPLE.len());
        // max value lands in the last class
        assert_eq!(classes[2].count, 2);
    }

    #[test]
    fn test_frequency_table_constant_data() {
        let classes = frequency_table(&[5.0, 5.0], 4).unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].count, 2);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(2.138), "2.14");
    }
}

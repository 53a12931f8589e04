//! Epidemiological frequency measures, all expressed as percentages.

use super::StatsError;

fn ratio_percent(
    numerator: f64,
    denominator: f64,
    numerator_name: &'static str,
    denominator_name: &'static str,
) -> Result<f64, StatsError> {
    if denominator == 0.0 {
        return Err(StatsError::ZeroDenominator(denominator_name));
    }
    if numerator > denominator {
        return Err(StatsError::NumeratorExceedsDenominator {
            numerator: numerator_name,
            denominator: denominator_name,
        });
    }
    Ok(numerator / denominator * 100.0)
}

/// `existing_cases / population × 100`.
pub fn prevalence(existing_cases: f64, population: f64) -> Result<f64, StatsError> {
    ratio_percent(existing_cases, population, "los casos", "la población")
}

/// `new_cases / population_at_risk × 100`.
pub fn incidence(new_cases: f64, population_at_risk: f64) -> Result<f64, StatsError> {
    ratio_percent(
        new_cases,
        population_at_risk,
        "los casos nuevos",
        "la población en riesgo",
    )
}

/// Case-fatality: `deaths / total_cases × 100`.
pub fn lethality(deaths: f64, total_cases: f64) -> Result<f64, StatsError> {
    ratio_percent(deaths, total_cases, "las defunciones", "los casos totales")
}

/// Re-expresses a percentage per an arbitrary population base, e.g. per
/// 1 000 or per 100 000 inhabitants.
pub fn per_base(percent: f64, base: f64) -> f64 {
    percent / 100.0 * base
}

// ---------------------------------------------------------------------------
// Epidemic curve
// ---------------------------------------------------------------------------

/// Daily new cases together with the derived cumulative series.
#[derive(Debug, Clone, PartialEq)]
pub struct EpidemicCurve {
    pub daily: Vec<f64>,
    pub cumulative: Vec<f64>,
}

impl EpidemicCurve {
    pub fn from_daily(daily: &[f64]) -> Result<Self, StatsError> {
        if daily.is_empty() {
            return Err(StatsError::Empty);
        }
        let cumulative = daily
            .iter()
            .scan(0.0, |acc, &d| {
                *acc += d;
                Some(*acc)
            })
            .collect();
        Ok(Self {
            daily: daily.to_vec(),
            cumulative,
        })
    }

    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// 1-based day with the most new cases; the earliest one on ties.
    pub fn peak_day(&self) -> usize {
        self.daily
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, &d)| {
                if d > best.1 { (i, d) } else { best }
            })
            .0
            + 1
    }

    pub fn peak_cases(&self) -> f64 {
        self.daily[self.peak_day() - 1]
    }

    /// Cumulative cases over the population at risk, as a percentage.
    pub fn attack_rate(&self, population: f64) -> Result<f64, StatsError> {
        incidence(self.total(), population)
    }

    /// Cumulative cases on a 1-based day, clamped to the last day.
    pub fn cumulative_at(&self, day: usize) -> f64 {
        let idx = day.clamp(1, self.cumulative.len()) - 1;
        self.cumulative[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevalence_reference_value() {
        let p = prevalence(2450.0, 1_028_736.0).unwrap();
        assert!((p - 0.238).abs() < 0.0005);
        assert_eq!(format!("{p:.3}"), "0.238");
    }

    #[test]
    fn test_incidence_and_lethality() {
        assert_eq!(incidence(50.0, 1000.0), Ok(5.0));
        assert_eq!(lethality(3.0, 60.0), Ok(5.0));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            prevalence(0.0, 0.0),
            Err(StatsError::ZeroDenominator("la población"))
        );
        assert!(lethality(1.0, 0.0).is_err());
    }

    #[test]
    fn test_numerator_exceeds_denominator() {
        assert!(matches!(
            lethality(10.0, 5.0),
            Err(StatsError::NumeratorExceedsDenominator { .. })
        ));
    }

    #[test]
    fn test_per_base() {
        assert!((per_base(0.238, 100_000.0) - 238.0).abs() < 1e-9);
    }

    #[test]
    fn test_epidemic_curve() {
        let curve = EpidemicCurve::from_daily(&[1.0, 3.0, 7.0, 7.0, 4.0, 2.0]).unwrap();
        assert_eq!(curve.cumulative, vec![1.0, 4.0, 11.0, 18.0, 22.0, 24.0]);
        assert_eq!(curve.total(), 24.0);
        assert_eq!(curve.peak_day(), 3);
        assert_eq!(curve.peak_cases(), 7.0);
        assert_eq!(curve.cumulative_at(99), 24.0);
        assert_eq!(curve.cumulative_at(0), 1.0);
        assert_eq!(curve.attack_rate(240.0), Ok(10.0));
    }

    #[test]
    fn test_epidemic_curve_empty() {
        assert_eq!(EpidemicCurve::from_daily(&[]), Err(StatsError::Empty));
    }
}

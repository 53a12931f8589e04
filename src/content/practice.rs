use crate::input::{InputError, parse_number};
use crate::stats::StatsError;
use crate::stats::{bivariate, descriptive, epi};

/// What the student must compute, with the data it is computed from.
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseKind {
    Mean(Vec<f64>),
    Median(Vec<f64>),
    Range(Vec<f64>),
    StdDev(Vec<f64>),
    CoefficientOfVariation(Vec<f64>),
    Pearson { xs: Vec<f64>, ys: Vec<f64> },
    Slope { xs: Vec<f64>, ys: Vec<f64> },
    CohensD { a: Vec<f64>, b: Vec<f64> },
    Prevalence { cases: f64, population: f64 },
    Incidence { new_cases: f64, at_risk: f64 },
    Lethality { deaths: f64, cases: f64 },
    PeakDay(Vec<f64>),
}

impl ExerciseKind {
    /// The reference answer.
    pub fn expected(&self) -> Result<f64, StatsError> {
        match self {
            ExerciseKind::Mean(xs) => descriptive::mean(xs),
            ExerciseKind::Median(xs) => descriptive::median(xs),
            ExerciseKind::Range(xs) => descriptive::range(xs),
            ExerciseKind::StdDev(xs) => descriptive::std_dev(xs),
            ExerciseKind::CoefficientOfVariation(xs) => descriptive::coefficient_of_variation(xs),
            ExerciseKind::Pearson { xs, ys } => bivariate::pearson_r(xs, ys),
            ExerciseKind::Slope { xs, ys } => bivariate::linear_regression(xs, ys).map(|r| r.slope),
            ExerciseKind::CohensD { a, b } => bivariate::cohens_d_from_samples(a, b),
            ExerciseKind::Prevalence { cases, population } => epi::prevalence(*cases, *population),
            ExerciseKind::Incidence { new_cases, at_risk } => epi::incidence(*new_cases, *at_risk),
            ExerciseKind::Lethality { deaths, cases } => epi::lethality(*deaths, *cases),
            ExerciseKind::PeakDay(daily) => {
                epi::EpidemicCurve::from_daily(daily).map(|c| c.peak_day() as f64)
            }
        }
    }
}

/// A free-answer numeric exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeExercise {
    pub prompt: String,
    pub kind: ExerciseKind,
    /// Largest accepted absolute difference from the reference answer.
    pub tolerance: f64,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PracticeFeedback {
    Correct { expected: f64 },
    Incorrect { given: f64, expected: f64 },
    InvalidInput(InputError),
}

impl PracticeFeedback {
    pub fn message(&self) -> String {
        match self {
            PracticeFeedback::Correct { expected } => {
                format!("✔ ¡Correcto! El valor es {expected:.3}.")
            }
            PracticeFeedback::Incorrect { given, expected } => format!(
                "✘ {given} no es correcto. El valor esperado es {expected:.3}; revise el procedimiento."
            ),
            PracticeFeedback::InvalidInput(e) => e.to_string(),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, PracticeFeedback::Correct { .. })
    }
}

impl PracticeExercise {
    pub fn new(prompt: &str, kind: ExerciseKind, tolerance: f64, hint: &'static str) -> Self {
        Self {
            prompt: prompt.to_string(),
            kind,
            tolerance,
            hint,
        }
    }

    /// Grades the text the student typed.
    pub fn check(&self, answer: &str) -> Result<PracticeFeedback, StatsError> {
        let expected = self.kind.expected()?;
        let given = match parse_number(answer) {
            Ok(v) => v,
            Err(e) => return Ok(PracticeFeedback::InvalidInput(e)),
        };
        if (given - expected).abs() <= self.tolerance {
            Ok(PracticeFeedback::Correct { expected })
        } else {
            Ok(PracticeFeedback::Incorrect { given, expected })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_exercise() -> PracticeExercise {
        PracticeExercise::new(
            "Calcule la media",
            ExerciseKind::Mean(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
            0.01,
            "Sume y divida por n",
        )
    }

    #[test]
    fn test_correct_answer_within_tolerance() {
        let fb = mean_exercise().check("5,001").unwrap();
        assert!(fb.is_correct());
    }

    #[test]
    fn test_incorrect_answer_reports_expected() {
        let fb = mean_exercise().check("4").unwrap();
        assert_eq!(
            fb,
            PracticeFeedback::Incorrect {
                given: 4.0,
                expected: 5.0
            }
        );
        assert!(fb.message().contains("5.000"));
    }

    #[test]
    fn test_invalid_input() {
        let fb = mean_exercise().check("cinco").unwrap();
        assert!(matches!(fb, PracticeFeedback::InvalidInput(_)));
        assert!(!fb.is_correct());
    }

    #[test]
    fn test_expected_values() {
        let prev = ExerciseKind::Prevalence {
            cases: 2450.0,
            population: 1_028_736.0,
        };
        assert!((prev.expected().unwrap() - 0.238).abs() < 0.001);
        let peak = ExerciseKind::PeakDay(vec![1.0, 5.0, 2.0]);
        assert_eq!(peak.expected(), Ok(2.0));
    }

    #[test]
    fn test_broken_exercise_surfaces_error() {
        let ex = PracticeExercise::new("?", ExerciseKind::Mean(vec![]), 0.1, "");
        assert_eq!(ex.check("1"), Err(StatsError::Empty));
    }
}

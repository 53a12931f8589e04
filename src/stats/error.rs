use thiserror::Error;

/// Why a statistic could not be computed for the given data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("no hay datos para calcular")]
    Empty,

    #[error("se necesitan al menos {required} valores (hay {actual})")]
    TooFewValues { required: usize, actual: usize },

    #[error("las series tienen distinta longitud ({left} y {right})")]
    LengthMismatch { left: usize, right: usize },

    /// The denominator of a ratio is zero.
    #[error("división por cero: {0} es 0")]
    ZeroDenominator(&'static str),

    #[error("{numerator} no puede ser mayor que {denominator}")]
    NumeratorExceedsDenominator {
        numerator: &'static str,
        denominator: &'static str,
    },
}

/// Numeric core: the formulas every learning object applies.
///
/// ```text
///   text field / literal dataset
///        │  input::parse_*
///        ▼
///   ┌─────────────┐   ┌────────────┐   ┌──────┐
///   │ descriptive  │   │ bivariate   │   │ epi   │
///   └─────────────┘   └────────────┘   └──────┘
///        │  Result<_, StatsError>
///        ▼
///   formatted result string in AppState
/// ```
///
/// All functions are pure and work on `f64` slices.

pub mod bivariate;
pub mod descriptive;
pub mod epi;
pub mod error;

pub use error::StatsError;

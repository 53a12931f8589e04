/// Content layer: what each learning object shows and how answers are graded.
///
/// ```text
///   catalog ──► Lesson { intro, theory, practice, quiz, resources }
///                  │                 │           │
///                  │           practice::check  quiz::QuizSession
///   loader (CSV / JSON) ──► replaces datasets / question banks
/// ```

pub mod catalog;
pub mod loader;
pub mod model;
pub mod practice;
pub mod quiz;

use thiserror::Error;

use super::model::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("el cuestionario no tiene preguntas")]
    NoQuestions,

    #[error("la pregunta {index} tiene menos de dos opciones")]
    TooFewOptions { index: usize },

    #[error("la pregunta {index} marca como correcta la opción {correct}, pero solo tiene {options}")]
    CorrectOutOfRange {
        index: usize,
        correct: usize,
        options: usize,
    },
}

/// Checks that a question bank can be presented and graded.
pub fn validate(questions: &[QuizQuestion]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::NoQuestions);
    }
    for (i, q) in questions.iter().enumerate() {
        let index = i + 1;
        if q.options.len() < 2 {
            return Err(QuizError::TooFewOptions { index });
        }
        if q.correct >= q.options.len() {
            return Err(QuizError::CorrectOutOfRange {
                index,
                correct: q.correct,
                options: q.options.len(),
            });
        }
    }
    Ok(())
}

/// Per-question verdict shown after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { correct_option: usize },
    Unanswered { correct_option: usize },
}

/// One student's pass through a question bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<usize>>,
    submitted: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        validate(&questions)?;
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            answers,
            submitted: false,
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    /// Records a choice. Ignored once submitted or when out of range.
    pub fn select(&mut self, index: usize, option: usize) {
        if self.submitted {
            return;
        }
        let Some(q) = self.questions.get(index) else {
            return;
        };
        if option < q.options.len() {
            self.answers[index] = Some(option);
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.questions.len()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Freezes the answers; unanswered questions count as wrong.
    pub fn submit(&mut self) {
        self.submitted = true;
    }

    pub fn reset(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
        self.submitted = false;
    }

    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| a.is_some_and(|choice| q.is_correct(choice)))
            .count()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Score as a fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.score() as f64 / self.total() as f64
    }

    pub fn verdict(&self, index: usize) -> Option<Verdict> {
        let q = self.questions.get(index)?;
        let correct_option = q.correct;
        Some(match self.answers[index] {
            Some(choice) if q.is_correct(choice) => Verdict::Correct,
            Some(_) => Verdict::Incorrect { correct_option },
            None => Verdict::Unanswered { correct_option },
        })
    }

    /// Verdict plus explanation, available only after submission.
    pub fn feedback(&self, index: usize) -> Option<String> {
        if !self.submitted {
            return None;
        }
        let q = self.questions.get(index)?;
        let text = match self.verdict(index)? {
            Verdict::Correct => format!("✔ Correcto. {}", q.explanation),
            Verdict::Incorrect { correct_option } => format!(
                "✘ Incorrecto. La respuesta es «{}». {}",
                q.options[correct_option], q.explanation
            ),
            Verdict::Unanswered { correct_option } => format!(
                "— Sin responder. La respuesta es «{}». {}",
                q.options[correct_option], q.explanation
            ),
        };
        Some(text)
    }

    /// Summary line compared against the pass threshold (a fraction).
    pub fn grade_message(&self, pass_threshold: f64) -> String {
        let pct = self.fraction() * 100.0;
        let verdict = if self.fraction() >= pass_threshold {
            "¡Aprobado! Buen dominio del tema."
        } else {
            "No aprobado. Repase la teoría y vuelva a intentarlo."
        };
        format!(
            "Puntaje: {}/{} ({pct:.0} %). {verdict}",
            self.score(),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion::new("¿2 + 2?", &["3", "4"], 1, "Suma básica."),
            QuizQuestion::new("¿Media de 1 y 3?", &["2", "4", "1"], 0, "(1+3)/2."),
            QuizQuestion::new("¿Mediana de 1, 2, 9?", &["4", "2"], 1, "Valor central."),
        ]
    }

    #[test]
    fn test_validate_rejects_bad_banks() {
        assert_eq!(validate(&[]), Err(QuizError::NoQuestions));
        let one_option = vec![QuizQuestion::new("?", &["a"], 0, "")];
        assert_eq!(
            validate(&one_option),
            Err(QuizError::TooFewOptions { index: 1 })
        );
        let out_of_range = vec![QuizQuestion::new("?", &["a", "b"], 2, "")];
        assert!(matches!(
            validate(&out_of_range),
            Err(QuizError::CorrectOutOfRange { .. })
        ));
    }

    #[test]
    fn test_scoring() {
        let mut quiz = QuizSession::new(bank()).unwrap();
        quiz.select(0, 1);
        quiz.select(1, 2);
        assert_eq!(quiz.answered_count(), 2);
        assert!(!quiz.is_complete());
        quiz.submit();
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.verdict(0), Some(Verdict::Correct));
        assert_eq!(quiz.verdict(1), Some(Verdict::Incorrect { correct_option: 0 }));
        assert_eq!(quiz.verdict(2), Some(Verdict::Unanswered { correct_option: 1 }));
    }

    #[test]
    fn test_answers_frozen_after_submit() {
        let mut quiz = QuizSession::new(bank()).unwrap();
        quiz.select(0, 0);
        quiz.submit();
        quiz.select(0, 1);
        assert_eq!(quiz.answer(0), Some(0));
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut quiz = QuizSession::new(bank()).unwrap();
        quiz.select(0, 5);
        quiz.select(9, 0);
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn test_feedback_only_after_submit() {
        let mut quiz = QuizSession::new(bank()).unwrap();
        quiz.select(1, 0);
        assert_eq!(quiz.feedback(1), None);
        quiz.submit();
        assert!(quiz.feedback(1).unwrap().starts_with("✔"));
        assert!(quiz.feedback(0).unwrap().contains("«4»"));
    }

    #[test]
    fn test_grade_message_and_reset() {
        let mut quiz = QuizSession::new(bank()).unwrap();
        for (i, c) in [1, 0, 1].into_iter().enumerate() {
            quiz.select(i, c);
        }
        quiz.submit();
        assert!(quiz.grade_message(0.6).contains("3/3 (100 %). ¡Aprobado!"));
        quiz.reset();
        assert!(!quiz.is_submitted());
        assert_eq!(quiz.score(), 0);
        assert!(quiz.grade_message(0.6).contains("No aprobado"));
    }
}

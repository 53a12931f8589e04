use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::chart::{ChartImage, slugify};
use crate::content::model::Lesson;
use crate::content::quiz::QuizSession;

// ---------------------------------------------------------------------------
// File writes ("downloads")
// ---------------------------------------------------------------------------

/// Write `body` to `<dir>/<stem>.txt`, creating `dir` when missing.
pub fn export_text(dir: &Path, stem: &str, body: &str) -> Result<PathBuf> {
    let path = target_path(dir, stem, "txt")?;
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {} ({} bytes)", path.display(), body.len());
    Ok(path)
}

/// Write a rendered chart to `<dir>/<stem>.png`.
pub fn export_png(dir: &Path, stem: &str, chart: &ChartImage) -> Result<PathBuf> {
    let path = target_path(dir, stem, "png")?;
    std::fs::write(&path, &chart.png).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {}", path.display());
    Ok(path)
}

/// Write `body` to a path the user picked.
pub fn write_text(path: &Path, body: &str) -> Result<()> {
    std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Saved {}", path.display());
    Ok(())
}

fn target_path(dir: &Path, stem: &str, ext: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating export directory {}", dir.display()))?;
    Ok(dir.join(format!("{}.{ext}", slugify(stem))))
}

// ---------------------------------------------------------------------------
// Report bodies
// ---------------------------------------------------------------------------

/// Printable study guide: objective, intro and theory with formulas.
pub fn lesson_summary(lesson: &Lesson) -> String {
    let mut out = String::new();
    write_lesson_summary(&mut out, lesson)
        .map(|()| out)
        .unwrap_or_default()
}

/// Answers with verdicts and explanations, plus the final grade.
pub fn quiz_report(lesson: &Lesson, quiz: &QuizSession, pass_threshold: f64) -> String {
    let mut out = String::new();
    write_quiz_report(&mut out, lesson, quiz, pass_threshold)
        .map(|()| out)
        .unwrap_or_default()
}

fn write_lesson_summary(out: &mut impl Write, lesson: &Lesson) -> fmt::Result {
    writeln!(out, "{}", lesson.topic.title().to_uppercase())?;
    writeln!(out, "Objetivo: {}\n", lesson.objective)?;
    for paragraph in &lesson.intro {
        writeln!(out, "{paragraph}")?;
    }
    writeln!(out)?;
    for block in &lesson.theory {
        writeln!(out, "■ {}", block.title)?;
        writeln!(out, "  {}", block.body)?;
        if let Some(formula) = block.formula {
            writeln!(out, "  Fórmula: {formula}")?;
        }
    }
    if !lesson.resources.is_empty() {
        writeln!(out, "\nRecursos:")?;
        for r in &lesson.resources {
            match r.url {
                Some(url) => writeln!(out, "  - {} <{url}>", r.title)?,
                None => writeln!(out, "  - {}", r.title)?,
            }
        }
    }
    Ok(())
}

fn write_quiz_report(
    out: &mut impl Write,
    lesson: &Lesson,
    quiz: &QuizSession,
    pass_threshold: f64,
) -> fmt::Result {
    writeln!(out, "Evaluación – {}\n", lesson.topic.title())?;
    for (i, q) in quiz.questions().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, q.question)?;
        let chosen = quiz
            .answer(i)
            .map(|a| q.options[a].as_str())
            .unwrap_or("(sin responder)");
        writeln!(out, "   Respuesta: {chosen}")?;
        if let Some(fb) = quiz.feedback(i) {
            writeln!(out, "   {fb}")?;
        }
    }
    writeln!(out, "\n{}", quiz.grade_message(pass_threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::render_bar_chart;
    use crate::content::catalog;
    use crate::content::model::Topic;

    #[test]
    fn test_export_text_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("descargas");
        let path = export_text(&target, "Resumen teoría", "hola").unwrap();
        assert_eq!(path, target.join("resumen_teor_a.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hola");
    }

    #[test]
    fn test_export_png() {
        let dir = tempfile::tempdir().unwrap();
        let chart = render_bar_chart("c", &[1.0], [0, 0, 255]).unwrap();
        let path = export_png(dir.path(), "curva", &chart).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), chart.png);
    }

    #[test]
    fn test_lesson_summary_lists_formulas() {
        let lesson = catalog::lesson(Topic::Epidemiology);
        let text = lesson_summary(&lesson);
        assert!(text.starts_with("PREVALENCIA"));
        assert!(text.contains("Fórmula: P = casos existentes / población × 100"));
        assert!(text.contains("\nRecursos:\n  - "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_quiz_report() {
        let lesson = catalog::lesson(Topic::CentralTendency);
        let mut quiz = QuizSession::new(lesson.quiz.clone()).unwrap();
        quiz.select(0, 1);
        quiz.submit();
        let text = quiz_report(&lesson, &quiz, 0.6);
        assert!(text.contains("Respuesta: La media"));
        assert!(text.contains("(sin responder)"));
        assert!(text.contains("Puntaje: 1/3"));
    }
}

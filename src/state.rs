use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::chart::{ChartImage, render_bar_chart};
use crate::color::topic_accent_rgb;
use crate::config::AppConfig;
use crate::content::catalog;
use crate::content::loader;
use crate::content::model::{Lesson, Section, Topic};
use crate::content::practice::PracticeFeedback;
use crate::content::quiz::QuizSession;
use crate::export;
use crate::simulator::Simulators;
use crate::timer::Countdown;

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

/// One-line notice shown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    pub topic: Topic,
    pub section: Section,

    /// Static content per topic; question banks may be replaced by imports.
    pub lessons: BTreeMap<Topic, Lesson>,

    pub quizzes: BTreeMap<Topic, QuizSession>,

    /// Free-text answers and their last grading, keyed by (topic, exercise).
    pub practice_answers: BTreeMap<(Topic, usize), String>,
    pub practice_feedback: BTreeMap<(Topic, usize), PracticeFeedback>,

    pub simulators: Simulators,

    /// Running evaluation timers, one per topic with an open evaluation.
    pub countdowns: BTreeMap<Topic, Countdown>,

    /// Last rendered static chart, for preview and PNG download.
    pub chart: Option<ChartImage>,

    pub status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let lessons: BTreeMap<Topic, Lesson> = Topic::ALL
            .iter()
            .map(|&t| (t, catalog::lesson(t)))
            .collect();
        let mut quizzes = BTreeMap::new();
        for (topic, lesson) in &lessons {
            match QuizSession::new(lesson.quiz.clone()) {
                Ok(session) => {
                    quizzes.insert(*topic, session);
                }
                Err(e) => log::error!("Built-in quiz for {topic} is invalid: {e}"),
            }
        }
        let mut simulators = Simulators::default();
        simulators.epidemiology.calculate_all();

        Self {
            config,
            topic: Topic::CentralTendency,
            section: Section::Intro,
            lessons,
            quizzes,
            practice_answers: BTreeMap::new(),
            practice_feedback: BTreeMap::new(),
            simulators,
            countdowns: BTreeMap::new(),
            chart: None,
            status: None,
        }
    }

    pub fn lesson(&self) -> Option<&Lesson> {
        self.lessons.get(&self.topic)
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.status = Some(Status::Error(message));
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(Status::Info(message.into()));
    }

    // -- Navigation --

    pub fn select_topic(&mut self, topic: Topic) {
        if self.topic != topic {
            log::debug!("Topic → {topic}");
            self.topic = topic;
            self.section = Section::Intro;
            self.chart = None;
        }
    }

    /// Switch section. Entering an unsubmitted evaluation starts its timer.
    pub fn select_section(&mut self, section: Section, now: Instant) {
        self.section = section;
        if section != Section::Evaluation {
            return;
        }
        let submitted = self
            .quizzes
            .get(&self.topic)
            .map_or(true, QuizSession::is_submitted);
        if !submitted && !self.countdowns.contains_key(&self.topic) {
            let limit = Duration::from_secs(self.config.evaluation_seconds);
            self.countdowns.insert(self.topic, Countdown::start(now, limit));
            log::info!("Evaluation of {} started ({limit:?})", self.topic);
        }
    }

    /// Called every frame: submits every quiz whose time ran out.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<Topic> = self
            .countdowns
            .iter()
            .filter(|(_, c)| c.is_expired(now))
            .map(|(t, _)| *t)
            .collect();
        for topic in expired {
            self.countdowns.remove(&topic);
            if let Some(quiz) = self.quizzes.get_mut(&topic) {
                quiz.submit();
            }
            log::info!("Evaluation of {topic} timed out");
            self.set_info(format!(
                "Tiempo agotado: la evaluación de «{}» se envió automáticamente.",
                topic.title()
            ));
        }
    }

    /// Timer of the current topic's evaluation, if running.
    pub fn current_countdown(&self) -> Option<Countdown> {
        self.countdowns.get(&self.topic).copied()
    }

    // -- Evaluation --

    pub fn select_answer(&mut self, question: usize, option: usize) {
        if let Some(quiz) = self.quizzes.get_mut(&self.topic) {
            quiz.select(question, option);
        }
    }

    pub fn submit_quiz(&mut self) {
        let threshold = self.config.pass_threshold;
        if let Some(quiz) = self.quizzes.get_mut(&self.topic) {
            quiz.submit();
            let message = quiz.grade_message(threshold);
            self.countdowns.remove(&self.topic);
            self.set_info(message);
        }
    }

    pub fn reset_quiz(&mut self, now: Instant) {
        if let Some(quiz) = self.quizzes.get_mut(&self.topic) {
            quiz.reset();
        }
        self.countdowns.remove(&self.topic);
        if self.section == Section::Evaluation {
            self.select_section(Section::Evaluation, now);
        }
    }

    // -- Practice --

    pub fn practice_answer_mut(&mut self, index: usize) -> &mut String {
        self.practice_answers.entry((self.topic, index)).or_default()
    }

    pub fn check_practice(&mut self, index: usize) {
        let Some(exercise) = self.lesson().and_then(|l| l.practice.get(index)) else {
            return;
        };
        let answer = self
            .practice_answers
            .get(&(self.topic, index))
            .cloned()
            .unwrap_or_default();
        match exercise.check(&answer) {
            Ok(feedback) => {
                self.practice_feedback.insert((self.topic, index), feedback);
            }
            Err(e) => self.set_error(format!("Ejercicio sin solución: {e}")),
        }
    }

    // -- Imports --

    pub fn import_dataset(&mut self, path: &Path) {
        match loader::load_dataset_csv(path) {
            Ok(data) => {
                let target = self.simulators.import(data);
                self.set_info(format!("Datos cargados en el simulador de {target}"));
            }
            Err(e) => self.set_error(format!("No se pudo importar {}: {e:#}", path.display())),
        }
    }

    /// Replace the current topic's question bank.
    pub fn import_quiz(&mut self, path: &Path) {
        let session = loader::load_quiz_json(path)
            .and_then(|qs| QuizSession::new(qs).map_err(anyhow::Error::from));
        match session {
            Ok(session) => {
                let n = session.total();
                if let Some(lesson) = self.lessons.get_mut(&self.topic) {
                    lesson.quiz = session.questions().to_vec();
                }
                self.quizzes.insert(self.topic, session);
                self.countdowns.remove(&self.topic);
                log::info!("Loaded {n} questions for {}", self.topic);
                self.set_info(format!("Banco de {n} preguntas cargado"));
            }
            Err(e) => self.set_error(format!("No se pudo importar {}: {e:#}", path.display())),
        }
    }

    // -- Downloads --

    pub fn download_summary(&mut self) {
        let Some(lesson) = self.lesson() else {
            return;
        };
        let body = export::lesson_summary(lesson);
        let stem = format!("resumen_{}", self.topic.slug());
        self.report_export(export::export_text(&self.config.export_dir, &stem, &body));
    }

    /// "Guardar como…": the lesson summary at a user-chosen path.
    pub fn save_summary_as(&mut self, path: &Path) {
        let Some(lesson) = self.lesson() else {
            return;
        };
        let body = export::lesson_summary(lesson);
        let result = export::write_text(path, &body).map(|()| path.to_path_buf());
        self.report_export(result);
    }

    pub fn download_quiz_report(&mut self) {
        let (Some(lesson), Some(quiz)) = (self.lesson(), self.quizzes.get(&self.topic)) else {
            return;
        };
        let body = export::quiz_report(lesson, quiz, self.config.pass_threshold);
        let stem = format!("evaluacion_{}", self.topic.slug());
        self.report_export(export::export_text(&self.config.export_dir, &stem, &body));
    }

    pub fn download_chart(&mut self) {
        if self.chart.is_none() {
            self.render_chart();
        }
        let Some(chart) = &self.chart else {
            return;
        };
        let stem = format!("grafico_{}", self.topic.slug());
        let result = export::export_png(&self.config.export_dir, &stem, chart);
        self.report_export(result);
    }

    fn report_export(&mut self, result: anyhow::Result<std::path::PathBuf>) {
        match result {
            Ok(path) => self.set_info(format!("Archivo guardado en {}", path.display())),
            Err(e) => self.set_error(format!("No se pudo guardar: {e:#}")),
        }
    }

    // -- Static chart --

    /// Bar values the topic's static chart shows.
    pub fn chart_values(&self) -> (String, Vec<f64>) {
        let sims = &self.simulators;
        match self.topic {
            Topic::CentralTendency => (
                format!("Histograma {}", sims.central.dataset_name),
                sims.central.classes.iter().map(|c| c.count as f64).collect(),
            ),
            Topic::Dispersion => (
                "Desviación estándar por grupo".to_string(),
                [&sims.dispersion.stats_a, &sims.dispersion.stats_b]
                    .iter()
                    .map(|s| s.as_ref().and_then(|s| s.std_dev).unwrap_or(0.0))
                    .collect(),
            ),
            Topic::Correlation => ("Valores de Y".to_string(), sims.correlation.ys.clone()),
            Topic::Epidemiology => (
                "Medidas epidemiológicas (%)".to_string(),
                [&sims.epidemiology.prevalence, &sims.epidemiology.incidence, &sims.epidemiology.lethality]
                    .iter()
                    .map(|c| c.result.as_ref().and_then(|r| r.as_ref().ok().copied()).unwrap_or(0.0))
                    .collect(),
            ),
            Topic::EpidemicCurve => (
                "Curva epidémica".to_string(),
                sims.curve.curve.as_ref().map(|c| c.daily.clone()).unwrap_or_default(),
            ),
            Topic::Dashboard => ("Tablero por región".to_string(), sims.dashboard.chart_values()),
        }
    }

    /// Rasterize the current topic's chart for embedding.
    pub fn render_chart(&mut self) {
        let (title, values) = self.chart_values();
        match render_bar_chart(&title, &values, topic_accent_rgb(self.topic)) {
            Ok(chart) => self.chart = Some(chart),
            Err(e) => {
                self.chart = None;
                self.set_error(format!("No se pudo generar el gráfico: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in(dir: &Path) -> AppState {
        AppState::new(AppConfig {
            export_dir: dir.to_path_buf(),
            evaluation_seconds: 60,
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_every_topic_has_quiz() {
        let state = AppState::default();
        assert_eq!(state.quizzes.len(), Topic::ALL.len());
        assert_eq!(state.lessons.len(), Topic::ALL.len());
    }

    #[test]
    fn test_topic_switch_resets_section() {
        let mut state = AppState::default();
        state.select_section(Section::Theory, Instant::now());
        state.select_topic(Topic::Dashboard);
        assert_eq!(state.section, Section::Intro);
    }

    #[test]
    fn test_countdown_auto_submits() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        let t0 = Instant::now();
        state.select_section(Section::Evaluation, t0);
        assert!(state.current_countdown().is_some());
        state.select_answer(0, 1);

        state.tick(t0 + Duration::from_secs(30));
        assert!(!state.quizzes[&Topic::CentralTendency].is_submitted());

        state.tick(t0 + Duration::from_secs(61));
        assert!(state.countdowns.is_empty());
        let quiz = &state.quizzes[&Topic::CentralTendency];
        assert!(quiz.is_submitted());
        assert_eq!(quiz.score(), 1);
        assert!(matches!(state.status, Some(Status::Info(_))));
    }

    #[test]
    fn test_reentering_evaluation_keeps_timer() {
        let mut state = AppState::default();
        let t0 = Instant::now();
        state.select_section(Section::Evaluation, t0);
        let first = state.current_countdown();
        state.select_section(Section::Theory, t0 + Duration::from_secs(5));
        state.select_section(Section::Evaluation, t0 + Duration::from_secs(10));
        assert_eq!(state.current_countdown(), first);
    }

    #[test]
    fn test_timers_of_other_topics_keep_running() {
        let mut state = AppState::default();
        let t0 = Instant::now();
        let limit = Duration::from_secs(state.config.evaluation_seconds);
        state.select_section(Section::Evaluation, t0);
        assert!(state.current_countdown().is_some());

        state.select_topic(Topic::Dashboard);
        state.select_section(Section::Evaluation, t0 + Duration::from_secs(20));
        assert_eq!(state.countdowns.len(), 2);

        state.tick(t0 + limit);
        assert!(state.quizzes[&Topic::CentralTendency].is_submitted());
        assert!(!state.quizzes[&Topic::Dashboard].is_submitted());
        assert!(!state.countdowns.contains_key(&Topic::CentralTendency));
        assert!(state.current_countdown().is_some());

        // Back on the first topic the submitted quiz gets no new timer.
        state.select_topic(Topic::CentralTendency);
        state.select_section(Section::Evaluation, t0 + limit);
        assert!(state.current_countdown().is_none());

        state.tick(t0 + limit + Duration::from_secs(20));
        assert!(state.quizzes[&Topic::Dashboard].is_submitted());
        assert!(state.countdowns.is_empty());
    }

    #[test]
    fn test_submit_stops_timer_and_reset_restarts() {
        let mut state = AppState::default();
        let t0 = Instant::now();
        state.select_section(Section::Evaluation, t0);
        state.submit_quiz();
        assert!(state.current_countdown().is_none());
        match &state.status {
            Some(Status::Info(msg)) => assert!(msg.starts_with("Puntaje: 0/3")),
            other => panic!("unexpected status {other:?}"),
        }
        state.reset_quiz(t0);
        assert!(state.current_countdown().is_some());
        assert!(!state.quizzes[&Topic::CentralTendency].is_submitted());
    }

    #[test]
    fn test_practice_check() {
        let mut state = AppState::default();
        *state.practice_answer_mut(0) = "42.5".to_string();
        state.check_practice(0);
        let fb = &state.practice_feedback[&(Topic::CentralTendency, 0)];
        assert!(fb.is_correct(), "{fb:?}");
        state.check_practice(99);
        assert_eq!(state.practice_feedback.len(), 1);
    }

    #[test]
    fn test_downloads_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.download_summary();
        state.download_quiz_report();
        state.download_chart();
        assert!(dir.path().join("resumen_tendencia_central.txt").exists());
        assert!(dir.path().join("evaluacion_tendencia_central.txt").exists());
        assert!(dir.path().join("grafico_tendencia_central.png").exists());
        assert!(matches!(state.status, Some(Status::Info(_))));
    }

    #[test]
    fn test_chart_for_every_topic() {
        let mut state = AppState::default();
        for topic in Topic::ALL {
            state.select_topic(topic);
            state.render_chart();
            assert!(state.chart.is_some(), "{topic}");
        }
    }

    #[test]
    fn test_import_quiz_replaces_bank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banco.json");
        std::fs::write(
            &path,
            r#"[{"question":"¿?","options":["a","b"],"correct":0,"explanation":"."}]"#,
        )
        .unwrap();
        let mut state = AppState::default();
        state.import_quiz(&path);
        assert_eq!(state.quizzes[&Topic::CentralTendency].total(), 1);
        assert_eq!(state.lesson().unwrap().quiz.len(), 1);

        state.import_quiz(&dir.path().join("missing.json"));
        assert!(matches!(state.status, Some(Status::Error(_))));
        assert_eq!(state.quizzes[&Topic::CentralTendency].total(), 1);
    }

    #[test]
    fn test_import_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pesos.csv");
        std::fs::write(&path, "peso\n60\n72\n68\n").unwrap();
        let mut state = AppState::default();
        state.import_dataset(&path);
        assert_eq!(state.simulators.central.values, vec![60.0, 72.0, 68.0]);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::practice::PracticeExercise;

// ---------------------------------------------------------------------------
// Topic – one learning object
// ---------------------------------------------------------------------------

/// Each topic is one learning object with its own six sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    CentralTendency,
    Dispersion,
    Correlation,
    Epidemiology,
    EpidemicCurve,
    Dashboard,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::CentralTendency,
        Topic::Dispersion,
        Topic::Correlation,
        Topic::Epidemiology,
        Topic::EpidemicCurve,
        Topic::Dashboard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Topic::CentralTendency => "Medidas de tendencia central",
            Topic::Dispersion => "Medidas de dispersión",
            Topic::Correlation => "Correlación y regresión",
            Topic::Epidemiology => "Prevalencia, incidencia y letalidad",
            Topic::EpidemicCurve => "Curva epidémica",
            Topic::Dashboard => "Tablero epidemiológico",
        }
    }

    /// File-name friendly identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Topic::CentralTendency => "tendencia_central",
            Topic::Dispersion => "dispersion",
            Topic::Correlation => "correlacion",
            Topic::Epidemiology => "medidas_epidemiologicas",
            Topic::EpidemicCurve => "curva_epidemica",
            Topic::Dashboard => "tablero",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ---------------------------------------------------------------------------
// Section – navigable page within a topic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Intro,
    Theory,
    Simulator,
    Practice,
    Evaluation,
    Resources,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Intro,
        Section::Theory,
        Section::Simulator,
        Section::Practice,
        Section::Evaluation,
        Section::Resources,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Intro => "Introducción",
            Section::Theory => "Teoría",
            Section::Simulator => "Simulador",
            Section::Practice => "Práctica",
            Section::Evaluation => "Evaluación",
            Section::Resources => "Recursos",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Intro => "🏠",
            Section::Theory => "📖",
            Section::Simulator => "🧪",
            Section::Practice => "✏",
            Section::Evaluation => "📝",
            Section::Resources => "🔗",
        }
    }
}

// ---------------------------------------------------------------------------
// Literal datasets
// ---------------------------------------------------------------------------

/// A small fixed series of observations used by one demo screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub unit: String,
    pub values: Vec<f64>,
}

impl Dataset {
    pub fn new(name: &str, unit: &str, values: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            values: values.to_vec(),
        }
    }
}

/// Two aligned series for correlation and regression.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedDataset {
    pub x_label: String,
    pub y_label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// One row of the dashboard table.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub region: &'static str,
    pub population: f64,
    /// Existing cases at the cut-off date.
    pub cases: f64,
    pub new_cases: f64,
    pub deaths: f64,
}

// ---------------------------------------------------------------------------
// Quiz questions
// ---------------------------------------------------------------------------

/// A multiple-choice question. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(question: &str, options: &[&str], correct: usize, explanation: &str) -> Self {
        Self {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
            explanation: explanation.to_string(),
        }
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

// ---------------------------------------------------------------------------
// Lesson – the static content of one topic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TheoryBlock {
    pub title: &'static str,
    pub body: &'static str,
    /// Formula shown in monospace, if any.
    pub formula: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub url: Option<&'static str>,
}

/// Everything a topic displays outside its simulator.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub topic: Topic,
    pub objective: &'static str,
    pub intro: Vec<&'static str>,
    pub theory: Vec<TheoryBlock>,
    pub practice: Vec<PracticeExercise>,
    pub quiz: Vec<QuizQuestion>,
    pub resources: Vec<Resource>,
}

use std::time::Instant;

use eframe::egui::{self, Frame, RichText, Ui};

use crate::color::{self, topic_accent};
use crate::content::model::Section;
use crate::state::AppState;
use crate::ui::simulator;

// ---------------------------------------------------------------------------
// Section dispatch
// ---------------------------------------------------------------------------

/// Render the selected section of the selected topic.
pub fn show(ui: &mut Ui, state: &mut AppState) {
    let accent = topic_accent(state.topic);
    ui.label(
        RichText::new(state.topic.title())
            .heading()
            .strong()
            .color(accent),
    );
    ui.label(RichText::new(state.section.label()).size(16.0));
    ui.separator();

    match state.section {
        Section::Intro => intro(ui, state),
        Section::Theory => theory(ui, state),
        Section::Simulator => simulator_section(ui, state),
        Section::Practice => practice(ui, state),
        Section::Evaluation => evaluation(ui, state),
        Section::Resources => resources(ui, state),
    }
}

fn next_button(ui: &mut Ui, state: &mut AppState, next: Section) {
    ui.add_space(8.0);
    if ui.button(format!("Continuar: {} →", next.label())).clicked() {
        state.select_section(next, Instant::now());
    }
}

// ---------------------------------------------------------------------------
// Intro / theory / resources – static content
// ---------------------------------------------------------------------------

fn intro(ui: &mut Ui, state: &mut AppState) {
    let Some(lesson) = state.lesson() else {
        return;
    };
    ui.label(RichText::new(format!("🎯 Objetivo: {}", lesson.objective)).strong());
    ui.add_space(6.0);
    for paragraph in &lesson.intro {
        ui.label(*paragraph);
        ui.add_space(4.0);
    }
    next_button(ui, state, Section::Theory);
}

fn theory(ui: &mut Ui, state: &mut AppState) {
    let Some(lesson) = state.lesson() else {
        return;
    };
    for block in &lesson.theory {
        egui::CollapsingHeader::new(RichText::new(block.title).strong())
            .default_open(true)
            .show(ui, |ui: &mut Ui| {
                ui.label(block.body);
                if let Some(formula) = block.formula {
                    Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                        ui.label(RichText::new(formula).monospace().size(15.0));
                    });
                }
            });
    }
    next_button(ui, state, Section::Simulator);
}

fn resources(ui: &mut Ui, state: &mut AppState) {
    let Some(lesson) = state.lesson() else {
        return;
    };
    for r in &lesson.resources {
        match r.url {
            Some(url) => {
                ui.hyperlink_to(RichText::new(r.title).strong(), url);
            }
            None => {
                ui.label(RichText::new(r.title).strong());
            }
        }
        ui.label(r.description);
        ui.add_space(6.0);
    }
    ui.separator();
    if ui.button("📥 Descargar resumen del tema").clicked() {
        state.download_summary();
    }
}

// ---------------------------------------------------------------------------
// Simulator – topic widgets plus the static chart preview
// ---------------------------------------------------------------------------

fn simulator_section(ui: &mut Ui, state: &mut AppState) {
    let accent = topic_accent(state.topic);
    simulator::show(ui, state.topic, &mut state.simulators, accent);

    ui.add_space(8.0);
    egui::CollapsingHeader::new("Gráfico estático (imagen)")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Generar imagen").clicked() {
                    if let Some(old) = &state.chart {
                        ui.ctx().forget_image(&old.uri);
                    }
                    state.render_chart();
                }
                if ui.button("📥 Descargar PNG").clicked() {
                    state.download_chart();
                }
            });
            if let Some(chart) = &state.chart {
                ui.add(
                    egui::Image::from_bytes(chart.uri.clone(), chart.png.clone())
                        .max_width(ui.available_width()),
                );
            }
        });
    next_button(ui, state, Section::Practice);
}

// ---------------------------------------------------------------------------
// Practice
// ---------------------------------------------------------------------------

fn practice(ui: &mut Ui, state: &mut AppState) {
    let Some(lesson) = state.lesson() else {
        return;
    };
    let exercises: Vec<(String, &'static str)> = lesson
        .practice
        .iter()
        .map(|ex| (ex.prompt.clone(), ex.hint))
        .collect();
    let topic = state.topic;

    for (i, (prompt, hint)) in exercises.iter().enumerate() {
        Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(format!("{}. {prompt}", i + 1)).strong());
            let mut check = false;
            ui.horizontal(|ui: &mut Ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(state.practice_answer_mut(i))
                        .hint_text("Su respuesta")
                        .desired_width(140.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter));
                check = ui.button("Verificar").clicked() || submitted;
            });
            if check {
                state.check_practice(i);
            }
            ui.collapsing("Pista", |ui: &mut Ui| {
                ui.label(*hint);
            });
            if let Some(fb) = state.practice_feedback.get(&(topic, i)) {
                let c = if fb.is_correct() {
                    color::CORRECT
                } else {
                    color::INCORRECT
                };
                ui.label(RichText::new(fb.message()).color(c));
            }
        });
        ui.add_space(6.0);
    }
    next_button(ui, state, Section::Evaluation);
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

fn evaluation(ui: &mut Ui, state: &mut AppState) {
    let topic = state.topic;
    let Some(quiz) = state.quizzes.get(&topic) else {
        ui.label("Este tema no tiene evaluación.");
        return;
    };
    let questions = quiz.questions().to_vec();
    let submitted = quiz.is_submitted();
    let answers: Vec<Option<usize>> = (0..questions.len()).map(|i| quiz.answer(i)).collect();
    let feedback: Vec<Option<String>> = (0..questions.len()).map(|i| quiz.feedback(i)).collect();
    let progress = format!("Respondidas: {}/{}", quiz.answered_count(), quiz.total());
    let grade = submitted.then(|| quiz.grade_message(state.config.pass_threshold));

    ui.horizontal(|ui: &mut Ui| {
        ui.label(progress);
        if let Some(countdown) = state.current_countdown() {
            ui.separator();
            ui.label(
                RichText::new(format!("⏱ {}", countdown.label(Instant::now())))
                    .strong()
                    .color(color::INCORRECT),
            );
        }
    });
    ui.add_space(4.0);

    for (i, q) in questions.iter().enumerate() {
        Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(format!("{}. {}", i + 1, q.question)).strong());
            ui.add_enabled_ui(!submitted, |ui: &mut Ui| {
                for (j, option) in q.options.iter().enumerate() {
                    if ui.radio(answers[i] == Some(j), option.as_str()).clicked() {
                        state.select_answer(i, j);
                    }
                }
            });
            if let Some(fb) = &feedback[i] {
                let c = if answers[i] == Some(q.correct) {
                    color::CORRECT
                } else {
                    color::INCORRECT
                };
                ui.label(RichText::new(fb).color(c));
            }
        });
        ui.add_space(4.0);
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(!submitted, egui::Button::new("Enviar respuestas"))
            .clicked()
        {
            state.submit_quiz();
        }
        if ui.button("Reiniciar").clicked() {
            state.reset_quiz(Instant::now());
        }
        if ui
            .add_enabled(submitted, egui::Button::new("📥 Descargar resultados"))
            .clicked()
        {
            state.download_quiz_report();
        }
    });
    if let Some(grade) = grade {
        ui.add_space(4.0);
        ui.label(RichText::new(grade).strong());
    }
}

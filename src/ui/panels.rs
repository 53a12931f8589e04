use std::time::Instant;

use eframe::egui::{self, RichText, Ui};

use crate::color::{self, topic_accent};
use crate::content::model::{Section, Topic};
use crate::state::{AppState, Status};

// ---------------------------------------------------------------------------
// Left side panel – topic and section navigation
// ---------------------------------------------------------------------------

/// Render the navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("OVA Bioestadística");
        ui.label(RichText::new("Modelo C(H)ANGE").italics().color(color::MUTED));
    });
    ui.add_space(4.0);
    ui.separator();

    ui.strong("Temas");
    for topic in Topic::ALL {
        let selected = state.topic == topic;
        let text = RichText::new(topic.title()).color(topic_accent(topic));
        if ui.selectable_label(selected, text).clicked() {
            state.select_topic(topic);
        }
    }

    ui.separator();
    ui.strong("Secciones");
    for section in Section::ALL {
        let label = format!("{}  {}", section.icon(), section.label());
        if ui
            .selectable_label(state.section == section, label)
            .clicked()
        {
            state.select_section(section, Instant::now());
        }
    }

    if !state.countdowns.is_empty() {
        ui.separator();
        let now = Instant::now();
        for (topic, countdown) in &state.countdowns {
            ui.label(
                RichText::new(format!("⏱ {} – {}", topic.title(), countdown.label(now)))
                    .color(color::INCORRECT),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Archivo", |ui: &mut Ui| {
            if ui.button("Importar datos (CSV)…").clicked() {
                import_dataset_dialog(state);
                ui.close_menu();
            }
            if ui.button("Importar preguntas (JSON)…").clicked() {
                import_quiz_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Descargar resumen del tema").clicked() {
                state.download_summary();
                ui.close_menu();
            }
            if ui.button("Guardar resumen como…").clicked() {
                save_summary_dialog(state);
                ui.close_menu();
            }
            if ui.button("Descargar gráfico (PNG)").clicked() {
                state.download_chart();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("{} › {}", state.topic.title(), state.section.label()));
        ui.separator();

        let mut dismiss = false;
        match &state.status {
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(color::INCORRECT));
                dismiss = ui.small_button("✖").clicked();
            }
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(msg).color(color::CORRECT));
                dismiss = ui.small_button("✖").clicked();
            }
            None => {}
        }
        if dismiss {
            state.status = None;
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn import_dataset_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Importar datos")
        .add_filter("CSV", &["csv"])
        .pick_file();
    if let Some(path) = file {
        state.import_dataset(&path);
    }
}

pub fn import_quiz_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Importar banco de preguntas")
        .add_filter("JSON", &["json"])
        .pick_file();
    if let Some(path) = file {
        state.import_quiz(&path);
    }
}

pub fn save_summary_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Guardar resumen")
        .set_file_name(format!("resumen_{}.txt", state.topic.slug()))
        .add_filter("Texto", &["txt"])
        .save_file();
    if let Some(path) = file {
        state.save_summary_as(&path);
    }
}

use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, sections};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OvaApp {
    pub state: AppState,
}

impl OvaApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let visuals = if config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for OvaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick(Instant::now());
        if !self.state.countdowns.is_empty() {
            // keep the countdown label moving without input events
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        // ---- Top panel: menu bar + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: topics and sections ----
        egui::SidePanel::left("nav_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: current section ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    sections::show(ui, &mut self.state);
                });
        });
    }
}

use eframe::egui::{self, Color32, Grid, RichText, Slider, TextEdit, Ui};

use crate::color;
use crate::content::model::Topic;
use crate::simulator::{
    CentralTendencySim, CorrelationSim, DashboardSim, DispersionSim, EpidemicCurveSim,
    EpidemiologySim, Measure, RateBase, Simulators, dispersion_lines,
};
use crate::ui::plot;

/// Render the interactive simulator of a topic.
pub fn show(ui: &mut Ui, topic: Topic, sims: &mut Simulators, accent: Color32) {
    match topic {
        Topic::CentralTendency => central(ui, &mut sims.central, accent),
        Topic::Dispersion => dispersion(ui, &mut sims.dispersion),
        Topic::Correlation => correlation(ui, &mut sims.correlation, accent),
        Topic::Epidemiology => epidemiology(ui, &mut sims.epidemiology),
        Topic::EpidemicCurve => curve(ui, &mut sims.curve, accent),
        Topic::Dashboard => dashboard(ui, &mut sims.dashboard),
    }
}

fn error_label(ui: &mut Ui, error: &Option<String>) {
    if let Some(e) = error {
        ui.label(RichText::new(format!("⚠ {e}")).color(color::INCORRECT));
    }
}

fn result_grid(ui: &mut Ui, id: &str, rows: &[(&str, String)]) {
    Grid::new(id).striped(true).num_columns(2).show(ui, |ui: &mut Ui| {
        for (label, value) in rows {
            ui.label(*label);
            ui.label(RichText::new(value).strong());
            ui.end_row();
        }
    });
}

fn base_selector(ui: &mut Ui, id: &str, base: &mut RateBase) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(base.label())
        .show_ui(ui, |ui: &mut Ui| {
            for b in RateBase::ALL {
                ui.selectable_value(base, b, b.label());
            }
        });
}

// ---------------------------------------------------------------------------
// Central tendency
// ---------------------------------------------------------------------------

fn central(ui: &mut Ui, sim: &mut CentralTendencySim, accent: Color32) {
    ui.label(format!("Datos: {}", sim.dataset_name));
    let mut changed = ui
        .add(
            TextEdit::multiline(&mut sim.input)
                .desired_rows(2)
                .desired_width(f32::INFINITY)
                .hint_text("Valores separados por comas"),
        )
        .changed();
    changed |= ui
        .add(Slider::new(&mut sim.bins, 3..=12).text("Clases del histograma"))
        .changed();
    if changed {
        sim.recompute();
    }

    error_label(ui, &sim.error);
    let Some(summary) = &sim.summary else {
        return;
    };
    result_grid(ui, "central_results", &sim.result_lines());
    if let Some(text) = sim.interpretation() {
        ui.label(RichText::new(text).italics());
    }
    plot::histogram(ui, &sim.classes, summary.mean, summary.median, accent);
}

// ---------------------------------------------------------------------------
// Dispersion
// ---------------------------------------------------------------------------

fn dispersion(ui: &mut Ui, sim: &mut DispersionSim) {
    let mut changed = false;
    ui.label(sim.label_a.as_str());
    changed |= ui
        .add(TextEdit::singleline(&mut sim.group_a).desired_width(f32::INFINITY))
        .changed();
    ui.label(sim.label_b.as_str());
    changed |= ui
        .add(TextEdit::singleline(&mut sim.group_b).desired_width(f32::INFINITY))
        .changed();
    changed |= ui
        .add(
            Slider::new(&mut sim.spread, 0.0..=3.0)
                .step_by(0.1)
                .text(format!("Dispersión de «{}»", sim.label_a)),
        )
        .changed();
    if changed {
        sim.recompute();
    }

    error_label(ui, &sim.error);
    ui.columns(2, |cols| {
        for (col, (label, stats)) in cols
            .iter_mut()
            .zip([(&sim.label_a, &sim.stats_a), (&sim.label_b, &sim.stats_b)])
        {
            col.strong(label.as_str());
            if let Some(stats) = stats {
                result_grid(col, &format!("disp_{label}"), &dispersion_lines(stats, &sim.unit));
            }
        }
    });
    if let Some(text) = sim.effect_label() {
        ui.label(RichText::new(text).strong());
    }
    plot::group_strips(
        ui,
        &[
            (sim.label_a.as_str(), sim.values_a.as_slice()),
            (sim.label_b.as_str(), sim.values_b.as_slice()),
        ],
    );
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

fn correlation(ui: &mut Ui, sim: &mut CorrelationSim, accent: Color32) {
    let mut changed = false;
    Grid::new("corr_inputs").num_columns(2).show(ui, |ui: &mut Ui| {
        ui.label(format!("X – {}", sim.x_label));
        changed |= ui
            .add(TextEdit::singleline(&mut sim.xs_text).desired_width(420.0))
            .changed();
        ui.end_row();
        ui.label(format!("Y – {}", sim.y_label));
        changed |= ui
            .add(TextEdit::singleline(&mut sim.ys_text).desired_width(420.0))
            .changed();
        ui.end_row();
        ui.label("Predecir Y para X =");
        changed |= ui
            .add(TextEdit::singleline(&mut sim.predict_text).desired_width(80.0))
            .changed();
        ui.end_row();
    });
    if changed {
        sim.recompute();
    }

    error_label(ui, &sim.error);
    let mut rows = Vec::new();
    if let Some(r) = sim.r {
        rows.push(("r de Pearson", format!("{r:.3}")));
    }
    if let Some(fit) = &sim.fit {
        rows.push(("Recta", fit.to_string()));
    }
    if let Some(y) = sim.prediction {
        rows.push(("Ŷ estimado", format!("{y:.2}")));
    }
    result_grid(ui, "corr_results", &rows);
    if let Some(text) = sim.interpretation() {
        ui.label(RichText::new(text).italics());
    }
    plot::scatter_with_fit(
        ui,
        &sim.xs,
        &sim.ys,
        sim.fit.as_ref(),
        (sim.x_label.as_str(), sim.y_label.as_str()),
        accent,
    );
}

// ---------------------------------------------------------------------------
// Epidemiological measures
// ---------------------------------------------------------------------------

fn epidemiology(ui: &mut Ui, sim: &mut EpidemiologySim) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Expresar prevalencia e incidencia en:");
        base_selector(ui, "epi_base", &mut sim.base);
    });
    ui.add_space(4.0);

    for measure in Measure::ALL {
        let (num_label, den_label) = measure.input_labels();
        let mut calculate = false;
        egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
            ui.strong(measure.label());
            let calc = sim.calculator_mut(measure);
            ui.horizontal(|ui: &mut Ui| {
                ui.label(num_label);
                ui.add(TextEdit::singleline(&mut calc.numerator).desired_width(100.0));
                ui.label(den_label);
                ui.add(TextEdit::singleline(&mut calc.denominator).desired_width(100.0));
                calculate = ui.button("Calcular").clicked();
            });
        });
        if calculate {
            sim.calculate(measure);
        }
        if let Some(text) = sim.result_text(measure) {
            let ok = matches!(sim.calculator(measure).result, Some(Ok(_)));
            let c = if ok { color::CORRECT } else { color::INCORRECT };
            ui.label(RichText::new(text).color(c));
        }
        ui.add_space(4.0);
    }

    let bars: Vec<(String, f64)> = Measure::ALL
        .iter()
        .filter_map(|&m| match &sim.calculator(m).result {
            Some(Ok(v)) => Some((m.label().to_string(), *v)),
            _ => None,
        })
        .collect();
    if !bars.is_empty() {
        plot::named_bars(ui, "epi_bars", &bars, "%");
    }
}

// ---------------------------------------------------------------------------
// Epidemic curve
// ---------------------------------------------------------------------------

fn curve(ui: &mut Ui, sim: &mut EpidemicCurveSim, accent: Color32) {
    ui.label("Casos nuevos por día");
    let mut changed = ui
        .add(
            TextEdit::multiline(&mut sim.daily_text)
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        )
        .changed();
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Población expuesta");
        changed |= ui
            .add(TextEdit::singleline(&mut sim.population_text).desired_width(100.0))
            .changed();
    });
    if changed {
        sim.recompute();
    }
    error_label(ui, &sim.error);

    let Some(days) = sim.curve.as_ref().map(|c| c.daily.len()) else {
        return;
    };
    ui.add(Slider::new(&mut sim.day, 1..=days).text("Día"));

    let Some(c) = &sim.curve else {
        return;
    };
    let mut rows = vec![
        ("Total de casos", format!("{}", c.total())),
        ("Día pico", format!("{} ({} casos)", c.peak_day(), c.peak_cases())),
    ];
    if let Some(rate) = sim.attack_rate {
        rows.push(("Tasa de ataque", format!("{rate:.2} %")));
    }
    result_grid(ui, "curve_results", &rows);
    if let Some(text) = sim.day_summary() {
        ui.label(text);
    }
    plot::epidemic_curve(ui, c, sim.day, accent);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

fn dashboard(ui: &mut Ui, sim: &mut DashboardSim) {
    ui.horizontal(|ui: &mut Ui| {
        for m in Measure::ALL {
            ui.radio_value(&mut sim.metric, m, m.label());
        }
        ui.separator();
        base_selector(ui, "dash_base", &mut sim.base);
    });

    Grid::new("dashboard_table")
        .striped(true)
        .num_columns(6)
        .show(ui, |ui: &mut Ui| {
            for header in ["Región", "Población", "Casos", "Prevalencia", "Incidencia", "Letalidad"] {
                ui.strong(header);
            }
            ui.end_row();
            for row in sim.rows.iter().chain(std::iter::once(&sim.totals)) {
                ui.label(row.region.as_str());
                ui.label(format!("{:.0}", row.population));
                ui.label(format!("{:.0}", row.cases));
                for m in Measure::ALL {
                    let text = sim.format_value(m, row.value(m));
                    if m == sim.metric {
                        ui.label(RichText::new(text).strong());
                    } else {
                        ui.label(text);
                    }
                }
                ui.end_row();
            }
        });

    if let Some(leader) = sim.leader() {
        ui.label(format!(
            "Mayor {}: {} ({})",
            sim.metric.label().to_lowercase(),
            leader.region,
            sim.format_value(sim.metric, leader.value(sim.metric))
        ));
    }

    let entries: Vec<(String, f64)> = sim
        .rows
        .iter()
        .map(|r| r.region.clone())
        .zip(sim.chart_values())
        .collect();
    let unit = if sim.metric == Measure::Lethality {
        RateBase::Percent.label()
    } else {
        sim.base.label()
    };
    plot::named_bars(ui, "dashboard_bars", &entries, unit);
}

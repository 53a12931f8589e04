use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points, VLine};

use crate::color::{MUTED, generate_palette};
use crate::stats::bivariate::Regression;
use crate::stats::descriptive::FrequencyClass;
use crate::stats::epi::EpidemicCurve;

const PLOT_HEIGHT: f32 = 260.0;

/// Common plot setup: legend, axis labels, no scroll-zoom inside the page.
fn base_plot(id: &str, x_label: &str, y_label: &str) -> Plot<'static> {
    Plot::new(id.to_string())
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x_label.to_string())
        .y_axis_label(y_label.to_string())
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
}

// ---------------------------------------------------------------------------
// Central tendency
// ---------------------------------------------------------------------------

/// Histogram of the frequency table with mean and median markers.
pub fn histogram(ui: &mut Ui, classes: &[FrequencyClass], mean: f64, median: f64, color: Color32) {
    let bars: Vec<Bar> = classes
        .iter()
        .map(|c| {
            Bar::new(c.midpoint(), c.count as f64)
                .width((c.upper - c.lower) * 0.95)
                .name(c.label())
        })
        .collect();

    base_plot("histogram", "Valor", "Frecuencia").show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).color(color).name("Frecuencia"));
        plot_ui.vline(VLine::new(mean).color(Color32::RED).name("Media"));
        plot_ui.vline(VLine::new(median).color(Color32::DARK_GREEN).name("Mediana"));
    });
}

// ---------------------------------------------------------------------------
// Dispersion
// ---------------------------------------------------------------------------

/// Each group as a horizontal strip of points with its mean marked.
pub fn group_strips(ui: &mut Ui, groups: &[(&str, &[f64])]) {
    let colors = generate_palette(groups.len());
    base_plot("group_strips", "Valor", "Grupo").show(ui, |plot_ui| {
        for (i, ((name, values), color)) in groups.iter().zip(colors).enumerate() {
            let y = i as f64 + 1.0;
            let points: PlotPoints = values.iter().map(|&v| [v, y]).collect();
            plot_ui.points(Points::new(points).radius(4.0).color(color).name(*name));
            if !values.is_empty() {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                let marker: PlotPoints = vec![[mean, y - 0.3], [mean, y + 0.3]].into();
                plot_ui.line(Line::new(marker).color(color).width(3.0));
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Scatter plot with the fitted line across the observed X range.
pub fn scatter_with_fit(
    ui: &mut Ui,
    xs: &[f64],
    ys: &[f64],
    fit: Option<&Regression>,
    labels: (&str, &str),
    color: Color32,
) {
    let points: PlotPoints = xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect();
    base_plot("scatter", labels.0, labels.1).show(ui, |plot_ui| {
        plot_ui.points(Points::new(points).radius(4.5).color(color).name("Observaciones"));
        if let Some(fit) = fit {
            let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if lo.is_finite() && hi.is_finite() {
                let line: PlotPoints = vec![[lo, fit.predict(lo)], [hi, fit.predict(hi)]].into();
                plot_ui.line(Line::new(line).color(MUTED).width(2.0).name(fit.to_string()));
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Categorical bars (epidemiological measures, dashboard)
// ---------------------------------------------------------------------------

/// One named bar per category, coloured from the palette.
pub fn named_bars(ui: &mut Ui, id: &str, entries: &[(String, f64)], y_label: &str) {
    let colors = generate_palette(entries.len());
    base_plot(id, "", y_label).show(ui, |plot_ui| {
        for (i, ((name, value), color)) in entries.iter().zip(colors).enumerate() {
            let bar = Bar::new(i as f64, *value).width(0.7).name(name);
            plot_ui.bar_chart(BarChart::new(vec![bar]).color(color).name(name));
        }
    });
}

// ---------------------------------------------------------------------------
// Epidemic curve
// ---------------------------------------------------------------------------

/// Daily bars, cumulative line and a marker on the selected day.
pub fn epidemic_curve(ui: &mut Ui, curve: &EpidemicCurve, day: usize, color: Color32) {
    let bars: Vec<Bar> = curve
        .daily
        .iter()
        .enumerate()
        .map(|(i, &d)| Bar::new(i as f64 + 1.0, d).width(0.8))
        .collect();
    let cumulative: PlotPoints = curve
        .cumulative
        .iter()
        .enumerate()
        .map(|(i, &c)| [i as f64 + 1.0, c])
        .collect();

    base_plot("epidemic_curve", "Día", "Casos").show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).color(color).name("Casos nuevos"));
        plot_ui.line(Line::new(cumulative).color(MUTED).width(2.0).name("Acumulados"));
        plot_ui.vline(VLine::new(day as f64).color(Color32::RED).name("Día seleccionado"));
    });
}

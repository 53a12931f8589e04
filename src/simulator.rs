use crate::content::catalog;
use crate::content::loader::ImportedData;
use crate::content::model::{Dataset, PairedDataset, RegionRecord};
use crate::input::{format_number_list, parse_count, parse_number, parse_number_list};
use crate::stats::bivariate::{self, Regression};
use crate::stats::descriptive::{DescriptiveStats, FrequencyClass, frequency_table};
use crate::stats::epi::{self, EpidemicCurve};

// ---------------------------------------------------------------------------
// Simulator state per topic
// ---------------------------------------------------------------------------
//
// Each simulator keeps the raw text of its widgets plus the last computed
// result. `recompute` is the event handler: parse → formula → store.

/// All simulators, one per topic.
#[derive(Debug, Clone)]
pub struct Simulators {
    pub central: CentralTendencySim,
    pub dispersion: DispersionSim,
    pub correlation: CorrelationSim,
    pub epidemiology: EpidemiologySim,
    pub curve: EpidemicCurveSim,
    pub dashboard: DashboardSim,
}

impl Default for Simulators {
    fn default() -> Self {
        Self {
            central: CentralTendencySim::new(catalog::patient_ages()),
            dispersion: DispersionSim::default(),
            correlation: CorrelationSim::new(catalog::age_vs_pressure()),
            epidemiology: EpidemiologySim::default(),
            curve: EpidemicCurveSim::default(),
            dashboard: DashboardSim::new(catalog::regions()),
        }
    }
}

impl Simulators {
    /// Route an imported file to the simulator that can use it.
    pub fn import(&mut self, data: ImportedData) -> &'static str {
        match data {
            ImportedData::Series(ds) => {
                self.central.load(ds);
                "Tendencia central"
            }
            ImportedData::Paired(pd) => {
                self.correlation.load(pd);
                "Correlación"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Central tendency
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CentralTendencySim {
    pub dataset_name: String,
    pub unit: String,
    pub input: String,
    /// Histogram class count.
    pub bins: usize,
    pub values: Vec<f64>,
    pub summary: Option<DescriptiveStats>,
    pub classes: Vec<FrequencyClass>,
    pub error: Option<String>,
}

impl CentralTendencySim {
    pub fn new(dataset: Dataset) -> Self {
        let mut sim = Self {
            dataset_name: String::new(),
            unit: String::new(),
            input: String::new(),
            bins: 5,
            values: Vec::new(),
            summary: None,
            classes: Vec::new(),
            error: None,
        };
        sim.load(dataset);
        sim
    }

    pub fn load(&mut self, dataset: Dataset) {
        self.input = format_number_list(&dataset.values);
        self.dataset_name = dataset.name;
        self.unit = dataset.unit;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        let result = parse_number_list(&self.input)
            .map_err(|e| e.to_string())
            .and_then(|values| {
                let summary = DescriptiveStats::new(&values).map_err(|e| e.to_string())?;
                let classes = frequency_table(&values, self.bins).map_err(|e| e.to_string())?;
                Ok((values, summary, classes))
            });
        match result {
            Ok((values, summary, classes)) => {
                self.values = values;
                self.summary = Some(summary);
                self.classes = classes;
                self.error = None;
            }
            Err(e) => {
                self.summary = None;
                self.classes.clear();
                self.error = Some(e);
            }
        }
    }

    /// (label, formatted value) rows for the results panel.
    pub fn result_lines(&self) -> Vec<(&'static str, String)> {
        let Some(s) = &self.summary else {
            return Vec::new();
        };
        vec![
            ("n", s.count.to_string()),
            ("Media", format!("{:.2} {}", s.mean, self.unit)),
            ("Mediana", format!("{:.2} {}", s.median, self.unit)),
            ("Moda", s.mode.to_string()),
        ]
    }

    /// Which measure best represents the data, by mean/median gap.
    pub fn interpretation(&self) -> Option<String> {
        let s = self.summary.as_ref()?;
        let gap = (s.mean - s.median).abs();
        let scale = s.std_dev.unwrap_or(0.0);
        Some(if scale > 0.0 && gap > 0.25 * scale {
            let side = if s.mean > s.median { "derecha" } else { "izquierda" };
            format!(
                "La media se aleja de la mediana: distribución asimétrica hacia la {side}. La mediana representa mejor el centro."
            )
        } else {
            "Media y mediana son cercanas: distribución aproximadamente simétrica.".to_string()
        })
    }
}

// ---------------------------------------------------------------------------
// Dispersion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DispersionSim {
    pub label_a: String,
    pub label_b: String,
    pub unit: String,
    pub group_a: String,
    pub group_b: String,
    /// Multiplies group A's deviations from its mean.
    pub spread: f64,
    pub values_a: Vec<f64>,
    pub values_b: Vec<f64>,
    pub stats_a: Option<DescriptiveStats>,
    pub stats_b: Option<DescriptiveStats>,
    pub cohens_d: Option<f64>,
    pub error: Option<String>,
}

impl Default for DispersionSim {
    fn default() -> Self {
        let (a, b) = catalog::systolic_groups();
        let mut sim = Self {
            label_a: a.name,
            label_b: b.name,
            unit: a.unit,
            group_a: format_number_list(&a.values),
            group_b: format_number_list(&b.values),
            spread: 1.0,
            values_a: Vec::new(),
            values_b: Vec::new(),
            stats_a: None,
            stats_b: None,
            cohens_d: None,
            error: None,
        };
        sim.recompute();
        sim
    }
}

impl DispersionSim {
    pub fn recompute(&mut self) {
        let parsed = parse_number_list(&self.group_a)
            .and_then(|a| parse_number_list(&self.group_b).map(|b| (a, b)));
        let (a, b) = match parsed {
            Ok(ab) => ab,
            Err(e) => {
                self.clear_results(e.to_string());
                return;
            }
        };

        let a = scale_deviations(&a, self.spread);
        let stats = DescriptiveStats::new(&a).and_then(|sa| Ok((sa, DescriptiveStats::new(&b)?)));
        match stats {
            Ok((sa, sb)) => {
                self.stats_a = Some(sa);
                self.stats_b = Some(sb);
                self.cohens_d = bivariate::cohens_d_from_samples(&a, &b).ok();
                self.error = if self.cohens_d.is_none() {
                    Some("La d de Cohen requiere al menos dos valores por grupo y variabilidad".into())
                } else {
                    None
                };
            }
            Err(e) => self.clear_results(e.to_string()),
        }
        self.values_a = a;
        self.values_b = b;
    }

    fn clear_results(&mut self, error: String) {
        self.values_a.clear();
        self.values_b.clear();
        self.stats_a = None;
        self.stats_b = None;
        self.cohens_d = None;
        self.error = Some(error);
    }

    pub fn effect_label(&self) -> Option<String> {
        let d = self.cohens_d?;
        Some(format!(
            "d = {d:.2}: efecto {}",
            bivariate::EffectSize::classify(d).label()
        ))
    }
}

/// `mean + (x - mean) · factor`: same center, scaled spread.
pub fn scale_deviations(values: &[f64], factor: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let m = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|x| m + (x - m) * factor).collect()
}

/// Rows for one group's dispersion table.
pub fn dispersion_lines(stats: &DescriptiveStats, unit: &str) -> Vec<(&'static str, String)> {
    let opt = |v: Option<f64>, suffix: &str| {
        v.map(|v| format!("{v:.2}{suffix}"))
            .unwrap_or_else(|| "no definido".to_string())
    };
    vec![
        ("Media", format!("{:.2} {unit}", stats.mean)),
        ("Rango", format!("{:.2} {unit}", stats.range())),
        ("Varianza", opt(stats.variance, "")),
        ("Desv. estándar", opt(stats.std_dev, &format!(" {unit}"))),
        ("CV", opt(stats.cv, " %")),
    ]
}

// ---------------------------------------------------------------------------
// Correlation and regression
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CorrelationSim {
    pub x_label: String,
    pub y_label: String,
    pub xs_text: String,
    pub ys_text: String,
    pub predict_text: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub r: Option<f64>,
    pub fit: Option<Regression>,
    pub prediction: Option<f64>,
    pub error: Option<String>,
}

impl CorrelationSim {
    pub fn new(data: PairedDataset) -> Self {
        let mut sim = Self {
            x_label: String::new(),
            y_label: String::new(),
            xs_text: String::new(),
            ys_text: String::new(),
            predict_text: "50".to_string(),
            xs: Vec::new(),
            ys: Vec::new(),
            r: None,
            fit: None,
            prediction: None,
            error: None,
        };
        sim.load(data);
        sim
    }

    pub fn load(&mut self, data: PairedDataset) {
        self.xs_text = format_number_list(&data.xs);
        self.ys_text = format_number_list(&data.ys);
        self.x_label = data.x_label;
        self.y_label = data.y_label;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.r = None;
        self.fit = None;
        self.prediction = None;
        self.error = None;

        let parsed = parse_number_list(&self.xs_text)
            .and_then(|xs| parse_number_list(&self.ys_text).map(|ys| (xs, ys)));
        let (xs, ys) = match parsed {
            Ok(v) => v,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        match bivariate::pearson_r(&xs, &ys) {
            Ok(r) => self.r = Some(r),
            Err(e) => self.error = Some(e.to_string()),
        }
        match bivariate::linear_regression(&xs, &ys) {
            Ok(fit) => {
                self.fit = Some(fit);
                if !self.predict_text.trim().is_empty() {
                    match parse_number(&self.predict_text) {
                        Ok(x) => self.prediction = Some(fit.predict(x)),
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
            }
            Err(e) => {
                self.error.get_or_insert(e.to_string());
            }
        }
        self.xs = xs;
        self.ys = ys;
    }

    pub fn interpretation(&self) -> Option<String> {
        let r = self.r?;
        Some(format!(
            "r = {r:.3}: {}",
            bivariate::describe_correlation(r)
        ))
    }
}

// ---------------------------------------------------------------------------
// Epidemiological measures
// ---------------------------------------------------------------------------

/// Population base for expressing a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateBase {
    #[default]
    Percent,
    PerThousand,
    PerHundredThousand,
}

impl RateBase {
    pub const ALL: [RateBase; 3] = [
        RateBase::Percent,
        RateBase::PerThousand,
        RateBase::PerHundredThousand,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            RateBase::Percent => 100.0,
            RateBase::PerThousand => 1_000.0,
            RateBase::PerHundredThousand => 100_000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RateBase::Percent => "%",
            RateBase::PerThousand => "por 1 000 hab.",
            RateBase::PerHundredThousand => "por 100 000 hab.",
        }
    }

    /// Express a percentage in this base.
    pub fn format(self, percent: f64) -> String {
        match self {
            RateBase::Percent => format!("{percent:.3} %"),
            other => format!("{:.1} {}", epi::per_base(percent, other.multiplier()), other.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Prevalence,
    Incidence,
    Lethality,
}

impl Measure {
    pub const ALL: [Measure; 3] = [Measure::Prevalence, Measure::Incidence, Measure::Lethality];

    pub fn label(self) -> &'static str {
        match self {
            Measure::Prevalence => "Prevalencia",
            Measure::Incidence => "Incidencia",
            Measure::Lethality => "Letalidad",
        }
    }

    /// Labels of the numerator and denominator inputs.
    pub fn input_labels(self) -> (&'static str, &'static str) {
        match self {
            Measure::Prevalence => ("Casos existentes", "Población total"),
            Measure::Incidence => ("Casos nuevos", "Población en riesgo"),
            Measure::Lethality => ("Defunciones", "Casos totales"),
        }
    }

    pub fn compute(self, numerator: f64, denominator: f64) -> Result<f64, crate::stats::StatsError> {
        match self {
            Measure::Prevalence => epi::prevalence(numerator, denominator),
            Measure::Incidence => epi::incidence(numerator, denominator),
            Measure::Lethality => epi::lethality(numerator, denominator),
        }
    }
}

/// Text fields and last result of one ratio calculator.
#[derive(Debug, Clone, Default)]
pub struct RatioCalculator {
    pub numerator: String,
    pub denominator: String,
    pub result: Option<Result<f64, String>>,
}

impl RatioCalculator {
    fn with_values(numerator: &str, denominator: &str) -> Self {
        Self {
            numerator: numerator.to_string(),
            denominator: denominator.to_string(),
            result: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EpidemiologySim {
    pub prevalence: RatioCalculator,
    pub incidence: RatioCalculator,
    pub lethality: RatioCalculator,
    pub base: RateBase,
}

impl Default for EpidemiologySim {
    fn default() -> Self {
        Self {
            prevalence: RatioCalculator::with_values("2450", "1028736"),
            incidence: RatioCalculator::with_values("120", "8000"),
            lethality: RatioCalculator::with_values("18", "240"),
            base: RateBase::Percent,
        }
    }
}

impl EpidemiologySim {
    pub fn calculator(&self, measure: Measure) -> &RatioCalculator {
        match measure {
            Measure::Prevalence => &self.prevalence,
            Measure::Incidence => &self.incidence,
            Measure::Lethality => &self.lethality,
        }
    }

    pub fn calculator_mut(&mut self, measure: Measure) -> &mut RatioCalculator {
        match measure {
            Measure::Prevalence => &mut self.prevalence,
            Measure::Incidence => &mut self.incidence,
            Measure::Lethality => &mut self.lethality,
        }
    }

    /// "Calcular" button handler.
    pub fn calculate(&mut self, measure: Measure) {
        let calc = self.calculator_mut(measure);
        let result = parse_count(&calc.numerator)
            .and_then(|n| parse_count(&calc.denominator).map(|d| (n, d)))
            .map_err(|e| e.to_string())
            .and_then(|(n, d)| measure.compute(n as f64, d as f64).map_err(|e| e.to_string()));
        calc.result = Some(result);
    }

    pub fn calculate_all(&mut self) {
        for m in Measure::ALL {
            self.calculate(m);
        }
    }

    /// Formatted outcome; lethality is always a percentage of cases.
    pub fn result_text(&self, measure: Measure) -> Option<String> {
        let text = match self.calculator(measure).result.as_ref()? {
            Ok(pct) => {
                let base = if measure == Measure::Lethality {
                    RateBase::Percent
                } else {
                    self.base
                };
                format!("{}: {}", measure.label(), base.format(*pct))
            }
            Err(e) => e.clone(),
        };
        Some(text)
    }
}

// ---------------------------------------------------------------------------
// Epidemic curve
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct EpidemicCurveSim {
    pub daily_text: String,
    pub population_text: String,
    /// 1-based day highlighted by the slider.
    pub day: usize,
    pub curve: Option<EpidemicCurve>,
    pub attack_rate: Option<f64>,
    pub error: Option<String>,
}

impl Default for EpidemicCurveSim {
    fn default() -> Self {
        let mut sim = Self {
            daily_text: format_number_list(&catalog::outbreak_daily_cases()),
            population_text: format!("{}", catalog::OUTBREAK_POPULATION),
            day: 1,
            curve: None,
            attack_rate: None,
            error: None,
        };
        sim.recompute();
        sim
    }
}

impl EpidemicCurveSim {
    pub fn recompute(&mut self) {
        self.attack_rate = None;
        let curve = parse_number_list(&self.daily_text)
            .map_err(|e| e.to_string())
            .and_then(|daily| {
                if daily.iter().any(|d| *d < 0.0) {
                    return Err("Los casos diarios no pueden ser negativos".to_string());
                }
                EpidemicCurve::from_daily(&daily).map_err(|e| e.to_string())
            });
        match curve {
            Ok(curve) => {
                self.day = self.day.clamp(1, curve.daily.len());
                self.error = None;
                if !self.population_text.trim().is_empty() {
                    match parse_count(&self.population_text) {
                        Ok(pop) => match curve.attack_rate(pop as f64) {
                            Ok(rate) => self.attack_rate = Some(rate),
                            Err(e) => self.error = Some(e.to_string()),
                        },
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
                self.curve = Some(curve);
            }
            Err(e) => {
                self.curve = None;
                self.error = Some(e);
            }
        }
    }

    pub fn day_summary(&self) -> Option<String> {
        let curve = self.curve.as_ref()?;
        let idx = self.day - 1;
        Some(format!(
            "Día {}: {} casos nuevos, {} acumulados ({:.0} % del total)",
            self.day,
            curve.daily[idx],
            curve.cumulative_at(self.day),
            if curve.total() > 0.0 {
                curve.cumulative_at(self.day) / curve.total() * 100.0
            } else {
                0.0
            }
        ))
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Ratios of one region, each `None` when undefined for its counts.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionIndicators {
    pub region: String,
    pub population: f64,
    pub cases: f64,
    pub deaths: f64,
    pub prevalence: Option<f64>,
    pub incidence: Option<f64>,
    pub lethality: Option<f64>,
}

impl RegionIndicators {
    /// Population at risk excludes cases that existed before the period.
    pub fn from_record(r: &RegionRecord) -> Self {
        let prior_cases = (r.cases - r.new_cases).max(0.0);
        Self {
            region: r.region.to_string(),
            population: r.population,
            cases: r.cases,
            deaths: r.deaths,
            prevalence: epi::prevalence(r.cases, r.population).ok(),
            incidence: epi::incidence(r.new_cases, r.population - prior_cases).ok(),
            lethality: epi::lethality(r.deaths, r.cases).ok(),
        }
    }

    pub fn value(&self, measure: Measure) -> Option<f64> {
        match measure {
            Measure::Prevalence => self.prevalence,
            Measure::Incidence => self.incidence,
            Measure::Lethality => self.lethality,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSim {
    pub metric: Measure,
    pub base: RateBase,
    pub rows: Vec<RegionIndicators>,
    pub totals: RegionIndicators,
}

impl DashboardSim {
    pub fn new(records: Vec<RegionRecord>) -> Self {
        let rows = records.iter().map(RegionIndicators::from_record).collect();
        let total = RegionRecord {
            region: "Total",
            population: records.iter().map(|r| r.population).sum(),
            cases: records.iter().map(|r| r.cases).sum(),
            new_cases: records.iter().map(|r| r.new_cases).sum(),
            deaths: records.iter().map(|r| r.deaths).sum(),
        };
        Self {
            metric: Measure::Prevalence,
            base: RateBase::PerHundredThousand,
            rows,
            totals: RegionIndicators::from_record(&total),
        }
    }

    /// Region with the highest value of the selected metric.
    pub fn leader(&self) -> Option<&RegionIndicators> {
        self.rows
            .iter()
            .filter(|r| r.value(self.metric).is_some())
            .max_by(|a, b| {
                a.value(self.metric)
                    .unwrap_or(0.0)
                    .total_cmp(&b.value(self.metric).unwrap_or(0.0))
            })
    }

    /// Metric values in the chosen base (lethality stays in %).
    pub fn chart_values(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|r| {
                let pct = r.value(self.metric).unwrap_or(0.0);
                if self.metric == Measure::Lethality {
                    pct
                } else {
                    epi::per_base(pct, self.base.multiplier())
                }
            })
            .collect()
    }

    pub fn format_value(&self, measure: Measure, value: Option<f64>) -> String {
        match value {
            None => "—".to_string(),
            Some(pct) if measure == Measure::Lethality => RateBase::Percent.format(pct),
            Some(pct) => self.base.format(pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_defaults_compute() {
        let sims = Simulators::default();
        let central = &sims.central;
        assert!(central.error.is_none());
        let s = central.summary.as_ref().unwrap();
        assert_eq!(s.count, 12);
        assert_eq!(s.mode, crate::stats::descriptive::Mode::Single(35.0));
        assert_eq!(central.classes.len(), 5);
        assert!(central.interpretation().is_some());
    }

    #[test]
    fn test_central_invalid_input() {
        let mut sim = CentralTendencySim::new(catalog::patient_ages());
        sim.input = "12, doce".to_string();
        sim.recompute();
        assert!(sim.summary.is_none());
        assert!(sim.error.unwrap().starts_with("Ingrese un número válido"));
    }

    #[test]
    fn test_spread_scales_std_dev_only() {
        let mut sim = DispersionSim::default();
        let sd = sim.stats_a.as_ref().unwrap().std_dev.unwrap();
        let mean = sim.stats_a.as_ref().unwrap().mean;
        sim.spread = 2.0;
        sim.recompute();
        let scaled = sim.stats_a.as_ref().unwrap();
        assert!((scaled.std_dev.unwrap() - 2.0 * sd).abs() < 1e-9);
        assert!((scaled.mean - mean).abs() < 1e-9);
        assert!(sim.effect_label().unwrap().contains("grande"));
    }

    #[test]
    fn test_dispersion_zero_spread_has_no_effect_size() {
        let mut sim = DispersionSim::default();
        sim.group_b = "130, 130".to_string();
        sim.spread = 0.0;
        sim.recompute();
        assert!(sim.cohens_d.is_none());
        assert!(sim.error.is_some());
    }

    #[test]
    fn test_dispersion_parse_error_clears_points() {
        let mut sim = DispersionSim::default();
        assert!(!sim.values_a.is_empty());
        sim.group_a = "120, ciento".to_string();
        sim.recompute();
        assert!(sim.values_a.is_empty());
        assert!(sim.values_b.is_empty());
        assert!(sim.stats_a.is_none());
        assert!(sim.error.as_deref().unwrap().starts_with("Ingrese un número válido"));
    }

    #[test]
    fn test_correlation_prediction() {
        let mut sim = CorrelationSim::new(PairedDataset {
            x_label: "x".into(),
            y_label: "y".into(),
            xs: vec![1.0, 2.0, 3.0],
            ys: vec![2.0, 4.0, 6.0],
        });
        sim.predict_text = "10".into();
        sim.recompute();
        assert!((sim.prediction.unwrap() - 20.0).abs() < 1e-9);
        assert!(sim.interpretation().unwrap().contains("positiva muy fuerte"));
    }

    #[test]
    fn test_correlation_length_mismatch() {
        let mut sim = CorrelationSim::new(catalog::age_vs_pressure());
        sim.ys_text = "1, 2".into();
        sim.recompute();
        assert!(sim.r.is_none());
        assert!(sim.error.is_some());
    }

    #[test]
    fn test_epidemiology_calculators() {
        let mut sim = EpidemiologySim::default();
        sim.calculate_all();
        assert_eq!(
            sim.result_text(Measure::Prevalence).unwrap(),
            "Prevalencia: 0.238 %"
        );
        sim.base = RateBase::PerHundredThousand;
        assert_eq!(
            sim.result_text(Measure::Prevalence).unwrap(),
            "Prevalencia: 238.2 por 100 000 hab."
        );
        assert_eq!(
            sim.result_text(Measure::Lethality).unwrap(),
            "Letalidad: 7.500 %"
        );
    }

    #[test]
    fn test_epidemiology_errors_are_messages() {
        let mut sim = EpidemiologySim::default();
        sim.prevalence.denominator = "0".into();
        sim.calculate(Measure::Prevalence);
        assert!(sim.result_text(Measure::Prevalence).unwrap().contains("división por cero"));
        sim.incidence.numerator = "muchos".into();
        sim.calculate(Measure::Incidence);
        assert!(sim.result_text(Measure::Incidence).unwrap().starts_with("Ingrese un conteo válido"));
        sim.lethality.numerator = "2.5".into();
        sim.calculate(Measure::Lethality);
        assert!(sim.result_text(Measure::Lethality).unwrap().starts_with("Ingrese un conteo válido"));
    }

    #[test]
    fn test_curve_defaults() {
        let sim = EpidemicCurveSim::default();
        let curve = sim.curve.as_ref().unwrap();
        assert_eq!(curve.peak_day(), 7);
        assert_eq!(curve.total(), 176.0);
        assert!((sim.attack_rate.unwrap() - 176.0 / 12.0).abs() < 1e-9);
        assert!(sim.day_summary().unwrap().starts_with("Día 1: 1 casos nuevos"));
    }

    #[test]
    fn test_curve_rejects_negative_days() {
        let mut sim = EpidemicCurveSim::default();
        sim.daily_text = "1, -2".into();
        sim.recompute();
        assert!(sim.curve.is_none());
    }

    #[test]
    fn test_dashboard_totals_and_leader() {
        let mut sim = DashboardSim::new(catalog::regions());
        assert_eq!(sim.rows.len(), 5);
        assert_eq!(sim.totals.cases, 14_185.0);
        sim.metric = Measure::Lethality;
        assert_eq!(sim.leader().unwrap().region, "Sur");
        assert_eq!(sim.chart_values().len(), 5);
    }

    #[test]
    fn test_import_routes_by_shape() {
        let mut sims = Simulators::default();
        let target = sims.import(ImportedData::Series(Dataset::new("d", "u", &[1.0, 2.0])));
        assert_eq!(target, "Tendencia central");
        assert_eq!(sims.central.values, vec![1.0, 2.0]);
    }
}

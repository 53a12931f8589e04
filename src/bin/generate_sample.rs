//! Writes small CSV/JSON files to try the import menu with.

use std::path::Path;

use anyhow::{Context, Result};
use ova_bioestadistica::content::model::QuizQuestion;

const OUT_DIR: &str = "sample_data";

/// Deterministic splitmix64 so every run writes the same files.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `(0, 1]`.
    fn unit(&mut self) -> f64 {
        ((self.next_u64() >> 11) as f64 + 1.0) / (1u64 << 53) as f64
    }

    /// Box–Muller normal deviate.
    fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        let (u1, u2) = (self.unit(), self.unit());
        mean + sd * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

fn write_blood_pressure(dir: &Path, rng: &mut SampleRng) -> Result<()> {
    let path = dir.join("presion_arterial.csv");
    let mut writer = csv::Writer::from_path(&path).context("creating presion_arterial.csv")?;
    writer.write_record(["paciente", "edad", "presion_sistolica"])?;
    for i in 1..=40 {
        let age = (18.0 + rng.unit() * 62.0).round();
        let systolic = (95.0 + 0.7 * age + rng.normal(0.0, 8.0)).round();
        writer.write_record([format!("P{i:03}"), age.to_string(), systolic.to_string()])?;
    }
    writer.flush()?;
    println!("wrote {}", path.display());
    Ok(())
}

fn write_weights(dir: &Path, rng: &mut SampleRng) -> Result<()> {
    let path = dir.join("peso_recien_nacidos.csv");
    let mut writer = csv::Writer::from_path(&path).context("creating peso_recien_nacidos.csv")?;
    writer.write_record(["registro", "peso_g"])?;
    for i in 1..=60 {
        let grams = rng.normal(3250.0, 420.0).round();
        writer.write_record([format!("RN{i:03}"), grams.to_string()])?;
    }
    writer.flush()?;
    println!("wrote {}", path.display());
    Ok(())
}

fn write_questions(dir: &Path) -> Result<()> {
    let questions = vec![
        QuizQuestion::new(
            "Si la media es 120 y la desviación estándar 12, el CV es:",
            &["10 %", "12 %", "1.2 %"],
            0,
            "CV = 12 / 120 × 100 = 10 %.",
        ),
        QuizQuestion::new(
            "¿Qué mide la incidencia?",
            &["Casos existentes", "Casos nuevos en un periodo", "Defunciones entre casos"],
            1,
            "La incidencia cuenta solo los casos que aparecen durante el periodo.",
        ),
    ];
    let path = dir.join("preguntas.json");
    let text = serde_json::to_string_pretty(&questions)?;
    std::fs::write(&path, text).context("writing preguntas.json")?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir = Path::new(OUT_DIR);
    std::fs::create_dir_all(dir).context("creating sample_data")?;
    let mut rng = SampleRng(2024);
    write_blood_pressure(dir, &mut rng)?;
    write_weights(dir, &mut rng)?;
    write_questions(dir)?;
    Ok(())
}

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{Dataset, PairedDataset, QuizQuestion};
use super::quiz::validate;
use crate::input::parse_number;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Data a student brought into a simulator.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportedData {
    /// One numeric column.
    Series(Dataset),
    /// The first two numeric columns, as X and Y.
    Paired(PairedDataset),
}

/// Load a dataset from a CSV file with a header row.
///
/// Columns whose every non-empty cell is a number are kept; text columns
/// (ids, names, dates) are skipped. Decimal commas are accepted.
pub fn load_dataset_csv(path: &Path) -> Result<ImportedData> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("datos importados");
    read_dataset_csv(file, name)
}

/// Load a question bank from JSON.
///
/// Expected schema: `[{ "question": "...", "options": ["...", ...],
/// "correct": 0, "explanation": "..." }, ...]`
pub fn load_quiz_json(path: &Path) -> Result<Vec<QuizQuestion>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading JSON {}", path.display()))?;
    parse_quiz_json(&text)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

pub fn read_dataset_csv<R: Read>(source: R, name: &str) -> Result<ImportedData> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // Per column: one cell per data row (None when empty), or None for the
    // whole column once a non-numeric cell shows up.
    let mut columns: Vec<Option<Vec<Option<f64>>>> = vec![Some(Vec::new()); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        for (col_idx, column) in columns.iter_mut().enumerate() {
            let cell = record.get(col_idx).unwrap_or("");
            let Some(cells) = column.as_mut() else {
                continue;
            };
            if cell.is_empty() {
                cells.push(None);
                continue;
            }
            match parse_number(cell) {
                Ok(v) => cells.push(Some(v)),
                Err(_) => *column = None,
            }
        }
    }

    let numeric: Vec<(String, Vec<Option<f64>>)> = headers
        .into_iter()
        .zip(columns)
        .filter_map(|(h, c)| {
            c.filter(|cells| cells.iter().any(Option::is_some))
                .map(|c| (h, c))
        })
        .collect();

    match numeric.as_slice() {
        [] => bail!("the CSV has no numeric column"),
        [(header, cells)] => {
            let values: Vec<f64> = cells.iter().flatten().copied().collect();
            log::info!("Imported {} values from column '{header}'", values.len());
            Ok(ImportedData::Series(Dataset {
                name: format!("{name} ({header})"),
                unit: String::new(),
                values,
            }))
        }
        [(x_label, x_cells), (y_label, y_cells), ..] => {
            let (xs, ys) = align_pairs(x_cells, y_cells)
                .with_context(|| format!("pairing columns '{x_label}' and '{y_label}'"))?;
            log::info!("Imported {} pairs ({x_label}, {y_label})", xs.len());
            Ok(ImportedData::Paired(PairedDataset {
                x_label: x_label.clone(),
                y_label: y_label.clone(),
                xs,
                ys,
            }))
        }
    }
}

/// Rows with both cells become a pair, rows with neither are skipped and a
/// row with only one filled cell is an error.
fn align_pairs(
    x_cells: &[Option<f64>],
    y_cells: &[Option<f64>],
) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (row, (x, y)) in x_cells.iter().zip(y_cells).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => {
                xs.push(*x);
                ys.push(*y);
            }
            (None, None) => {}
            _ => bail!("data row {} has only one of the two values", row + 1),
        }
    }
    Ok((xs, ys))
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub fn parse_quiz_json(text: &str) -> Result<Vec<QuizQuestion>> {
    let questions: Vec<QuizQuestion> =
        serde_json::from_str(text).context("parsing question bank JSON")?;
    validate(&questions).context("invalid question bank")?;
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_numeric_column() {
        let csv = "id,edad\nA,23\nB,35\nC,\nD,41,5\n";
        let data = read_dataset_csv(csv.as_bytes(), "consulta").unwrap();
        match data {
            ImportedData::Series(ds) => {
                assert_eq!(ds.values, vec![23.0, 35.0, 41.0]);
                assert_eq!(ds.name, "consulta (edad)");
            }
            other => panic!("expected series, got {other:?}"),
        }
    }

    #[test]
    fn test_paired_columns_with_decimal_comma() {
        let csv = "edad,presion\n25,\"112,5\"\n32,118\n";
        let data = read_dataset_csv(csv.as_bytes(), "x").unwrap();
        assert_eq!(
            data,
            ImportedData::Paired(PairedDataset {
                x_label: "edad".into(),
                y_label: "presion".into(),
                xs: vec![25.0, 32.0],
                ys: vec![112.5, 118.0],
            })
        );
    }

    #[test]
    fn test_no_numeric_column() {
        let csv = "nombre\nAna\nLuis\n";
        assert!(read_dataset_csv(csv.as_bytes(), "x").is_err());
    }

    #[test]
    fn test_mismatched_paired_columns() {
        let csv = "x,y\n1,2\n3,\n";
        assert!(read_dataset_csv(csv.as_bytes(), "x").is_err());
    }

    #[test]
    fn test_half_filled_rows_are_not_paired_across() {
        // Each column has two values, but never in the same row.
        let csv = "x,y\n1,\n,5\n3,6\n";
        let err = read_dataset_csv(csv.as_bytes(), "x").unwrap_err();
        assert!(format!("{err:#}").contains("data row 1"));
    }

    #[test]
    fn test_blank_paired_rows_are_skipped() {
        let csv = "id,x,y\nA,1,2\nB,,\nC,3,6\n";
        match read_dataset_csv(csv.as_bytes(), "x").unwrap() {
            ImportedData::Paired(pd) => {
                assert_eq!(pd.xs, vec![1.0, 3.0]);
                assert_eq!(pd.ys, vec![2.0, 6.0]);
            }
            other => panic!("expected pairs, got {other:?}"),
        }
    }

    #[test]
    fn test_quiz_json() {
        let json = r#"[{"question":"¿?","options":["a","b"],"correct":1,"explanation":"porque"}]"#;
        let qs = parse_quiz_json(json).unwrap();
        assert_eq!(qs.len(), 1);
        assert!(qs[0].is_correct(1));
    }

    #[test]
    fn test_quiz_json_rejects_invalid_bank() {
        assert!(parse_quiz_json("[]").is_err());
        let bad = r#"[{"question":"¿?","options":["a","b"],"correct":3,"explanation":""}]"#;
        assert!(parse_quiz_json(bad).is_err());
        assert!(parse_quiz_json("{").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casos.csv");
        std::fs::write(&path, "dia,casos\n1,3\n2,5\n").unwrap();
        assert!(matches!(
            load_dataset_csv(&path).unwrap(),
            ImportedData::Paired(_)
        ));
    }
}

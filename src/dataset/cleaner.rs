//! Raw dataset cleaning

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use super::DataTable;
use crate::errors::Result;

/// Cell texts treated as missing values
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[must_use]
pub fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

/// Shapes before and after cleaning, as (rows, columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub raw_shape: (usize, usize),
    pub clean_shape: (usize, usize),
}

impl CleanReport {
    #[must_use]
    pub const fn rows_removed(&self) -> usize {
        self.raw_shape.0 - self.clean_shape.0
    }
}

/// Drop duplicate rows, trim every cell, then drop rows with a missing cell
///
/// Missing values are detected on the raw cell text, so duplicate detection
/// treats every NA marker as the same value. First occurrences are kept and
/// row order is preserved.
#[must_use]
pub fn clean_table(table: &DataTable) -> DataTable {
    let mut seen: HashSet<Vec<Option<&str>>> = HashSet::new();
    let mut rows = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        let key: Vec<Option<&str>> = row
            .iter()
            .map(|cell| (!is_missing(cell)).then_some(cell.as_str()))
            .collect();

        let has_missing = key.iter().any(Option::is_none);
        if !seen.insert(key) || has_missing {
            continue;
        }

        rows.push(row.iter().map(|cell| cell.trim().to_string()).collect());
    }

    DataTable {
        headers: table.headers.clone(),
        rows,
    }
}

/// Read the raw CSV, clean it and write the result
pub fn clean_dataset(input: &Path, output: &Path) -> Result<CleanReport> {
    super::ensure_exists(input, None)?;

    info!("Loading raw dataset from {}", input.display());
    let raw = DataTable::read_csv(input)?;
    let raw_shape = raw.shape();
    info!("Raw dataset shape: {:?}", raw_shape);

    let clean = clean_table(&raw);
    let clean_shape = clean.shape();
    info!("Clean dataset shape: {:?}", clean_shape);

    clean.write_csv(output)?;
    info!("Cleaned dataset saved at {}", output.display());

    Ok(CleanReport {
        raw_shape,
        clean_shape,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> DataTable {
        DataTable {
            headers: vec!["diseases".into(), "fever".into(), "cough".into()],
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_drops_duplicates_keeping_first() {
        let cleaned = clean_table(&table(&[
            &["flu", "1", "1"],
            &["cold", "0", "1"],
            &["flu", "1", "1"],
        ]));
        assert_eq!(cleaned.shape(), (2, 3));
        assert_eq!(cleaned.rows[0][0], "flu");
        assert_eq!(cleaned.rows[1][0], "cold");
    }

    #[test]
    fn test_trims_cells() {
        let cleaned = clean_table(&table(&[&["  flu ", " 1", "0 "]]));
        assert_eq!(cleaned.rows[0], vec!["flu", "1", "0"]);
    }

    #[test]
    fn test_duplicates_compare_before_trim() {
        let cleaned = clean_table(&table(&[&["flu", "1", "1"], &["flu ", "1", "1"]]));
        assert_eq!(cleaned.shape(), (2, 3));
        assert_eq!(cleaned.rows[0], cleaned.rows[1]);
    }

    #[test]
    fn test_drops_rows_with_missing_cells() {
        let cleaned = clean_table(&table(&[
            &["flu", "1", ""],
            &["cold", "NA", "1"],
            &["measles", "1", "N/A"],
            &["mumps", "1", "0"],
        ]));
        assert_eq!(cleaned.shape(), (1, 3));
        assert_eq!(cleaned.rows[0][0], "mumps");
    }

    #[test]
    fn test_whitespace_only_cell_is_not_missing() {
        // NA detection runs on the raw text, before trimming
        let cleaned = clean_table(&table(&[&["flu", "1", "   "]]));
        assert_eq!(cleaned.rows[0], vec!["flu", "1", ""]);
    }

    #[test]
    fn test_clean_dataset_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw").join("disease_symptom.csv");
        let output = dir.path().join("processed").join("medical_dataset_clean.csv");
        std::fs::create_dir_all(input.parent().unwrap()).unwrap();
        std::fs::write(
            &input,
            "diseases,fever,skin_rash\nflu,1,0\nflu,1,0\n measles ,1,1\nmumps,,1\n",
        )
        .unwrap();

        let report = clean_dataset(&input, &output).unwrap();
        assert_eq!(report.raw_shape, (4, 3));
        assert_eq!(report.clean_shape, (2, 3));
        assert_eq!(report.rows_removed(), 2);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "diseases,fever,skin_rash\nflu,1,0\nmeasles,1,1\n"
        );
    }

    #[test]
    fn test_clean_dataset_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = clean_dataset(&dir.path().join("absent.csv"), &dir.path().join("out.csv"));
        assert!(matches!(result, Err(crate::MedAssistError::Io(_))));
    }
}

//! Knowledge document construction from the clean dataset

use super::DataTable;
use crate::errors::MedAssistError;
use crate::errors::Result;
use crate::models::KnowledgeDocument;

/// Sentence embedded for each disease row
#[must_use]
pub fn document_text(disease: &str, symptoms: &str) -> String {
    format!("The patient has {disease}, with symptoms including: {symptoms}.")
}

/// Symptom flags are numeric; both `1` and `1.0` mark a present symptom
fn is_present(cell: &str) -> bool {
    cell.trim()
        .parse::<f64>()
        .is_ok_and(|value| (value - 1.0).abs() < f64::EPSILON)
}

/// Build one document per row
///
/// The first column names the disease; every other column is a symptom flag.
/// Document ids are row positions, so rebuilding from the same file
/// overwrites the same entries.
pub fn build_documents(table: &DataTable) -> Result<Vec<KnowledgeDocument>> {
    let Some((_, symptom_columns)) = table.headers.split_first() else {
        return Err(MedAssistError::DatasetError(
            "Dataset has no columns".to_string(),
        ));
    };

    let symptom_names: Vec<String> = symptom_columns
        .iter()
        .map(|name| name.replace('_', " "))
        .collect();

    let documents = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let disease = row.first().map_or("", String::as_str);
            let symptoms = row
                .iter()
                .skip(1)
                .zip(&symptom_names)
                .filter(|(cell, _)| is_present(cell))
                .map(|(_, name)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            KnowledgeDocument {
                id: idx.to_string(),
                document: document_text(disease, &symptoms),
                disease: disease.to_string(),
                symptoms,
            }
        })
        .collect();

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_document_per_row() {
        let docs = build_documents(&table(
            &["diseases", "high_fever", "skin_rash", "cough"],
            &[&["measles", "1", "1", "0"], &["flu", "1.0", "0", "1"]],
        ))
        .unwrap();

        assert_eq!(
            docs[0],
            KnowledgeDocument {
                id: "0".to_string(),
                document: "The patient has measles, with symptoms including: high fever, skin rash."
                    .to_string(),
                disease: "measles".to_string(),
                symptoms: "high fever, skin rash".to_string(),
            }
        );
        assert_eq!(docs[1].id, "1");
        assert_eq!(docs[1].symptoms, "high fever, cough");
    }

    #[test]
    fn test_row_without_symptoms() {
        let docs = build_documents(&table(&["diseases", "fever"], &[&["healthy", "0"]])).unwrap();
        assert_eq!(
            docs[0].document,
            "The patient has healthy, with symptoms including: ."
        );
        assert!(docs[0].symptoms.is_empty());
    }

    #[test]
    fn test_non_numeric_flags_are_absent() {
        assert!(is_present("1"));
        assert!(is_present(" 1.0 "));
        assert!(!is_present("yes"));
        assert!(!is_present("0"));
        assert!(!is_present("2"));
    }

    #[test]
    fn test_empty_header_is_error() {
        assert!(build_documents(&DataTable::default()).is_err());
    }
}

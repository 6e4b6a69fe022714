//! Offline dataset pipeline
//!
//! Two steps run ahead of serving:
//! - `cleaner`: raw disease/symptom CSV to a deduplicated, NA-free CSV
//! - `indexer`: clean CSV to knowledge documents embedded into the vector store

pub mod cleaner;
pub mod documents;
pub mod indexer;

use std::path::Path;

pub use cleaner::clean_dataset;
pub use cleaner::CleanReport;
pub use documents::build_documents;
pub use indexer::build_index;
pub use indexer::IndexStats;

use crate::errors::MedAssistError;
use crate::errors::Result;

/// An in-memory CSV table: one header row plus string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Read a CSV file with a header row
    ///
    /// Short rows are padded with empty cells (which count as missing);
    /// rows longer than the header are rejected.
    pub fn read_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let width = headers.len();
        let mut rows = Vec::new();

        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > width {
                return Err(MedAssistError::DatasetError(format!(
                    "Row {} has {} fields, expected {}",
                    idx + 1,
                    record.len(),
                    width
                )));
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Write the header and rows, creating the parent directory if needed
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// (rows, columns)
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }
}

/// Fail with a not-found error naming the missing file
pub(crate) fn ensure_exists(path: &Path, hint: Option<&str>) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    let mut message = format!("Dataset not found at {}", path.display());
    if let Some(hint) = hint {
        message.push_str(". ");
        message.push_str(hint);
    }
    Err(MedAssistError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        message,
    )))
}

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;

/// A persisted diagnosis interaction
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Diagnosis {
    pub id: i32,
    pub symptoms: String,
    pub diagnosis_response: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `diagnoses` table
#[derive(Debug, Clone)]
pub struct NewDiagnosis {
    pub symptoms: String,
    pub diagnosis_response: String,
}

impl NewDiagnosis {
    pub fn new(symptoms: impl Into<String>, diagnosis_response: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            diagnosis_response: diagnosis_response.into(),
        }
    }
}

/// A knowledge-base entry ready to be written to the vector store
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeDocument {
    pub id: String,
    pub document: String,
    pub disease: String,
    pub symptoms: String,
}

/// A knowledge-base entry returned by a nearest-neighbour query
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RetrievedDocument {
    pub id: String,
    pub document: String,
    pub disease: String,
    pub symptoms: String,
    /// Distance to the query vector; smaller is closer
    pub distance: f64,
}

/// Row counts reported by the `stats` command
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStatistics {
    pub collection: String,
    pub documents: i64,
    pub diagnoses: i64,
}

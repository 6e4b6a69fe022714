use super::Database;
use crate::models::Diagnosis;
use crate::models::NewDiagnosis;
use crate::Result;

impl Database {
    /// Insert a diagnosis and return the stored row
    pub async fn create_diagnosis(&self, diagnosis: &NewDiagnosis) -> Result<Diagnosis> {
        let row = sqlx::query_as::<_, Diagnosis>(
            r"
            INSERT INTO diagnoses (symptoms, diagnosis_response)
            VALUES ($1, $2)
            RETURNING id, symptoms, diagnosis_response, created_at
            ",
        )
        .bind(&diagnosis.symptoms)
        .bind(&diagnosis.diagnosis_response)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Fetch a single diagnosis by id
    #[cfg(test)]
    pub(crate) async fn get_diagnosis(&self, id: i32) -> Result<Option<Diagnosis>> {
        let row = sqlx::query_as::<_, Diagnosis>(
            r"
            SELECT id, symptoms, diagnosis_response, created_at
            FROM diagnoses
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn count_diagnoses(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM diagnoses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

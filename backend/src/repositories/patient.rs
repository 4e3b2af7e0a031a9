//! Patient repository
//!
//! Patient rows are decoded positionally with strict column types. A row
//! with the wrong column count or an unexpected column type is reported as
//! `RepositoryError::Decode` and never turned into a patient.

use super::RepositoryError;
use patient_records_shared::Patient;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// Number of columns a patient row must carry
pub const PATIENT_COLUMNS: usize = 11;

const SELECT_PATIENTS: &str = r#"
    SELECT patient_id, age, gender, occupation_id, residential_area_id, bmi,
           physical_activity_level, dietary_habits, air_quality_index,
           family_history_cancer, previous_cancer_diagnosis
    FROM patients
    ORDER BY patient_id
"#;

/// Patient repository for database operations
pub struct PatientRepository;

impl PatientRepository {
    /// List every patient row
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Patient>, RepositoryError> {
        let mut conn = pool.acquire().await.map_err(RepositoryError::Connection)?;

        let rows = sqlx::query(SELECT_PATIENTS)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::Query)?;

        rows.iter().map(decode_patient).collect()
    }
}

/// Decode one `patients` row
pub fn decode_patient(row: &PgRow) -> Result<Patient, RepositoryError> {
    if row.len() != PATIENT_COLUMNS {
        return Err(RepositoryError::Decode(format!(
            "expected {} patient columns, found {}",
            PATIENT_COLUMNS,
            row.len()
        )));
    }

    Ok(Patient {
        patient_id: column(row, 0)?,
        age: column(row, 1)?,
        gender: column(row, 2)?,
        occupation_id: column(row, 3)?,
        residential_area_id: column(row, 4)?,
        bmi: decimal_to_f64(column::<Option<Decimal>>(row, 5)?)?,
        physical_activity_level: column(row, 6)?,
        dietary_habits: column(row, 7)?,
        air_quality_index: column(row, 8)?,
        family_history_cancer: flag(column(row, 9)?),
        previous_cancer_diagnosis: flag(column(row, 10)?),
    })
}

fn column<'r, T>(row: &'r PgRow, index: usize) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(index)
        .map_err(|e| RepositoryError::Decode(format!("column {}: {}", index, e)))
}

/// Convert a nullable NUMERIC value to a JSON-friendly float
pub fn decimal_to_f64(value: Option<Decimal>) -> Result<Option<f64>, RepositoryError> {
    value
        .map(|d| {
            d.to_f64()
                .ok_or_else(|| RepositoryError::Decode(format!("numeric {} out of range", d)))
        })
        .transpose()
}

/// Boolean stored as a small integer, any nonzero value is true
#[inline]
pub fn flag(value: i16) -> bool {
    value != 0
}

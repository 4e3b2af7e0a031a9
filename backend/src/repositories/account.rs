//! Practitioner account repository

use super::RepositoryError;
use patient_records_shared::{AccountId, ProfileResponse};
use sqlx::PgPool;

/// Account record from database, including the credential hash
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRecord {
    pub id: AccountId,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
}

/// Profile fields of an account, never carries the password hash
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AccountProfile {
    pub id: AccountId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub registration_number: Option<String>,
    pub phone: Option<String>,
}

impl From<AccountProfile> for ProfileResponse {
    fn from(profile: AccountProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            nombre: profile.first_name,
            apellido: profile.last_name,
            especialidad: profile.specialty,
            registro_medico: profile.registration_number,
            telefono: profile.phone,
        }
    }
}

/// Input for creating an account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub specialty: Option<String>,
    pub registration_number: Option<String>,
    pub phone: Option<String>,
}

/// Account repository for database operations
pub struct AccountRepository;

impl AccountRepository {
    /// Find an account by exact email, active or not
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AccountRecord>, RepositoryError> {
        Self::fetch_by_email(
            pool,
            email,
            r#"
            SELECT id, email, password_hash, nombre AS first_name, apellido AS last_name,
                   especialidad AS specialty
            FROM usuarios
            WHERE email = $1
            "#,
        )
        .await
    }

    /// Find an active account by exact email, used for login
    pub async fn find_active_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AccountRecord>, RepositoryError> {
        Self::fetch_by_email(
            pool,
            email,
            r#"
            SELECT id, email, password_hash, nombre AS first_name, apellido AS last_name,
                   especialidad AS specialty
            FROM usuarios
            WHERE email = $1 AND activo = TRUE
            "#,
        )
        .await
    }

    async fn fetch_by_email(
        pool: &PgPool,
        email: &str,
        sql: &'static str,
    ) -> Result<Option<AccountRecord>, RepositoryError> {
        let mut conn = pool.acquire().await.map_err(RepositoryError::Connection)?;

        sqlx::query_as::<_, AccountRecord>(sql)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::Query)
    }

    /// Insert a new account and return its generated id
    ///
    /// The table's unique email constraint turns a registration race into
    /// `RepositoryError::DuplicateEmail`.
    pub async fn insert(pool: &PgPool, account: &NewAccount) -> Result<AccountId, RepositoryError> {
        let mut conn = pool.acquire().await.map_err(RepositoryError::Connection)?;

        sqlx::query_scalar::<_, AccountId>(
            r#"
            INSERT INTO usuarios (email, password_hash, nombre, apellido,
                                  especialidad, registro_medico, telefono)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.specialty)
        .bind(&account.registration_number)
        .bind(&account.phone)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::DuplicateEmail,
            other => RepositoryError::Query(other),
        })
    }

    /// Find the profile of an account by id
    pub async fn find_profile_by_id(
        pool: &PgPool,
        id: AccountId,
    ) -> Result<Option<AccountProfile>, RepositoryError> {
        let mut conn = pool.acquire().await.map_err(RepositoryError::Connection)?;

        sqlx::query_as::<_, AccountProfile>(
            r#"
            SELECT id, email, nombre AS first_name, apellido AS last_name,
                   especialidad AS specialty, registro_medico AS registration_number,
                   telefono AS phone
            FROM usuarios
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::Query)
    }
}

//! Account service for registration, login and profile lookup
//!
//! # Performance Optimizations
//!
//! - Password hashing/verification runs on blocking thread pool
//! - Token service is passed by reference (pre-computed keys)

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::{AccountRepository, NewAccount, RepositoryError};
use chrono::{DateTime, Utc};
use patient_records_shared::{
    AccountId, AccountSummary, Credentials, LoginResponse, ProfileResponse, Registration,
};
use sqlx::PgPool;
use tracing::{debug, info};

pub const MISSING_REGISTRATION_FIELDS: &str = "Faltan campos obligatorios";
pub const MISSING_CREDENTIALS: &str = "Email y password requeridos";
pub const EMAIL_TAKEN: &str = "El email ya está registrado";
pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const ACCOUNT_NOT_FOUND: &str = "Usuario no encontrado";

const REGISTER_FAILED: &str = "Error al registrar usuario";
const LOGIN_FAILED: &str = "Error en el login";
const PROFILE_FAILED: &str = "Error al obtener perfil";

/// Account service for authentication operations
pub struct AccountService;

impl AccountService {
    /// Register a new practitioner account
    ///
    /// # Performance
    /// Password hashing is offloaded to blocking thread pool via `spawn_blocking`.
    pub async fn register(pool: &PgPool, registration: Registration) -> Result<AccountId, ApiError> {
        if AccountRepository::find_by_email(pool, &registration.email)
            .await
            .map_err(ApiError::database(REGISTER_FAILED))?
            .is_some()
        {
            return Err(ApiError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = PasswordService::hash_async(registration.password)
            .await
            .map_err(ApiError::internal(REGISTER_FAILED))?;

        let account = NewAccount {
            email: registration.email,
            password_hash,
            first_name: registration.nombre,
            last_name: registration.apellido,
            specialty: registration.especialidad,
            registration_number: registration.registro_medico,
            phone: registration.telefono,
        };

        let id = AccountRepository::insert(pool, &account)
            .await
            .map_err(|e| match e {
                // Lost the race against a concurrent registration
                RepositoryError::DuplicateEmail => ApiError::Conflict(EMAIL_TAKEN.to_string()),
                other => ApiError::database(REGISTER_FAILED)(other),
            })?;

        info!(account_id = id, "Account registered");
        Ok(id)
    }

    /// Login with email and password
    ///
    /// Unknown, inactive and wrong-password logins are indistinguishable
    /// to the caller.
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        credentials: Credentials,
        now: DateTime<Utc>,
    ) -> Result<LoginResponse, ApiError> {
        let Some(account) = AccountRepository::find_active_by_email(pool, &credentials.email)
            .await
            .map_err(ApiError::database(LOGIN_FAILED))?
        else {
            debug!("Login rejected: no active account for email");
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        // Verify password on blocking thread pool (CPU-intensive)
        let valid =
            PasswordService::verify_async(credentials.password, account.password_hash.clone())
                .await
                .map_err(ApiError::internal(LOGIN_FAILED))?;

        if !valid {
            debug!(account_id = account.id, "Login rejected: password mismatch");
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = tokens
            .issue(account.id, now)
            .map_err(ApiError::internal(LOGIN_FAILED))?;
        info!(account_id = account.id, "Session token issued");

        Ok(LoginResponse {
            token,
            usuario: AccountSummary {
                id: account.id,
                email: account.email,
                nombre: account.first_name,
                apellido: account.last_name,
                especialidad: account.specialty,
            },
        })
    }

    /// Get the profile of an authenticated account
    pub async fn get_profile(pool: &PgPool, account_id: AccountId) -> Result<ProfileResponse, ApiError> {
        let profile = AccountRepository::find_profile_by_id(pool, account_id)
            .await
            .map_err(ApiError::database(PROFILE_FAILED))?
            .ok_or_else(|| ApiError::NotFound(ACCOUNT_NOT_FOUND.to_string()))?;

        Ok(profile.into())
    }
}

//! Input validation functions
//!
//! Registration and login only check that required fields are present.
//! A field counts as present when it was supplied and is not the empty
//! string. Optional profile fields are accepted as given.

use crate::errors::MissingFields;
use crate::types::{LoginRequest, RegisterRequest};

/// Return the value of a required field if it was supplied and non-empty
pub fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Collect the names of required fields that are absent or empty
pub fn missing_fields(fields: &[(&'static str, Option<&str>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect()
}

/// A registration request whose required fields are all present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub nombre: String,
    pub apellido: String,
    pub especialidad: Option<String>,
    pub registro_medico: Option<String>,
    pub telefono: Option<String>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = MissingFields;

    fn try_from(req: RegisterRequest) -> Result<Self, Self::Error> {
        let missing = missing_fields(&[
            ("email", req.email.as_deref()),
            ("password", req.password.as_deref()),
            ("nombre", req.nombre.as_deref()),
            ("apellido", req.apellido.as_deref()),
        ]);

        match (
            required(req.email),
            required(req.password),
            required(req.nombre),
            required(req.apellido),
        ) {
            (Some(email), Some(password), Some(nombre), Some(apellido)) => Ok(Self {
                email,
                password,
                nombre,
                apellido,
                especialidad: req.especialidad,
                registro_medico: req.registro_medico,
                telefono: req.telefono,
            }),
            _ => Err(MissingFields(missing)),
        }
    }
}

/// Login credentials with both fields present
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl TryFrom<LoginRequest> for Credentials {
    type Error = MissingFields;

    fn try_from(req: LoginRequest) -> Result<Self, Self::Error> {
        let missing = missing_fields(&[
            ("email", req.email.as_deref()),
            ("password", req.password.as_deref()),
        ]);

        match (required(req.email), required(req.password)) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(MissingFields(missing)),
        }
    }
}

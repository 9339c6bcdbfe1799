// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{validate_login_email, validate_not_blank};

/// Usuário autenticado, a única entidade persistida localmente.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "correo_electronico", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// Dados para login
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginUserPayload {
    #[serde(rename = "correo_electronico")]
    #[validate(custom(function = "validate_login_email"))]
    pub email: String,

    #[serde(rename = "contrasena")]
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

impl LoginUserPayload {
    /// Normaliza como a API espera: e-mail sem espaços e em minúsculas.
    pub fn normalized(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password: password.trim().to_string(),
        }
    }
}

// Resposta do login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "usuario")]
    pub user: SessionUser,
}

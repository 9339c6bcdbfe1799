// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{validate_account_email, validate_not_blank};

// Conta de acesso ligada a um empregado
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "correo_electronico", default)]
    pub email: String,
    #[serde(rename = "rol", default)]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct CreateUserPayload {
    #[serde(rename = "empleado_id")]
    pub employee_id: i64,

    #[serde(rename = "correo_electronico")]
    #[validate(custom(function = "validate_account_email"))]
    pub email: String,

    #[serde(rename = "contrasena")]
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres."))]
    pub password: String,

    #[serde(rename = "rol")]
    #[validate(custom(function = "validate_not_blank"))]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct UpdateUserPayload {
    #[serde(rename = "correo_electronico")]
    #[validate(custom(function = "validate_account_email"))]
    pub email: String,

    #[serde(rename = "contrasena")]
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres."))]
    pub password: String,

    #[serde(rename = "rol")]
    pub role: String,
}

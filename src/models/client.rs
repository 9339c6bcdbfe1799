// src/models/client.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{
    validate_business_name, validate_document_number, validate_not_blank, validate_phone,
};

// --- CLIENTE ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i64,
    #[serde(rename = "nombre_razon_social")]
    pub name: String,
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
}

/// Corpo de criação e de atualização (`POST`/`PUT /api/clientes`).
#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct ClientPayload {
    #[serde(rename = "nombre_razon_social")]
    #[validate(custom(function = "validate_business_name"))]
    pub name: String,

    #[serde(rename = "documento")]
    #[validate(custom(function = "validate_document_number"))]
    pub document: String,

    #[serde(rename = "direccion")]
    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,

    #[serde(rename = "telefono")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

impl ClientPayload {
    pub fn new(name: &str, document: &str, address: &str, phone: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            document: document.trim().to_string(),
            address: address.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }
}

// src/models/product.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{validate_not_blank, validate_product_code};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    Inactive,
}

impl ProductStatus {
    pub fn toggled(self) -> Self {
        match self {
            ProductStatus::Active => ProductStatus::Inactive,
            ProductStatus::Inactive => ProductStatus::Active,
        }
    }
}

// --- Unidades de Medida ---
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitOfMeasure {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

// --- Produtos (catálogo) ---
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    // A API devolve o nome da unidade, não o id
    #[serde(rename = "unidad_medida", default)]
    pub unit: Option<String>,
    #[serde(rename = "estado", default = "default_status")]
    pub status: ProductStatus,
}

fn default_status() -> ProductStatus {
    ProductStatus::Active
}

/// `GET /api/productos` devolve a lista ou `{ "mensaje": ... }` quando vazio.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Products(Vec<Product>),
    Message { mensaje: String },
}

#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct CreateProductPayload {
    #[serde(rename = "codigo")]
    #[validate(custom(function = "validate_product_code"))]
    pub code: String,

    #[serde(rename = "nombre")]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(rename = "descripcion")]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[serde(rename = "unidad_medida_id")]
    #[validate(required(message = "Todos los campos son obligatorios."))]
    pub unit_id: Option<i64>,

    #[serde(rename = "estado")]
    pub status: ProductStatus,
}

#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct UpdateProductPayload {
    #[serde(rename = "nombre")]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(rename = "descripcion")]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[serde(rename = "unidad_medida_id")]
    #[validate(required(message = "Todos los campos son obligatorios."))]
    pub unit_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusChange<S> {
    #[serde(rename = "estado")]
    pub status: S,
}

// --- Importação de planilha ---
#[derive(Debug, Clone, Serialize)]
pub struct ImportPayload {
    #[serde(rename = "nombreArchivo")]
    pub file_name: String,
    pub base64: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportResponse {
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub errores: Vec<String>,
}

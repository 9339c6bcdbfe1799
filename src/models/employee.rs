// src/models/employee.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{validate_dni, validate_not_blank, validate_person_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    Inactive,
}

impl EmployeeStatus {
    pub fn toggled(self) -> Self {
        match self {
            EmployeeStatus::Active => EmployeeStatus::Inactive,
            EmployeeStatus::Inactive => EmployeeStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub dni: String,
    #[serde(rename = "nombres")]
    pub first_names: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "estado")]
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }
}

/// Corpo de `POST /empleados` e `PUT /empleados/{id}`.
#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
pub struct EmployeePayload {
    #[validate(custom(function = "validate_dni"))]
    pub dni: String,

    #[serde(rename = "nombres")]
    #[validate(custom(function = "validate_person_name"))]
    pub first_names: String,

    #[serde(rename = "apellidos")]
    #[validate(custom(function = "validate_person_name"))]
    pub last_names: String,

    #[serde(rename = "cargo")]
    #[validate(custom(function = "validate_not_blank"))]
    pub role: String,

    #[serde(rename = "estado")]
    pub status: EmployeeStatus,
}

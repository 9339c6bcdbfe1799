// src/common/validation.rs

// Regras de campo compartilhadas pelos formulários (usadas via
// `#[validate(custom(function = "..."))]`).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

static LOGIN_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex válida"));

static ACCOUNT_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").expect("regex válida")
});

static BUSINESS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9ÁÉÍÓÚáéíóúÑñ\s\-]+$").expect("regex válida"));

static PERSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("regex válida"));

pub const MAX_PRODUCT_CODE_LEN: usize = 10;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Todos los campos son obligatorios."));
    }
    Ok(())
}

pub fn validate_login_email(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    if !LOGIN_EMAIL_RE.is_match(value.trim()) {
        return Err(invalid("email", "Ingrese un correo válido."));
    }
    Ok(())
}

pub fn validate_account_email(value: &str) -> Result<(), ValidationError> {
    if !ACCOUNT_EMAIL_RE.is_match(value) {
        return Err(invalid("email", "El correo electrónico no es válido."));
    }
    Ok(())
}

/// Nome ou razão social: letras (com acentos), números, espaços e hífens.
pub fn validate_business_name(value: &str) -> Result<(), ValidationError> {
    if !BUSINESS_NAME_RE.is_match(value.trim()) {
        return Err(invalid(
            "business_name",
            "El nombre o razón social solo puede contener letras, números, espacios o guiones.",
        ));
    }
    Ok(())
}

/// DNI (8 dígitos) ou RUC (11 dígitos).
pub fn validate_document_number(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if !all_digits(value) || !(value.len() == 8 || value.len() == 11) {
        return Err(invalid(
            "document_number",
            "El documento debe tener 8 (DNI) u 11 dígitos (RUC).",
        ));
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !all_digits(value.trim()) {
        return Err(invalid("phone", "El teléfono solo debe contener números."));
    }
    Ok(())
}

pub fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid("person_name", "Los nombres y apellidos no pueden contener números."));
    }
    if value.trim().is_empty() {
        return Err(invalid("required", "Este campo no puede estar vacío."));
    }
    if !PERSON_NAME_RE.is_match(value) {
        return Err(invalid("person_name", "No se permiten caracteres especiales."));
    }
    Ok(())
}

pub fn validate_dni(value: &str) -> Result<(), ValidationError> {
    if value.len() != 8 || !all_digits(value) {
        return Err(invalid("dni", "El DNI debe tener exactamente 8 dígitos numéricos."));
    }
    Ok(())
}

pub fn validate_product_code(value: &str) -> Result<(), ValidationError> {
    if !all_digits(value) {
        return Err(invalid("product_code", "El código del producto solo debe contener números."));
    }
    if value.len() > MAX_PRODUCT_CODE_LEN {
        return Err(invalid("product_code", "El código no debe exceder los 10 dígitos."));
    }
    Ok(())
}

/// Mensagens de todos os campos, em ordem estável (por nome de campo).
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out: Vec<String> = Vec::new();
    for (field, field_errors) in fields {
        for err in field_errors.iter() {
            let msg = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Campo '{}' inválido.", field));
            if !out.contains(&msg) {
                out.push(msg);
            }
        }
    }
    out
}

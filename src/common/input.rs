// src/common/input.rs

use crate::common::error::AppError;

/// Campo numérico filtrado a cada digitação.
///
/// Remove tudo que não for dígito, recusa valores com mais de
/// [`NumericInput::MAX_DIGITS`] dígitos e recusa zero à esquerda em valores
/// com mais de um dígito. Uma entrada recusada mantém o valor anterior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericInput {
    value: String,
}

impl NumericInput {
    pub const MAX_DIGITS: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn on_change(&mut self, raw: &str) -> Result<&str, AppError> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() > Self::MAX_DIGITS {
            return Err(AppError::InvalidInput(format!(
                "La cantidad no puede tener más de {} dígitos.",
                Self::MAX_DIGITS
            )));
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(AppError::InvalidInput(
                "La cantidad no puede empezar con cero.".to_string(),
            ));
        }

        self.value = digits;
        Ok(&self.value)
    }
}

/// Converte o texto de quantidade em inteiro positivo.
pub fn parse_quantity(text: &str) -> Result<u64, AppError> {
    match text.trim().parse::<u64>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(AppError::InvalidInput(
            "Ingrese una cantidad válida mayor a 0.".to_string(),
        )),
    }
}

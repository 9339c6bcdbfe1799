// src/screens/request_editor.rs

use crate::{
    common::{
        error::{Alert, AppError},
        input::parse_quantity,
    },
    models::request::{LineItemUpdate, RequestDetail, RequestState},
    screens::Route,
    services::{request_service::ensure_editable, RequestService},
};

/// Rascunho local de um item existente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLine {
    pub id: i64,
    pub product_code: Option<String>,
    pub product_name: String,
    pub quantity: String,
    pub note: String,
}

pub struct RequestEditor {
    service: RequestService,
    request_id: i64,
    state: RequestState,
    lines: Vec<DraftLine>,
}

impl RequestEditor {
    pub async fn open(service: &RequestService, request_id: i64) -> Result<Self, AppError> {
        let detail = service.detail(request_id).await?;
        Ok(Self::from_detail(service.clone(), detail))
    }

    fn from_detail(service: RequestService, detail: RequestDetail) -> Self {
        let lines = detail
            .line_items
            .into_iter()
            .map(|item| DraftLine {
                id: item.id,
                product_code: item.product_code,
                product_name: item.product_name,
                quantity: item.quantity.to_string(),
                note: item.note.unwrap_or_default(),
            })
            .collect();

        Self {
            service,
            request_id: detail.id,
            state: detail.state,
            lines,
        }
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        !self.state.is_editable()
    }

    pub fn redirect(&self) -> Option<(Alert, Route)> {
        self.is_locked().then(|| {
            (
                Alert::new("Aviso", "La solicitud ya no está en estado pendiente."),
                Route::Back,
            )
        })
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut DraftLine, AppError> {
        self.lines
            .get_mut(index)
            .ok_or_else(|| AppError::InvalidInput("Ítem no encontrado.".to_string()))
    }

    // sem validação por digitação; `save` valida tudo
    pub fn set_quantity(&mut self, index: usize, text: &str) -> Result<(), AppError> {
        self.line_mut(index)?.quantity = text.to_string();
        Ok(())
    }

    pub fn set_note(&mut self, index: usize, text: &str) -> Result<(), AppError> {
        self.line_mut(index)?.note = text.to_string();
        Ok(())
    }

    /// Remove só do rascunho; nenhuma exclusão é enviada à API.
    pub fn remove_line(&mut self, index: usize) -> Result<DraftLine, AppError> {
        if index >= self.lines.len() {
            return Err(AppError::InvalidInput("Ítem no encontrado.".to_string()));
        }
        Ok(self.lines.remove(index))
    }

    pub async fn save(&mut self) -> Result<Route, AppError> {
        ensure_editable(self.request_id, self.state)?;
        if self.lines.is_empty() {
            return Err(AppError::InvalidInput(
                "La solicitud necesita al menos un producto.".to_string(),
            ));
        }

        // Todas as quantidades antes da primeira chamada
        let updates = self
            .lines
            .iter()
            .map(|line| {
                let quantity = parse_quantity(&line.quantity)?;
                Ok((
                    line.id,
                    LineItemUpdate {
                        quantity,
                        note: line.note.trim().to_string(),
                    },
                ))
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        self.service.update_line_items(&updates).await?;
        Ok(Route::Back)
    }
}

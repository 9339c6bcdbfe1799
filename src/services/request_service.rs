// src/services/request_service.rs

//! Regras do ciclo de vida das solicitações de materiais.
//!
//! Pendiente -> Enviada -> Aprobada | Rechazada. Só solicitações pendentes
//! aceitam itens; a API recusa o resto e o cliente recusa antes dela.

use crate::{
    api::RequestRepository,
    common::error::AppError,
    models::request::{
        CreateRequestPayload, LineItemUpdate, MaterialRequest, NewLineItem, RequestDetail,
        RequestHistoryEntry, RequestState, RequestSummary,
    },
};

#[derive(Clone, Debug)]
pub struct RequestService {
    repo: RequestRepository,
}

impl RequestService {
    pub fn new(repo: RequestRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  1. CRIAÇÃO
    // =========================================================================

    pub async fn create(&self, payload: &CreateRequestPayload) -> Result<MaterialRequest, AppError> {
        match self.repo.create(payload).await {
            Ok(request) => {
                tracing::info!(
                    "✅ Solicitação {} criada para o cliente {} ({})",
                    request.id,
                    payload.client_id,
                    request.state
                );
                Ok(request)
            }
            Err(AppError::DuplicateRequest(dup)) => {
                tracing::warn!(
                    "⚠️ Já existe solicitação para o cliente {} em {} (estado: {})",
                    payload.client_id,
                    payload.date,
                    dup.state
                );
                Err(AppError::DuplicateRequest(dup))
            }
            Err(e) => {
                tracing::error!("🔥 Falha ao criar solicitação: {}", e);
                Err(e)
            }
        }
    }

    /// Cria ignorando a duplicidade do dia (rota `forzar`).
    pub async fn force_create(
        &self,
        payload: &CreateRequestPayload,
    ) -> Result<MaterialRequest, AppError> {
        let request = self.repo.force_create(payload).await?;
        tracing::info!("✅ Solicitação {} criada forçadamente", request.id);
        Ok(request)
    }

    // =========================================================================
    //  2. LEITURA
    // =========================================================================

    pub async fn detail(&self, id: i64) -> Result<RequestDetail, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<RequestSummary>, AppError> {
        self.repo.list_by_user(user_id).await
    }

    pub async fn history(&self, user_id: i64) -> Result<Vec<RequestHistoryEntry>, AppError> {
        self.repo.history(user_id).await
    }

    // =========================================================================
    //  3. ITENS (GRAVAÇÃO SEQUENCIAL, SEM ROLLBACK)
    // =========================================================================

    /// Grava os itens um a um. Na primeira falha devolve
    /// [`AppError::PartialSave`]; os itens anteriores continuam no servidor.
    pub async fn add_line_items(&self, items: &[NewLineItem]) -> Result<usize, AppError> {
        let total = items.len();

        for (persisted, item) in items.iter().enumerate() {
            if let Err(e) = self.repo.add_line_item(item).await {
                tracing::error!(
                    "🔥 Item {} da solicitação {} falhou ({} de {} gravados): {}",
                    item.product_code,
                    item.request_id,
                    persisted,
                    total,
                    e
                );
                return Err(AppError::PartialSave {
                    persisted,
                    total,
                    source: Box::new(e),
                });
            }
        }

        tracing::info!("✅ {} itens gravados", total);
        Ok(total)
    }

    /// Atualiza os itens um a um, exigindo status 200 em cada chamada.
    pub async fn update_line_items(
        &self,
        updates: &[(i64, LineItemUpdate)],
    ) -> Result<usize, AppError> {
        let total = updates.len();

        for (persisted, (line_id, update)) in updates.iter().enumerate() {
            if let Err(e) = self.repo.update_line_item(*line_id, update).await {
                tracing::error!(
                    "🔥 Atualização do item {} falhou ({} de {} gravados): {}",
                    line_id,
                    persisted,
                    total,
                    e
                );
                return Err(AppError::PartialSave {
                    persisted,
                    total,
                    source: Box::new(e),
                });
            }
        }

        tracing::info!("✅ {} itens atualizados", total);
        Ok(total)
    }

    // =========================================================================
    //  4. TRANSIÇÃO E DOCUMENTOS
    // =========================================================================

    /// Pendiente -> Enviada. O chamador já verificou o estado.
    pub async fn send_to_fulfillment(&self, id: i64) -> Result<(), AppError> {
        match self.repo.send_to_fulfillment(id).await {
            Ok(_) => {
                tracing::info!("📤 Solicitação {} enviada", id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("🔥 Falha ao enviar a solicitação {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn generate_pdf(&self, id: i64) -> Result<(), AppError> {
        self.repo.generate_pdf(id).await?;
        tracing::info!("📄 PDF da solicitação {} gerado", id);
        Ok(())
    }

    pub async fn pdf_exists(&self, id: i64) -> Result<bool, AppError> {
        self.repo.pdf_exists(id).await
    }

    pub fn pdf_url(&self, id: i64) -> String {
        self.repo.pdf_url(id)
    }
}

// =============================================================================
//  GUARDAS DO CICLO DE VIDA
// =============================================================================

/// Recusa qualquer alteração em solicitação que não esteja pendente.
pub fn ensure_editable(id: i64, state: RequestState) -> Result<(), AppError> {
    if !state.is_editable() {
        tracing::warn!("⛔ Solicitação {} bloqueada para edição ({})", id, state);
        return Err(AppError::RequestNotEditable { id, state });
    }
    Ok(())
}

pub fn ensure_transition(id: i64, from: RequestState, to: RequestState) -> Result<(), AppError> {
    if !from.can_transition_to(to) {
        tracing::warn!("⛔ Transição recusada para a solicitação {}: {} -> {}", id, from, to);
        return Err(AppError::InvalidTransition { id, from, to });
    }
    Ok(())
}

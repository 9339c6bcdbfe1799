// src/api/request_repo.rs

use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    api::http::ApiClient,
    common::error::AppError,
    models::request::{
        CreateRequestPayload, DuplicateRequest, LineItemUpdate, MaterialRequest, NewLineItem,
        RequestDetail, RequestHistoryEntry, RequestSummary, ServerMessage,
    },
};

#[derive(Serialize)]
struct HistoryQuery {
    usuario_id: i64,
}

// Repositório das solicitações de materiais: /api/solicitudes
#[derive(Clone, Debug)]
pub struct RequestRepository {
    api: ApiClient,
}

impl RequestRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // =========================================================================
    //  CRIAÇÃO
    // =========================================================================

    pub async fn create(&self, payload: &CreateRequestPayload) -> Result<MaterialRequest, AppError> {
        self.api
            .post("/api/solicitudes", payload)
            .await
            .map_err(duplicate_from_conflict)
    }

    /// Rota de sobrescrita: ignora a checagem de duplicidade do dia.
    pub async fn force_create(
        &self,
        payload: &CreateRequestPayload,
    ) -> Result<MaterialRequest, AppError> {
        self.api.post("/api/solicitudes/forzar", payload).await
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub async fn find_by_id(&self, id: i64) -> Result<RequestDetail, AppError> {
        self.api.get(&format!("/api/solicitudes/{}", id)).await
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<RequestSummary>, AppError> {
        self.api
            .get(&format!("/api/solicitudes/usuario/{}", user_id))
            .await
    }

    pub async fn history(&self, user_id: i64) -> Result<Vec<RequestHistoryEntry>, AppError> {
        self.api
            .get_with_query("/api/solicitudes/historial", &HistoryQuery { usuario_id: user_id })
            .await
    }

    // =========================================================================
    //  DETALHES (ITENS)
    // =========================================================================

    /// Cria um item. A API confirma com `{ "message": ... }`; sem a mensagem
    /// a gravação é tratada como falha.
    pub async fn add_line_item(&self, item: &NewLineItem) -> Result<String, AppError> {
        let response: Option<ServerMessage> =
            self.api.post("/api/solicitudes/detalle", item).await?;

        response
            .as_ref()
            .and_then(|r| r.message.clone())
            .ok_or_else(|| {
                AppError::UnexpectedResponse(format!(
                    "Falha ao registrar o produto {}",
                    item.product_code
                ))
            })
    }

    /// Atualiza um item. Só o status 200 conta como sucesso.
    pub async fn update_line_item(
        &self,
        line_id: i64,
        update: &LineItemUpdate,
    ) -> Result<(), AppError> {
        let status = self
            .api
            .put_status(&format!("/api/solicitudes/detalle/{}", line_id), update)
            .await?;

        if status != StatusCode::OK {
            return Err(AppError::UnexpectedResponse(format!(
                "Status {} ao atualizar o item {}",
                status, line_id
            )));
        }
        Ok(())
    }

    // =========================================================================
    //  CICLO DE VIDA E DOCUMENTOS
    // =========================================================================

    pub async fn send_to_fulfillment(&self, id: i64) -> Result<Option<ServerMessage>, AppError> {
        self.api
            .post_empty(&format!("/api/solicitudes/{}/enviar", id))
            .await
    }

    pub async fn generate_pdf(&self, id: i64) -> Result<Option<ServerMessage>, AppError> {
        self.api
            .post_empty(&format!("/api/solicitudes/{}/generar-pdf", id))
            .await
    }

    pub async fn pdf_exists(&self, id: i64) -> Result<bool, AppError> {
        self.api.exists(&Self::pdf_path(id)).await
    }

    pub fn pdf_url(&self, id: i64) -> String {
        self.api.url(&Self::pdf_path(id))
    }

    fn pdf_path(id: i64) -> String {
        format!("/api/solicitudes/{}/pdf", id)
    }
}

// 409 com `{message, estado}` vira DuplicateRequest; o resto passa adiante
fn duplicate_from_conflict(err: AppError) -> AppError {
    if let AppError::ApiError { status: 409, body, .. } = &err {
        if let Ok(dup) = serde_json::from_value::<DuplicateRequest>(body.clone()) {
            return AppError::DuplicateRequest(dup);
        }
    }
    err
}

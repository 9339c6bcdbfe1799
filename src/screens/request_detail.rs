// src/screens/request_detail.rs

use crate::{
    common::error::{Alert, AppError},
    models::request::{LineItem, RequestDetail},
    services::RequestService,
};

/// Visualizador externo de documentos (o PDF nunca é renderizado aqui).
pub trait DocumentViewer: Send + Sync {
    fn open(&self, url: &str) -> Result<(), AppError>;
}

pub struct RequestDetailScreen {
    service: RequestService,
    detail: RequestDetail,
    pdf_available: bool,
}

impl RequestDetailScreen {
    /// Carrega o detalhe e sonda o PDF com `HEAD`. Uma sonda que falha só
    /// deixa o botão de visualizar desativado.
    pub async fn open(service: &RequestService, request_id: i64) -> Result<Self, AppError> {
        let detail = service.detail(request_id).await?;
        let pdf_available = service.pdf_exists(request_id).await.unwrap_or_else(|e| {
            tracing::warn!("⚠️ Não foi possível verificar o PDF da solicitação {}: {}", request_id, e);
            false
        });

        Ok(Self {
            service: service.clone(),
            detail,
            pdf_available,
        })
    }

    pub fn detail(&self) -> &RequestDetail {
        &self.detail
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.detail.line_items
    }

    pub fn pdf_available(&self) -> bool {
        self.pdf_available
    }

    /// Gera (ou regera) o PDF. O botão de visualizar fica ativo na hora.
    pub async fn generate_pdf(&mut self) -> Result<Alert, AppError> {
        self.service.generate_pdf(self.detail.id).await?;
        self.pdf_available = true;
        Ok(Alert::new(
            "PDF generado",
            "El PDF de la solicitud fue generado. ¿Desea verlo ahora?",
        ))
    }

    pub fn pdf_url(&self) -> Option<String> {
        self.pdf_available
            .then(|| self.service.pdf_url(self.detail.id))
    }

    pub fn view_pdf(&self, viewer: &dyn DocumentViewer) -> Result<(), AppError> {
        let url = self.pdf_url().ok_or_else(|| {
            AppError::InvalidInput("El PDF aún no ha sido generado.".to_string())
        })?;
        viewer.open(&url)
    }
}

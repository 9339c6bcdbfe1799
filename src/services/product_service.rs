// src/services/product_service.rs

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use validator::Validate;

use crate::{
    api::ProductRepository,
    common::error::AppError,
    models::product::{
        CatalogResponse, CreateProductPayload, ImportPayload, Product, ProductStatus,
        UnitOfMeasure, UpdateProductPayload,
    },
};

#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
    template_url: String,
}

impl ProductService {
    pub fn new(repo: ProductRepository, template_url: impl Into<String>) -> Self {
        Self {
            repo,
            template_url: template_url.into(),
        }
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    /// Catálogo completo; `{mensaje}` no lugar da lista significa catálogo vazio.
    pub async fn catalog(&self) -> Result<Vec<Product>, AppError> {
        match self.repo.catalog().await? {
            CatalogResponse::Products(products) => Ok(products),
            CatalogResponse::Message { mensaje } => {
                tracing::info!("📦 Catálogo vazio: {}", mensaje);
                Ok(Vec::new())
            }
        }
    }

    pub async fn list_active(&self) -> Result<Vec<Product>, AppError> {
        self.repo.list_active().await
    }

    pub async fn list_units(&self) -> Result<Vec<UnitOfMeasure>, AppError> {
        self.repo.list_units().await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Product, AppError> {
        self.repo.find_by_code(code).await
    }

    // =========================================================================
    //  ESCRITA
    // =========================================================================

    pub async fn create(&self, payload: &CreateProductPayload) -> Result<(), AppError> {
        payload.validate()?;
        self.repo.create(payload).await?;
        tracing::info!("✅ Produto {} registrado", payload.code);
        Ok(())
    }

    pub async fn update(&self, code: &str, payload: &UpdateProductPayload) -> Result<(), AppError> {
        payload.validate()?;
        self.repo.update(code, payload).await?;
        tracing::info!("✏️ Produto {} atualizado", code);
        Ok(())
    }

    pub async fn set_status(&self, code: &str, status: ProductStatus) -> Result<(), AppError> {
        self.repo.set_status(code, status).await?;
        tracing::info!("🔄 Produto {} agora está {:?}", code, status);
        Ok(())
    }

    pub async fn inactivate(&self, code: &str) -> Result<(), AppError> {
        self.repo.inactivate(code).await?;
        tracing::info!("⛔ Produto {} inativado", code);
        Ok(())
    }

    // =========================================================================
    //  IMPORTAÇÃO
    // =========================================================================

    /// Envia uma planilha Excel codificada em base64. Devolve a mensagem do
    /// servidor.
    pub async fn import(&self, file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        if !is_spreadsheet(file_name) {
            tracing::warn!("⚠️ Arquivo recusado na importação: {}", file_name);
            return Err(AppError::InvalidInput(
                "Seleccione un archivo Excel (.xls o .xlsx).".to_string(),
            ));
        }

        let payload = ImportPayload {
            file_name: file_name.to_string(),
            base64: general_purpose::STANDARD.encode(bytes),
        };

        let report = self.repo.import(&payload).await?;
        if !report.errores.is_empty() {
            return Err(AppError::ImportRejected(report.errores));
        }

        tracing::info!("📥 Planilha {} importada", file_name);
        Ok(report
            .mensaje
            .unwrap_or_else(|| "Productos importados correctamente.".to_string()))
    }

    pub fn template_url(&self) -> &str {
        &self.template_url
    }

    /// Baixa a planilha modelo e grava em `dest`.
    pub async fn download_template(&self, dest: &Path) -> Result<u64, AppError> {
        let bytes = self.repo.download(&self.template_url).await?;
        tokio::fs::write(dest, &bytes).await?;

        tracing::info!("📄 Modelo salvo em {}", dest.display());
        Ok(bytes.len() as u64)
    }
}

fn is_spreadsheet(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    lower.ends_with(".xls") || lower.ends_with(".xlsx")
}

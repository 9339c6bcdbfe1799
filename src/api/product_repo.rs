// src/api/product_repo.rs

use serde_json::Value;

use crate::{
    api::http::ApiClient,
    common::error::AppError,
    models::product::{
        CatalogResponse, CreateProductPayload, ImportPayload, ImportResponse, Product,
        ProductStatus, StatusChange, UnitOfMeasure, UpdateProductPayload,
    },
};

#[derive(Clone)]
pub struct ProductRepository {
    api: ApiClient,
}

impl ProductRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // =========================================================================
    //  CATÁLOGO
    // =========================================================================

    pub async fn catalog(&self) -> Result<CatalogResponse, AppError> {
        self.api.get("/api/productos").await
    }

    /// Só os ativos, para montar o seletor das solicitações.
    pub async fn list_active(&self) -> Result<Vec<Product>, AppError> {
        self.api.get("/api/productos/activos").await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Product, AppError> {
        self.api
            .get_with_query("/api/productos/buscar", &[("criterio", code)])
            .await
    }

    pub async fn list_units(&self) -> Result<Vec<UnitOfMeasure>, AppError> {
        self.api.get("/api/unidades").await
    }

    // =========================================================================
    //  ESCRITA
    // =========================================================================

    pub async fn create(&self, payload: &CreateProductPayload) -> Result<(), AppError> {
        let _: Value = self.api.post("/api/productos", payload).await?;
        Ok(())
    }

    pub async fn update(&self, code: &str, payload: &UpdateProductPayload) -> Result<(), AppError> {
        let _: Value = self.api.put(&format!("/api/productos/{}", code), payload).await?;
        Ok(())
    }

    pub async fn set_status(&self, code: &str, status: ProductStatus) -> Result<(), AppError> {
        let _: Value = self
            .api
            .put(&format!("/api/productos/estado/{}", code), &StatusChange { status })
            .await?;
        Ok(())
    }

    pub async fn inactivate(&self, code: &str) -> Result<(), AppError> {
        let _: Value = self
            .api
            .patch_empty(&format!("/api/productos/{}/inactivar", code))
            .await?;
        Ok(())
    }

    /// Envia a planilha. Um erro com `errores` no corpo vira
    /// [`AppError::ImportRejected`].
    pub async fn import(&self, payload: &ImportPayload) -> Result<ImportResponse, AppError> {
        self.api
            .post("/api/productos/importar-productos", payload)
            .await
            .map_err(import_errors)
    }

    pub async fn download(&self, url: &str) -> Result<Vec<u8>, AppError> {
        self.api.download(url).await
    }
}

// Corpo de erro com `errores` vira ImportRejected; o resto passa adiante
fn import_errors(err: AppError) -> AppError {
    if let AppError::ApiError { body, .. } = &err {
        if let Ok(report) = serde_json::from_value::<ImportResponse>(body.clone()) {
            if !report.errores.is_empty() {
                return AppError::ImportRejected(report.errores);
            }
        }
    }
    err
}

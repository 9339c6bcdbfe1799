// src/api/client_repo.rs

use serde_json::Value;

use crate::{
    api::http::ApiClient,
    common::error::AppError,
    models::client::{Client, ClientPayload},
};

// Repositório de clientes: /api/clientes
#[derive(Clone)]
pub struct ClientRepository {
    api: ApiClient,
}

impl ClientRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        self.api.get("/api/clientes").await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Client, AppError> {
        self.api.get(&format!("/api/clientes/{}", id)).await
    }

    pub async fn create(&self, payload: &ClientPayload) -> Result<(), AppError> {
        // A resposta varia ({success} ou {mensaje}); só o status importa
        let _: Value = self.api.post("/api/clientes", payload).await?;
        Ok(())
    }

    pub async fn update(&self, id: i64, payload: &ClientPayload) -> Result<(), AppError> {
        let _: Value = self.api.put(&format!("/api/clientes/{}", id), payload).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.api.delete(&format!("/api/clientes/{}", id)).await
    }
}

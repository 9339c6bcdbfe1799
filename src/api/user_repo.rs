// src/api/user_repo.rs

use serde_json::Value;

use crate::{
    api::http::ApiClient,
    common::error::AppError,
    models::user::{CreateUserPayload, UpdateUserPayload, User},
};

// O repositório de usuários, responsável pelas rotas /api/usuarios
#[derive(Clone, Debug)]
pub struct UserRepository {
    api: ApiClient,
}

impl UserRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.api.get("/api/usuarios").await
    }

    // Não existe GET por id: busca a lista e filtra
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let users = self.list().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    pub async fn create(&self, payload: &CreateUserPayload) -> Result<(), AppError> {
        let _: Value = self.api.post("/api/usuarios", payload).await?;
        Ok(())
    }

    pub async fn update(&self, id: i64, payload: &UpdateUserPayload) -> Result<(), AppError> {
        let _: Value = self.api.put(&format!("/api/usuarios/{}", id), payload).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.api.delete(&format!("/api/usuarios/{}", id)).await
    }
}

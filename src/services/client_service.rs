// src/services/client_service.rs

use validator::Validate;

use crate::{
    api::ClientRepository,
    common::error::AppError,
    models::client::{Client, ClientPayload},
};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    pub fn new(repo: ClientRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        self.repo.list().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Client, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, payload: &ClientPayload) -> Result<(), AppError> {
        payload.validate()?;
        self.repo.create(payload).await?;
        tracing::info!("✅ Cliente registrado: {}", payload.name);
        Ok(())
    }

    pub async fn update(&self, id: i64, payload: &ClientPayload) -> Result<(), AppError> {
        payload.validate()?;
        self.repo.update(id, payload).await?;
        tracing::info!("✏️ Cliente {} atualizado", id);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        tracing::info!("🗑️ Cliente {} excluído", id);
        Ok(())
    }
}

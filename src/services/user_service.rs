// src/services/user_service.rs

use validator::Validate;

use crate::{
    api::UserRepository,
    common::error::AppError,
    models::user::{CreateUserPayload, UpdateUserPayload, User},
};

#[derive(Clone, Debug)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repo.list().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InvalidInput("Usuario no encontrado.".to_string()))
    }

    pub async fn create(&self, payload: &CreateUserPayload) -> Result<(), AppError> {
        payload.validate()?;
        self.repo.create(payload).await?;
        tracing::info!("✅ Usuário criado para o empregado {}", payload.employee_id);
        Ok(())
    }

    pub async fn update(&self, id: i64, payload: &UpdateUserPayload) -> Result<(), AppError> {
        payload.validate()?;
        self.repo.update(id, payload).await?;
        tracing::info!("✏️ Usuário {} atualizado", id);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        tracing::info!("🗑️ Usuário {} excluído", id);
        Ok(())
    }
}

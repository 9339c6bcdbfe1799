// src/services/auth.rs

use validator::Validate;

use crate::{
    api::AuthRepository,
    common::error::AppError,
    models::auth::{LoginUserPayload, SessionUser},
    session::SessionContext,
};

#[derive(Clone)]
pub struct AuthService {
    repo: AuthRepository,
    session: SessionContext,
}

impl AuthService {
    pub fn new(repo: AuthRepository, session: SessionContext) -> Self {
        Self { repo, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Autentica e grava o usuário retornado como sessão ativa.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, AppError> {
        let payload = LoginUserPayload::normalized(email, password);
        payload.validate()?;

        let user = self.repo.login(&payload).await?;
        self.session.set(user.clone()).await?;

        tracing::info!("✅ Login de {} (id {})", user.name, user.id);
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.clear().await?;
        tracing::info!("👋 Sessão encerrada");
        Ok(())
    }
}

/// Texto de boas-vindas mostrado após o login.
pub fn welcome_message(user: &SessionUser) -> String {
    format!("{} - Rol: {}", user.name, user.role)
}

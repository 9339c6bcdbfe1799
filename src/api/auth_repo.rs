// src/api/auth_repo.rs

use crate::{
    api::http::ApiClient,
    common::error::AppError,
    models::auth::{LoginResponse, LoginUserPayload, SessionUser},
};

#[derive(Clone)]
pub struct AuthRepository {
    api: ApiClient,
}

impl AuthRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // POST /api/auth/login
    pub async fn login(&self, payload: &LoginUserPayload) -> Result<SessionUser, AppError> {
        let response: LoginResponse = self.api.post("/api/auth/login", payload).await?;
        Ok(response.user)
    }
}

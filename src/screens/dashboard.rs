// src/screens/dashboard.rs

use crate::{
    common::error::AppError,
    models::auth::SessionUser,
    screens::Route,
    services::AuthService,
};

pub struct Dashboard {
    auth: AuthService,
    user: SessionUser,
}

impl Dashboard {
    pub fn open(auth: &AuthService) -> Result<Self, AppError> {
        let user = auth.session().require_user()?;
        Ok(Self {
            auth: auth.clone(),
            user,
        })
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub async fn logout(self) -> Result<Route, AppError> {
        self.auth.logout().await?;
        Ok(Route::Login)
    }
}

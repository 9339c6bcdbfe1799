// src/screens/login.rs

use crate::{
    common::error::{Alert, AppError},
    screens::Route,
    services::{auth::welcome_message, AuthService},
};

pub struct LoginScreen {
    auth: AuthService,
    pub email: String,
    pub password: String,
}

impl LoginScreen {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            email: String::new(),
            password: String::new(),
        }
    }

    pub async fn submit(&mut self) -> Result<(Alert, Route), AppError> {
        let user = self.auth.login(&self.email, &self.password).await?;
        self.password.clear();
        Ok((Alert::new("Bienvenido", welcome_message(&user)), Route::Dashboard))
    }
}

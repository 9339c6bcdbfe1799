// src/api/employee_repo.rs

use serde_json::Value;

use crate::{
    api::http::ApiClient,
    common::error::AppError,
    models::{
        employee::{Employee, EmployeePayload, EmployeeStatus},
        product::StatusChange,
    },
};

// As rotas de empregados ficam fora do prefixo /api
#[derive(Clone)]
pub struct EmployeeRepository {
    api: ApiClient,
}

impl EmployeeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.api.get("/empleados").await
    }

    pub async fn create(&self, payload: &EmployeePayload) -> Result<(), AppError> {
        let _: Value = self.api.post("/empleados", payload).await?;
        Ok(())
    }

    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<(), AppError> {
        let _: Value = self.api.put(&format!("/empleados/{}", id), payload).await?;
        Ok(())
    }

    pub async fn set_status(&self, id: i64, status: EmployeeStatus) -> Result<(), AppError> {
        let _: Value = self
            .api
            .patch(&format!("/empleados/estado/{}", id), &StatusChange { status })
            .await?;
        Ok(())
    }
}

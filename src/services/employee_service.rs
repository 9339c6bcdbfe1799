// src/services/employee_service.rs

use validator::Validate;

use crate::{
    api::EmployeeRepository,
    common::error::AppError,
    models::employee::{Employee, EmployeePayload, EmployeeStatus},
};

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.repo.list().await
    }

    pub async fn create(&self, payload: &EmployeePayload) -> Result<(), AppError> {
        payload.validate()?;
        self.repo.create(payload).await?;
        tracing::info!("✅ Empregado registrado: DNI {}", payload.dni);
        Ok(())
    }

    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<(), AppError> {
        payload.validate()?;
        self.repo.update(id, payload).await?;
        tracing::info!("✏️ Empregado {} atualizado", id);
        Ok(())
    }

    pub async fn set_status(&self, id: i64, status: EmployeeStatus) -> Result<(), AppError> {
        self.repo.set_status(id, status).await?;
        tracing::info!("🔄 Empregado {} agora está {:?}", id, status);
        Ok(())
    }
}

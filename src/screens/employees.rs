// src/screens/employees.rs

use crate::{
    common::error::{Alert, AppError},
    models::employee::{Employee, EmployeePayload, EmployeeStatus},
    screens::{contains_ignore_case, Route, SortOrder},
    services::EmployeeService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeSortKey {
    #[default]
    Name,
    Dni,
}

// =============================================================================
//  LISTAGEM
// =============================================================================

pub struct EmployeeList {
    service: EmployeeService,
    employees: Vec<Employee>,
    pub status_filter: Option<EmployeeStatus>,
    pub role_filter: Option<String>,
    pub sort_key: EmployeeSortKey,
    pub order: SortOrder,
}

impl EmployeeList {
    pub async fn open(service: &EmployeeService) -> Result<Self, AppError> {
        let mut list = Self {
            service: service.clone(),
            employees: Vec::new(),
            status_filter: None,
            role_filter: None,
            sort_key: EmployeeSortKey::Name,
            order: SortOrder::Ascending,
        };
        list.refresh().await?;
        Ok(list)
    }

    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.employees = self.service.list().await?;
        Ok(())
    }

    /// Cargos distintos, para o seletor de filtro.
    pub fn roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = self.employees.iter().map(|e| e.role.clone()).collect();
        roles.sort();
        roles.dedup();
        roles
    }

    pub fn visible(&self) -> Vec<&Employee> {
        let mut rows: Vec<&Employee> = self
            .employees
            .iter()
            .filter(|e| self.status_filter.is_none_or(|s| s == e.status))
            .filter(|e| self.role_filter.as_ref().is_none_or(|r| *r == e.role))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match self.sort_key {
                EmployeeSortKey::Name => a.first_names.cmp(&b.first_names),
                EmployeeSortKey::Dni => a.dni.cmp(&b.dni),
            };
            self.order.apply(ordering)
        });
        rows
    }

    /// Alterna Activo/Inactivo e atualiza só a linha confirmada.
    pub async fn toggle_status(&mut self, id: i64) -> Result<EmployeeStatus, AppError> {
        let current = self
            .employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.status)
            .ok_or_else(|| AppError::InvalidInput("Empleado no encontrado.".to_string()))?;

        let next = current.toggled();
        self.service.set_status(id, next).await?;

        if let Some(row) = self.employees.iter_mut().find(|e| e.id == id) {
            row.status = next;
        }
        Ok(next)
    }
}

// =============================================================================
//  CADASTRO
// =============================================================================

pub struct EmployeeForm {
    pub dni: String,
    pub first_names: String,
    pub last_names: String,
    pub role: String,
    pub status: EmployeeStatus,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            dni: String::new(),
            first_names: String::new(),
            last_names: String::new(),
            role: String::new(),
            status: EmployeeStatus::Active,
        }
    }
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit(&mut self, service: &EmployeeService) -> Result<(Alert, Route), AppError> {
        let payload = EmployeePayload {
            dni: self.dni.trim().to_string(),
            first_names: self.first_names.trim().to_string(),
            last_names: self.last_names.trim().to_string(),
            role: self.role.trim().to_string(),
            status: self.status,
        };
        service.create(&payload).await?;

        *self = Self::default();
        Ok((
            Alert::new("Éxito", "Empleado registrado correctamente."),
            Route::Back,
        ))
    }
}

// =============================================================================
//  BUSCA E EDIÇÃO
// =============================================================================

pub struct EmployeeSearch {
    service: EmployeeService,
    employees: Vec<Employee>,
    selected: Option<Employee>,
    pub first_names: String,
    pub last_names: String,
    pub role: String,
    pub status: EmployeeStatus,
}

impl EmployeeSearch {
    pub async fn open(service: &EmployeeService) -> Result<Self, AppError> {
        let employees = service.list().await?;
        Ok(Self {
            service: service.clone(),
            employees,
            selected: None,
            first_names: String::new(),
            last_names: String::new(),
            role: String::new(),
            status: EmployeeStatus::Active,
        })
    }

    /// DNI exato (8 caracteres).
    pub fn search_by_dni(&self, dni: &str) -> Result<Option<&Employee>, AppError> {
        let dni = dni.trim();
        if dni.len() != 8 {
            return Err(AppError::InvalidInput(
                "El DNI debe tener exactamente 8 dígitos.".to_string(),
            ));
        }
        Ok(self.employees.iter().find(|e| e.dni == dni))
    }

    /// Substring do nome completo.
    pub fn search_by_name(&self, query: &str) -> Vec<&Employee> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.employees
            .iter()
            .filter(|e| contains_ignore_case(&e.full_name(), query))
            .collect()
    }

    pub fn select(&mut self, id: i64) -> Result<&Employee, AppError> {
        let employee = self
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::InvalidInput("Empleado no encontrado.".to_string()))?;

        self.first_names = employee.first_names.clone();
        self.last_names = employee.last_names.clone();
        self.role = employee.role.clone();
        self.status = employee.status;
        Ok(&*self.selected.insert(employee))
    }

    pub fn selected(&self) -> Option<&Employee> {
        self.selected.as_ref()
    }

    /// O DNI não muda na atualização.
    pub async fn save(&mut self) -> Result<Alert, AppError> {
        let selected = self
            .selected
            .as_ref()
            .ok_or_else(|| AppError::InvalidInput("Seleccione un empleado.".to_string()))?;

        let payload = EmployeePayload {
            dni: selected.dni.clone(),
            first_names: self.first_names.trim().to_string(),
            last_names: self.last_names.trim().to_string(),
            role: self.role.trim().to_string(),
            status: self.status,
        };
        let id = selected.id;
        self.service.update(id, &payload).await?;

        self.employees = self.service.list().await?;
        self.selected = self.employees.iter().find(|e| e.id == id).cloned();
        Ok(Alert::new("Éxito", "Empleado actualizado correctamente."))
    }
}

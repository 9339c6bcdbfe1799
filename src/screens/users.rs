// src/screens/users.rs

use crate::{
    common::error::{Alert, AppError},
    models::{
        employee::Employee,
        user::{CreateUserPayload, UpdateUserPayload, User},
    },
    screens::{contains_ignore_case, Route},
    services::{EmployeeService, UserService},
};

// =============================================================================
//  LISTAGEM
// =============================================================================

pub struct UserList {
    service: UserService,
    users: Vec<User>,
    pub role_filter: Option<String>,
    pub search: String,
}

impl UserList {
    pub async fn open(service: &UserService) -> Result<Self, AppError> {
        let mut list = Self {
            service: service.clone(),
            users: Vec::new(),
            role_filter: None,
            search: String::new(),
        };
        list.refresh().await?;
        Ok(list)
    }

    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.users = self.service.list().await?;
        Ok(())
    }

    pub fn roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = self.users.iter().map(|u| u.role.clone()).collect();
        roles.sort();
        roles.dedup();
        roles
    }

    pub fn visible(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| self.role_filter.as_ref().is_none_or(|r| *r == u.role))
            .filter(|u| {
                contains_ignore_case(&u.name, &self.search)
                    || contains_ignore_case(&u.email, &self.search)
            })
            .collect()
    }

    /// Total de usuários cadastrados (sem filtros).
    pub fn total(&self) -> usize {
        self.users.len()
    }

    pub async fn delete(&mut self, id: i64) -> Result<Alert, AppError> {
        self.service.delete(id).await?;
        self.refresh().await?;
        Ok(Alert::new("Éxito", "Usuario eliminado correctamente."))
    }
}

// =============================================================================
//  CADASTRO
// =============================================================================

pub struct UserForm {
    service: UserService,
    employees: Vec<Employee>,
    employee: Option<Employee>,
    pub email: String,
    pub password: String,
}

impl UserForm {
    pub async fn open(users: &UserService, employees: &EmployeeService) -> Result<Self, AppError> {
        let employees = employees.list().await?;
        Ok(Self {
            service: users.clone(),
            employees,
            employee: None,
            email: String::new(),
            password: String::new(),
        })
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Escolhe o empregado; o papel vem do cargo dele.
    pub fn select_employee(&mut self, id: i64) -> Result<&Employee, AppError> {
        let employee = self
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::InvalidInput("Empleado no encontrado.".to_string()))?;
        Ok(&*self.employee.insert(employee))
    }

    pub fn role(&self) -> Option<&str> {
        self.employee.as_ref().map(|e| e.role.as_str())
    }

    pub async fn submit(&mut self) -> Result<(Alert, Route), AppError> {
        let employee = self.employee.as_ref().ok_or_else(|| {
            AppError::InvalidInput("Complete todos los campos obligatorios.".to_string())
        })?;

        let payload = CreateUserPayload {
            employee_id: employee.id,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: employee.role.clone(),
        };
        self.service.create(&payload).await?;

        self.employee = None;
        self.email.clear();
        self.password.clear();
        Ok((
            Alert::new("Éxito", "Usuario registrado correctamente."),
            Route::Back,
        ))
    }
}

// =============================================================================
//  EDIÇÃO
// =============================================================================

#[derive(Debug)]
pub struct UserEditor {
    service: UserService,
    id: i64,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl UserEditor {
    pub async fn open(service: &UserService, id: i64) -> Result<Self, AppError> {
        let user = service.find_by_id(id).await?;
        Ok(Self {
            service: service.clone(),
            id,
            email: user.email,
            password: String::new(),
            role: user.role,
        })
    }

    pub async fn save(&mut self) -> Result<(Alert, Route), AppError> {
        let payload = UpdateUserPayload {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role.trim().to_string(),
        };
        self.service.update(self.id, &payload).await?;

        self.password.clear();
        Ok((
            Alert::new("Éxito", "Usuario actualizado correctamente."),
            Route::Back,
        ))
    }
}

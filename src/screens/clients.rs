// src/screens/clients.rs

use crate::{
    common::error::{Alert, AppError},
    models::client::{Client, ClientPayload},
    screens::{contains_ignore_case, Route, SortOrder},
    services::ClientService,
};

// =============================================================================
//  LISTAGEM
// =============================================================================

pub struct ClientList {
    service: ClientService,
    clients: Vec<Client>,
    pub search: String,
    order: SortOrder,
}

impl ClientList {
    pub async fn open(service: &ClientService) -> Result<Self, AppError> {
        let mut list = Self {
            service: service.clone(),
            clients: Vec::new(),
            search: String::new(),
            order: SortOrder::Ascending,
        };
        list.refresh().await?;
        Ok(list)
    }

    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.clients = self.service.list().await?;
        Ok(())
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Filtra por nome ou documento e ordena pelo nome.
    pub fn visible(&self) -> Vec<&Client> {
        let mut rows: Vec<&Client> = self
            .clients
            .iter()
            .filter(|c| {
                self.search.trim().is_empty()
                    || contains_ignore_case(&c.name, &self.search)
                    || c.document.contains(self.search.trim())
            })
            .collect();

        rows.sort_by(|a, b| {
            self.order
                .apply(a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        rows
    }

    pub async fn delete(&mut self, id: i64) -> Result<Alert, AppError> {
        self.service.delete(id).await?;
        self.refresh().await?;
        Ok(Alert::new("Éxito", "Cliente eliminado correctamente."))
    }
}

// =============================================================================
//  CADASTRO
// =============================================================================

#[derive(Default)]
pub struct ClientForm {
    pub name: String,
    pub document: String,
    pub address: String,
    pub phone: String,
}

impl ClientForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit(&mut self, service: &ClientService) -> Result<(Alert, Route), AppError> {
        let payload = ClientPayload::new(&self.name, &self.document, &self.address, &self.phone);
        service.create(&payload).await?;

        *self = Self::default();
        Ok((
            Alert::new("Éxito", "Cliente registrado correctamente."),
            Route::Back,
        ))
    }
}

// =============================================================================
//  EDIÇÃO
// =============================================================================

pub struct ClientEditor {
    service: ClientService,
    id: i64,
    document: String,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl ClientEditor {
    pub async fn open(service: &ClientService, id: i64) -> Result<Self, AppError> {
        let client = service.find_by_id(id).await?;
        Ok(Self {
            service: service.clone(),
            id,
            document: client.document,
            name: client.name,
            address: client.address,
            phone: client.phone,
        })
    }

    /// O documento não é editável.
    pub fn document(&self) -> &str {
        &self.document
    }

    pub async fn save(&self) -> Result<(Alert, Route), AppError> {
        let payload = ClientPayload::new(&self.name, &self.document, &self.address, &self.phone);
        self.service.update(self.id, &payload).await?;
        Ok((
            Alert::new("Éxito", "Cliente actualizado correctamente."),
            Route::Back,
        ))
    }
}

// src/screens/request_creator.rs

use chrono::{Local, NaiveDate};

use crate::{
    common::error::{Alert, AppError},
    models::{
        auth::SessionUser,
        client::Client,
        request::{CreateRequestPayload, DuplicateRequest, MaterialRequest, RequestState},
    },
    screens::Route,
    services::{ClientService, RequestService},
    session::SessionContext,
};

/// Resultado do envio do formulário de criação.
#[derive(Debug, Clone, PartialEq)]
pub enum CreationOutcome {
    /// Criada como pendente: seguir para a inclusão de itens.
    AddLineItems { request_id: i64 },
    /// Criada, mas o servidor já devolveu um estado que não aceita itens.
    Locked { request: MaterialRequest, notice: Alert },
    /// Já existe solicitação para o cliente na data.
    Duplicate(DuplicateRequest),
}

impl CreationOutcome {
    pub fn route(&self) -> Option<Route> {
        match self {
            CreationOutcome::AddLineItems { request_id } => Some(Route::LineItemEditor {
                request_id: *request_id,
            }),
            CreationOutcome::Locked { .. } => Some(Route::RequestLister),
            CreationOutcome::Duplicate(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct RequestCreator {
    service: RequestService,
    user: SessionUser,
    clients: Vec<Client>,
    selected: Option<i64>,
    // payload e resposta do último 409, para a rota de sobrescrita
    duplicate: Option<(CreateRequestPayload, DuplicateRequest)>,
}

impl RequestCreator {
    pub async fn open(
        service: &RequestService,
        clients: &ClientService,
        session: &SessionContext,
    ) -> Result<Self, AppError> {
        let user = session.require_user()?;
        let clients = clients.list().await?;

        Ok(Self {
            service: service.clone(),
            user,
            clients,
            selected: None,
            duplicate: None,
        })
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn selected_client(&self) -> Option<i64> {
        self.selected
    }

    pub fn select_client(&mut self, id: i64) -> Result<(), AppError> {
        if !self.clients.iter().any(|c| c.id == id) {
            return Err(AppError::InvalidInput("Cliente no encontrado.".to_string()));
        }
        self.selected = Some(id);
        self.duplicate = None;
        Ok(())
    }

    /// Cria com a data local de hoje.
    pub async fn submit(&mut self) -> Result<CreationOutcome, AppError> {
        self.submit_on(Local::now().date_naive()).await
    }

    pub async fn submit_on(&mut self, date: NaiveDate) -> Result<CreationOutcome, AppError> {
        let client_id = self
            .selected
            .ok_or_else(|| AppError::InvalidInput("Seleccione un cliente.".to_string()))?;

        let payload = CreateRequestPayload {
            client_id,
            user_id: self.user.id,
            date,
        };
        self.duplicate = None;

        match self.service.create(&payload).await {
            Ok(request) => Ok(outcome_for(request)),
            Err(AppError::DuplicateRequest(dup)) => {
                self.duplicate = Some((payload, dup.clone()));
                Ok(CreationOutcome::Duplicate(dup))
            }
            Err(e) => Err(e),
        }
    }

    pub fn duplicate(&self) -> Option<&DuplicateRequest> {
        self.duplicate.as_ref().map(|(_, dup)| dup)
    }

    /// Só há rota de sobrescrita se o servidor marcou `puedeContinuar`.
    pub fn can_force(&self) -> bool {
        self.duplicate().is_some_and(|dup| dup.can_force)
    }

    /// Reenvia o mesmo payload para a rota `forzar`.
    pub async fn force_create(&mut self) -> Result<CreationOutcome, AppError> {
        let payload = match &self.duplicate {
            Some((payload, dup)) if dup.can_force => payload.clone(),
            _ => {
                return Err(AppError::InvalidInput(
                    "La solicitud existente no puede ser reemplazada.".to_string(),
                ));
            }
        };

        let request = self.service.force_create(&payload).await?;
        self.duplicate = None;
        Ok(CreationOutcome::AddLineItems {
            request_id: request.id,
        })
    }
}

fn outcome_for(request: MaterialRequest) -> CreationOutcome {
    if request.state == RequestState::Pending {
        return CreationOutcome::AddLineItems {
            request_id: request.id,
        };
    }

    let notice = Alert::new(
        "Aviso",
        format!(
            "La solicitud fue creada con estado {}. No es posible agregar productos.",
            request.state
        ),
    );
    CreationOutcome::Locked { request, notice }
}

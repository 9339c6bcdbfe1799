// src/screens/request_lister.rs

use std::collections::HashSet;
use std::sync::Mutex;

use crate::{
    common::error::AppError,
    models::request::{RequestHistoryEntry, RequestState, RequestSummary},
    screens::{contains_ignore_case, request_detail::DocumentViewer},
    services::{request_service::ensure_transition, RequestService},
    session::SessionContext,
};

/// Filtros da lista de solicitações, todos por trecho de texto
/// (`"2024-05"` casa com qualquer dia de maio).
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    pub client: String,
    pub state: String,
    pub date: String,
}

impl RequestFilter {
    fn matches(&self, row: &RequestSummary) -> bool {
        contains_ignore_case(&row.client_name, &self.client)
            && contains_ignore_case(row.state.label(), &self.state)
            && row.date.format("%Y-%m-%d").to_string().contains(self.date.trim())
    }
}

#[derive(Default)]
struct ListerState {
    requests: Vec<RequestSummary>,
    in_flight: HashSet<i64>,
}

/// Lista das solicitações do usuário, com o gatilho de envio.
///
/// O estado fica atrás de um `Mutex` que nunca atravessa um `.await`, então
/// `send_to_fulfillment` recebe `&self` e detecta um segundo envio
/// concorrente para o mesmo id.
pub struct RequestLister {
    service: RequestService,
    user_id: i64,
    state: Mutex<ListerState>,
}

// Remove o id do conjunto em andamento ao sair do escopo, com ou sem erro
struct InFlight<'a> {
    state: &'a Mutex<ListerState>,
    id: i64,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .in_flight
            .remove(&self.id);
    }
}

impl RequestLister {
    pub async fn open(service: &RequestService, session: &SessionContext) -> Result<Self, AppError> {
        let user = session.require_user()?;
        let lister = Self {
            service: service.clone(),
            user_id: user.id,
            state: Mutex::new(ListerState::default()),
        };
        lister.refresh().await?;
        Ok(lister)
    }

    pub async fn refresh(&self) -> Result<(), AppError> {
        let requests = self.service.list_by_user(self.user_id).await?;
        self.lock().requests = requests;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ListerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn requests(&self) -> Vec<RequestSummary> {
        self.lock().requests.clone()
    }

    pub fn visible(&self, filter: &RequestFilter) -> Vec<RequestSummary> {
        self.lock()
            .requests
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect()
    }

    pub fn state_of(&self, id: i64) -> Option<RequestState> {
        self.lock().requests.iter().find(|r| r.id == id).map(|r| r.state)
    }

    pub fn can_send(&self, id: i64) -> bool {
        let st = self.lock();
        let pending = st
            .requests
            .iter()
            .any(|r| r.id == id && r.state.can_transition_to(RequestState::Sent));
        pending && !st.in_flight.contains(&id)
    }

    /// Pendiente -> Enviada, seguido de uma nova leitura da lista.
    pub async fn send_to_fulfillment(&self, id: i64) -> Result<(), AppError> {
        {
            let mut st = self.lock();
            let current = st
                .requests
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.state)
                .ok_or_else(|| AppError::InvalidInput("Solicitud no encontrada.".to_string()))?;

            ensure_transition(id, current, RequestState::Sent)?;

            if !st.in_flight.insert(id) {
                tracing::warn!("⏳ Envio da solicitação {} já em andamento", id);
                return Err(AppError::TransitionInFlight(id));
            }
        }

        let _guard = InFlight {
            state: &self.state,
            id,
        };

        self.service.send_to_fulfillment(id).await?;

        // O envio já foi confirmado; uma releitura que falha não o desfaz
        if let Err(e) = self.refresh().await {
            tracing::warn!("⚠️ Solicitação {} enviada, mas a lista não foi atualizada: {}", id, e);
            if let Some(row) = self.lock().requests.iter_mut().find(|r| r.id == id) {
                row.state = RequestState::Sent;
            }
        }
        Ok(())
    }
}

// =============================================================================
//  HISTÓRICO
// =============================================================================

pub struct RequestHistory {
    service: RequestService,
    entries: Vec<RequestHistoryEntry>,
}

impl RequestHistory {
    pub async fn open(service: &RequestService, session: &SessionContext) -> Result<Self, AppError> {
        let user = session.require_user()?;
        let entries = service.history(user.id).await?;
        Ok(Self {
            service: service.clone(),
            entries,
        })
    }

    pub fn entries(&self) -> &[RequestHistoryEntry] {
        &self.entries
    }

    /// URL do PDF; só para solicitações que já saíram de pendente.
    pub fn pdf_url(&self, id: i64) -> Result<String, AppError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.summary.id == id)
            .ok_or_else(|| AppError::InvalidInput("Solicitud no encontrada.".to_string()))?;

        if entry.summary.state == RequestState::Pending {
            return Err(AppError::InvalidInput(
                "El PDF solo está disponible para solicitudes enviadas.".to_string(),
            ));
        }
        Ok(self.service.pdf_url(id))
    }

    pub fn open_pdf(&self, id: i64, viewer: &dyn DocumentViewer) -> Result<(), AppError> {
        let url = self.pdf_url(id)?;
        viewer.open(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, client: &str, date: &str, state: RequestState) -> RequestSummary {
        RequestSummary {
            id,
            client_name: client.into(),
            date: date.parse().unwrap(),
            state,
            version: None,
        }
    }

    #[test]
    fn filter_combines_client_state_and_date() {
        let rows = [
            row(1, "Ferretería Sur", "2024-05-01", RequestState::Pending),
            row(2, "Constructora Norte", "2024-05-01", RequestState::Sent),
            row(3, "Ferretería Sur", "2024-06-02", RequestState::Sent),
        ];

        let filter = RequestFilter {
            client: "sur".into(),
            ..Default::default()
        };
        assert_eq!(rows.iter().filter(|r| filter.matches(r)).count(), 2);

        let filter = RequestFilter {
            client: "sur".into(),
            state: "enviada".into(),
            date: String::new(),
        };
        let ids: Vec<_> = rows.iter().filter(|r| filter.matches(r)).map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);

        let filter = RequestFilter {
            date: "2024-05-01".into(),
            ..Default::default()
        };
        assert_eq!(rows.iter().filter(|r| filter.matches(r)).count(), 2);
    }

    #[test]
    fn partial_state_and_date_match_by_substring() {
        let rows = [
            row(1, "Ferretería Sur", "2024-05-01", RequestState::Pending),
            row(2, "Constructora Norte", "2024-05-17", RequestState::Approved),
            row(3, "Ferretería Sur", "2024-06-02", RequestState::Sent),
        ];

        let filter = RequestFilter {
            date: "2024-05".into(),
            ..Default::default()
        };
        let ids: Vec<_> = rows.iter().filter(|r| filter.matches(r)).map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let filter = RequestFilter {
            state: "PEND".into(),
            ..Default::default()
        };
        let ids: Vec<_> = rows.iter().filter(|r| filter.matches(r)).map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }
}

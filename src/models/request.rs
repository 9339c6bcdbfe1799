// src/models/request.rs

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// --- Enums ---

/// Ciclo de vida de uma solicitação de materiais.
///
/// `Pending` é o único estado editável pelo cliente. A única transição que o
/// cliente dispara é `Pending -> Sent`; `Approved`/`Rejected` são definidos
/// pela logística.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestState {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Enviada")]
    Sent,
    #[serde(rename = "Aprobada")]
    Approved,
    #[serde(rename = "Rechazada")]
    Rejected,
    // Qualquer rótulo desconhecido vindo do servidor cai aqui e fica bloqueado
    #[serde(other)]
    Unknown,
}

impl RequestState {
    pub fn is_editable(self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RequestState::Approved | RequestState::Rejected)
    }

    /// Tabela de transições válidas.
    pub fn can_transition_to(self, next: RequestState) -> bool {
        matches!(
            (self, next),
            (RequestState::Pending, RequestState::Sent)
                | (RequestState::Sent, RequestState::Approved)
                | (RequestState::Sent, RequestState::Rejected)
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestState::Pending => "Pendiente",
            RequestState::Sent => "Enviada",
            RequestState::Approved => "Aprobada",
            RequestState::Rejected => "Rechazada",
            RequestState::Unknown => "Desconocido",
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- Solicitação ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRequest {
    pub id: i64,
    #[serde(rename = "cliente_id", default)]
    pub client_id: Option<i64>,
    #[serde(rename = "usuario_id", default)]
    pub user_id: Option<i64>,
    #[serde(rename = "fecha", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "estado")]
    pub state: RequestState,
    // O servidor incrementa, mas o cliente nunca envia de volta
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(rename = "ultima_actualizacion", default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "ajustada", default)]
    pub adjusted: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    #[serde(rename = "detalle_id")]
    pub id: i64,
    #[serde(rename = "producto_codigo", default)]
    pub product_code: Option<String>,
    #[serde(rename = "nombre")]
    pub product_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u64,
    #[serde(rename = "observacion", default)]
    pub note: Option<String>,
}

/// Resposta de `GET /api/solicitudes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestDetail {
    pub id: i64,
    #[serde(rename = "estado")]
    pub state: RequestState,
    #[serde(rename = "cliente", default)]
    pub client_name: Option<String>,
    #[serde(rename = "fecha", default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(rename = "detalles", default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestSummary {
    pub id: i64,
    #[serde(rename = "cliente", default)]
    pub client_name: String,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "estado")]
    pub state: RequestState,
    #[serde(default)]
    pub version: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestHistoryEntry {
    #[serde(flatten)]
    pub summary: RequestSummary,
    #[serde(rename = "ultima_actualizacion", default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "ajustada", default)]
    pub adjusted: bool,
}

// --- Payloads ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRequestPayload {
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLineItem {
    #[serde(rename = "solicitud_id")]
    pub request_id: i64,
    #[serde(rename = "producto_codigo")]
    pub product_code: String,
    #[serde(rename = "cantidad")]
    pub quantity: u64,
    #[serde(rename = "observacion")]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItemUpdate {
    #[serde(rename = "cantidad")]
    pub quantity: u64,
    #[serde(rename = "observacion")]
    pub note: String,
}

/// Corpo do 409 quando já existe solicitação para o mesmo cliente e data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuplicateRequest {
    pub message: String,
    #[serde(rename = "estado")]
    pub state: RequestState,
    #[serde(rename = "puedeContinuar", default)]
    pub can_force: bool,
}

/// Resposta genérica `{ "message": "..." }` das rotas de escrita.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl ServerMessage {
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.mensaje.as_deref())
    }
}

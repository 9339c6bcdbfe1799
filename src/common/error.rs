// src/common/error.rs

use serde_json::Value;
use thiserror::Error;

use crate::common::validation;
use crate::models::request::{DuplicateRequest, RequestState};

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Regra de campo verificada antes de qualquer chamada de rede
    #[error("{0}")]
    InvalidInput(String),

    #[error("Nenhuma sessão ativa")]
    NoActiveSession,

    #[error("A solicitação {id} não está pendente (estado: {state})")]
    RequestNotEditable { id: i64, state: RequestState },

    #[error("Transição inválida da solicitação {id}: {from} -> {to}")]
    InvalidTransition {
        id: i64,
        from: RequestState,
        to: RequestState,
    },

    #[error("Já existe um envio em andamento para a solicitação {0}")]
    TransitionInFlight(i64),

    #[error("O produto {0} já está na lista")]
    DuplicateLineItem(String),

    #[error("Solicitação duplicada para o mesmo cliente e data (estado: {})", .0.state)]
    DuplicateRequest(DuplicateRequest),

    // Gravações sequenciais não têm rollback: `persisted` itens ficaram no servidor
    #[error("Falha ao salvar: {persisted} de {total} itens gravados antes do erro")]
    PartialSave {
        persisted: usize,
        total: usize,
        #[source]
        source: Box<AppError>,
    },

    #[error("A importação foi recusada")]
    ImportRejected(Vec<String>),

    #[error("Erro da API ({status})")]
    ApiError {
        status: u16,
        message: Option<String>,
        body: Value,
    },

    #[error("Resposta inesperada do servidor: {0}")]
    UnexpectedResponse(String),

    #[error("Falha de comunicação com o servidor: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Erro ao acessar a sessão local: {0}")]
    SessionStorage(#[from] std::io::Error),

    #[error("Erro de serialização: {0}")]
    SerializationError(#[from] serde_json::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno")]
    InternalError(#[from] anyhow::Error),
}

/// O alerta modal que a tela mostra ao usuário.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

impl Alert {
    pub fn new(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::ApiError { status, .. } => Some(*status),
            AppError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Converte o erro no alerta exibido pela tela.
    ///
    /// Mensagens vindas do servidor são repassadas como estão; quando não há
    /// mensagem, usa-se `fallback`.
    pub fn alert(&self, fallback: &str) -> Alert {
        match self {
            AppError::ValidationError(errors) => {
                Alert::new("Validación", validation::messages(errors).join("\n"))
            }
            AppError::InvalidInput(msg) => Alert::new("Error", msg.clone()),
            AppError::NoActiveSession => Alert::new("Error", "No se encontró una sesión activa."),
            AppError::RequestNotEditable { .. } => {
                Alert::new("Aviso", "La solicitud ya no está en estado pendiente.")
            }
            AppError::InvalidTransition { from, .. } => Alert::new(
                "Aviso",
                format!("La solicitud no puede enviarse en estado {from}."),
            ),
            AppError::TransitionInFlight(_) => {
                Alert::new("Aviso", "El envío de esta solicitud ya está en curso.")
            }
            AppError::DuplicateLineItem(_) => {
                Alert::new("Aviso", "Este producto ya fue agregado a la lista.")
            }
            AppError::DuplicateRequest(dup) => Alert::new(
                "Aviso",
                format!(
                    "Ya registraste una solicitud para este cliente hoy. Estado: {}",
                    dup.state
                ),
            ),
            AppError::PartialSave {
                persisted: 0,
                source,
                ..
            } => source.alert(fallback),
            AppError::PartialSave {
                persisted,
                total,
                source,
            } => {
                let alert = source.alert(fallback);
                Alert::new(
                    alert.title,
                    format!("{}\n({} de {} ítems ya fueron guardados)", alert.message, persisted, total),
                )
            }
            AppError::ImportRejected(errors) => Alert::new("Errores encontrados", errors.join("\n")),
            AppError::ApiError {
                message: Some(msg), ..
            } => Alert::new("Error", msg.clone()),
            AppError::NetworkError(e) if e.is_connect() || e.is_timeout() => {
                Alert::new("Error", "No se pudo conectar con el servidor.")
            }
            ref e => {
                tracing::error!("Erro sem mensagem para o usuário: {}", e);
                Alert::new("Error", fallback)
            }
        }
    }
}

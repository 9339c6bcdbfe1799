// src/session.rs

//! Sessão do usuário logado.
//!
//! O único dado persistido localmente é o [`SessionUser`]. O `SessionContext`
//! guarda uma cópia em memória e grava/limpa o armazenamento de forma
//! explícita (`load`, `set`, `clear`).

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;

use crate::{common::error::AppError, models::auth::SessionUser};

/// Armazenamento plugável da sessão.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<SessionUser>, AppError>;
    async fn save(&self, user: &SessionUser) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}

// =============================================================================
//  ARQUIVO JSON
// =============================================================================

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<SessionUser>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn save(&self, user: &SessionUser) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(user)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
//  MEMÓRIA
// =============================================================================

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<SessionUser>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: SessionUser) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<SessionUser>, AppError> {
        Ok(self.user.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn save(&self, user: &SessionUser) -> Result<(), AppError> {
        *self.user.lock().unwrap_or_else(|e| e.into_inner()) = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        *self.user.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

// =============================================================================
//  CONTEXTO
// =============================================================================

/// Sessão compartilhada entre as telas.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: Arc<RwLock<Option<SessionUser>>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: Arc::new(RwLock::new(None)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    /// Lê o armazenamento para a memória.
    pub async fn load(&self) -> Result<Option<SessionUser>, AppError> {
        let user = self.store.load().await?;
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = user.clone();

        if let Some(u) = &user {
            tracing::info!("🔑 Sessão restaurada para o usuário {}", u.id);
        }
        Ok(user)
    }

    pub async fn set(&self, user: SessionUser) -> Result<(), AppError> {
        self.store.save(&user).await?;
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(user);
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        self.store.clear().await?;
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }

    pub fn current(&self) -> Option<SessionUser> {
        self.current.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Usuário logado com id válido, ou erro.
    pub fn require_user(&self) -> Result<SessionUser, AppError> {
        let user = self.current().ok_or(AppError::NoActiveSession)?;
        if user.id <= 0 {
            return Err(AppError::InvalidInput("Usuario inválido.".to_string()));
        }
        Ok(user)
    }
}

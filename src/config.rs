// src/config.rs

use std::{env, path::PathBuf, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{
        ApiClient, AuthRepository, ClientRepository, EmployeeRepository, ProductRepository,
        RequestRepository, UserRepository,
    },
    services::{
        AuthService, ClientService, EmployeeService, ProductService, RequestService, UserService,
    },
    session::{FileSessionStore, SessionContext},
};

pub const DEFAULT_SESSION_FILE: &str = ".bax/session.json";
pub const DEFAULT_TEMPLATE_URL: &str =
    "http://baxperu.com/prueba/appPrueba/plantilla-productos.xlsx";

/// Configuração lida do ambiente (com `.env` opcional).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub import_template_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL deve ser definida")?;
        let session_file = env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));
        let import_template_url =
            env::var("IMPORT_TEMPLATE_URL").unwrap_or_else(|_| DEFAULT_TEMPLATE_URL.to_string());

        Ok(Self {
            api_base_url,
            session_file,
            import_template_url,
        })
    }
}

/// Inicializa o logger. Pode ser chamada mais de uma vez.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

// O estado compartilhado: cliente HTTP, serviços e sessão
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub session: SessionContext,
    pub auth_service: AuthService,
    pub client_service: ClientService,
    pub employee_service: EmployeeService,
    pub product_service: ProductService,
    pub request_service: RequestService,
    pub user_service: UserService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let session = SessionContext::new(Arc::new(FileSessionStore::new(&config.session_file)));

        let state = Self::with_config(config, session);
        state
            .session
            .load()
            .await
            .context("Falha ao carregar a sessão local")?;

        tracing::info!("✅ Cliente configurado para {}", state.config.api_base_url);
        Ok(state)
    }

    /// Monta o gráfico de dependências sem tocar no ambiente.
    pub fn with_config(config: AppConfig, session: SessionContext) -> Self {
        let api = ApiClient::new(config.api_base_url.clone());

        let auth_service = AuthService::new(AuthRepository::new(api.clone()), session.clone());
        let client_service = ClientService::new(ClientRepository::new(api.clone()));
        let employee_service = EmployeeService::new(EmployeeRepository::new(api.clone()));
        let product_service = ProductService::new(
            ProductRepository::new(api.clone()),
            config.import_template_url.clone(),
        );
        let request_service = RequestService::new(RequestRepository::new(api.clone()));
        let user_service = UserService::new(UserRepository::new(api));

        Self {
            config,
            session,
            auth_service,
            client_service,
            employee_service,
            product_service,
            request_service,
            user_service,
        }
    }
}

// src/api/http.rs

//! Cliente HTTP compartilhado pelos repositórios.
//!
//! Todas as rotas da API do back-office passam por aqui: monta a URL a partir
//! da base configurada, serializa o corpo em JSON e converte respostas fora
//! da faixa 2xx em [`AppError::ApiError`].

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::common::error::AppError;

/// Cliente da API remota. Barato de clonar (o `reqwest::Client` é um `Arc`).
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// * `base_url` - URL base, ex.: `http://192.168.1.64:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reaproveita um `reqwest::Client` existente (pool de conexões).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL absoluta de uma rota (`path` começa com `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.client.get(self.url(path));
        Self::fetch_json(request).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.url(path)).query(query);
        Self::fetch_json(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        Self::fetch_json(request).await
    }

    /// `POST` sem corpo (gatilhos como envio e geração de PDF).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.client.post(self.url(path));
        Self::fetch_json(request).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.put(self.url(path)).json(body);
        Self::fetch_json(request).await
    }

    /// `PUT` que devolve só o status, para quem precisa distinguir 200 de
    /// outros códigos de sucesso.
    pub async fn put_status<B>(&self, path: &str, body: &B) -> Result<StatusCode, AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.status())
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.patch(self.url(path)).json(body);
        Self::fetch_json(request).await
    }

    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.client.patch(self.url(path));
        Self::fetch_json(request).await
    }

    /// `DELETE`; o corpo da resposta é ignorado.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Sonda de existência via `HEAD`: 2xx = existe, 404 = não existe.
    pub async fn exists(&self, path: &str) -> Result<bool, AppError> {
        let response = self.client.head(self.url(path)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::ensure_success(response).await?;
        Ok(true)
    }

    /// Baixa bytes de uma URL absoluta (pode estar fora da API).
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    // ---- helpers privados ----

    async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await?;
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;

        // Algumas rotas de escrita respondem 2xx sem corpo
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|e| AppError::UnexpectedResponse(e.to_string()))
    }

    /// Garante status de sucesso. Em caso de falha, devolve
    /// [`AppError::ApiError`] com o corpo e a mensagem extraída dele.
    async fn ensure_success(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
        let message = error_message(&body);

        tracing::warn!(status = status.as_u16(), "API respondeu com erro: {:?}", message);

        Err(AppError::ApiError {
            status: status.as_u16(),
            message,
            body,
        })
    }
}

/// Extrai a mensagem de erro do corpo (`error`, `message` ou `mensaje`).
fn error_message(body: &Value) -> Option<String> {
    match body {
        Value::Object(map) => ["error", "message", "mensaje"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

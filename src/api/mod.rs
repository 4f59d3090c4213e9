//! REST API Client
//!
//! Thin client over the content API, organized by domain. Every request
//! carries the stored bearer token when there is one.

mod auth;
mod categories;
mod error;
mod generation;
mod menus;
mod posts;

#[cfg(test)]
mod tests;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::session::Session;

// Re-export all public items
pub use auth::*;
pub use categories::*;
pub use error::ApiError;
pub use generation::Generation;
pub use menus::*;
pub use posts::*;

/// Query for requests without parameters
pub const NO_QUERY: &[(&str, &str)] = &[];

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base: &str, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> Result<String, ApiError> {
        if !(self.base.starts_with("http://") || self.base.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(self.base.clone()));
        }
        Ok(format!("{}/{}", self.base, path.trim_start_matches('/')))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, self.url(path)?);
        Ok(match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder, label: &str) -> Result<Response, ApiError> {
        debug!("[API] {}", label);
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        warn!("[API] {} failed: {}", label, err);
        Err(err)
    }

    /// Decode a JSON body; an empty body decodes as `null`
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let text = response.text().await?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(text)?)
    }

    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path)?.query(query);
        let response = self.send(builder, &format!("GET {}", path)).await?;
        Self::decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path)?.json(body);
        let response = self.send(builder, &format!("POST {}", path)).await?;
        Self::decode(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path)?.json(body);
        let response = self.send(builder, &format!("PUT {}", path)).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, path)?;
        self.send(builder, &format!("DELETE {}", path)).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path)?.multipart(form);
        let response = self.send(builder, &format!("POST {} (multipart)", path)).await?;
        Self::decode(response).await
    }
}

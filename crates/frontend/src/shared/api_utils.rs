//! HTTP client for the admin REST API.
//!
//! Every resource module takes an `&ApiClient`. The client carries the
//! session it was built with; it never reads the token store on its own.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use super::api_error::ApiError;
use super::config::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Bearer credentials of the signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Option<Session>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Client for unauthenticated calls such as login.
    pub fn anonymous() -> Self {
        Self::new(config().api_base_url.clone(), None)
    }

    pub fn with_session(session: Session) -> Self {
        Self::new(config().api_base_url.clone(), Some(session))
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn builder(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        match &self.session {
            Some(session) => builder.header("Authorization", &session.authorization()),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .builder(HttpMethod::Get, path)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        decode(self.execute(request, path).await?).await
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self
            .builder(HttpMethod::Get, path)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(request, path)
            .await?
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// JSON body in, JSON body out.
    pub async fn send_json<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        decode(self.execute(request, path).await?).await
    }

    /// JSON body in, response body ignored.
    pub async fn send_json_no_content<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(request, path).await.map(|_| ())
    }

    /// No body either way (DELETE, state toggles carried in the query).
    pub async fn send_no_content(&self, method: HttpMethod, path: &str) -> Result<(), ApiError> {
        let request = self
            .builder(method, path)
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(request, path).await.map(|_| ())
    }

    /// Multipart body. The browser sets the boundary header itself.
    pub async fn send_form_no_content(
        &self,
        method: HttpMethod,
        path: &str,
        form: &FormData,
    ) -> Result<(), ApiError> {
        let request = self
            .builder(method, path)
            .body(form.clone())
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(request, path).await.map(|_| ())
    }

    async fn execute(&self, request: Request, path: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            log::error!("Request to {} failed: {}", path, e);
            ApiError::Network(e.to_string())
        })?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        let error = match ApiError::from_response(status, &status_text, &body) {
            // Without a session a 401 is a rejected credential, not an expiry.
            ApiError::Unauthorized if self.session.is_none() => {
                ApiError::rejected(status, &status_text, &body)
            }
            other => other,
        };
        log::warn!("{} -> {}: {}", path, status, error);
        Err(error)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Builds a multipart form from text fields and optional file fields.
/// Files that are `None` are left out.
pub fn build_form(
    fields: &[(&str, String)],
    files: &[(&str, Option<File>)],
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    }
    for (name, file) in files {
        if let Some(file) = file {
            form.append_with_blob(name, file)
                .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        }
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let client = ApiClient::new("https://api.test/", None);
        assert_eq!(client.url("/Admin/Category"), "https://api.test/Admin/Category");
        assert_eq!(client.url("Admin/User/3"), "https://api.test/Admin/User/3");
    }

    #[test]
    fn test_session_header() {
        let session = Session::new("abc.def.ghi");
        assert_eq!(session.authorization(), "Bearer abc.def.ghi");
        let client = ApiClient::new("https://api.test", Some(session.clone()));
        assert_eq!(client.session(), Some(&session));
    }
}

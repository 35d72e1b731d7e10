use reqwest::{header, Client, RequestBuilder};

use crate::{config, state::session::Session};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Option<Session>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session: None,
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Adds the bearer token when the session holds one.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.as_ref().and_then(Session::token) {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn explicit_base_url_is_normalized() {
        let api = ApiClient::new_with_base_url("http://localhost:8686/api/");
        assert_eq!(api.resolved_base_url().await, "http://localhost:8686/api");
    }

    #[test]
    fn authorize_adds_bearer_header_only_with_token() {
        let session = Session::in_memory();
        let api = ApiClient::new_with_base_url("http://localhost").with_session(session.clone());

        let request = api
            .authorize(api.http_client().get("http://localhost/v1/products"))
            .build()
            .unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());

        session.sign_in("t0k3n").unwrap();
        let request = api
            .authorize(api.http_client().get("http://localhost/v1/products"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer t0k3n"
        );
    }
}

use crate::api::client::ApiClient;
use crate::api::types::ProductsResponse;
use thiserror::Error;

/// Why a product page could not be loaded.
///
/// Every variant is shown to the user as the same message; the variant is
/// only reported to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    TransportFailure,
    NonSuccessStatus,
    MalformedBody,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Transport(_) => LoadErrorKind::TransportFailure,
            LoadError::Status(_) => LoadErrorKind::NonSuccessStatus,
            LoadError::MalformedBody(_) => LoadErrorKind::MalformedBody,
        }
    }
}

impl ApiClient {
    pub async fn list_products(&self, page: u32) -> Result<ProductsResponse, LoadError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/v1/products", base_url))
            .query(&[("page", page)]);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let parsed: ProductsResponse =
            serde_json::from_str(&body).map_err(|e| LoadError::MalformedBody(e.to_string()))?;

        if !parsed.meta.is_consistent() {
            return Err(LoadError::MalformedBody(format!(
                "inconsistent pagination: current_page {}, last_page {}",
                parsed.meta.current_page, parsed.meta.last_page
            )));
        }
        Ok(parsed)
    }
}

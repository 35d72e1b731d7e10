use crate::api::client::ApiClient;
use crate::api::types::{ApiError, LoginRequest, LoginResponse};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

impl ApiClient {
    /// Exchanges credentials for a token and stores it in the attached session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Login request failed: {}", e);
                ApiError::request_failed(INVALID_CREDENTIALS_MESSAGE)
            })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Login rejected with status {}", status);
            return Err(ApiError::request_failed(LOGIN_FAILED_MESSAGE));
        }

        let login_response: LoginResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse login response: {}", e);
            ApiError::unknown(INVALID_CREDENTIALS_MESSAGE)
        })?;

        if let Some(session) = self.session() {
            session.sign_in(&login_response.token).map_err(ApiError::unknown)?;
        }
        Ok(login_response)
    }
}

use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(&request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn login_repository_persists_token_through_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200)
                .json_body(serde_json::json!({ "token": "session-token" }));
        });

        let session = Session::in_memory();
        let repo = LoginRepository::new(
            ApiClient::new_with_base_url(server.url("/api")).with_session(session.clone()),
        );
        repo.login(LoginRequest {
            email: "alice@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

        assert_eq!(session.token().as_deref(), Some("session-token"));
    }
}

use super::repository::LoginRepository;
use super::utils::LoginFormState;
use crate::api::{ApiClient, ApiError, LoginRequest};
use crate::state::session::use_session;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>()
        .unwrap_or_else(|| ApiClient::new().with_session(use_session()));
    let vm = LoginViewModel::new(LoginRepository::new(api));

    create_effect(move |_| {
        if let Some(result) = vm.login_action.value().get() {
            match result {
                Ok(()) => {
                    vm.error.set(None);
                    vm.form.clear_password();
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    vm
}

impl LoginViewModel {
    pub fn new(repository: LoginRepository) -> Self {
        let login_action = create_action(move |request: &LoginRequest| {
            let payload = request.clone();
            let repository = repository.clone();
            async move { repository.login(payload).await.map(|_| ()) }
        });
        Self {
            form: LoginFormState::default(),
            error: create_rw_signal(None),
            login_action,
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    /// Validates the form and dispatches the login request.
    ///
    /// Returns `false` when nothing was sent: a request is already in flight
    /// or the form is invalid.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

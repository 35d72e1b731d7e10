use crate::utils::storage as storage_utils;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

const TOKEN_KEY: &str = "token";

/// Backing storage for the session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self);
}

/// Persists the token in `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        storage_utils::local_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| "Failed to store token".to_string())
    }

    fn clear(&self) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Credentials of the signed-in user.
///
/// Created once by the app root and handed to every collaborator that needs
/// it; there is no ambient token lookup.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserTokenStore))
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryTokenStore::default()))
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) -> Result<(), String> {
        self.store.save(token)
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::in_memory)
}

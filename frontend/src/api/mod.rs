mod auth;
pub mod client;
mod products;
pub mod types;

pub use auth::{INVALID_CREDENTIALS_MESSAGE, LOGIN_FAILED_MESSAGE};
pub use client::*;
pub use products::{LoadError, LoadErrorKind};
pub use types::*;

pub mod home;
pub mod login;
pub mod products;

pub use home::*;
pub use login::*;
pub use products::*;

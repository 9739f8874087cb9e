pub mod auth_context;
pub mod use_auth;
pub mod use_orders;
pub mod use_spectacles;

pub use auth_context::{use_auth_context, AuthContextProvider};
pub use use_auth::{use_auth, AuthSession, UseAuthHandle};
pub use use_orders::{use_orders, UseOrdersHandle};
pub use use_spectacles::{use_spectacles, UseSpectaclesHandle};

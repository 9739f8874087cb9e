pub mod api_client;
pub mod auth_service;
pub mod order_service;
pub mod performance_service;
pub mod spectacle_service;

pub use api_client::ApiClient;

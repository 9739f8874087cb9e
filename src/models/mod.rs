pub mod order;
pub mod performance;
pub mod spectacle;
pub mod user;

pub use order::{CreateOrderRequest, Order, OrderItem, Ticket};
pub use performance::{NewPerformance, Performance, PerformanceStatus};
pub use spectacle::{Spectacle, SpectacleInput, SpectacleWithPerformances};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, Role, UserProfile};

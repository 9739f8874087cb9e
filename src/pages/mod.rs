pub mod creation;
pub mod dashboard;
pub mod edit_spectacle;
pub mod landing;
pub mod orders;
pub mod payment;
pub mod representations;
pub mod spectacles;
pub mod user;

pub use creation::Creation;
pub use dashboard::Dashboard;
pub use edit_spectacle::EditSpectacle;
pub use landing::Landing;
pub use orders::Orders;
pub use payment::Payment;
pub use representations::Representations;
pub use spectacles::Spectacles;
pub use user::User;

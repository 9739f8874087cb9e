pub mod create_account;
pub mod footer;
pub mod header;
pub mod login_form;
pub mod require_role;
pub mod reservation_modal;
pub mod spectacle_card;

pub use create_account::CreateAccount;
pub use footer::Footer;
pub use header::Header;
pub use login_form::LoginForm;
pub use require_role::{RequireRole, RequiredRole};
pub use reservation_modal::ReservationModal;
pub use spectacle_card::SpectacleCard;

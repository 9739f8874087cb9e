// Utils compartidos

pub mod constants;
pub mod dates;
pub mod errors;
pub mod storage;
pub mod stripe_ffi;
pub mod validators;

pub use constants::*;
pub use errors::ApiError;

pub mod auth;
pub mod filter;
pub mod sale;

pub use auth::{Credentials, LoginResponse};
pub use filter::FilterCriteria;
pub use sale::{DeleteConfirmation, NewSale, SaleRecord};

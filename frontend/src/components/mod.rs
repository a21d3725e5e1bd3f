pub mod checkout;
pub mod concerts;
pub mod footer;
pub mod hero;

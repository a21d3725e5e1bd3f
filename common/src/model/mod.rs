pub mod concert;
pub mod field;
pub mod order;

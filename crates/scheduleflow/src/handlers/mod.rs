pub mod contacts;
pub mod error;
pub mod extract;
pub mod health;
pub mod partners;

pub use error::AppError;

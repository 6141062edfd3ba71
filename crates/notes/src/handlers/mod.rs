pub mod error;
pub mod health;
mod html;
pub mod notes;

pub use error::AppError;

pub mod error;
pub mod health;
pub mod pages;
pub mod static_files;
pub mod whiskies;

pub use error::AppError;

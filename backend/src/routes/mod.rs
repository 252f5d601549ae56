// src/routes/mod.rs

pub mod error;
pub mod images;
pub mod meta;
pub mod pages;
pub mod quote;

pub use error::AppError;

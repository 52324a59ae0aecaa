pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::error::{AppError, Result};
pub use crate::features::categories::{Category, CategoryBuilder};

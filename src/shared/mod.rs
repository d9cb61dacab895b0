// Shared kernel: error taxonomy and cross-layer utilities.

pub mod errors;
pub mod utils;

pub use errors::{AppError, AppResult};

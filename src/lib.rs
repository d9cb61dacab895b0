//! Core of the school canteen catalog service.
//!
//! Schools own canteens, canteens serve day-bucketed menus, menus contain
//! dishes. This crate holds the validated domain model, the repository port
//! the application services drive, and an in-memory repository that speaks
//! the same document shape as the real store. HTTP routing and the concrete
//! document-store client sit outside and consume these services.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-exports for consumers wiring the crate up
pub use application::{CanteenService, DishService, MenuService, SchoolService};
pub use domain::{School, SchoolQuery, SchoolRepository};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;

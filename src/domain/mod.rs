pub mod entities;
pub mod repositories;
pub mod traits;
pub mod value_objects;

// Re-exports for shorter imports
pub use entities::{Canteen, Dish, Menu, School, SchoolId};
pub use repositories::{SchoolQuery, SchoolRepository};
pub use value_objects::{DishType, GeographicalLocation, MenuType, NonEmptyString};

mod canteen_service;
mod dish_service;
mod menu_service;
mod school_service;

pub use canteen_service::{CanteenService, CreateCanteen, CreateLocation};
pub use dish_service::DishService;
pub use menu_service::{CreateDish, CreateMenu, MenuService};
pub use school_service::{CreateSchool, SchoolService};

mod canteen;
mod dish;
mod menu;
mod school;

pub use canteen::Canteen;
pub use dish::Dish;
pub use menu::Menu;
pub use school::{School, SchoolId};

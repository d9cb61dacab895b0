mod dish_type;
mod geographical_location;
mod menu_type;
mod non_empty_string;

pub use dish_type::DishType;
pub use geographical_location::GeographicalLocation;
pub use menu_type::MenuType;
pub use non_empty_string::NonEmptyString;

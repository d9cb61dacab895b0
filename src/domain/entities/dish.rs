use serde::Serialize;

use crate::domain::traits::DuplicateOf;
use crate::domain::value_objects::{DishType, NonEmptyString};

/// Something a person can choose to eat at a canteen.
///
/// Create-only: a dish is owned by the menu it belongs to and never changes
/// after construction.
#[derive(Debug, Clone, Serialize)]
pub struct Dish {
    description: NonEmptyString,
    #[serde(rename = "type")]
    dish_type: DishType,
}

impl Dish {
    pub fn new(description: NonEmptyString, dish_type: DishType) -> Self {
        Dish {
            description,
            dish_type,
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn dish_type(&self) -> DishType {
        self.dish_type
    }
}

// Two dishes are the same dish when their descriptions match, regardless of
// type. The description doubles as the dish's identity across the API.
impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl DuplicateOf for Dish {
    fn duplicate_of(&self, other: &Self) -> bool {
        self == other
    }
}

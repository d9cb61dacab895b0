use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::shared::errors::AppError;

/// Category of a dish.
///
/// The lowercase labels are the wire contract; the enum discriminants are
/// never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DishType {
    Meat,
    Diet,
    Fish,
    Vegetarian,
}

impl DishType {
    pub fn label(&self) -> &'static str {
        match self {
            DishType::Meat => "meat",
            DishType::Diet => "diet",
            DishType::Fish => "fish",
            DishType::Vegetarian => "vegetarian",
        }
    }
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DishType {
    type Err = AppError;

    // Case-sensitive on purpose: labels are identifiers, not prose.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meat" => Ok(DishType::Meat),
            "diet" => Ok(DishType::Diet),
            "fish" => Ok(DishType::Fish),
            "vegetarian" => Ok(DishType::Vegetarian),
            other => Err(AppError::validation(format!(
                "'{}' is not a valid dish type",
                other
            ))),
        }
    }
}

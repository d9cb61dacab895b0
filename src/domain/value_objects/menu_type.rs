use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::shared::errors::AppError;

/// Service a menu is offered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuType {
    Lunch,
    Dinner,
}

impl MenuType {
    pub fn label(&self) -> &'static str {
        match self {
            MenuType::Lunch => "lunch",
            MenuType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MenuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MenuType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lunch" => Ok(MenuType::Lunch),
            "dinner" => Ok(MenuType::Dinner),
            other => Err(AppError::validation(format!(
                "'{}' is not a valid menu type",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_parse() {
        assert_eq!("lunch".parse::<MenuType>().unwrap(), MenuType::Lunch);
        assert_eq!("dinner".parse::<MenuType>().unwrap(), MenuType::Dinner);
    }

    #[test]
    fn test_unknown_label_fails_naming_the_input() {
        let err = "brunch".parse::<MenuType>().unwrap_err();
        assert!(err.to_string().contains("brunch"));
    }

    #[test]
    fn test_display_uses_the_wire_labels() {
        assert_eq!(MenuType::Lunch.to_string(), "lunch");
        assert_eq!(MenuType::Dinner.to_string(), "dinner");
    }
}

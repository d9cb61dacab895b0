use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Dish;
use crate::domain::value_objects::MenuType;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::has_duplicates;

/// The set of dishes a canteen serves at one meal.
///
/// Immutable after the validating factory runs; a menu belongs to exactly
/// one canteen.
#[derive(Debug, Clone, Serialize)]
pub struct Menu {
    id: String,
    #[serde(rename = "type")]
    menu_type: MenuType,
    dishes: Vec<Dish>,
}

impl Menu {
    /// Build a menu from its dishes, generating the public identifier.
    ///
    /// The id is `<type label>_<random token>`; the token is random rather
    /// than sequence-derived, so uniqueness is probabilistic, not enforced.
    pub fn create(dishes: Vec<Dish>, menu_type: MenuType) -> AppResult<Self> {
        Self::validate_dishes(&dishes)?;
        let id = format!("{}_{}", menu_type, Uuid::new_v4().simple());
        Ok(Menu {
            id,
            menu_type,
            dishes,
        })
    }

    /// Rebuild a menu loaded from storage, keeping its persisted id.
    ///
    /// Runs the same dish validation as [`Menu::create`]; a stored document
    /// that no longer satisfies the invariants is rejected, not repaired.
    pub(crate) fn from_persisted(
        id: String,
        menu_type: MenuType,
        dishes: Vec<Dish>,
    ) -> AppResult<Self> {
        Self::validate_dishes(&dishes)?;
        Ok(Menu {
            id,
            menu_type,
            dishes,
        })
    }

    fn validate_dishes(dishes: &[Dish]) -> AppResult<()> {
        if dishes.is_empty() {
            return Err(AppError::validation("must provide at least one dish"));
        }
        if has_duplicates(dishes) {
            return Err(AppError::validation("cannot have duplicate dish"));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn menu_type(&self) -> MenuType {
        self.menu_type
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DishType, NonEmptyString};

    fn dish(description: &str, dish_type: DishType) -> Dish {
        Dish::new(NonEmptyString::create(description).unwrap(), dish_type)
    }

    #[test]
    fn test_menu_requires_at_least_one_dish() {
        let err = Menu::create(vec![], MenuType::Lunch).unwrap_err();
        assert_eq!(err, AppError::validation("must provide at least one dish"));
    }

    #[test]
    fn test_menu_rejects_duplicate_dishes_by_description() {
        let dishes = vec![
            dish("Roast beef", DishType::Meat),
            dish("Roast beef", DishType::Diet),
        ];
        let err = Menu::create(dishes, MenuType::Lunch).unwrap_err();
        assert_eq!(err, AppError::validation("cannot have duplicate dish"));
    }

    #[test]
    fn test_menu_id_is_prefixed_with_the_type_label() {
        let dishes = vec![
            dish("Roast beef", DishType::Meat),
            dish("Tofu bowl", DishType::Vegetarian),
        ];
        let menu = Menu::create(dishes, MenuType::Lunch).unwrap();
        assert!(menu.id().starts_with("lunch_"));
        assert_eq!(menu.dishes().len(), 2);

        let menu = Menu::create(vec![dish("Soup", DishType::Diet)], MenuType::Dinner).unwrap();
        assert!(menu.id().starts_with("dinner_"));
    }

    #[test]
    fn test_generated_ids_differ_between_menus() {
        let a = Menu::create(vec![dish("Soup", DishType::Diet)], MenuType::Lunch).unwrap();
        let b = Menu::create(vec![dish("Soup", DishType::Diet)], MenuType::Lunch).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_from_persisted_revalidates_the_dishes() {
        let err =
            Menu::from_persisted("lunch_0".to_string(), MenuType::Lunch, vec![]).unwrap_err();
        assert_eq!(err, AppError::validation("must provide at least one dish"));
    }
}

//! Nested lookups over one loaded aggregate.
//!
//! The catalog is addressed hierarchically: school by id, canteen by name,
//! menu by id, dish by description. Only the first step touches storage;
//! the rest is in-memory traversal, and each step short-circuits with
//! not-found when the previous one came up empty.

use crate::domain::entities::{Canteen, Dish, Menu, School, SchoolId};
use crate::domain::repositories::{SchoolQuery, SchoolRepository};
use crate::shared::errors::{AppError, AppResult};

pub async fn school_by_id(
    repository: &dyn SchoolRepository,
    school_id: &str,
) -> AppResult<School> {
    repository
        .find_one(SchoolQuery::ById(SchoolId::from(school_id)))
        .await?
        .ok_or_else(|| AppError::not_found(format!("school '{}' does not exist", school_id)))
}

pub fn canteen_by_name<'a>(school: &'a School, canteen_name: &str) -> AppResult<&'a Canteen> {
    school.canteen(canteen_name).ok_or_else(|| {
        AppError::not_found(format!(
            "school '{}' has no canteen named '{}'",
            school.acronym(),
            canteen_name
        ))
    })
}

pub fn menu_by_id<'a>(canteen: &'a Canteen, menu_id: &str) -> AppResult<&'a Menu> {
    canteen.find_menu(menu_id).ok_or_else(|| {
        AppError::not_found(format!(
            "canteen '{}' has no menu '{}'",
            canteen.name(),
            menu_id
        ))
    })
}

pub fn dish_by_description<'a>(menu: &'a Menu, description: &str) -> AppResult<&'a Dish> {
    menu.dishes()
        .iter()
        .find(|dish| dish.description() == description)
        .ok_or_else(|| {
            AppError::not_found(format!(
                "menu '{}' has no dish '{}'",
                menu.id(),
                description
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSchoolRepository;
    use crate::domain::value_objects::{DishType, GeographicalLocation, MenuType, NonEmptyString};

    fn school_with_menu() -> (School, String) {
        let mut canteen = Canteen::new(
            GeographicalLocation::create(40.0, -8.0).unwrap(),
            NonEmptyString::create("Central").unwrap(),
        );
        let dish = Dish::new(
            NonEmptyString::create("Roast beef").unwrap(),
            DishType::Meat,
        );
        let menu = Menu::create(vec![dish], MenuType::Lunch).unwrap();
        let menu_id = menu.id().to_string();
        canteen.add_menu(menu);

        let school = School::create(
            NonEmptyString::create("ISEP").unwrap(),
            vec![canteen],
            NonEmptyString::create("Instituto Superior de Engenharia do Porto").unwrap(),
        )
        .unwrap();
        (school, menu_id)
    }

    #[tokio::test]
    async fn test_school_by_id_maps_absence_to_not_found() {
        let mut repository = MockSchoolRepository::new();
        repository
            .expect_find_one()
            .returning(|_| Ok(None));

        let err = school_by_id(&repository, "missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_traversal_reaches_the_dish() {
        let (school, menu_id) = school_with_menu();

        let canteen = canteen_by_name(&school, "Central").unwrap();
        let menu = menu_by_id(canteen, &menu_id).unwrap();
        let dish = dish_by_description(menu, "Roast beef").unwrap();
        assert_eq!(dish.dish_type(), DishType::Meat);
    }

    #[test]
    fn test_each_step_fails_with_not_found() {
        let (school, menu_id) = school_with_menu();

        assert!(matches!(
            canteen_by_name(&school, "Asa Sul").unwrap_err(),
            AppError::NotFound(_)
        ));

        let canteen = canteen_by_name(&school, "Central").unwrap();
        assert!(matches!(
            menu_by_id(canteen, "dinner_nope").unwrap_err(),
            AppError::NotFound(_)
        ));

        let menu = menu_by_id(canteen, &menu_id).unwrap();
        assert!(matches!(
            dish_by_description(menu, "Tofu bowl").unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}

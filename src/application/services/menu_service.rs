use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::application::queries;
use crate::domain::entities::{Dish, Menu};
use crate::domain::repositories::SchoolRepository;
use crate::domain::value_objects::{DishType, MenuType, NonEmptyString};
use crate::shared::errors::{AppError, AppResult};

/// Raw input for one dish of a menu.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDish {
    pub description: String,
    #[serde(rename = "type")]
    pub dish_type: String,
}

/// Raw input for registering a menu at a canteen.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenu {
    #[serde(rename = "type")]
    pub menu_type: String,
    pub dishes: Vec<CreateDish>,
}

pub struct MenuService {
    repository: Arc<dyn SchoolRepository>,
}

impl MenuService {
    pub fn new(repository: Arc<dyn SchoolRepository>) -> Self {
        Self { repository }
    }

    /// The menus a canteen serves today.
    ///
    /// An empty day is reported as not-found to callers; the domain itself
    /// models it as absence. Menus added on earlier days are not reachable
    /// here at all, which keeps this endpoint useful only on the day menus
    /// are registered.
    pub async fn today_menus(&self, school_id: &str, canteen_name: &str) -> AppResult<Vec<Menu>> {
        let school = queries::school_by_id(self.repository.as_ref(), school_id).await?;
        let canteen = queries::canteen_by_name(&school, canteen_name)?;

        match canteen.today_menus() {
            Some(menus) => Ok(menus.to_vec()),
            None => Err(AppError::not_found(format!(
                "canteen '{}' has no menus today",
                canteen_name
            ))),
        }
    }

    pub async fn menu_information(
        &self,
        school_id: &str,
        canteen_name: &str,
        menu_id: &str,
    ) -> AppResult<Menu> {
        let school = queries::school_by_id(self.repository.as_ref(), school_id).await?;
        let canteen = queries::canteen_by_name(&school, canteen_name)?;
        let menu = queries::menu_by_id(canteen, menu_id)?;
        Ok(menu.clone())
    }

    /// Register a menu for today at a canteen.
    ///
    /// Every label and description routes through the factories; the menu is
    /// appended to the caller-side copy of the canteen, committed back into
    /// the aggregate via its update-in-place operation, and the whole
    /// aggregate persisted once.
    pub async fn create_menu(
        &self,
        school_id: &str,
        canteen_name: &str,
        input: CreateMenu,
    ) -> AppResult<Menu> {
        let mut school = queries::school_by_id(self.repository.as_ref(), school_id).await?;
        let mut canteen = queries::canteen_by_name(&school, canteen_name)?.clone();

        let menu_type = input.menu_type.parse::<MenuType>()?;
        let dishes = input
            .dishes
            .into_iter()
            .map(|dish| {
                let dish_type = dish.dish_type.parse::<DishType>()?;
                let description = NonEmptyString::create(dish.description)?;
                Ok(Dish::new(description, dish_type))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let menu = Menu::create(dishes, menu_type)?;
        canteen.add_menu(menu.clone());
        school.update_canteen(canteen)?;
        self.repository.update(school).await?;

        info!(
            "registered menu '{}' at canteen '{}' of school '{}'",
            menu.id(),
            canteen_name,
            school_id
        );
        Ok(menu)
    }
}

use std::sync::Arc;

use crate::application::queries;
use crate::domain::entities::Dish;
use crate::domain::repositories::SchoolRepository;
use crate::shared::errors::AppResult;

/// Read-only access to the dishes of a menu. Dishes are created through
/// [`MenuService::create_menu`](crate::application::MenuService::create_menu)
/// and never individually.
pub struct DishService {
    repository: Arc<dyn SchoolRepository>,
}

impl DishService {
    pub fn new(repository: Arc<dyn SchoolRepository>) -> Self {
        Self { repository }
    }

    pub async fn available_dishes(
        &self,
        school_id: &str,
        canteen_name: &str,
        menu_id: &str,
    ) -> AppResult<Vec<Dish>> {
        let school = queries::school_by_id(self.repository.as_ref(), school_id).await?;
        let canteen = queries::canteen_by_name(&school, canteen_name)?;
        let menu = queries::menu_by_id(canteen, menu_id)?;
        Ok(menu.dishes().to_vec())
    }

    pub async fn dish_information(
        &self,
        school_id: &str,
        canteen_name: &str,
        menu_id: &str,
        description: &str,
    ) -> AppResult<Dish> {
        let school = queries::school_by_id(self.repository.as_ref(), school_id).await?;
        let canteen = queries::canteen_by_name(&school, canteen_name)?;
        let menu = queries::menu_by_id(canteen, menu_id)?;
        let dish = queries::dish_by_description(menu, description)?;
        Ok(dish.clone())
    }
}

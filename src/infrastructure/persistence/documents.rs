//! Persisted document shape for the school aggregate.
//!
//! These structs mirror what the document store holds; they are the only
//! place raw, loosely-typed data enters the crate. Hydration into domain
//! types goes through the same validating factories used at construction
//! time, so a document that fails an invariant is rejected rather than
//! coerced.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Canteen, Dish, Menu, School, SchoolId};
use crate::domain::value_objects::{DishType, GeographicalLocation, MenuType, NonEmptyString};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub acronym: String,
    pub name: String,
    pub canteens: Vec<CanteenDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanteenDocument {
    pub name: String,
    pub location: LocationDocument,
    /// Day buckets keyed by ISO calendar day (`YYYY-MM-DD`).
    #[serde(default)]
    pub menus: BTreeMap<String, Vec<MenuDocument>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDocument {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub menu_type: String,
    pub dishes: Vec<DishDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishDocument {
    pub description: String,
    #[serde(rename = "type")]
    pub dish_type: String,
}

impl From<&School> for SchoolDocument {
    fn from(school: &School) -> Self {
        SchoolDocument {
            id: school.id().map(|id| id.as_str().to_string()),
            acronym: school.acronym().to_string(),
            name: school.name().to_string(),
            canteens: school.canteens().iter().map(CanteenDocument::from).collect(),
        }
    }
}

impl From<&Canteen> for CanteenDocument {
    fn from(canteen: &Canteen) -> Self {
        let menus = canteen
            .menus_by_day()
            .iter()
            .map(|(day, menus)| {
                (
                    day.format("%Y-%m-%d").to_string(),
                    menus.iter().map(MenuDocument::from).collect(),
                )
            })
            .collect();

        CanteenDocument {
            name: canteen.name().to_string(),
            location: LocationDocument {
                latitude: canteen.location().latitude(),
                longitude: canteen.location().longitude(),
            },
            menus,
        }
    }
}

impl From<&Menu> for MenuDocument {
    fn from(menu: &Menu) -> Self {
        MenuDocument {
            id: menu.id().to_string(),
            menu_type: menu.menu_type().to_string(),
            dishes: menu.dishes().iter().map(DishDocument::from).collect(),
        }
    }
}

impl From<&Dish> for DishDocument {
    fn from(dish: &Dish) -> Self {
        DishDocument {
            description: dish.description().to_string(),
            dish_type: dish.dish_type().to_string(),
        }
    }
}

impl TryFrom<SchoolDocument> for School {
    type Error = AppError;

    fn try_from(document: SchoolDocument) -> AppResult<Self> {
        let id = document
            .id
            .ok_or_else(|| AppError::storage("stored school document has no identity"))?;

        let acronym = NonEmptyString::create(document.acronym)?;
        let name = NonEmptyString::create(document.name)?;
        let canteens = document
            .canteens
            .into_iter()
            .map(Canteen::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        School::from_persisted(SchoolId::from(id), acronym, canteens, name)
    }
}

impl TryFrom<CanteenDocument> for Canteen {
    type Error = AppError;

    fn try_from(document: CanteenDocument) -> AppResult<Self> {
        let location =
            GeographicalLocation::create(document.location.latitude, document.location.longitude)?;
        let name = NonEmptyString::create(document.name)?;

        let mut menus = BTreeMap::new();
        for (day_key, menu_documents) in document.menus {
            let day = day_key.parse::<NaiveDate>().map_err(|_| {
                AppError::validation(format!("'{}' is not a valid calendar day", day_key))
            })?;
            let day_menus = menu_documents
                .into_iter()
                .map(Menu::try_from)
                .collect::<AppResult<Vec<_>>>()?;
            menus.insert(day, day_menus);
        }

        Ok(Canteen::from_persisted(location, name, menus))
    }
}

impl TryFrom<MenuDocument> for Menu {
    type Error = AppError;

    fn try_from(document: MenuDocument) -> AppResult<Self> {
        let menu_type = document.menu_type.parse::<MenuType>()?;
        let dishes = document
            .dishes
            .into_iter()
            .map(Dish::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Menu::from_persisted(document.id, menu_type, dishes)
    }
}

impl TryFrom<DishDocument> for Dish {
    type Error = AppError;

    fn try_from(document: DishDocument) -> AppResult<Self> {
        let dish_type = document.dish_type.parse::<DishType>()?;
        let description = NonEmptyString::create(document.description)?;
        Ok(Dish::new(description, dish_type))
    }
}

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::domain::entities::Menu;
use crate::domain::traits::DuplicateOf;
use crate::domain::value_objects::{GeographicalLocation, NonEmptyString};

/// A place inside a school where menus are served.
///
/// Menus are bucketed by calendar day. Both reads and writes go through
/// "today", computed from wall-clock time at the moment of the call; there
/// is deliberately no way to reach another day's bucket through this type.
#[derive(Debug, Clone, Serialize)]
pub struct Canteen {
    name: NonEmptyString,
    location: GeographicalLocation,
    menus: BTreeMap<NaiveDate, Vec<Menu>>,
}

impl Canteen {
    pub fn new(location: GeographicalLocation, name: NonEmptyString) -> Self {
        Canteen {
            name,
            location,
            menus: BTreeMap::new(),
        }
    }

    pub(crate) fn from_persisted(
        location: GeographicalLocation,
        name: NonEmptyString,
        menus: BTreeMap<NaiveDate, Vec<Menu>>,
    ) -> Self {
        Canteen {
            name,
            location,
            menus,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn location(&self) -> GeographicalLocation {
        self.location
    }

    /// The menus registered for the current calendar day.
    ///
    /// `None` is an expected outcome (nothing registered yet today), not a
    /// failure.
    pub fn today_menus(&self) -> Option<&[Menu]> {
        self.menus.get(&Self::today()).map(Vec::as_slice)
    }

    /// Append a menu to today's bucket, creating the bucket if absent.
    pub fn add_menu(&mut self, menu: Menu) {
        self.menus.entry(Self::today()).or_default().push(menu);
    }

    /// Look a menu up by id across every day bucket, not just today's.
    pub fn find_menu(&self, menu_id: &str) -> Option<&Menu> {
        self.menus
            .values()
            .flat_map(|menus| menus.iter())
            .find(|menu| menu.id() == menu_id)
    }

    /// All day buckets, oldest day first.
    pub fn menus_by_day(&self) -> &BTreeMap<NaiveDate, Vec<Menu>> {
        &self.menus
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

// Name and location are both identity signals: sharing either one makes two
// canteens duplicates of each other inside a school.
impl DuplicateOf for Canteen {
    fn duplicate_of(&self, other: &Self) -> bool {
        self.name == other.name || self.location == other.location
    }
}

use std::fmt;

use serde::Serialize;

use crate::domain::entities::Canteen;
use crate::domain::value_objects::NonEmptyString;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::has_duplicates;

/// Opaque identifier assigned by the document store on first persist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SchoolId(String);

impl SchoolId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SchoolId {
    fn from(value: String) -> Self {
        SchoolId(value)
    }
}

impl From<&str> for SchoolId {
    fn from(value: &str) -> Self {
        SchoolId(value.to_string())
    }
}

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregate root of the catalog.
///
/// All persistence and consistency boundaries run through the school: its
/// canteens, their menus and their dishes have no storage identity of their
/// own. The canteen collection is non-empty and free of duplicates (two
/// canteens collide when they share a name or a location).
#[derive(Debug, Clone, Serialize)]
pub struct School {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<SchoolId>,
    acronym: NonEmptyString,
    name: NonEmptyString,
    canteens: Vec<Canteen>,
}

impl School {
    /// Validating factory. The school starts without an identity; the
    /// repository assigns one on first persist.
    pub fn create(
        acronym: NonEmptyString,
        canteens: Vec<Canteen>,
        name: NonEmptyString,
    ) -> AppResult<Self> {
        Self::validate_acronym(&acronym)?;
        Self::validate_canteens(&canteens)?;
        Ok(School {
            id: None,
            acronym,
            name,
            canteens,
        })
    }

    /// Rebuild a school loaded from storage, revalidating every collection
    /// invariant. Documents that drifted out of shape are rejected here.
    pub(crate) fn from_persisted(
        id: SchoolId,
        acronym: NonEmptyString,
        canteens: Vec<Canteen>,
        name: NonEmptyString,
    ) -> AppResult<Self> {
        Self::validate_acronym(&acronym)?;
        Self::validate_canteens(&canteens)?;
        Ok(School {
            id: Some(id),
            acronym,
            name,
            canteens,
        })
    }

    fn validate_acronym(acronym: &NonEmptyString) -> AppResult<()> {
        if acronym.as_str().chars().any(char::is_whitespace) {
            return Err(AppError::validation("acronym cannot contain whitespace"));
        }
        Ok(())
    }

    fn validate_canteens(canteens: &[Canteen]) -> AppResult<()> {
        if canteens.is_empty() {
            return Err(AppError::validation("must provide at least one canteen"));
        }
        if has_duplicates(canteens) {
            return Err(AppError::validation("cannot have duplicate canteen"));
        }
        Ok(())
    }

    pub fn id(&self) -> Option<&SchoolId> {
        self.id.as_ref()
    }

    pub(crate) fn assign_id(&mut self, id: SchoolId) {
        self.id = Some(id);
    }

    pub fn acronym(&self) -> &str {
        self.acronym.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn canteens(&self) -> &[Canteen] {
        &self.canteens
    }

    pub fn canteen(&self, name: &str) -> Option<&Canteen> {
        self.canteens.iter().find(|c| c.name() == name)
    }

    /// Add a canteen, revalidating the whole collection.
    ///
    /// The candidate collection is checked as a whole rather than the new
    /// element against the old ones, so the invariant check stays in one
    /// place. On failure the aggregate is left untouched.
    pub fn add_canteen(&mut self, canteen: Canteen) -> AppResult<()> {
        let mut candidate = self.canteens.clone();
        candidate.push(canteen);
        if has_duplicates(&candidate) {
            return Err(AppError::validation("cannot add duplicate canteen"));
        }
        self.canteens = candidate;
        Ok(())
    }

    /// Replace the canteen with the same name wholesale.
    ///
    /// This is how menu additions made on a caller's copy of a canteen are
    /// committed back into the aggregate.
    pub fn update_canteen(&mut self, canteen: Canteen) -> AppResult<()> {
        match self.canteens.iter().position(|c| c.name() == canteen.name()) {
            Some(index) => {
                self.canteens[index] = canteen;
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "school has no canteen named '{}'",
                canteen.name()
            ))),
        }
    }
}

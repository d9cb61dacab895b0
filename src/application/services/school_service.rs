use std::sync::Arc;

use log::{debug, info};
use serde::Deserialize;

use crate::application::queries;
use crate::application::services::canteen_service::CreateCanteen;
use crate::domain::entities::{Canteen, School};
use crate::domain::repositories::{SchoolQuery, SchoolRepository};
use crate::domain::value_objects::NonEmptyString;
use crate::shared::errors::{AppError, AppResult};

/// Raw input for creating a school together with its first canteens.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchool {
    pub acronym: String,
    pub name: String,
    pub canteens: Vec<CreateCanteen>,
}

pub struct SchoolService {
    repository: Arc<dyn SchoolRepository>,
}

impl SchoolService {
    pub fn new(repository: Arc<dyn SchoolRepository>) -> Self {
        Self { repository }
    }

    pub async fn available_schools(&self) -> AppResult<Vec<School>> {
        self.repository.find_all().await
    }

    pub async fn school_information(&self, school_id: &str) -> AppResult<School> {
        queries::school_by_id(self.repository.as_ref(), school_id).await
    }

    /// Build and persist a new school aggregate.
    ///
    /// The acronym is the uniqueness key: creation is refused when a school
    /// with the same acronym is already stored. All field validation runs
    /// through the value factories before the aggregate is assembled.
    pub async fn create_school(&self, input: CreateSchool) -> AppResult<School> {
        if self
            .repository
            .find_one(SchoolQuery::ByAcronym(input.acronym.clone()))
            .await?
            .is_some()
        {
            return Err(AppError::validation(format!(
                "school with acronym '{}' already exists",
                input.acronym
            )));
        }

        let acronym = NonEmptyString::create(input.acronym)?;
        let name = NonEmptyString::create(input.name)?;
        let canteens = input
            .canteens
            .into_iter()
            .map(Canteen::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        let school = School::create(acronym, canteens, name)?;
        debug!("persisting new school '{}'", school.acronym());

        let created = self.repository.create(school).await?;
        info!(
            "created school '{}' with {} canteen(s)",
            created.acronym(),
            created.canteens().len()
        );
        Ok(created)
    }
}

use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::application::queries;
use crate::domain::entities::Canteen;
use crate::domain::repositories::SchoolRepository;
use crate::domain::value_objects::{GeographicalLocation, NonEmptyString};
use crate::shared::errors::{AppError, AppResult};

/// Raw input for a canteen's coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw input for attaching a canteen to a school.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCanteen {
    pub name: String,
    pub location: CreateLocation,
}

impl TryFrom<CreateCanteen> for Canteen {
    type Error = AppError;

    fn try_from(input: CreateCanteen) -> AppResult<Self> {
        let location =
            GeographicalLocation::create(input.location.latitude, input.location.longitude)?;
        let name = NonEmptyString::create(input.name)?;
        Ok(Canteen::new(location, name))
    }
}

pub struct CanteenService {
    repository: Arc<dyn SchoolRepository>,
}

impl CanteenService {
    pub fn new(repository: Arc<dyn SchoolRepository>) -> Self {
        Self { repository }
    }

    pub async fn available_canteens(&self, school_id: &str) -> AppResult<Vec<Canteen>> {
        let school = queries::school_by_id(self.repository.as_ref(), school_id).await?;
        Ok(school.canteens().to_vec())
    }

    pub async fn canteen_information(
        &self,
        school_id: &str,
        canteen_name: &str,
    ) -> AppResult<Canteen> {
        let school = queries::school_by_id(self.repository.as_ref(), school_id).await?;
        let canteen = queries::canteen_by_name(&school, canteen_name)?;
        Ok(canteen.clone())
    }

    /// Attach a new canteen to an existing school.
    ///
    /// The aggregate revalidates the whole canteen collection before the
    /// mutation commits; on success the aggregate is persisted once and the
    /// committed canteen returned.
    pub async fn create_canteen(
        &self,
        school_id: &str,
        input: CreateCanteen,
    ) -> AppResult<Canteen> {
        let mut school = queries::school_by_id(self.repository.as_ref(), school_id).await?;

        let canteen = Canteen::try_from(input)?;
        school.add_canteen(canteen.clone())?;
        self.repository.update(school).await?;

        info!(
            "added canteen '{}' to school '{}'",
            canteen.name(),
            school_id
        );
        Ok(canteen)
    }
}

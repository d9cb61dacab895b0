use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{School, SchoolId};
use crate::domain::repositories::{SchoolQuery, SchoolRepository};
use crate::infrastructure::persistence::documents::SchoolDocument;
use crate::shared::errors::{AppError, AppResult};

/// [`SchoolRepository`] backed by a map of raw JSON documents.
///
/// Stores the same document shape the real store persists and rehydrates
/// through the same mapper, so tests exercising this repository cover the
/// full encode/decode path and not just an object copy.
#[derive(Default)]
pub struct InMemorySchoolRepository {
    documents: RwLock<HashMap<String, serde_json::Value>>,
}

impl InMemorySchoolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode(value: &serde_json::Value) -> AppResult<School> {
        let document: SchoolDocument = serde_json::from_value(value.clone())?;
        School::try_from(document)
    }
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn create(&self, mut school: School) -> AppResult<School> {
        let id = Uuid::new_v4().simple().to_string();
        school.assign_id(SchoolId::from(id.clone()));

        let value = serde_json::to_value(SchoolDocument::from(&school))?;
        let mut documents = self.documents.write().await;
        documents.insert(id, value.clone());

        Self::decode(&value)
    }

    async fn find_all(&self) -> AppResult<Vec<School>> {
        let documents = self.documents.read().await;
        documents.values().map(Self::decode).collect()
    }

    async fn find_one(&self, query: SchoolQuery) -> AppResult<Option<School>> {
        let documents = self.documents.read().await;
        match query {
            SchoolQuery::ById(id) => documents
                .get(id.as_str())
                .map(Self::decode)
                .transpose(),
            SchoolQuery::ByAcronym(acronym) => {
                for value in documents.values() {
                    let school = Self::decode(value)?;
                    if school.acronym() == acronym {
                        return Ok(Some(school));
                    }
                }
                Ok(None)
            }
        }
    }

    async fn update(&self, school: School) -> AppResult<School> {
        let id = school
            .id()
            .ok_or_else(|| AppError::storage("school has no persisted identity"))?
            .as_str()
            .to_string();

        let value = serde_json::to_value(SchoolDocument::from(&school))?;
        let mut documents = self.documents.write().await;
        if !documents.contains_key(&id) {
            // The zero-documents-modified case of the store contract.
            return Err(AppError::storage("no documents were modified"));
        }
        documents.insert(id, value.clone());

        Self::decode(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{GeographicalLocation, NonEmptyString};
    use crate::domain::Canteen;

    fn school(acronym: &str) -> School {
        let canteen = Canteen::new(
            GeographicalLocation::create(40.0, -8.0).unwrap(),
            NonEmptyString::create("Central").unwrap(),
        );
        School::create(
            NonEmptyString::create(acronym).unwrap(),
            vec![canteen],
            NonEmptyString::create("Instituto Superior de Engenharia do Porto").unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_an_identity() {
        let repository = InMemorySchoolRepository::new();
        let created = repository.create(school("ISEP")).await.unwrap();
        assert!(created.id().is_some());
    }

    #[tokio::test]
    async fn test_find_one_by_id_and_by_acronym() {
        let repository = InMemorySchoolRepository::new();
        let created = repository.create(school("ISEP")).await.unwrap();
        let id = created.id().unwrap().clone();

        let by_id = repository
            .find_one(SchoolQuery::ById(id))
            .await
            .unwrap()
            .expect("school stored under its id");
        assert_eq!(by_id.acronym(), "ISEP");

        let by_acronym = repository
            .find_one(SchoolQuery::ByAcronym("ISEP".to_string()))
            .await
            .unwrap();
        assert!(by_acronym.is_some());

        let missing = repository
            .find_one(SchoolQuery::ByAcronym("FEUP".to_string()))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_all_returns_every_stored_school() {
        let repository = InMemorySchoolRepository::new();
        repository.create(school("ISEP")).await.unwrap();
        repository.create(school("ESEIG")).await.unwrap();

        let all = repository.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_the_stored_aggregate() {
        let repository = InMemorySchoolRepository::new();
        let mut created = repository.create(school("ISEP")).await.unwrap();

        let extra = Canteen::new(
            GeographicalLocation::create(40.1, -8.1).unwrap(),
            NonEmptyString::create("Asa Sul").unwrap(),
        );
        created.add_canteen(extra).unwrap();

        let updated = repository.update(created).await.unwrap();
        assert_eq!(updated.canteens().len(), 2);

        let reloaded = repository
            .find_one(SchoolQuery::ByAcronym("ISEP".to_string()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.canteens().len(), 2);
    }

    #[tokio::test]
    async fn test_update_without_identity_is_a_storage_error() {
        let repository = InMemorySchoolRepository::new();
        let err = repository.update(school("ISEP")).await.unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));
    }

    #[tokio::test]
    async fn test_update_of_an_unknown_identity_modifies_nothing() {
        let repository = InMemorySchoolRepository::new();
        let mut phantom = school("ISEP");
        phantom.assign_id(SchoolId::from("missing"));

        let err = repository.update(phantom).await.unwrap_err();
        assert_eq!(err, AppError::storage("no documents were modified"));
    }
}

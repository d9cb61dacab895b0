use async_trait::async_trait;

use crate::domain::entities::{School, SchoolId};
use crate::shared::errors::AppResult;

/// Exact-match selector for loading one school.
///
/// The acronym is the single uniqueness key besides the stored identity;
/// school names are not guaranteed unique and are not queryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchoolQuery {
    ById(SchoolId),
    ByAcronym(String),
}

/// Port for loading and persisting whole [`School`] aggregates.
///
/// Infrastructure provides the implementation; the core never talks to
/// storage below the school level. `update` replaces the stored document
/// matching the aggregate's identity and fails when nothing was modified,
/// which is the only "did the write land" signal the contract offers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Persist a new aggregate, returning it with its assigned identity.
    async fn create(&self, school: School) -> AppResult<School>;

    /// Load every stored school.
    async fn find_all(&self) -> AppResult<Vec<School>>;

    /// Load the school matching the query, if any.
    async fn find_one(&self, query: SchoolQuery) -> AppResult<Option<School>>;

    /// Replace the stored aggregate. Fails with a storage error when zero
    /// documents were modified.
    async fn update(&self, school: School) -> AppResult<School>;
}

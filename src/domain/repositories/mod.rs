mod school_repository;

pub use school_repository::{SchoolQuery, SchoolRepository};

#[cfg(test)]
pub use school_repository::MockSchoolRepository;

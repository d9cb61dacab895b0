use std::env;

use crate::shared::errors::{AppError, AppResult};

const STORE_URL_VAR: &str = "EMENTA_STORE_URL";
const STORE_DATABASE_VAR: &str = "EMENTA_STORE_DATABASE";
const STORE_COLLECTION_VAR: &str = "EMENTA_STORE_COLLECTION";

const DEFAULT_DATABASE: &str = "ementa";
const DEFAULT_COLLECTION: &str = "schools";

/// Connection settings for the document store, read from the environment.
///
/// The concrete store client lives outside the core; this is the
/// configuration surface it consumes. Only the URL is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
}

impl StoreConfig {
    pub fn from_env() -> AppResult<Self> {
        // Pick up a local .env when present, like any other deployment knob.
        dotenvy::dotenv().ok();

        let url = env::var(STORE_URL_VAR)
            .map_err(|_| AppError::storage(format!("{} is not set", STORE_URL_VAR)))?;
        let database =
            env::var(STORE_DATABASE_VAR).unwrap_or_else(|_| DEFAULT_DATABASE.to_string());
        let collection =
            env::var(STORE_COLLECTION_VAR).unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());

        Ok(StoreConfig {
            url,
            database,
            collection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Serialized via a lock would be overkill: each test uses its own set of
    // variables where possible, and the url var is restored at the end.
    #[test]
    fn test_from_env_reads_url_and_falls_back_on_defaults() {
        env::set_var(STORE_URL_VAR, "mongodb://localhost:27017");
        env::remove_var(STORE_DATABASE_VAR);
        env::remove_var(STORE_COLLECTION_VAR);

        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.url, "mongodb://localhost:27017");
        assert_eq!(config.database, DEFAULT_DATABASE);
        assert_eq!(config.collection, DEFAULT_COLLECTION);

        env::remove_var(STORE_URL_VAR);
    }
}

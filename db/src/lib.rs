pub mod collections;
pub mod error;
pub mod models;
pub mod password;
pub mod store;
pub mod test_utils;

pub use error::DbError;
pub use store::{MongoStore, SeedStore};

use common::config::Config;

pub async fn connect(config: &Config) -> Result<MongoStore, DbError> {
    MongoStore::connect(&config.mongodb_uri, &config.database_name).await
}

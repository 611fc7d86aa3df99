use std::future::Future;
use std::pin::Pin;

use bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Client, Database};

use crate::collections::USERS;
use crate::error::DbError;
use crate::models::administrator::Administrator;

/// Server error code returned when creating a collection that already exists.
const NAMESPACE_EXISTS: i32 = 48;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DbError>> + Send + 'a>>;

/// The handful of database operations the seeder performs.
pub trait SeedStore: Send + Sync {
    fn database_name(&self) -> &str;

    fn collection_names(&self) -> StoreFuture<'_, Vec<String>>;

    /// Creates `name`. Succeeds if the collection already exists.
    fn create_collection<'a>(&'a self, name: &'a str) -> StoreFuture<'a, ()>;

    fn insert_administrator<'a>(&'a self, record: &'a Administrator) -> StoreFuture<'a, ()>;

    /// Number of documents in `users` with `is_admin: true`.
    fn count_administrators(&self) -> StoreFuture<'_, u64>;
}

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connects to `uri` and selects `database_name`. The database itself is
    /// created by the server on first write.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, DbError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database_name);

        db.run_command(doc! { "ping": 1 }).await?;
        log::info!("Connected to MongoDB, using database '{}'", database_name);

        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

fn is_namespace_exists(err: &MongoError) -> bool {
    matches!(err.kind.as_ref(), ErrorKind::Command(cmd) if cmd.code == NAMESPACE_EXISTS)
}

impl SeedStore for MongoStore {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    fn collection_names(&self) -> StoreFuture<'_, Vec<String>> {
        Box::pin(async move { Ok(self.db.list_collection_names().await?) })
    }

    fn create_collection<'a>(&'a self, name: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            match self.db.create_collection(name).await {
                Ok(()) => Ok(()),
                Err(e) if is_namespace_exists(&e) => {
                    log::debug!("Collection '{}' was created concurrently", name);
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    fn insert_administrator<'a>(&'a self, record: &'a Administrator) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let result = self
                .db
                .collection::<Administrator>(USERS)
                .insert_one(record)
                .await?;
            log::debug!("Inserted administrator with _id {}", result.inserted_id);
            Ok(())
        })
    }

    fn count_administrators(&self) -> StoreFuture<'_, u64> {
        Box::pin(async move {
            Ok(self
                .db
                .collection::<Document>(USERS)
                .count_documents(doc! { "is_admin": true })
                .await?)
        })
    }
}

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use bson::Document;

use crate::collections::USERS;
use crate::models::administrator::Administrator;
use crate::store::{SeedStore, StoreFuture};

/// In-process stand-in for a MongoDB database. Records are stored as BSON
/// documents so serialization is exercised the same way the driver does it.
pub struct MemoryStore {
    name: String,
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            collections: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn with_collections(name: &str, existing: &[&str]) -> Self {
        let store = Self::new(name);
        {
            let mut collections = store.lock();
            for c in existing {
                collections.insert(c.to_string(), Vec::new());
            }
        }
        store
    }

    pub fn collection_names_sorted(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.lock().get(collection).cloned().unwrap_or_default()
    }

    /// Decodes every document in `users` that parses as an administrator.
    pub fn administrators(&self) -> Vec<Administrator> {
        self.documents(USERS)
            .into_iter()
            .filter_map(|d| bson::from_document(d).ok())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Vec<Document>>> {
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SeedStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    fn collection_names(&self) -> StoreFuture<'_, Vec<String>> {
        Box::pin(async move { Ok(self.collection_names_sorted()) })
    }

    fn create_collection<'a>(&'a self, name: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.lock().entry(name.to_string()).or_default();
            Ok(())
        })
    }

    fn insert_administrator<'a>(&'a self, record: &'a Administrator) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let doc = bson::to_document(record)?;
            // Inserting into a missing collection creates it, as on the server.
            self.lock().entry(USERS.to_string()).or_default().push(doc);
            Ok(())
        })
    }

    fn count_administrators(&self) -> StoreFuture<'_, u64> {
        Box::pin(async move {
            let count = self
                .documents(USERS)
                .iter()
                .filter(|d| matches!(d.get_bool("is_admin"), Ok(true)))
                .count();
            Ok(count as u64)
        })
    }
}

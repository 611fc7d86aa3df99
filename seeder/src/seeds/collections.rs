use crate::seed::{SeedFuture, Seeder};
use db::SeedStore;
use db::collections::ensure_collections;

pub struct CollectionSeeder;

impl Seeder for CollectionSeeder {
    fn seed<'a>(&'a self, store: &'a dyn SeedStore) -> SeedFuture<'a> {
        Box::pin(async move {
            let report = ensure_collections(store).await?;
            log::info!(
                "{} collection(s) created, {} already present",
                report.created.len(),
                report.existing.len()
            );
            Ok(())
        })
    }
}

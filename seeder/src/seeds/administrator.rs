use crate::seed::{SeedFuture, Seeder};
use db::SeedStore;
use db::collections::USERS;
use db::models::administrator::Administrator;

/// Inserts the default administrator. Every run inserts a new record; no
/// unique index exists to stop duplicates.
pub struct AdministratorSeeder {
    bcrypt_cost: u32,
}

impl AdministratorSeeder {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self { bcrypt_cost }
    }
}

impl Seeder for AdministratorSeeder {
    fn seed<'a>(&'a self, store: &'a dyn SeedStore) -> SeedFuture<'a> {
        Box::pin(async move {
            let record = Administrator::seeded(self.bcrypt_cost)?;
            store.insert_administrator(&record).await?;
            log::info!("Administrator '{}' created", record.username);

            // The record is already written; a failed count only loses the warning.
            match store.count_administrators().await {
                Ok(admins) if admins > 1 => log::warn!(
                    "'{}' now holds {} administrator records; re-seeding inserts duplicates",
                    USERS,
                    admins
                ),
                Ok(_) => {}
                Err(e) => log::warn!("Could not count administrator records: {}", e),
            }
            Ok(())
        })
    }
}

pub mod administrator;
pub mod collections;

use crate::seed::{SeedError, Seeder, run_seeder};
use administrator::AdministratorSeeder;
use collections::CollectionSeeder;
use db::SeedStore;

/// Runs every seed step in order, stopping at the first failure.
pub async fn run_all(store: &dyn SeedStore, bcrypt_cost: u32) -> Result<(), SeedError> {
    for (seeder, name) in [
        (Box::new(CollectionSeeder) as Box<dyn Seeder>, "Collections"),
        (Box::new(AdministratorSeeder::new(bcrypt_cost)), "Administrator"),
    ] {
        run_seeder(&*seeder, name, store).await?;
    }
    Ok(())
}

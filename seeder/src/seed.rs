use colored::*;
use db::{DbError, SeedStore};
use futures::FutureExt;
use std::future::Future;
use std::io::{self, Write};
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::time::{Duration, Instant};
use thiserror::Error;

const STATUS_COLUMN: usize = 80;

pub type SeedFuture<'a> = Pin<Box<dyn Future<Output = Result<(), DbError>> + Send + 'a>>;

pub trait Seeder: Send + Sync {
    fn seed<'a>(&'a self, store: &'a dyn SeedStore) -> SeedFuture<'a>;
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error("seed step panicked")]
    Panicked,
}

/// Runs one seed step behind a `Seeding <name>....... done (1.23ms)` status
/// line. Errors and panics print `failed` and are returned to the caller.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    store: &dyn SeedStore,
) -> Result<Duration, SeedError> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    let _ = io::stdout().flush();

    let start = Instant::now();
    match AssertUnwindSafe(seeder.seed(store)).catch_unwind().await {
        Ok(Ok(())) => {
            let elapsed = start.elapsed();
            let time_str = format!("({:.2?})", elapsed).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(elapsed)
        }
        Ok(Err(e)) => {
            println!("{}", "failed".red());
            log::error!("Seeding {} failed: {}", name, e);
            Err(e.into())
        }
        Err(_) => {
            println!("{}", "failed".red());
            log::error!("Seeding {} panicked", name);
            Err(SeedError::Panicked)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::MemoryStore;

    struct NoopSeeder;

    impl Seeder for NoopSeeder {
        fn seed<'a>(&'a self, _store: &'a dyn SeedStore) -> SeedFuture<'a> {
            Box::pin(async move { Ok(()) })
        }
    }

    struct PanickingSeeder;

    impl Seeder for PanickingSeeder {
        #[allow(unreachable_code)]
        fn seed<'a>(&'a self, _store: &'a dyn SeedStore) -> SeedFuture<'a> {
            Box::pin(async move {
                let result: Result<(), DbError> = panic!("boom");
                result
            })
        }
    }

    #[tokio::test]
    async fn successful_step_reports_duration() {
        let store = MemoryStore::new("islam_education");
        assert!(run_seeder(&NoopSeeder, "Noop", &store).await.is_ok());
    }

    #[tokio::test]
    async fn panic_is_reported_as_failure() {
        let store = MemoryStore::new("islam_education");

        let result = run_seeder(&PanickingSeeder, "Panicking", &store).await;

        assert!(matches!(result, Err(SeedError::Panicked)));
    }
}

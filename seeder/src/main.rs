use common::config::Config;
use common::logger;
use db::SeedStore;
use std::process::ExitCode;

mod seed;
mod seeds;

#[tokio::main]
async fn main() -> ExitCode {
    Config::init(".env");
    let config = Config::get();

    if let Err(e) = logger::init_logger(&config.log_level, &config.log_file) {
        eprintln!("Failed to initialise logger: {e}");
        return ExitCode::FAILURE;
    }
    log::info!("Starting {}", config.project_name);

    let store = match db::connect(config).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Could not connect to database '{}': {}", config.database_name, e);
            return ExitCode::FAILURE;
        }
    };

    if seeds::run_all(&store, config.bcrypt_cost).await.is_err() {
        return ExitCode::FAILURE;
    }

    log::info!("Database {} initialised", store.database_name());
    ExitCode::SUCCESS
}

use mealie_db::{DbProvider, Settings};
use mimalloc::MiMalloc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Settings::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.log_level.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        db_engine = %cfg.db_engine,
        data_dir = %cfg.data_dir.display(),
        env_file = %cfg.env_file.display(),
        env_encoding = %cfg.env_encoding
    );

    let provider = cfg.db_provider()?;
    let public = provider.db_url_public();

    // Resolve the full URL once so a bad override fails at startup.
    if let Err(e) = provider.db_url() {
        error!(db_url = %public, error = %e, "database configuration is invalid");
        return Err(e.into());
    }

    info!(db_url = %public, "database connection target resolved");
    println!("{public}");
    Ok(())
}

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use trainer_service::config::{CREDENTIAL_PATH, Config};
use trainer_service::db::MongoStore;
use trainer_service::router::{TrainerState, trainer_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load(CREDENTIAL_PATH)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.settings.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        host = %cfg.credential.host,
        user = %cfg.credential.user,
        database = %cfg.settings.database,
        collection = %cfg.settings.collection,
        loglevel = %cfg.settings.loglevel
    );

    let store = MongoStore::connect(&cfg).await?;

    let app = trainer_router(TrainerState::new(store));

    let addr = cfg.settings.listen_addr.as_str();
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<Pool>>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies require HTTPS, which local development doesn't have
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_expiry_days,
        )));

    Ok(session)
}

/// Connect to the backing services and serve the API until the process is stopped
pub async fn serve(config: Config) -> Result<(), Error> {
    let db = connect_to_database(&config).await?;
    let session = connect_to_session(&config).await?;

    let app = router::routes()
        .with_state(AppState::new(db))
        .layer(session);

    let listener = TcpListener::bind(config.listen_addr).await?;

    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

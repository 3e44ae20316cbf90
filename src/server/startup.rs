//! Initialization of the database connection and schema.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};
use url::Url;

use crate::server::{config::Config, error::AppError};

/// Connects to the configured database and makes sure every table exists.
///
/// Remote databases are pinged first so a bad `DATABASE_URL` fails at startup
/// instead of on the first request. The URL is logged with its password masked.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let masked = mask_database_url(&config.database_url);

    if config.is_sqlite() {
        tracing::info!("Using local database: {}", masked);
    } else {
        tracing::info!("Connecting to remote database: {}", masked);
    }

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await.map_err(|e| {
        tracing::error!("Failed to connect to database {}: {}", masked, e);
        e
    })?;

    if !config.is_sqlite() {
        db.ping().await?;
        tracing::info!("Remote database connection OK");
    }

    create_tables(&db).await?;

    Ok(db)
}

/// Creates any missing table from the entity definitions.
///
/// Tables are created parents first so foreign keys resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    create_table(db, backend, entity::prelude::Survey).await?;
    create_table(db, backend, entity::prelude::User).await?;
    create_table(db, backend, entity::prelude::Question).await?;
    create_table(db, backend, entity::prelude::Answer).await?;

    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    backend: sea_orm::DbBackend,
    entity: E,
) -> Result<(), DbErr> {
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(&stmt).await?;

    Ok(())
}

/// Hides the password of a database URL for logging.
///
/// URLs that cannot be parsed are truncated to 80 characters instead.
pub fn mask_database_url(database_url: &str) -> String {
    match Url::parse(database_url) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) if database_url.chars().count() > 80 => {
            format!("{}...", database_url.chars().take(80).collect::<String>())
        }
        Err(_) => database_url.to_string(),
    }
}

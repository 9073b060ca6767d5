use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Owns the connection pool. Handlers receive it through `web::Data<Arc<DatabaseService>>`.
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        Self::connect(ConnectOptions::new(uri.to_owned())).await
    }

    /// Connects with explicit pool options and brings the schema up to date.
    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }
}

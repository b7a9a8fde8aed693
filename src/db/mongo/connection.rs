//! MongoDB client setup.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use tracing::{debug, info};

use super::{MongoProjectRepository, MongoSkillRepository};
use crate::db::{Database, DbConfig, DbError, DbResult};

/// MongoDB database implementation.
///
/// Owns the driver client (and with it the connection pool). Create one per
/// process and pass it to whoever needs the repositories.
pub struct MongoDatabase {
    client: Client,
    db: mongodb::Database,
}

impl MongoDatabase {
    /// Connect using the given configuration and ping the server.
    ///
    /// Unreachable hosts and rejected credentials surface here as
    /// `DbError::Connection` rather than on the first query.
    pub async fn connect(config: &DbConfig) -> DbResult<Self> {
        let connection_error = |e: mongodb::error::Error| DbError::Connection {
            message: e.to_string(),
        };

        let options = client_options(config).await?;
        let client = Client::with_options(options).map_err(connection_error)?;
        let db = client.database(&config.database);

        debug!(database = %config.database, "pinging MongoDB");
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(connection_error)?;
        info!(database = %config.database, "connected to MongoDB");

        Ok(Self { client, db })
    }

    /// Direct access to the driver database handle.
    pub fn database(&self) -> &mongodb::Database {
        &self.db
    }
}

impl Database for MongoDatabase {
    type Projects<'a> = MongoProjectRepository<'a>;
    type Skills<'a> = MongoSkillRepository<'a>;

    fn projects(&self) -> Self::Projects<'_> {
        MongoProjectRepository { db: &self.db }
    }

    fn skills(&self) -> Self::Skills<'_> {
        MongoSkillRepository { db: &self.db }
    }

    async fn close(self) {
        self.client.shutdown().await;
    }
}

/// Parse the connection string and attach the configured credentials.
///
/// The driver only keeps `authSource` from the URI when the URI itself
/// carries a username, so it is read back from the query string here.
pub(crate) async fn client_options(config: &DbConfig) -> DbResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;

    if let Some(credentials) = &config.credentials {
        let mut credential = options.credential.take().unwrap_or_default();
        credential.username = Some(credentials.user.clone());
        credential.password = Some(credentials.password.clone());
        if credential.source.is_none() {
            credential.source = auth_source(&config.uri);
        }
        options.credential = Some(credential);
    }

    Ok(options)
}

fn auth_source(uri: &str) -> Option<String> {
    let (_, query) = uri.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("authSource"))
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

//! Connection lifecycle: construct, verify liveness, close

use std::time::Duration;

use docstore_common::{DocStoreError, Result};
use mongodb::options::ClientOptions as DriverOptions;
use mongodb::Client as DriverClient;
use tracing::info;

use crate::handle::{MongoHandle, StoreHandle};

/// Options consumed once when establishing a connection.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    /// MongoDB connection URI
    pub uri: String,
    /// Bound on establishing the connection and on the initial liveness check (default: 10s)
    pub connect_timeout: Duration,
    /// Bound on selecting a server for each operation (default: 30s)
    pub server_selection_timeout: Duration,
    /// Application name reported in server logs
    pub app_name: Option<String>,
}

impl ConnectOptions {
    /// Options for the given URI with default timeouts.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(30),
            app_name: None,
        }
    }
}

/// A verified connection to the document store.
///
/// The client exclusively owns one store handle and holds no other state,
/// so it may be used from multiple call-sites concurrently; safety under
/// concurrency is the handle's documented contract, not something this
/// layer enforces. [`Client::close`] consumes the client, which makes
/// use-after-close and double-close unrepresentable.
#[derive(Debug)]
pub struct Client<H = MongoHandle> {
    handle: H,
}

impl Client<MongoHandle> {
    /// Connect to the store and verify liveness before handing the client out.
    ///
    /// The liveness check is a ping routed primary-preferred, bounded by the
    /// same window as the connection attempt. If the ping fails, the
    /// partially-established connection is shut down before the error is
    /// returned.
    pub async fn connect(options: ConnectOptions) -> Result<Self> {
        if options.connect_timeout.is_zero() {
            return Err(DocStoreError::connection_msg(
                "failed to connect: connect timeout must be non-zero",
            ));
        }

        let mut driver_options = DriverOptions::parse(&options.uri)
            .await
            .map_err(|e| DocStoreError::connection("failed to connect", e))?;
        driver_options.connect_timeout = Some(options.connect_timeout);
        driver_options.server_selection_timeout = Some(options.server_selection_timeout);
        driver_options.app_name = options.app_name;

        let driver = DriverClient::with_options(driver_options)
            .map_err(|e| DocStoreError::connection("failed to connect", e))?;

        let client = tokio::time::timeout(
            options.connect_timeout,
            Self::with_handle(MongoHandle::new(driver)),
        )
        .await
        .map_err(|_| DocStoreError::connection_msg("failed to ping: liveness check timed out"))??;

        info!("connected to document store");
        Ok(client)
    }
}

impl<H: StoreHandle> Client<H> {
    /// Wrap an already-constructed handle after verifying liveness.
    ///
    /// On ping failure the handle is shut down before the error is returned,
    /// so no connection leaks out of the failure path.
    pub async fn with_handle(handle: H) -> Result<Self> {
        if let Err(err) = handle.ping().await {
            let _ = handle.shutdown().await;
            return Err(err);
        }
        Ok(Self { handle })
    }

    /// Re-run the liveness check on demand.
    pub async fn ping(&self) -> Result<()> {
        self.handle.ping().await
    }

    /// Release the owned connection.
    pub async fn close(self) -> Result<()> {
        self.handle.shutdown().await?;
        info!("closed document store connection");
        Ok(())
    }

    pub(crate) fn handle(&self) -> &H {
        &self.handle
    }
}

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::feed::JobFeed;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Profile documents. Default: PgProfileStore.
    pub profiles: Arc<dyn ProfileStore>,
    /// External job feed. AdzunaFeed when credentials are set, DisabledFeed otherwise.
    pub feed: Arc<dyn JobFeed>,
    /// Read-only job and course catalogs, loaded once at startup.
    pub catalog: Arc<Catalog>,
    pub config: Config,
}

//! HTTP server configuration object.

use std::net::SocketAddr;

use accounts::outbound::hashing::Argon2CredentialHasher;
use accounts::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) hash_memory_kib: u32,
}

impl ServerConfig {
    /// Bind to `bind_addr` and persist through `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            hash_memory_kib: Argon2CredentialHasher::DEFAULT_MEMORY_KIB,
        }
    }

    /// Override the Argon2 memory cost.
    #[must_use]
    pub fn with_hash_memory_kib(mut self, hash_memory_kib: u32) -> Self {
        self.hash_memory_kib = hash_memory_kib;
        self
    }
}

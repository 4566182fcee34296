//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserAccounts;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn UserAccounts>,
}

impl HttpState {
    /// Construct state around an account use-case implementation.
    pub fn new(accounts: Arc<dyn UserAccounts>) -> Self {
        Self { accounts }
    }
}

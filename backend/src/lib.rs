//! User account service library.
//!
//! Hexagonal layout: [`domain`] holds entities, ports, and the account
//! service; [`inbound`] adapts HTTP onto the driving port; [`outbound`]
//! implements the driven ports with PostgreSQL and Argon2id.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

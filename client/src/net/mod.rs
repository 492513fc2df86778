//! Networking modules for the admin REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` configures the shared HTTP client, `api` defines one function per
//! backend operation, `error` holds the failure taxonomy, and `types` defines
//! the record schema.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

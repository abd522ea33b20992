//! Hubsync Remote Hub Client
//!
//! The boundary to the remote push-notification hub: the [`HubClient`]
//! trait implemented by transports, its error classification, and hub
//! connection configuration.

mod config;
mod error;
mod traits;

pub use config::*;
pub use error::*;
pub use traits::*;

//! Hubsync Core Types
//!
//! Domain types for push-notification hub registrations: registration
//! names, tag sets, and the registration record itself.

mod registration;
mod tags;

pub use registration::*;
pub use tags::*;

//! Hubsync Registration Service
//!
//! The registration reconciler: decides, for each desired registration,
//! whether the hub needs a create, an update, or nothing, keeps the local
//! registration store convergent with the hub, and absorbs hub-side
//! invalidation of cached registration ids.

mod error;
mod locks;
mod registrar;
mod traits;

pub use error::*;
pub use registrar::*;
pub use traits::*;

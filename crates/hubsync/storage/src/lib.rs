//! Hubsync Storage Layer
//!
//! The Local Registration Store: a durable `name -> remote id` mapping the
//! reconciler consults before touching the network. Diesel/SQLite-backed
//! for real devices, with an in-memory implementation for tests.

mod error;
mod memory;
mod models;
mod schema;
mod sqlite;
mod traits;

pub use error::*;
pub use memory::MemoryStore;
pub use models::*;
pub use sqlite::SqliteStore;
pub use traits::*;

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

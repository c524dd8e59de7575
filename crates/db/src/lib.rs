//! healthsync-db – Persistenz fuer Benutzer und Organisationen
//!
//! Dieses Crate stellt das Repository-Pattern bereit. Ein dauerhaftes
//! SQLite-Backend und ein fluechtiger In-Process-Fallback implementieren
//! dieselben Traits; der [`Datenspeicher`] waehlt pro Aufruf zwischen beiden.

pub mod datenspeicher;
pub mod error;
pub mod katalog;
pub mod memory;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use datenspeicher::Datenspeicher;
pub use error::DbError;
pub use memory::MemoryDb;
pub use repository::{DatabaseConfig, DbResult, OrganizationRepository, UserRepository};
pub use sqlite::SqliteDb;

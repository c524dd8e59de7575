//! SQLite-Backend-Implementierungen fuer alle Repository-Traits

pub mod id_suche;
pub mod organizations;
pub mod pool;
pub mod users;

pub use pool::SqliteDb;

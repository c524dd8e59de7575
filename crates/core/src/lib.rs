//! healthsync-core – Gemeinsame Domaenen-Typen
//!
//! Dieses Crate stellt das Vokabular bereit, das von allen anderen
//! HealthSync-Crates gemeinsam genutzt wird: Rollen, das offene
//! Profil-Attributbuendel und die Slug-Ableitung fuer Organisationen.

pub mod slug;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use slug::slug_ableiten;
pub use types::{organisationsname_ableiten, rollen, Profil, PROFIL_ORGANISATION_ID};

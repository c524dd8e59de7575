//! Datenbankmodelle fuer HealthSync
//!
//! Diese Typen repraesentieren Datensaetze aus dem Speicher, unabhaengig davon
//! ob sie aus dem dauerhaften Backend oder dem Fallback stammen. IDs sind
//! opake Strings: das SQLite-Backend vergibt Zeilen-IDs (`"42"`), der
//! Fallback zufaellige UUIDs.

use chrono::{DateTime, Utc};
use healthsync_core::Profil;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Benutzer
// ---------------------------------------------------------------------------

/// Benutzer-Datensatz
///
/// Enthaelt den Passwort-Hash und darf deshalb nie direkt an Aufrufer
/// serialisiert werden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenutzerRecord {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub profile: Profil,
    pub created_at: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Benutzers
#[derive(Debug, Clone)]
pub struct NeuerBenutzer<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub profile: &'a Profil,
}

// ---------------------------------------------------------------------------
// Organisationen
// ---------------------------------------------------------------------------

/// Organisations-Datensatz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganisationRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// ID des Benutzers, der die Organisation angelegt hat
    pub admin: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Daten zum Erstellen einer neuen Organisation
#[derive(Debug, Clone)]
pub struct NeueOrganisation<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub admin: &'a str,
}

/// Listeneintrag einer Organisation, wie er nach aussen gegeben wird
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganisationEintrag {
    pub id: String,
    pub name: String,
}

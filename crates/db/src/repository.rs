//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der konkreten
//! Persistenz. Implementiert werden die Traits vom SQLite-Backend
//! ([`crate::SqliteDb`]), vom In-Process-Fallback ([`crate::MemoryDb`]) und
//! vom [`crate::Datenspeicher`], der pro Aufruf zwischen beiden waehlt.

use std::future::Future;

use crate::error::DbError;
use crate::models::{
    BenutzerRecord, NeueOrganisation, NeuerBenutzer, OrganisationEintrag, OrganisationRecord,
};

/// Result-Alias fuer Datenbankoperationen
pub type DbResult<T> = Result<T, DbError>;

/// Standard-Datenbankname, wenn keiner konfiguriert ist
pub const STANDARD_DATENBANKNAME: &str = "healthsync";

/// Konfiguration fuer die dauerhafte Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://daten/" oder "sqlite://healthsync.db")
    pub url: String,
    /// Datenbankname; wird nur verwendet wenn `url` auf ein Verzeichnis zeigt
    pub name: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob WAL-Modus bei SQLite aktiviert werden soll
    pub sqlite_wal: bool,
}

impl DatabaseConfig {
    /// Erstellt eine Konfiguration mit Standardwerten fuer die gegebene URL
    pub fn neu(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: STANDARD_DATENBANKNAME.into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }

    /// Gibt die tatsaechliche Verbindungs-URL zurueck
    ///
    /// Endet die URL mit `/`, bezeichnet sie ein Verzeichnis und die
    /// Datenbankdatei heisst `<name>.db`.
    pub fn verbindungs_url(&self) -> String {
        if self.url.ends_with('/') {
            format!("{}{}.db", self.url, self.name)
        } else {
            self.url.clone()
        }
    }
}

/// Repository fuer Benutzer-Datenzugriffe
pub trait UserRepository: Send + Sync {
    /// Erster Benutzer mit exakt dieser E-Mail (keine Normalisierung)
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = DbResult<Option<BenutzerRecord>>> + Send;

    /// Benutzer anhand seiner ID; ungueltig geformte IDs ergeben `None`, nie einen Fehler
    fn find_by_id(&self, id: &str) -> impl Future<Output = DbResult<Option<BenutzerRecord>>> + Send;

    /// Legt einen neuen Benutzer an. Prueft NICHT auf bestehende E-Mails.
    fn create_user(
        &self,
        data: NeuerBenutzer<'_>,
    ) -> impl Future<Output = DbResult<BenutzerRecord>> + Send;

    /// Setzt `profile.organizationId` eines Benutzers.
    ///
    /// Gibt `true` zurueck wenn ein Datensatz aktualisiert wurde.
    fn set_organization(
        &self,
        user_id: &str,
        organisation_id: &str,
    ) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Repository fuer Organisations-Datenzugriffe
pub trait OrganizationRepository: Send + Sync {
    /// Alle Organisationen in stabiler Reihenfolge
    fn list(&self) -> impl Future<Output = DbResult<Vec<OrganisationEintrag>>> + Send;

    /// Legt eine Organisation an.
    ///
    /// Gibt `None` zurueck wenn kein dauerhaftes Backend verfuegbar ist;
    /// die Organisation wird dann nirgends gespeichert.
    fn create(
        &self,
        data: NeueOrganisation<'_>,
    ) -> impl Future<Output = DbResult<Option<OrganisationRecord>>> + Send;
}

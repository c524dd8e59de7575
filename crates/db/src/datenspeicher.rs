//! Backend-Auswahl pro Aufruf
//!
//! Der [`Datenspeicher`] haelt eine optionale Konfiguration fuer das dauerhafte
//! Backend, einen einmalig und verzoegert geoeffneten Pool sowie den
//! In-Process-Fallback. Jeder Repository-Aufruf fragt erneut nach einem
//! lebenden Handle: ist kein Backend konfiguriert, arbeitet er auf dem
//! Fallback. Der erste Aufruf mit Konfiguration oeffnet den Pool; alle
//! weiteren nutzen denselben Handle. Schlaegt das Oeffnen fehl, wird der
//! Fehler an den Aufrufer gereicht und ein spaeterer Aufruf versucht es erneut.

use tokio::sync::OnceCell;

use crate::memory::MemoryDb;
use crate::models::{
    BenutzerRecord, NeueOrganisation, NeuerBenutzer, OrganisationEintrag, OrganisationRecord,
};
use crate::repository::{DatabaseConfig, DbResult, OrganizationRepository, UserRepository};
use crate::sqlite::SqliteDb;

/// Aufgeloestes Backend fuer einen einzelnen Aufruf
enum Backend<'a> {
    Dauerhaft(&'a SqliteDb),
    Fallback(&'a MemoryDb),
}

/// Datenspeicher mit dauerhaftem Backend oder In-Process-Fallback
#[derive(Debug, Default)]
pub struct Datenspeicher {
    config: Option<DatabaseConfig>,
    verbindung: OnceCell<SqliteDb>,
    fallback: MemoryDb,
}

impl Datenspeicher {
    /// Erstellt einen Datenspeicher; ohne Konfiguration wird nur der Fallback genutzt
    pub fn neu(config: Option<DatabaseConfig>) -> Self {
        match &config {
            Some(c) => tracing::info!(url = %c.verbindungs_url(), "Dauerhaftes Backend konfiguriert"),
            None => tracing::warn!(
                "Kein dauerhaftes Backend konfiguriert, Daten leben nur im Prozess"
            ),
        }
        Self {
            config,
            verbindung: OnceCell::new(),
            fallback: MemoryDb::neu(),
        }
    }

    /// Datenspeicher ausschliesslich mit Fallback
    pub fn nur_fallback() -> Self {
        Self::default()
    }

    /// Datenspeicher mit bereits geoeffnetem Pool (z.B. `SqliteDb::in_memory()`)
    pub fn mit_verbindung(db: SqliteDb) -> Self {
        Self {
            config: None,
            verbindung: OnceCell::new_with(Some(db)),
            fallback: MemoryDb::neu(),
        }
    }

    /// Gibt `true` zurueck wenn ein dauerhaftes Backend konfiguriert oder geoeffnet ist
    pub fn ist_dauerhaft(&self) -> bool {
        self.config.is_some() || self.verbindung.initialized()
    }

    async fn backend(&self) -> DbResult<Backend<'_>> {
        if let Some(db) = self.verbindung.get() {
            return Ok(Backend::Dauerhaft(db));
        }
        match &self.config {
            Some(config) => {
                let db = self
                    .verbindung
                    .get_or_try_init(|| SqliteDb::oeffnen(config))
                    .await?;
                Ok(Backend::Dauerhaft(db))
            }
            None => Ok(Backend::Fallback(&self.fallback)),
        }
    }
}

impl UserRepository for Datenspeicher {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
        match self.backend().await? {
            Backend::Dauerhaft(db) => db.find_by_email(email).await,
            Backend::Fallback(mem) => mem.find_by_email(email).await,
        }
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<BenutzerRecord>> {
        match self.backend().await? {
            Backend::Dauerhaft(db) => db.find_by_id(id).await,
            Backend::Fallback(mem) => mem.find_by_id(id).await,
        }
    }

    async fn create_user(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        match self.backend().await? {
            Backend::Dauerhaft(db) => db.create_user(data).await,
            Backend::Fallback(mem) => mem.create_user(data).await,
        }
    }

    async fn set_organization(&self, user_id: &str, organisation_id: &str) -> DbResult<bool> {
        match self.backend().await? {
            Backend::Dauerhaft(db) => db.set_organization(user_id, organisation_id).await,
            Backend::Fallback(mem) => mem.set_organization(user_id, organisation_id).await,
        }
    }
}

impl OrganizationRepository for Datenspeicher {
    async fn list(&self) -> DbResult<Vec<OrganisationEintrag>> {
        match self.backend().await? {
            Backend::Dauerhaft(db) => db.list().await,
            Backend::Fallback(mem) => mem.list().await,
        }
    }

    async fn create(&self, data: NeueOrganisation<'_>) -> DbResult<Option<OrganisationRecord>> {
        match self.backend().await? {
            Backend::Dauerhaft(db) => db.create(data).await,
            Backend::Fallback(mem) => mem.create(data).await,
        }
    }
}

//! Organisations-Verzeichnis
//!
//! Liefert die Liste der Organisationen. Scheitert der Speicher, wird der
//! feste Katalog ausgeliefert; Aufrufer sehen nie einen Fehler und nie eine
//! leere Liste.

use std::sync::Arc;

use healthsync_db::{
    katalog::katalog_eintraege, models::OrganisationEintrag, repository::OrganizationRepository,
};

/// Lesender Zugriff auf alle Organisationen
pub struct OrganisationsVerzeichnis<O: OrganizationRepository> {
    org_repo: Arc<O>,
}

impl<O: OrganizationRepository> OrganisationsVerzeichnis<O> {
    pub fn neu(org_repo: Arc<O>) -> Self {
        Self { org_repo }
    }

    /// Alle Organisationen; bei Fehlern oder leerem Ergebnis der feste Katalog
    pub async fn auflisten(&self) -> Vec<OrganisationEintrag> {
        match self.org_repo.list().await {
            Ok(liste) if !liste.is_empty() => liste,
            Ok(_) => {
                tracing::warn!("Organisationsliste leer, liefere festen Katalog");
                katalog_eintraege()
            }
            Err(e) => {
                tracing::error!(fehler = %e, "Organisationen konnten nicht geladen werden");
                katalog_eintraege()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthsync_db::{
        models::{NeueOrganisation, OrganisationRecord},
        DbError, DbResult, MemoryDb, SqliteDb,
    };

    struct Unerreichbar;

    impl OrganizationRepository for Unerreichbar {
        async fn list(&self) -> DbResult<Vec<OrganisationEintrag>> {
            Err(DbError::intern("Verbindung verweigert"))
        }

        async fn create(&self, _data: NeueOrganisation<'_>) -> DbResult<Option<OrganisationRecord>> {
            Err(DbError::intern("Verbindung verweigert"))
        }
    }

    #[tokio::test]
    async fn unerreichbares_backend_liefert_katalog() {
        let verzeichnis = OrganisationsVerzeichnis::neu(Arc::new(Unerreichbar));
        let liste = verzeichnis.auflisten().await;
        assert_eq!(liste, katalog_eintraege());
    }

    #[tokio::test]
    async fn fallback_liefert_katalog_mit_synthetischen_ids() {
        let verzeichnis = OrganisationsVerzeichnis::neu(Arc::new(MemoryDb::neu()));
        let liste = verzeichnis.auflisten().await;
        assert_eq!(liste.len(), 3);
        assert_eq!(liste[2].id, "org-3");
        assert_eq!(liste[2].name, "Independent Practice C");
    }

    #[tokio::test]
    async fn dauerhaftes_backend_liefert_gespeicherte_ids() {
        let db = Arc::new(SqliteDb::in_memory().await.unwrap());
        let verzeichnis = OrganisationsVerzeichnis::neu(Arc::clone(&db));

        let liste = verzeichnis.auflisten().await;
        assert_eq!(liste.len(), 3);
        assert_eq!(liste[0].id, "1");
        assert_eq!(liste[0].name, "Community Clinic A");
    }
}

//! In-Process-Fallback fuer Umgebungen ohne dauerhaftes Backend
//!
//! Benutzer werden in einer `HashMap` gehalten, Schluessel ist eine
//! zufaellig vergebene UUID. Der Inhalt lebt nur so lange wie die Instanz;
//! es gibt keine Persistenz. Gedacht fuer Entwicklung und Tests, nicht fuer
//! den Produktivbetrieb.
//!
//! Gleichzeitige Schreiber koennen sich verschraenken: Lese-dann-Schreib-Folgen
//! (Duplikatpruefung, dann Anlegen) sind nicht atomar.

use std::collections::HashMap;

use chrono::Utc;
use healthsync_core::PROFIL_ORGANISATION_ID;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::katalog::katalog_eintraege;
use crate::models::{
    BenutzerRecord, NeueOrganisation, NeuerBenutzer, OrganisationEintrag, OrganisationRecord,
};
use crate::repository::{DbResult, OrganizationRepository, UserRepository};

/// Fluechtiger Benutzer-Speicher
#[derive(Debug, Default)]
pub struct MemoryDb {
    /// id -> Benutzer
    benutzer: RwLock<HashMap<String, BenutzerRecord>>,
}

impl MemoryDb {
    /// Erstellt einen neuen leeren Speicher
    pub fn neu() -> Self {
        Self::default()
    }

    /// Anzahl der gespeicherten Benutzer
    pub async fn anzahl(&self) -> usize {
        self.benutzer.read().await.len()
    }
}

impl UserRepository for MemoryDb {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
        let benutzer = self.benutzer.read().await;
        Ok(benutzer.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<BenutzerRecord>> {
        Ok(self.benutzer.read().await.get(id).cloned())
    }

    async fn create_user(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        let record = BenutzerRecord {
            id: Uuid::new_v4().to_string(),
            email: data.email.to_string(),
            password_hash: data.password_hash.to_string(),
            role: data.role.to_string(),
            profile: data.profile.clone(),
            created_at: Utc::now(),
        };

        self.benutzer
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        tracing::debug!(user_id = %record.id, backend = "fallback", "Benutzer angelegt");
        Ok(record)
    }

    async fn set_organization(&self, user_id: &str, organisation_id: &str) -> DbResult<bool> {
        let mut benutzer = self.benutzer.write().await;
        match benutzer.get_mut(user_id) {
            Some(user) => {
                user.profile.insert(
                    PROFIL_ORGANISATION_ID.to_string(),
                    Value::String(organisation_id.to_string()),
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl OrganizationRepository for MemoryDb {
    async fn list(&self) -> DbResult<Vec<OrganisationEintrag>> {
        Ok(katalog_eintraege())
    }

    async fn create(&self, data: NeueOrganisation<'_>) -> DbResult<Option<OrganisationRecord>> {
        tracing::debug!(
            name = %data.name,
            backend = "fallback",
            "Kein dauerhaftes Backend, Organisation wird nicht gespeichert"
        );
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthsync_core::Profil;

    fn neuer<'a>(email: &'a str, profil: &'a Profil) -> NeuerBenutzer<'a> {
        NeuerBenutzer {
            email,
            password_hash: "hash",
            role: "doctor",
            profile: profil,
        }
    }

    #[tokio::test]
    async fn anlegen_und_laden() {
        let db = MemoryDb::neu();
        let profil = Profil::new();
        let user = db.create_user(neuer("a@b.com", &profil)).await.unwrap();

        Uuid::parse_str(&user.id).expect("Fallback-IDs sind UUIDs");

        let nach_id = db.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(nach_id.email, "a@b.com");

        let nach_email = db.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(nach_email.id, user.id);
    }

    #[tokio::test]
    async fn email_vergleich_ist_exakt() {
        let db = MemoryDb::neu();
        let profil = Profil::new();
        db.create_user(neuer("a@b.com", &profil)).await.unwrap();

        assert!(db.find_by_email("A@B.com").await.unwrap().is_none());
        assert!(db.find_by_email(" a@b.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn anlegen_prueft_keine_duplikate() {
        let db = MemoryDb::neu();
        let profil = Profil::new();
        let a = db.create_user(neuer("x@y.z", &profil)).await.unwrap();
        let b = db.create_user(neuer("x@y.z", &profil)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(db.anzahl().await, 2);
    }

    #[tokio::test]
    async fn unbekannte_id_ist_nicht_gefunden() {
        let db = MemoryDb::neu();
        assert!(db.find_by_id("gibt-es-nicht").await.unwrap().is_none());
        assert!(!db.set_organization("gibt-es-nicht", "1").await.unwrap());
    }

    #[tokio::test]
    async fn organisation_setzen_aendert_profil() {
        let db = MemoryDb::neu();
        let profil = Profil::new();
        let user = db.create_user(neuer("org@x.de", &profil)).await.unwrap();

        assert!(db.set_organization(&user.id, "7").await.unwrap());
        let geladen = db.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(geladen.profile[PROFIL_ORGANISATION_ID], "7");
    }

    #[tokio::test]
    async fn organisationen_kommen_aus_dem_katalog() {
        let db = MemoryDb::neu();
        let liste = OrganizationRepository::list(&db).await.unwrap();
        assert_eq!(liste.len(), 3);
        assert_eq!(liste[0].id, "org-1");

        let erstellt = db
            .create(NeueOrganisation {
                name: "Test Clinic",
                slug: "test-clinic",
                admin: "1",
            })
            .await
            .unwrap();
        assert!(erstellt.is_none());
    }
}

//! Identitaets-Service fuer HealthSync
//!
//! Zentraler Service fuer Login, Registrierung (mit optionaler Anlage und
//! Verknuepfung einer Organisation), Sitzungsauskunft und Abmeldung.
//! Zwischen Aufrufen haelt der Service keinen Zustand; jede Abfrage geht
//! erneut an den Speicher.

use std::sync::Arc;

use healthsync_core::{
    organisationsname_ableiten, rollen, slug_ableiten, Profil, PROFIL_ORGANISATION_ID,
};
use healthsync_db::{
    models::{BenutzerRecord, NeueOrganisation, NeuerBenutzer},
    repository::{OrganizationRepository, UserRepository},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{AuthError, AuthResult},
    password::PasswortHasher,
    token::TokenAussteller,
};

/// Eingabe fuer den Login
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnmeldeAnfrage {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Eingabe fuer die Registrierung
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrierungsAnfrage {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub profile: Option<Value>,
}

/// Benutzer, wie er Aufrufern gezeigt wird (ohne Passwort-Hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenutzerZusammenfassung {
    pub id: String,
    pub email: String,
    pub role: String,
    pub profile: Profil,
}

impl From<&BenutzerRecord> for BenutzerZusammenfassung {
    fn from(record: &BenutzerRecord) -> Self {
        Self {
            id: record.id.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            profile: record.profile.clone(),
        }
    }
}

/// Ergebnis von Login und Registrierung
#[derive(Debug, Clone, Serialize)]
pub struct Anmeldung {
    pub token: String,
    pub user: BenutzerZusammenfassung,
}

/// Identitaets-Service – zentraler Einstiegspunkt fuer alle Authentifizierungsvorgaenge
pub struct IdentitaetsService<U: UserRepository, O: OrganizationRepository> {
    user_repo: Arc<U>,
    org_repo: Arc<O>,
    hasher: PasswortHasher,
    tokens: TokenAussteller,
}

impl<U: UserRepository, O: OrganizationRepository> IdentitaetsService<U, O> {
    /// Erstellt einen neuen IdentitaetsService
    pub fn neu(
        user_repo: Arc<U>,
        org_repo: Arc<O>,
        hasher: PasswortHasher,
        tokens: TokenAussteller,
    ) -> Self {
        Self {
            user_repo,
            org_repo,
            hasher,
            tokens,
        }
    }

    /// Meldet einen Benutzer an und stellt einen Token aus
    ///
    /// Unbekannte E-Mail und falsches Passwort ergeben denselben Fehler.
    pub async fn anmelden(&self, anfrage: AnmeldeAnfrage) -> AuthResult<Anmeldung> {
        let (email, passwort) = pflichtfelder(anfrage.email, anfrage.password)?;

        let benutzer = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UngueltigeAnmeldedaten)?;

        if !self.hasher.verifizieren(&passwort, &benutzer.password_hash) {
            tracing::warn!(user_id = %benutzer.id, "Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        let token = self.tokens.ausstellen(&benutzer)?;

        tracing::info!(user_id = %benutzer.id, role = %benutzer.role, "Benutzer angemeldet");

        Ok(Anmeldung {
            token,
            user: BenutzerZusammenfassung::from(&benutzer),
        })
    }

    /// Registriert einen neuen Benutzer
    ///
    /// Bei Rolle `organization` wird anschliessend eine Organisation angelegt
    /// und mit dem Benutzer verknuepft. Dieser Schritt ist best effort: scheitert
    /// er, bleibt der Benutzer bestehen und die Registrierung gilt als
    /// erfolgreich, nur ohne `organizationId` im Profil.
    pub async fn registrieren(&self, anfrage: RegistrierungsAnfrage) -> AuthResult<Anmeldung> {
        let (email, passwort) = pflichtfelder(anfrage.email, anfrage.password)?;
        let rolle = anfrage
            .role
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| rollen::STANDARD.to_string());
        let profil = match anfrage.profile {
            Some(Value::Object(map)) => map,
            _ => Profil::new(),
        };

        // Pruefen ob E-Mail bereits vergeben (nicht atomar mit dem Anlegen)
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailVergeben(email));
        }

        let passwort_hash = self.hasher.hashen(&passwort)?;
        let mut benutzer = self
            .user_repo
            .create_user(NeuerBenutzer {
                email: &email,
                password_hash: &passwort_hash,
                role: &rolle,
                profile: &profil,
            })
            .await?;

        tracing::info!(user_id = %benutzer.id, role = %rolle, "Neuer Benutzer registriert");

        if rolle == rollen::ORGANISATION {
            self.organisation_verknuepfen(&mut benutzer).await;
        }

        let token = self.tokens.ausstellen(&benutzer)?;

        Ok(Anmeldung {
            token,
            user: BenutzerZusammenfassung::from(&benutzer),
        })
    }

    /// Legt die Organisation eines frisch registrierten Benutzers an und verknuepft sie.
    ///
    /// Fehler werden protokolliert und nie an den Aufrufer gereicht. Das
    /// Profil im Speicher wird nur ergaenzt, wenn die Aktualisierung des
    /// gespeicherten Datensatzes bestaetigt wurde.
    async fn organisation_verknuepfen(&self, benutzer: &mut BenutzerRecord) {
        let Some(name) = organisationsname_ableiten(&benutzer.profile) else {
            tracing::debug!(user_id = %benutzer.id, "Kein Organisationsname, Anlage uebersprungen");
            return;
        };
        let slug = slug_ableiten(&name);

        let organisation = match self
            .org_repo
            .create(NeueOrganisation {
                name: &name,
                slug: &slug,
                admin: &benutzer.id,
            })
            .await
        {
            Ok(Some(organisation)) => organisation,
            Ok(None) => {
                tracing::debug!(user_id = %benutzer.id, "Kein dauerhaftes Backend, Organisation uebersprungen");
                return;
            }
            Err(e) => {
                tracing::warn!(user_id = %benutzer.id, fehler = %e, "Organisation konnte nicht gespeichert werden");
                return;
            }
        };

        match self
            .user_repo
            .set_organization(&benutzer.id, &organisation.id)
            .await
        {
            Ok(true) => {
                benutzer.profile.insert(
                    PROFIL_ORGANISATION_ID.to_string(),
                    Value::String(organisation.id.clone()),
                );
                tracing::info!(
                    user_id = %benutzer.id,
                    organisation_id = %organisation.id,
                    "Benutzer mit Organisation verknuepft"
                );
            }
            Ok(false) => {
                tracing::warn!(
                    user_id = %benutzer.id,
                    organisation_id = %organisation.id,
                    "Benutzer fuer Verknuepfung nicht gefunden"
                );
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %benutzer.id,
                    organisation_id = %organisation.id,
                    fehler = %e,
                    "Benutzer konnte nicht mit Organisation verknuepft werden"
                );
            }
        }
    }

    /// Gibt den Benutzer hinter einem `Authorization: Bearer <token>`-Header zurueck
    pub async fn wer_bin_ich(&self, authorization: Option<&str>) -> AuthResult<BenutzerZusammenfassung> {
        let token = authorization
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::NichtAutorisiert("missing token".into()))?;

        let claims = self
            .tokens
            .pruefen(token)
            .map_err(|_| AuthError::NichtAutorisiert("invalid token".into()))?;

        // Faellt auf die E-Mail zurueck, falls sich das ID-Schema geaendert hat
        let benutzer = match self.user_repo.find_by_id(&claims.sub).await? {
            Some(benutzer) => Some(benutzer),
            None => self.user_repo.find_by_email(&claims.email).await?,
        }
        .ok_or_else(|| AuthError::BenutzerNichtGefunden(claims.sub.clone()))?;

        Ok(BenutzerZusammenfassung::from(&benutzer))
    }

    /// Abmelden: Tokens sind zustandslos, serverseitig gibt es nichts zu tun
    pub fn abmelden(&self) {
        tracing::debug!("Abmeldung bestaetigt (zustandsloser Token)");
    }
}

/// Prueft E-Mail und Passwort auf Vorhandensein; leere Werte zaehlen als fehlend
fn pflichtfelder(email: Option<String>, passwort: Option<String>) -> AuthResult<(String, String)> {
    match (
        email.filter(|e| !e.is_empty()),
        passwort.filter(|p| !p.is_empty()),
    ) {
        (Some(email), Some(passwort)) => Ok((email, passwort)),
        _ => Err(AuthError::UngueltigeAnfrage(
            "email and password required".into(),
        )),
    }
}

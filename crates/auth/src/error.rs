//! Fehlertypen fuer den Identitaets-Service

use thiserror::Error;

/// Alle moeglichen Fehler im Identitaets-Service
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Eingabe ---
    #[error("Ungueltige Anfrage: {0}")]
    UngueltigeAnfrage(String),

    // --- Authentifizierung ---
    #[error("E-Mail oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    #[error("Nicht autorisiert: {0}")]
    NichtAutorisiert(String),

    // --- Token ---
    #[error("Token ungueltig oder abgelaufen")]
    TokenUngueltig,

    #[error("Token konnte nicht signiert werden: {0}")]
    Token(String),

    // --- Benutzerverwaltung ---
    #[error("E-Mail bereits registriert: {0}")]
    EmailVergeben(String),

    #[error("Benutzer nicht gefunden: {0}")]
    BenutzerNichtGefunden(String),

    // --- Passwort ---
    #[error("Passwort-Hashing fehlgeschlagen: {0}")]
    PasswortHashing(String),

    // --- Datenbank ---
    #[error("Datenbankfehler: {0}")]
    Datenbank(#[from] healthsync_db::DbError),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),
}

/// Fehlerklasse, wie sie Aufrufern gegenueber sichtbar wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FehlerArt {
    UngueltigeAnfrage,
    UngueltigeAnmeldedaten,
    Konflikt,
    NichtAutorisiert,
    TokenUngueltig,
    NichtGefunden,
    Unerwartet,
}

impl AuthError {
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }

    /// Ordnet den Fehler seiner Klasse zu
    pub fn art(&self) -> FehlerArt {
        match self {
            Self::UngueltigeAnfrage(_) => FehlerArt::UngueltigeAnfrage,
            Self::UngueltigeAnmeldedaten => FehlerArt::UngueltigeAnmeldedaten,
            Self::NichtAutorisiert(_) => FehlerArt::NichtAutorisiert,
            Self::TokenUngueltig => FehlerArt::TokenUngueltig,
            Self::EmailVergeben(_) => FehlerArt::Konflikt,
            Self::BenutzerNichtGefunden(_) => FehlerArt::NichtGefunden,
            Self::Token(_) | Self::PasswortHashing(_) | Self::Datenbank(_) | Self::Intern(_) => {
                FehlerArt::Unerwartet
            }
        }
    }

    /// HTTP-Statuscode fuer REST-Antworten
    pub fn http_status(&self) -> u16 {
        match self.art() {
            FehlerArt::UngueltigeAnfrage => 400,
            FehlerArt::UngueltigeAnmeldedaten
            | FehlerArt::NichtAutorisiert
            | FehlerArt::TokenUngueltig => 401,
            FehlerArt::NichtGefunden => 404,
            FehlerArt::Konflikt => 409,
            FehlerArt::Unerwartet => 500,
        }
    }

    /// Kurze, maschinenstabile Meldung fuer Aufrufer.
    ///
    /// `None` bei unerwarteten Fehlern; deren Details bleiben intern.
    pub fn oeffentliche_meldung(&self) -> Option<String> {
        match self {
            Self::UngueltigeAnfrage(msg) | Self::NichtAutorisiert(msg) => Some(msg.clone()),
            Self::UngueltigeAnmeldedaten => Some("invalid credentials".into()),
            Self::TokenUngueltig => Some("invalid token".into()),
            Self::EmailVergeben(_) => Some("user already exists".into()),
            Self::BenutzerNichtGefunden(_) => Some("user not found".into()),
            Self::Token(_) | Self::PasswortHashing(_) | Self::Datenbank(_) | Self::Intern(_) => None,
        }
    }
}

/// Result-Alias fuer den Identitaets-Service
pub type AuthResult<T> = Result<T, AuthError>;

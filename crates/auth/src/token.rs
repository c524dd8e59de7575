//! Bearer-Tokens fuer HealthSync
//!
//! Kompakte, signierte JWTs (HS256) mit Subjekt-ID, E-Mail und Rolle.
//! Tokens sind zustandslos: es gibt keine Widerrufsliste, Abmelden heisst
//! den Token auf Client-Seite verwerfen.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use healthsync_db::models::BenutzerRecord;

use crate::error::{AuthError, AuthResult};

/// Feste Token-Lebensdauer: 7 Tage
pub const TOKEN_GUELTIGKEIT_TAGE: i64 = 7;

/// Unsicherer Entwicklungs-Schluessel. Darf nie produktiv genutzt werden.
pub const UNSICHERER_DEV_SCHLUESSEL: &str = "change-this-secret";

/// Inhalt eines Bearer-Tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// ID des Benutzers
    pub sub: String,
    pub email: String,
    pub role: String,
    /// Ausstellungszeitpunkt (Unix-Sekunden)
    pub iat: i64,
    /// Ablaufzeitpunkt (Unix-Sekunden)
    pub exp: i64,
}

/// Stellt Tokens aus und prueft sie
#[derive(Clone)]
pub struct TokenAussteller {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenAussteller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAussteller").finish_non_exhaustive()
    }
}

impl TokenAussteller {
    /// Erstellt einen Aussteller mit dem serverseitigen Geheimnis
    pub fn neu(geheimnis: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Ablauf wird in `pruefen_zum` gegen eine explizite Uhrzeit geprueft
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            encoding: EncodingKey::from_secret(geheimnis.as_bytes()),
            decoding: DecodingKey::from_secret(geheimnis.as_bytes()),
            validation,
        }
    }

    /// Stellt einen Token fuer den Benutzer aus, gueltig ab jetzt
    pub fn ausstellen(&self, benutzer: &BenutzerRecord) -> AuthResult<String> {
        self.ausstellen_zum(benutzer, Utc::now())
    }

    /// Stellt einen Token mit explizitem Ausstellungszeitpunkt aus
    pub fn ausstellen_zum(
        &self,
        benutzer: &BenutzerRecord,
        jetzt: DateTime<Utc>,
    ) -> AuthResult<String> {
        let claims = Claims {
            sub: benutzer.id.clone(),
            email: benutzer.email.clone(),
            role: benutzer.role.clone(),
            iat: jetzt.timestamp(),
            exp: (jetzt + Duration::days(TOKEN_GUELTIGKEIT_TAGE)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Prueft einen Token gegen die aktuelle Uhrzeit
    pub fn pruefen(&self, token: &str) -> AuthResult<Claims> {
        self.pruefen_zum(token, Utc::now())
    }

    /// Prueft Signatur, Struktur und Ablauf eines Tokens
    ///
    /// Jeder Fehlschlag ergibt `AuthError::TokenUngueltig`.
    pub fn pruefen_zum(&self, token: &str, jetzt: DateTime<Utc>) -> AuthResult<Claims> {
        let daten = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!(fehler = %e, "Token-Pruefung fehlgeschlagen");
            AuthError::TokenUngueltig
        })?;

        if jetzt.timestamp() >= daten.claims.exp {
            tracing::debug!(sub = %daten.claims.sub, "Token abgelaufen");
            return Err(AuthError::TokenUngueltig);
        }

        Ok(daten.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthsync_core::Profil;

    fn benutzer() -> BenutzerRecord {
        BenutzerRecord {
            id: "42".into(),
            email: "a@b.com".into(),
            password_hash: "geheim".into(),
            role: "doctor".into(),
            profile: Profil::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn ausstellen_und_pruefen() {
        let aussteller = TokenAussteller::neu("test-geheimnis");
        let token = aussteller.ausstellen(&benutzer()).unwrap();

        let claims = aussteller.pruefen(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.role, "doctor");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn token_enthaelt_keinen_passwort_hash() {
        let aussteller = TokenAussteller::neu("test-geheimnis");
        let token = aussteller.ausstellen(&benutzer()).unwrap();
        let claims = aussteller.pruefen(&token).unwrap();
        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("geheim\""));
        assert!(!json.contains("password"));
    }

    #[test]
    fn ablauf_wird_geprueft() {
        let aussteller = TokenAussteller::neu("test-geheimnis");
        let ausgestellt = Utc::now() - Duration::days(30);
        let token = aussteller.ausstellen_zum(&benutzer(), ausgestellt).unwrap();
        let ablauf = ausgestellt + Duration::days(TOKEN_GUELTIGKEIT_TAGE);

        assert!(aussteller
            .pruefen_zum(&token, ablauf - Duration::seconds(1))
            .is_ok());
        assert!(matches!(
            aussteller.pruefen_zum(&token, ablauf + Duration::seconds(1)),
            Err(AuthError::TokenUngueltig)
        ));
        assert!(matches!(
            aussteller.pruefen(&token),
            Err(AuthError::TokenUngueltig)
        ));
    }

    #[test]
    fn manipulierte_signatur_wird_abgelehnt() {
        let aussteller = TokenAussteller::neu("test-geheimnis");
        let token = aussteller.ausstellen(&benutzer()).unwrap();

        let mut bytes = token.into_bytes();
        let letzte = bytes.len() - 2;
        bytes[letzte] = if bytes[letzte] == b'A' { b'B' } else { b'A' };
        let manipuliert = String::from_utf8(bytes).unwrap();

        assert!(matches!(
            aussteller.pruefen(&manipuliert),
            Err(AuthError::TokenUngueltig)
        ));
    }

    #[test]
    fn fremdes_geheimnis_wird_abgelehnt() {
        let token = TokenAussteller::neu("a").ausstellen(&benutzer()).unwrap();
        assert!(matches!(
            TokenAussteller::neu("b").pruefen(&token),
            Err(AuthError::TokenUngueltig)
        ));
    }

    #[test]
    fn fehlgeformter_token_wird_abgelehnt() {
        let aussteller = TokenAussteller::neu("test-geheimnis");
        for kaputt in ["", "abc", "a.b.c", "eyJhbGciOiJIUzI1NiJ9..."] {
            assert!(matches!(
                aussteller.pruefen(kaputt),
                Err(AuthError::TokenUngueltig)
            ));
        }
    }
}

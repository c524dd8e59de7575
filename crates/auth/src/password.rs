//! Passwort-Hashing mit Argon2id
//!
//! Jeder Hash bekommt ein zufaelliges Salt. Das Ergebnis ist ein PHC-String,
//! der Algorithmus, Version, Parameter, Salt und Digest enthaelt; eine
//! separate Salt-Ablage ist nicht noetig. Die Verifikation liest die
//! Parameter aus dem gespeicherten Hash und vergleicht in konstanter Zeit.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Arbeitsfaktor fuer Argon2id
///
/// Standardwerte gemaess OWASP-Empfehlung:
/// - Speicher: 19 MiB
/// - Iterationen: 2
/// - Parallelismus: 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashKosten {
    pub speicher_kib: u32,
    pub iterationen: u32,
    pub parallelitaet: u32,
}

impl Default for HashKosten {
    fn default() -> Self {
        Self {
            speicher_kib: Params::DEFAULT_M_COST,
            iterationen: Params::DEFAULT_T_COST,
            parallelitaet: Params::DEFAULT_P_COST,
        }
    }
}

/// Zustandsloser Passwort-Hasher mit festem Arbeitsfaktor
#[derive(Debug, Clone)]
pub struct PasswortHasher {
    params: Params,
}

impl Default for PasswortHasher {
    fn default() -> Self {
        Self {
            params: Params::DEFAULT,
        }
    }
}

impl PasswortHasher {
    /// Erstellt einen Hasher mit dem gegebenen Arbeitsfaktor
    pub fn neu(kosten: HashKosten) -> AuthResult<Self> {
        let params = Params::new(
            kosten.speicher_kib,
            kosten.iterationen,
            kosten.parallelitaet,
            None,
        )
        .map_err(|e| AuthError::PasswortHashing(format!("Ungueltige Argon2-Parameter: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hasht ein Passwort mit einem zufaelligen Salt und gibt den PHC-String zurueck
    pub fn hashen(&self, passwort: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(passwort.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswortHashing(e.to_string()))
    }

    /// Verifiziert ein Passwort gegen einen gespeicherten PHC-Hash
    ///
    /// Jede Abweichung ergibt `false`, auch ein fehlgeformter Hash.
    pub fn verifizieren(&self, passwort: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            tracing::debug!("Gespeicherter Hash ist kein gueltiger PHC-String");
            return false;
        };

        self.argon2()
            .verify_password(passwort.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
pub(crate) fn test_hasher() -> PasswortHasher {
    PasswortHasher::neu(HashKosten {
        speicher_kib: 8,
        iterationen: 1,
        parallelitaet: 1,
    })
    .expect("Test-Parameter ungueltig")
}

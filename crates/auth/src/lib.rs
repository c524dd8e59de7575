//! healthsync-auth – Identitaets- und Zugehoerigkeits-Service
//!
//! Dieses Crate implementiert:
//! - Passwort-Hashing mit Argon2id (konfigurierbarer Arbeitsfaktor)
//! - Bearer-Tokens (JWT, HS256, 7 Tage gueltig)
//! - IdentitaetsService (Login, Registrierung mit Organisations-Verknuepfung,
//!   Sitzungsauskunft, Abmeldung)
//! - OrganisationsVerzeichnis (Liste mit Rueckfall auf den festen Katalog)

pub mod error;
pub mod password;
pub mod service;
pub mod token;
pub mod verzeichnis;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult, FehlerArt};
pub use password::{HashKosten, PasswortHasher};
pub use service::{
    AnmeldeAnfrage, Anmeldung, BenutzerZusammenfassung, IdentitaetsService, RegistrierungsAnfrage,
};
pub use token::{Claims, TokenAussteller, UNSICHERER_DEV_SCHLUESSEL};
pub use verzeichnis::OrganisationsVerzeichnis;

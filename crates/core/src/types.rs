//! Gemeinsame Domaenen-Typen fuer HealthSync
//!
//! Rollen sind bewusst freie Strings: ausser den beiden bekannten Werten
//! wird keine geschlossene Menge erzwungen.

use serde_json::{Map, Value};

/// Offenes, rollenabhaengiges Attributbuendel eines Benutzers
/// (z.B. `name`, `license`, `specialty`, `organizationId`).
pub type Profil = Map<String, Value>;

/// Bekannte Rollenwerte
pub mod rollen {
    pub const ARZT: &str = "doctor";
    pub const ORGANISATION: &str = "organization";

    /// Rolle, wenn bei der Registrierung keine angegeben wurde
    pub const STANDARD: &str = ARZT;
}

/// Profil-Schluessel, unter dem die Verknuepfung zur Organisation liegt
pub const PROFIL_ORGANISATION_ID: &str = "organizationId";

/// Leitet den Anzeigenamen einer Organisation aus dem Profil ab.
///
/// `organization` hat Vorrang vor `name`; leere Werte zaehlen als fehlend.
pub fn organisationsname_ableiten(profil: &Profil) -> Option<String> {
    ["organization", "name"]
        .iter()
        .filter_map(|schluessel| profil.get(*schluessel))
        .find_map(|wert| match wert {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

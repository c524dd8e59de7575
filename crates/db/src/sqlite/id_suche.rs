//! Zwei-Strategien-Suche fuer Benutzer-IDs
//!
//! Datensaetze koennen ueber ihre native Zeilen-ID oder ueber das explizite
//! Feld `legacy_id` adressiert werden (Fallback-UUIDs, die spaeter in das
//! dauerhafte Backend uebernommen wurden). Strategie A (nativ) wird nur
//! angeboten, wenn der Kandidat die Form einer Zeilen-ID hat; Strategie B
//! (explizit) immer. Ein fehlgeformter Kandidat fuehrt nie zu einem Fehler.

/// Ein Suchschluessel fuer die `users`-Tabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSchluessel<'a> {
    /// Native Zeilen-ID (`users.id`)
    Nativ(i64),
    /// Explizit gespeicherte ID (`users.legacy_id`)
    Explizit(&'a str),
}

impl IdSchluessel<'_> {
    /// WHERE-Klausel mit genau einem Platzhalter
    pub fn bedingung(&self) -> &'static str {
        match self {
            Self::Nativ(_) => "id = ?",
            Self::Explizit(_) => "legacy_id = ?",
        }
    }
}

/// Liefert die Suchstrategien fuer einen Kandidaten in Reihenfolge
pub fn strategien(kandidat: &str) -> Vec<IdSchluessel<'_>> {
    let mut schluessel = Vec::with_capacity(2);
    if let Some(nativ) = native_id(kandidat) {
        schluessel.push(IdSchluessel::Nativ(nativ));
    }
    schluessel.push(IdSchluessel::Explizit(kandidat));
    schluessel
}

/// Prueft ob der Kandidat die Form einer nativen Zeilen-ID hat
fn native_id(kandidat: &str) -> Option<i64> {
    if kandidat.is_empty() || !kandidat.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    kandidat.parse::<i64>().ok().filter(|id| *id > 0)
}

//! Fester Beispielkatalog von Organisationen
//!
//! Wird in ein leeres dauerhaftes Backend eingespielt und ohne Backend
//! direkt ausgeliefert.

use healthsync_core::slug_ableiten;

use crate::models::OrganisationEintrag;

/// Namen der Beispiel-Organisationen in Auslieferungsreihenfolge
pub const KATALOG_NAMEN: [&str; 3] = [
    "Community Clinic A",
    "General Hospital B",
    "Independent Practice C",
];

/// Katalog als (Name, Slug)-Paare zum Einspielen
pub fn katalog_mit_slugs() -> Vec<(&'static str, String)> {
    KATALOG_NAMEN
        .iter()
        .map(|name| (*name, slug_ableiten(name)))
        .collect()
}

/// Katalog mit synthetischen, fortlaufenden IDs (`org-1`, `org-2`, ...)
pub fn katalog_eintraege() -> Vec<OrganisationEintrag> {
    KATALOG_NAMEN
        .iter()
        .enumerate()
        .map(|(i, name)| OrganisationEintrag {
            id: format!("org-{}", i + 1),
            name: (*name).to_string(),
        })
        .collect()
}

//! Slug-Ableitung fuer Organisationsnamen
//!
//! Ein Slug ist die URL-sichere Normalform eines Anzeigenamens:
//! Kleinbuchstaben, jede Folge von Nicht-Alphanumerischen Zeichen wird zu
//! genau einem Bindestrich, fuehrende und abschliessende Bindestriche entfallen.
//! Die Ableitung ist rein; Eindeutigkeit gegenueber bestehenden Slugs wird
//! nicht geprueft.

/// Leitet den Slug aus einem Anzeigenamen ab
pub fn slug_ableiten(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut bindestrich_offen = false;

    for zeichen in name.chars() {
        let klein = zeichen.to_ascii_lowercase();
        if klein.is_ascii_lowercase() || klein.is_ascii_digit() {
            if bindestrich_offen && !slug.is_empty() {
                slug.push('-');
            }
            bindestrich_offen = false;
            slug.push(klein);
        } else {
            bindestrich_offen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satzzeichen_werden_entfernt() {
        assert_eq!(slug_ableiten("General Hospital B!"), "general-hospital-b");
    }

    #[test]
    fn folgen_und_raender_werden_zusammengefasst() {
        assert_eq!(slug_ableiten("  a--b  "), "a-b");
        assert_eq!(slug_ableiten("--Test   Clinic--"), "test-clinic");
    }

    #[test]
    fn slug_ist_idempotent() {
        for name in ["Community Clinic A", "  a--b  ", "Praxis Dr. Mueller & Partner", ""] {
            let einmal = slug_ableiten(name);
            assert_eq!(slug_ableiten(&einmal), einmal, "Slug von '{name}' nicht idempotent");
        }
    }

    #[test]
    fn nicht_ascii_zeichen_werden_trenner() {
        assert_eq!(slug_ableiten("Klinik Süd"), "klinik-s-d");
    }

    #[test]
    fn nur_trennzeichen_ergibt_leeren_slug() {
        assert_eq!(slug_ableiten("!!! ---"), "");
    }
}

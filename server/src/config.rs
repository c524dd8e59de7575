//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen und anschliessend aus der
//! Umgebung ueberlagert. Alle Felder haben Standardwerte, sodass der Server
//! ohne Konfigurationsdatei lauffaehig ist (dann ohne dauerhaftes Backend).

use anyhow::{bail, Context};
use healthsync_auth::{HashKosten, UNSICHERER_DEV_SCHLUESSEL};
use healthsync_db::{repository::STANDARD_DATENBANKNAME, DatabaseConfig};
use healthsync_observability::{LogEinstellungen, LogFormat};
use serde::{Deserialize, Serialize};

pub const ENV_PORT: &str = "PORT";
pub const ENV_DB_URL: &str = "HEALTHSYNC_DB_URL";
pub const ENV_DB_NAME: &str = "HEALTHSYNC_DB_NAME";
pub const ENV_JWT_SECRET: &str = "HEALTHSYNC_JWT_SECRET";
pub const ENV_INSECURE_DEV_SECRET: &str = "HEALTHSYNC_INSECURE_DEV_SECRET";

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Netzwerk-Einstellungen der HTTP-API
    pub server: ServerEinstellungen,
    /// Dauerhaftes Backend (ohne URL: nur In-Process-Fallback)
    pub datenbank: DatenbankEinstellungen,
    /// Token-Signatur
    pub token: TokenEinstellungen,
    /// Arbeitsfaktor des Passwort-Hashers
    pub passwort: HashKosten,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerEinstellungen {
    pub bind_adresse: String,
    pub port: u16,
    /// CORS-Origins (leer = alle erlaubt)
    pub cors_origins: Vec<String>,
}

impl Default for ServerEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            port: 3000,
            cors_origins: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatenbankEinstellungen {
    /// Verbindungs-URL, z.B. `sqlite://daten/` oder `sqlite://healthsync.db`
    pub url: Option<String>,
    /// Datenbankname, falls `url` ein Verzeichnis ist
    pub name: String,
    /// Maximale Verbindungspool-Groesse
    pub max_verbindungen: u32,
}

impl Default for DatenbankEinstellungen {
    fn default() -> Self {
        Self {
            url: None,
            name: STANDARD_DATENBANKNAME.into(),
            max_verbindungen: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenEinstellungen {
    /// HS256-Geheimnis
    pub geheimnis: Option<String>,
    /// Erlaubt den unsicheren Entwicklungsschluessel wenn kein Geheimnis gesetzt ist
    pub dev_schluessel_erlauben: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Filter-Direktive, z.B. "info" oder "healthsync_auth=debug"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => toml::from_str(&inhalt)
                .with_context(|| format!("Konfigurationsfehler in '{pfad}'")),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Konfigurationsdatei '{pfad}' nicht lesbar"))
            }
        }
    }

    /// Ueberlagert die Konfiguration mit Werten aus `lookup`
    ///
    /// Leere Werte zaehlen als nicht gesetzt.
    pub fn mit_umgebung<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let wert = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(port) = wert(ENV_PORT) {
            self.server.port = port
                .parse()
                .with_context(|| format!("{ENV_PORT} ist keine gueltige Portnummer: '{port}'"))?;
        }
        if let Some(url) = wert(ENV_DB_URL) {
            self.datenbank.url = Some(url);
        }
        if let Some(name) = wert(ENV_DB_NAME) {
            self.datenbank.name = name;
        }
        if let Some(geheimnis) = wert(ENV_JWT_SECRET) {
            self.token.geheimnis = Some(geheimnis);
        }
        if let Some(erlaubt) = wert(ENV_INSECURE_DEV_SECRET) {
            self.token.dev_schluessel_erlauben = matches!(erlaubt.as_str(), "1" | "true");
        }
        Ok(self)
    }

    /// Gibt die Bind-Adresse der HTTP-API zurueck
    pub fn api_bind_adresse(&self) -> String {
        format!("{}:{}", self.server.bind_adresse, self.server.port)
    }

    /// Konfiguration des dauerhaften Backends, falls eine URL gesetzt ist
    pub fn datenbank_config(&self) -> Option<DatabaseConfig> {
        let url = self.datenbank.url.as_deref().filter(|u| !u.is_empty())?;
        let mut config = DatabaseConfig::neu(url);
        config.name = self.datenbank.name.clone();
        config.max_verbindungen = self.datenbank.max_verbindungen;
        Some(config)
    }

    /// Liefert das Signatur-Geheimnis fuer Tokens
    ///
    /// Ohne Geheimnis schlaegt der Start fehl, ausser der
    /// Entwicklungsschluessel ist ausdruecklich erlaubt.
    pub fn signatur_geheimnis(&self) -> anyhow::Result<String> {
        if let Some(geheimnis) = self.token.geheimnis.as_deref().filter(|g| !g.is_empty()) {
            if geheimnis == UNSICHERER_DEV_SCHLUESSEL {
                tracing::warn!("Token-Geheimnis entspricht dem bekannten Entwicklungsschluessel");
            }
            return Ok(geheimnis.to_string());
        }
        if self.token.dev_schluessel_erlauben {
            tracing::warn!(
                "Kein Token-Geheimnis gesetzt, verwende unsicheren Entwicklungsschluessel"
            );
            return Ok(UNSICHERER_DEV_SCHLUESSEL.to_string());
        }
        bail!(
            "Kein Token-Geheimnis konfiguriert: {ENV_JWT_SECRET} setzen \
             (oder {ENV_INSECURE_DEV_SECRET}=1 fuer die Entwicklung)"
        )
    }

    /// Logging-Einstellungen aus der Datei (ohne Umgebungs-Overrides)
    pub fn log_einstellungen(&self) -> anyhow::Result<LogEinstellungen> {
        let format: LogFormat = self.logging.format.parse()?;
        Ok(LogEinstellungen {
            level: self.logging.level.clone(),
            format,
        })
    }
}

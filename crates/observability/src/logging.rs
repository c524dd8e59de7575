//! Structured Logging Setup via tracing-subscriber
//!
//! Konfigurierbar per Umgebungsvariable:
//! - `HS_LOG_LEVEL`: Filter-Direktive (z.B. `info` oder `healthsync_auth=debug`), Standard: info
//! - `HS_LOG_FORMAT`: Format (text/json), Standard: text
//!
//! Umgebungsvariablen haben Vorrang vor der Konfigurationsdatei.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG_LEVEL: &str = "HS_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "HS_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum LoggingFehler {
    #[error("Unbekanntes Log-Format: {0} (erlaubt: text, json)")]
    UnbekanntesFormat(String),

    #[error("Ungueltiger Log-Filter '{0}': {1}")]
    UngueltigerFilter(String, String),

    #[error("Logging bereits initialisiert: {0}")]
    BereitsInitialisiert(String),
}

/// Ausgabeformat der Logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingFehler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            anderes => Err(LoggingFehler::UnbekanntesFormat(anderes.to_string())),
        }
    }
}

/// Aufgeloeste Logging-Einstellungen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEinstellungen {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LogEinstellungen {
    /// Ueberlagert Level und Format mit Werten aus `lookup`
    ///
    /// `lookup` bekommt den Variablennamen; in Produktion `std::env::var(..).ok()`.
    pub fn mit_umgebung<F>(mut self, lookup: F) -> Result<Self, LoggingFehler>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|l| !l.is_empty()) {
            self.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT).filter(|f| !f.is_empty()) {
            self.format = format.parse()?;
        }
        Ok(self)
    }
}

/// Initialisiert das globale Logging-System.
///
/// Darf pro Prozess nur einmal aufgerufen werden.
pub fn logging_initialisieren(einstellungen: &LogEinstellungen) -> Result<(), LoggingFehler> {
    let filter = EnvFilter::try_new(&einstellungen.level).map_err(|e| {
        LoggingFehler::UngueltigerFilter(einstellungen.level.clone(), e.to_string())
    })?;

    let ergebnis = match einstellungen.format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(true)
            .try_init(),
        LogFormat::Text => fmt().with_env_filter(filter).with_target(true).try_init(),
    };
    ergebnis.map_err(|e| LoggingFehler::BereitsInitialisiert(e.to_string()))
}

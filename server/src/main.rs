//! HealthSync Server – Einstiegspunkt
//!
//! Laedt die Konfiguration, initialisiert das Logging und startet den Server.

use anyhow::Result;
use healthsync_observability::logging_initialisieren;
use healthsync_server::{config::ServerConfig, Server};

#[tokio::main]
async fn main() -> Result<()> {
    // Konfigurationsdatei-Pfad aus Umgebungsvariable oder Standard
    let config_pfad =
        std::env::var("HEALTHSYNC_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let umgebung = |name: &str| std::env::var(name).ok();
    let config = ServerConfig::laden(&config_pfad)?.mit_umgebung(umgebung)?;

    let log = config.log_einstellungen()?.mit_umgebung(umgebung)?;
    logging_initialisieren(&log)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad,
        "HealthSync Server wird initialisiert"
    );

    Server::neu(config).starten().await
}

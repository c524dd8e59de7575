//! healthsync-server – Bibliotheks-Root
//!
//! Verdrahtet Datenspeicher, Identitaets-Service und HTTP-API und stellt den
//! oeffentlichen Einstiegspunkt fuer Integrationstests bereit.

pub mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use config::ServerConfig;
use healthsync_api::{AppState, RestServer, RestServerKonfig};
use healthsync_auth::{IdentitaetsService, OrganisationsVerzeichnis, PasswortHasher, TokenAussteller};
use healthsync_db::Datenspeicher;
use healthsync_observability::{health_router, HealthState};

/// Haelt den Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Baut die vollstaendige Anwendung (API + Health)
    ///
    /// Schlaegt fehl wenn kein Token-Geheimnis verfuegbar ist oder der
    /// Arbeitsfaktor des Hashers ungueltig ist. Die Datenbank wird erst beim
    /// ersten Zugriff geoeffnet.
    pub fn app(&self) -> Result<Router> {
        let geheimnis = self.config.signatur_geheimnis()?;
        let hasher = PasswortHasher::neu(self.config.passwort)
            .context("Ungueltiger Arbeitsfaktor fuer den Passwort-Hasher")?;

        let speicher = Arc::new(Datenspeicher::neu(self.config.datenbank_config()));
        let health = HealthState::neu(speicher.ist_dauerhaft());

        let identitaet = IdentitaetsService::neu(
            speicher.clone(),
            speicher.clone(),
            hasher,
            TokenAussteller::neu(&geheimnis),
        );
        let verzeichnis = OrganisationsVerzeichnis::neu(speicher);
        let state = AppState::neu(Arc::new(identitaet), Arc::new(verzeichnis));

        Ok(healthsync_api::router(state).merge(health_router(health)))
    }

    /// Startet die HTTP-API und laeuft bis zum Shutdown-Signal (Ctrl-C)
    pub async fn starten(self) -> Result<()> {
        let app = self.app()?;

        let bind_addr: SocketAddr = self
            .config
            .api_bind_adresse()
            .parse()
            .with_context(|| format!("Ungueltige Bind-Adresse '{}'", self.config.api_bind_adresse()))?;

        tracing::info!(
            adresse = %bind_addr,
            dauerhaft = self.config.datenbank.url.is_some(),
            "Server startet"
        );

        RestServer::neu(RestServerKonfig {
            bind_addr,
            cors_origins: self.config.server.cors_origins.clone(),
        })
        .starten(app, shutdown_signal())
        .await
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown-Signal empfangen, Server wird beendet"),
        Err(e) => tracing::error!(fehler = %e, "Shutdown-Signal konnte nicht abgewartet werden"),
    }
}

//! Axum HTTP-Server fuer HealthSync

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;

/// REST-Server-Konfiguration
#[derive(Debug, Clone)]
pub struct RestServerKonfig {
    pub bind_addr: SocketAddr,
    /// Erlaubte CORS-Origins. Leer = alle Origins erlaubt.
    pub cors_origins: Vec<String>,
}

impl Default for RestServerKonfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors_origins: vec![],
        }
    }
}

/// Axum HTTP-Server fuer HealthSync
pub struct RestServer {
    konfig: RestServerKonfig,
}

impl RestServer {
    pub fn neu(konfig: RestServerKonfig) -> Self {
        Self { konfig }
    }

    fn cors(&self) -> CorsLayer {
        if self.konfig.cors_origins.is_empty() {
            return CorsLayer::permissive();
        }
        let origins: Vec<HeaderValue> = self
            .konfig
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(tower_http::cors::Any)
    }

    /// Startet den Server und laeuft bis `stopp` erfuellt ist
    pub async fn starten<F>(self, app: Router, stopp: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = app.layer(self.cors());

        let listener = tokio::net::TcpListener::bind(self.konfig.bind_addr).await?;
        tracing::info!(addr = %self.konfig.bind_addr, "HealthSync-API gestartet");

        axum::serve(listener, app)
            .with_graceful_shutdown(stopp)
            .await?;
        tracing::info!("HealthSync-API beendet");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_port_ist_3000() {
        assert_eq!(RestServerKonfig::default().bind_addr.port(), 3000);
    }
}

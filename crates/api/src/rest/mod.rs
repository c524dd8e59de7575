//! REST-Interface fuer HealthSync

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use healthsync_auth::{IdentitaetsService, OrganisationsVerzeichnis};
use healthsync_db::Datenspeicher;

/// Identitaets-Service ueber dem Datenspeicher mit Backend-Auswahl
pub type Identitaet = IdentitaetsService<Datenspeicher, Datenspeicher>;

/// Axum-State fuer den REST-Server
#[derive(Clone)]
pub struct AppState {
    pub identitaet: Arc<Identitaet>,
    pub verzeichnis: Arc<OrganisationsVerzeichnis<Datenspeicher>>,
}

impl AppState {
    pub fn neu(
        identitaet: Arc<Identitaet>,
        verzeichnis: Arc<OrganisationsVerzeichnis<Datenspeicher>>,
    ) -> Self {
        Self {
            identitaet,
            verzeichnis,
        }
    }
}

pub use routes::router;
pub use server::{RestServer, RestServerKonfig};

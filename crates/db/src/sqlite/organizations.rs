//! SQLite-Implementierung des OrganizationRepository

use chrono::Utc;

use crate::katalog::katalog_mit_slugs;
use crate::models::{NeueOrganisation, OrganisationEintrag, OrganisationRecord};
use crate::repository::{DbResult, OrganizationRepository};
use crate::sqlite::pool::SqliteDb;

impl SqliteDb {
    /// Spielt den Beispielkatalog ein, falls die Tabelle leer ist
    async fn katalog_einspielen_falls_leer(&self) -> DbResult<()> {
        let (anzahl,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM organizations")
            .fetch_one(&self.pool)
            .await?;
        if anzahl > 0 {
            return Ok(());
        }

        let jetzt = Utc::now().to_rfc3339();
        for (name, slug) in katalog_mit_slugs() {
            sqlx::query("INSERT INTO organizations (name, slug, created_at) VALUES (?, ?, ?)")
                .bind(name)
                .bind(&slug)
                .bind(&jetzt)
                .execute(&self.pool)
                .await?;
        }
        tracing::info!("Organisations-Katalog eingespielt");
        Ok(())
    }
}

impl OrganizationRepository for SqliteDb {
    async fn list(&self) -> DbResult<Vec<OrganisationEintrag>> {
        self.katalog_einspielen_falls_leer().await?;

        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM organizations ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| OrganisationEintrag {
                id: id.to_string(),
                name,
            })
            .collect())
    }

    async fn create(&self, data: NeueOrganisation<'_>) -> DbResult<Option<OrganisationRecord>> {
        let now = Utc::now();

        let id = sqlx::query(
            "INSERT INTO organizations (name, slug, admin, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(data.name)
        .bind(data.slug)
        .bind(data.admin)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::debug!(organisation_id = id, admin = %data.admin, "Organisation angelegt");

        Ok(Some(OrganisationRecord {
            id: id.to_string(),
            name: data.name.to_string(),
            slug: data.slug.to_string(),
            admin: Some(data.admin.to_string()),
            created_at: now,
        }))
    }
}

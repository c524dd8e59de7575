//! SQLite-Implementierung des UserRepository

use chrono::Utc;
use healthsync_core::PROFIL_ORGANISATION_ID;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{query::Query, Sqlite};

use crate::error::DbError;
use crate::models::{BenutzerRecord, NeuerBenutzer};
use crate::repository::{DbResult, UserRepository};
use crate::sqlite::id_suche::{strategien, IdSchluessel};
use crate::sqlite::pool::SqliteDb;

const BENUTZER_SPALTEN: &str = "id, email, password_hash, role, profile, created_at";

impl UserRepository for SqliteDb {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
        let sql = format!("SELECT {BENUTZER_SPALTEN} FROM users WHERE email = ? ORDER BY id LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<BenutzerRecord>> {
        for schluessel in strategien(id) {
            let sql = format!(
                "SELECT {BENUTZER_SPALTEN} FROM users WHERE {} ORDER BY id LIMIT 1",
                schluessel.bedingung()
            );
            let row = schluessel_binden(sqlx::query(&sql), schluessel)
                .fetch_optional(&self.pool)
                .await?;

            if let Some(row) = row {
                return row_to_benutzer(&row).map(Some);
            }
        }
        Ok(None)
    }

    async fn create_user(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        let now = Utc::now();
        let profil_json = serde_json::to_string(data.profile)?;

        let id = sqlx::query(
            "INSERT INTO users (email, password_hash, role, profile, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.role)
        .bind(&profil_json)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::debug!(user_id = id, backend = "sqlite", "Benutzer angelegt");

        Ok(BenutzerRecord {
            id: id.to_string(),
            email: data.email.to_string(),
            password_hash: data.password_hash.to_string(),
            role: data.role.to_string(),
            profile: data.profile.clone(),
            created_at: now,
        })
    }

    async fn set_organization(&self, user_id: &str, organisation_id: &str) -> DbResult<bool> {
        let pfad = format!("$.{PROFIL_ORGANISATION_ID}");

        for schluessel in strategien(user_id) {
            let sql = format!(
                "UPDATE users SET profile = json_set(profile, ?, ?) WHERE {}",
                schluessel.bedingung()
            );
            let q = sqlx::query(&sql).bind(&pfad).bind(organisation_id);
            let affected = schluessel_binden(q, schluessel)
                .execute(&self.pool)
                .await?
                .rows_affected();

            if affected > 0 {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn schluessel_binden<'q>(
    q: Query<'q, Sqlite, SqliteArguments<'q>>,
    schluessel: IdSchluessel<'q>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match schluessel {
        IdSchluessel::Nativ(id) => q.bind(id),
        IdSchluessel::Explizit(id) => q.bind(id),
    }
}

fn row_to_benutzer(row: &SqliteRow) -> DbResult<BenutzerRecord> {
    use sqlx::Row as _;

    let id: i64 = row.try_get("id")?;

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DbError::intern(format!("Ungueltige created_at '{created_at_str}': {e}")))?
        .with_timezone(&Utc);

    let profil_str: String = row.try_get("profile")?;
    let profile = match serde_json::from_str::<serde_json::Value>(&profil_str)? {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Null => Default::default(),
        anderes => {
            return Err(DbError::UngueltigeDaten(format!(
                "Profil von Benutzer {id} ist kein Objekt: {anderes}"
            )))
        }
    };

    Ok(BenutzerRecord {
        id: id.to_string(),
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        role: row.try_get("role")?,
        profile,
        created_at,
    })
}
